mod leaderboard;
mod username;
