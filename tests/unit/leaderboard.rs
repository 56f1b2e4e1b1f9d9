use quiz_platform::leaderboard::{DisplayEntry, Entry, to_display_entries};
use quiz_platform::websocket::WebSocketMessage;
use uuid::Uuid;

fn entries(n: usize) -> Vec<Entry> {
    (0..n)
        .map(|i| Entry {
            user_id: Uuid::new_v4(),
            username: format!("player_{}", i),
            score: (n - i) as f64 * 10.0,
            wins: i as u32,
            games: (i * 2) as u32,
            accuracy: 1.0 / (i + 1) as f64,
        })
        .collect()
}

#[test]
fn rank_is_index_plus_one_for_any_length() {
    for n in [0, 1, 2, 10, 50] {
        let input = entries(n);
        let output = to_display_entries(&input);

        assert_eq!(output.len(), n);
        for (i, entry) in output.iter().enumerate() {
            assert_eq!(entry.rank, i + 1);
            assert_eq!(entry.user_id, input[i].user_id.to_string());
            assert_eq!(entry.username, input[i].username);
        }
    }
}

#[test]
fn input_is_left_untouched() {
    let input = entries(3);
    let before = input.clone();
    let _ = to_display_entries(&input);
    assert_eq!(input, before);
}

#[test]
fn remapping_keeps_rank_by_position() {
    let input = entries(4);
    let first = to_display_entries(&input);

    // Feed the output back through in the same shape.
    let round: Vec<Entry> = first
        .iter()
        .map(|d: &DisplayEntry| Entry {
            user_id: Uuid::parse_str(&d.user_id).unwrap(),
            username: d.username.clone(),
            score: d.score,
            wins: d.wins,
            games: d.games,
            accuracy: d.accuracy,
        })
        .collect();
    let second = to_display_entries(&round);
    assert_eq!(first, second);

    // A reordered subsequence is ranked by its own positions.
    let reversed: Vec<Entry> = round.into_iter().rev().collect();
    let third = to_display_entries(&reversed);
    assert_eq!(third[0].username, "player_3");
    assert_eq!(third[0].rank, 1);
    assert_eq!(third[3].username, "player_0");
    assert_eq!(third[3].rank, 4);
}

#[test]
fn feed_frame_carries_wire_shape() {
    let input = entries(2);
    let frame = WebSocketMessage::leaderboard_update(to_display_entries(&input));
    let value: serde_json::Value = serde_json::from_str(&frame.to_text().unwrap()).unwrap();

    let first = &value["data"]["entries"][0];
    let mut keys: Vec<&str> = first.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        ["accuracy", "games", "rank", "score", "userId", "username", "wins"]
    );
}
