use axum::extract::ws::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::leaderboard::DisplayEntry;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    LeaderboardUpdate,
    Error,
}

/// Frame pushed to clients on the live feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl WebSocketMessage {
    fn new(message_type: MessageType, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message_type,
            data,
            timestamp: Utc::now(),
        }
    }

    /// Entries are sent in the order given, which is rank order.
    pub fn leaderboard_update(entries: Vec<DisplayEntry>) -> Self {
        Self::new(MessageType::LeaderboardUpdate, json!({ "entries": entries }))
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self::new(
            MessageType::Error,
            json!({ "code": code, "message": message }),
        )
    }

    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_ws_message(&self) -> Result<Message, serde_json::Error> {
        self.to_text().map(Message::Text)
    }
}
