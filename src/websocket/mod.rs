pub mod message;

pub use message::{MessageType, WebSocketMessage};
