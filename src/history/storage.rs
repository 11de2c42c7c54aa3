use crate::error::Result;
use crate::models::Message;

/// Trait for conversation history backends
pub trait HistoryStore: Send + Sync {
    /// Load the full history. Missing or unreadable history loads as empty.
    fn load(&self) -> Vec<Message>;

    /// Replace the stored history with `messages`
    fn save(&self, messages: &[Message]) -> Result<()>;

    /// Remove all stored history
    fn clear(&self) -> Result<()>;
}
