mod filesystem;
mod storage;

pub use filesystem::FileHistoryStore;
pub use storage::HistoryStore;

use crate::models::Message;

pub const DEFAULT_HISTORY_FILE: &str = "conversation_history.json";

/// Number of trailing messages sent to the model on each request.
pub const HISTORY_WINDOW: usize = 10;

pub const PERSONA_PROMPT: &str = "you are a cook and want to help people with recipes right now you're on a website where people will ask you to explain recipes, and your name is MasterChef";

/// Insert the persona message if the history has nothing in it yet.
/// Returns true when the history was seeded.
pub fn seed_if_empty(messages: &mut Vec<Message>, persona: &str) -> bool {
    if messages.is_empty() {
        messages.push(Message::system(persona));
        true
    } else {
        false
    }
}

/// The last `size` messages, in their original order.
pub fn history_window(messages: &[Message], size: usize) -> &[Message] {
    let start = messages.len().saturating_sub(size);
    &messages[start..]
}
