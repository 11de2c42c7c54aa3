pub mod client;
pub mod models;
pub mod response;

pub use client::{CompletionClient, GroqClient};
pub use models::RequestBody;
