use crate::error::{MasterChefError, Result};
use serde_json::Value;

/// Extract the first choice's message content from a chat-completion response
pub fn extract_content(response_json: &Value) -> Result<String> {
    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| MasterChefError::InvalidResponse("No choices in response".to_string()))?;

    let first_choice = choices
        .first()
        .ok_or_else(|| MasterChefError::InvalidResponse("Empty choices array".to_string()))?;

    let message = first_choice
        .get("message")
        .ok_or_else(|| MasterChefError::InvalidResponse("No message in response".to_string()))?;

    message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| MasterChefError::InvalidResponse("No content in response".to_string()))
}

/// Pull the provider's error message out of a failed response body, if it has one
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}
