pub const DEFAULT_API_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

pub const API_KEY_ENV: &str = "GROQ_API_KEY";

pub fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
