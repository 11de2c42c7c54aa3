use std::fmt;

#[derive(Debug)]
pub enum MasterChefError {
    InputMissing,
    DecodeFailure(String),
    ClientInitFailure(String),
    ApiError {
        status: u16,
        message: String,
    },
    InvalidResponse(String),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl MasterChefError {
    /// Process exit status for this failure.
    ///
    /// Input and client setup problems fail the process. Failures after the
    /// request was attempted only print an error line, so callers relaying
    /// stdout still get a message back.
    pub fn exit_code(&self) -> i32 {
        match self {
            MasterChefError::InputMissing
            | MasterChefError::DecodeFailure(_)
            | MasterChefError::ClientInitFailure(_) => 1,
            _ => 0,
        }
    }

    /// The single line printed to stdout for this failure.
    pub fn report(&self) -> String {
        match self {
            MasterChefError::InputMissing => "No code provided.".to_string(),
            MasterChefError::DecodeFailure(msg) => format!("Decoding error: {}", msg),
            MasterChefError::ClientInitFailure(msg) => {
                format!("Error initializing Groq client: {}", msg)
            }
            other => format!("Error in LLM processing: {}", other),
        }
    }
}

impl fmt::Display for MasterChefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasterChefError::InputMissing => write!(f, "No code provided"),
            MasterChefError::DecodeFailure(msg) => write!(f, "Decoding error: {}", msg),
            MasterChefError::ClientInitFailure(msg) => {
                write!(f, "Client initialization error: {}", msg)
            }
            MasterChefError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            MasterChefError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            MasterChefError::NetworkError(e) => write!(f, "Network error: {}", e),
            MasterChefError::IoError(e) => write!(f, "IO error: {}", e),
            MasterChefError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for MasterChefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MasterChefError::NetworkError(e) => Some(e),
            MasterChefError::IoError(e) => Some(e),
            MasterChefError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MasterChefError {
    fn from(err: reqwest::Error) -> Self {
        MasterChefError::NetworkError(err)
    }
}

impl From<std::io::Error> for MasterChefError {
    fn from(err: std::io::Error) -> Self {
        MasterChefError::IoError(err)
    }
}

impl From<serde_json::Error> for MasterChefError {
    fn from(err: serde_json::Error) -> Self {
        MasterChefError::JsonError(err)
    }
}

impl From<base64::DecodeError> for MasterChefError {
    fn from(err: base64::DecodeError) -> Self {
        MasterChefError::DecodeFailure(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for MasterChefError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        MasterChefError::DecodeFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MasterChefError>;
