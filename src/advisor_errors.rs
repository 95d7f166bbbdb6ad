//! # Advisor Error Types Module
//!
//! Failure reasons of a hosted language model call. The `Display` text of
//! these errors is shown to the user as-is.

/// Custom error types for advice generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    /// No API key configured
    MissingApiKey,
    /// Connection or transport errors
    Network(String),
    /// Non-success HTTP status from the provider
    Http { status: u16, body: String },
    /// Response body could not be decoded
    Parse(String),
    /// Response decoded but carried no text
    EmptyResponse,
}

impl std::fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisorError::MissingApiKey => write!(f, "API key not configured for groq"),
            AdvisorError::Network(msg) => write!(f, "Network error: {msg}"),
            AdvisorError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            AdvisorError::Parse(msg) => write!(f, "Failed to parse response: {msg}"),
            AdvisorError::EmptyResponse => write!(f, "Model returned an empty response"),
        }
    }
}

impl std::error::Error for AdvisorError {}

impl From<reqwest::Error> for AdvisorError {
    fn from(err: reqwest::Error) -> Self {
        AdvisorError::Network(err.to_string())
    }
}
