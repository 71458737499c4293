use std::fmt;

use async_trait::async_trait;

use super::types::JokePayload;

pub const TRANSPORT_ERROR_MESSAGE: &str = "Something went wrong. Could not fetch a joke.";
pub const SERVICE_ERROR_MESSAGE: &str = "Sorry, couldn't find a joke with. Try another name!";
pub const DECODE_ERROR_MESSAGE: &str =
    "The joke service sent something we couldn't read. Try again!";

/// Errors that can occur while fetching a joke.
/// None of them are retried; the user resubmits instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Joke service answered with a non-2xx status.
    Api { status: u16, message: String },
    /// 2xx response whose body sets the `error` flag.
    Service(String),
    /// 2xx response that is not a joke we understand.
    Decode(String),
}

impl FetchError {
    /// The message shown to the user. The variant detail only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) | FetchError::Api { .. } => TRANSPORT_ERROR_MESSAGE,
            FetchError::Service(_) => SERVICE_ERROR_MESSAGE,
            FetchError::Decode(_) => DECODE_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Service(msg) => write!(f, "joke service error: {msg}"),
            FetchError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait JokeService: Send + Sync {
    /// Returns the name of the service (for logs).
    fn name(&self) -> &str;

    /// Fetches one random joke.
    async fn fetch_joke(&self) -> Result<JokePayload, FetchError>;
}
