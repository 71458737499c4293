//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::jokes::{FetchError, JokePayload, JokeService};

/// A service that answers every fetch with the same canned result.
pub struct StaticJokeService {
    result: Result<JokePayload, FetchError>,
    calls: AtomicUsize,
}

impl StaticJokeService {
    pub fn new(result: Result<JokePayload, FetchError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JokeService for StaticJokeService {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_joke(&self) -> Result<JokePayload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Creates a test App whose service always fails with a network error.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StaticJokeService::new(Err(
        FetchError::Network("no network in tests".to_string()),
    ))))
}
