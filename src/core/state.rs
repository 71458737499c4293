//! # Application State
//!
//! Core business state for Joke Wizard. Domain logic only, no
//! TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn JokeService>   // where jokes come from
//! ├── name: String                    // the name field, never auto-cleared
//! └── request: RequestState           // Idle | Loading | Error | Success
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::jokes::{JokePayload, JokeService};

/// Lifecycle of the current (or last) joke request.
///
/// Exactly one variant is active; every transition replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(JokePayload),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

pub struct App {
    pub service: Arc<dyn JokeService>,
    pub name: String,
    pub request: RequestState,
}

impl App {
    pub fn new(service: Arc<dyn JokeService>) -> Self {
        Self {
            service,
            name: String::new(),
            request: RequestState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.name.is_empty());
        assert_eq!(app.request, RequestState::Idle);
        assert!(!app.request.is_loading());
    }
}
