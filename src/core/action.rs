//! # Actions
//!
//! Everything that can happen in Joke Wizard becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The joke service answers? That's `Action::JokeFetched(result)`.
//!
//! `update()` takes the current state and an action, mutates the state,
//! and returns an `Effect` describing any I/O the adapter must perform.
//! No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, RequestState};
use crate::jokes::{FetchError, JokePayload};

pub const EMPTY_NAME_MESSAGE: &str = "Please enter your name to get a joke!";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The name field changed to the given text.
    NameChanged(String),
    /// User asked for a joke.
    Submit,
    /// The fetch spawned for the last `Effect::FetchJoke` settled.
    JokeFetched(Result<JokePayload, FetchError>),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue one request against the joke service and report back with `JokeFetched`.
    FetchJoke,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::NameChanged(name) => {
            app.name = name;
            if matches!(app.request, RequestState::Error(_)) {
                app.request = RequestState::Idle;
            }
            Effect::None
        }
        Action::Submit => {
            if app.request.is_loading() {
                debug!("Submit ignored: request already in flight");
                return Effect::None;
            }
            if app.name.trim().is_empty() {
                info!("Submit rejected: empty name");
                app.request = RequestState::Error(EMPTY_NAME_MESSAGE.to_string());
                return Effect::None;
            }
            info!("Submit accepted, fetching joke via {}", app.service.name());
            app.request = RequestState::Loading;
            Effect::FetchJoke
        }
        Action::JokeFetched(result) => {
            if !app.request.is_loading() {
                warn!("Dropping fetch result that arrived outside Loading: {:?}", result);
                return Effect::None;
            }
            app.request = match result {
                Ok(joke) => {
                    info!("Joke fetched");
                    RequestState::Success(joke)
                }
                Err(e) => {
                    warn!("Joke fetch failed: {}", e);
                    RequestState::Error(e.user_message().to_string())
                }
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
