//! # View
//!
//! `render()` turns core state into a UI-agnostic description of the
//! screen. It reads nothing but `App` and has no side effects, so the
//! adapter can call it on every frame and tests can assert on it directly.

use crate::core::state::{App, RequestState};
use crate::jokes::JokePayload;

pub const IDLE_PROMPT: &str = "Your joke will appear here.";
pub const SUBMIT_LABEL: &str = "Get Joke";
pub const LOADING_LABEL: &str = "Conjuring...";

/// What the result panel shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Prompt(&'static str),
    Spinner,
    Error(String),
    Joke { greeting: String, joke: JokePayload },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub panel: Panel,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

pub fn greeting(name: &str) -> String {
    format!("Hey {}, here's a joke for you!", name.trim())
}

pub fn render(app: &App) -> View {
    let panel = match &app.request {
        RequestState::Idle => Panel::Prompt(IDLE_PROMPT),
        RequestState::Loading => Panel::Spinner,
        RequestState::Error(message) => Panel::Error(message.clone()),
        RequestState::Success(joke) => Panel::Joke {
            greeting: greeting(&app.name),
            joke: joke.clone(),
        },
    };
    let loading = app.request.is_loading();

    View {
        panel,
        submit_enabled: !loading,
        submit_label: if loading { LOADING_LABEL } else { SUBMIT_LABEL },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_idle_shows_prompt() {
        let app = test_app();
        let view = render(&app);
        assert_eq!(view.panel, Panel::Prompt(IDLE_PROMPT));
        assert!(view.submit_enabled);
        assert_eq!(view.submit_label, SUBMIT_LABEL);
    }

    #[test]
    fn test_loading_disables_submit() {
        let mut app = test_app();
        app.request = RequestState::Loading;
        let view = render(&app);
        assert_eq!(view.panel, Panel::Spinner);
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, LOADING_LABEL);
    }

    #[test]
    fn test_error_panel_shows_message() {
        let mut app = test_app();
        app.request = RequestState::Error("boom".to_string());
        let view = render(&app);
        assert_eq!(view.panel, Panel::Error("boom".to_string()));
        assert!(view.submit_enabled);
    }

    #[test]
    fn test_joke_panel_greets_trimmed_name() {
        let mut app = test_app();
        app.name = "  Ada ".to_string();
        let joke = JokePayload::TwoPart { setup: "S".to_string(), punchline: "D".to_string() };
        app.request = RequestState::Success(joke.clone());
        assert_eq!(
            render(&app).panel,
            Panel::Joke { greeting: "Hey Ada, here's a joke for you!".to_string(), joke }
        );
    }
}
