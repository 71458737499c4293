//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: Title and subtitle
//! - `SubmitButton`: "Get Joke" / spinner while loading
//! - `ResultPanel`: Prompt, spinner, error or joke, driven by `core::view::Panel`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `NameInput`: Single-line name field that emits `NameInputEvent`s
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `App`. Each file holds the component's types, rendering,
//! event handling and tests.

pub mod header;
pub mod name_input;
pub mod result_panel;
pub mod submit_button;

pub use header::Header;
pub use name_input::{NameInput, NameInputEvent};
pub use result_panel::ResultPanel;
pub use submit_button::SubmitButton;
