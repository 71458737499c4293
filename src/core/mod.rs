//! # Core Application Logic
//!
//! This module contains Joke Wizard's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and `RequestState` lifecycle
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view`]: `render()`, the pure state → view derivation
//! - [`config`]: Settings resolution (file, env, CLI)

pub mod action;
pub mod config;
pub mod state;
pub mod view;
