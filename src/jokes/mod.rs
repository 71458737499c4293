pub mod client;
pub mod service;
pub mod types;

pub use client::{JokeApiClient, JokeQuery};
pub use service::{FetchError, JokeService};
pub use types::JokePayload;
