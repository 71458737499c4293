//! Joke types and the JokeAPI wire format.
//!
//! JokeAPI answers with one of two joke shapes, discriminated by `type`,
//! or with an error envelope. The wire struct below is deliberately loose
//! (every field optional) so that [`parse_joke`] can decide what counts as
//! a valid payload and report everything else as a decode error.
//!
//! ```text
//! {"type":"single","joke":"..."}                 → JokePayload::Single
//! {"type":"twopart","setup":"...","delivery":"..."} → JokePayload::TwoPart
//! {"error":true,"message":"..."}                 → FetchError::Service
//! anything else                                  → FetchError::Decode
//! ```

use log::debug;
use serde::Deserialize;

use super::service::FetchError;

/// A parsed joke, in one of the two shapes JokeAPI serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokePayload {
    Single { text: String },
    TwoPart { setup: String, punchline: String },
}

/// Raw response body. Fields we never display (`flags`, `safe`, `lang`) are ignored.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawJokeResponse {
    #[serde(default)]
    error: bool,
    message: Option<String>,
    additional_info: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    joke: Option<String>,
    setup: Option<String>,
    delivery: Option<String>,
    category: Option<String>,
    id: Option<u64>,
}

/// Parses a 2xx response body into a [`JokePayload`].
///
/// `type == "single"` requires `joke`; any other `type` requires both
/// `setup` and `delivery`. A body with `error: true` is a service-level
/// failure regardless of what else it carries.
pub fn parse_joke(body: &str) -> Result<JokePayload, FetchError> {
    let raw: RawJokeResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if raw.error {
        let detail = raw
            .additional_info
            .or(raw.message)
            .unwrap_or_else(|| "no detail given".to_string());
        return Err(FetchError::Service(detail));
    }

    debug!(
        "Joke received: id={:?}, category={:?}, type={:?}",
        raw.id, raw.category, raw.kind
    );

    let kind = raw
        .kind
        .ok_or_else(|| FetchError::Decode("missing field `type`".to_string()))?;

    if kind == "single" {
        let text = raw
            .joke
            .ok_or_else(|| FetchError::Decode("single joke without `joke`".to_string()))?;
        return Ok(JokePayload::Single { text });
    }

    match (raw.setup, raw.delivery) {
        (Some(setup), Some(punchline)) => Ok(JokePayload::TwoPart { setup, punchline }),
        (None, _) => Err(FetchError::Decode(format!("{kind} joke without `setup`"))),
        (_, None) => Err(FetchError::Decode(format!("{kind} joke without `delivery`"))),
    }
}
