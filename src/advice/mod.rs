//! Advice providers and the text that ends up on screen.
//!
//! ```text
//! AdviceSource ──fetch──→ Advice ──cheeseify──→ present() ──→ DisplayState
//!        │
//!        └──→ AdviceError (Transport | Status | Malformed | EmptyDataset)
//! ```

mod cheese;
mod error;
mod file;
mod http;
mod jokes;
mod payload;

use std::future::Future;

pub use cheese::{cheeseify, default_rules, SubstitutionRule};
pub use error::{AdviceError, ErrorKind};
pub use file::FileAdviceSource;
pub use http::{HttpAdviceSource, HttpSourceOptions, DEFAULT_ADVICE_URL};
pub use jokes::{default_jokes, JokeBook, DEFAULT_JOKE_PROBABILITY};
pub use payload::{parse_payload, Payload};

/// One piece of advice as returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub text: String,
    /// Provider identifier, when the provider sends one.
    pub id: Option<u64>,
}

impl Advice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: None,
        }
    }
}

/// Outcome of a single request, produced once and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum AdviceResult {
    /// Fetched advice after transformation and attribution.
    Success(String),
    /// Fetch failed; carries the classified error (never shown verbatim).
    Failure(AdviceError),
    /// Joke path; carries the attributed joke.
    Joke(String),
}

/// Fetches one piece of advice from an external provider.
///
/// Every call issues exactly one outbound request. Retrying is the caller's
/// business.
pub trait AdviceSource: Send + Sync + 'static {
    fn fetch_advice(&self) -> impl Future<Output = Result<Advice, AdviceError>> + Send;

    /// Short label for logs.
    fn describe(&self) -> String;
}
