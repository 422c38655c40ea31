//! Orchestrates the joke-or-fetch decision and owns the display state.
//!
//! The controller is the only writer of [`DisplayState`]. A trigger is
//! split in two halves so the UI thread never blocks:
//!
//! ```text
//! trigger() ──→ Resolved(Joke)                (no fetch)
//!     └─────→ Fetch ──→ source.fetch_advice() ──→ complete()
//! ```
//!
//! [`AdviceController::request`] drives both halves inline for headless
//! use and tests.

use std::sync::Arc;

use crate::advice::{
    cheeseify, Advice, AdviceError, AdviceResult, AdviceSource, JokeBook, SubstitutionRule,
};
use crate::config::{Config, StartupPolicy};
use crate::random::RandomSource;
use crate::ui::advice::{AdviceIntent, AdviceReducer, DisplayState};
use crate::ui::mvi::Reducer;

/// Takes current state, runs the reducer, stores the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// How shown text is decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub suffix: String,
    pub quote: bool,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            suffix: " - The Big Cheese".to_string(),
            quote: true,
        }
    }
}

impl Attribution {
    pub fn present(&self, text: &str) -> String {
        if self.quote {
            format!("\"{}\"{}", text, self.suffix)
        } else {
            format!("{}{}", text, self.suffix)
        }
    }
}

/// Static data the controller is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerContent {
    pub jokes: JokeBook,
    pub rules: Vec<SubstitutionRule>,
    pub attribution: Attribution,
    pub startup: StartupPolicy,
}

impl Default for ControllerContent {
    fn default() -> Self {
        Self {
            jokes: JokeBook::default(),
            rules: crate::advice::default_rules(),
            attribution: Attribution::default(),
            startup: StartupPolicy::Idle,
        }
    }
}

impl From<&Config> for ControllerContent {
    fn from(config: &Config) -> Self {
        Self {
            jokes: JokeBook::new(
                config.content.jokes.clone(),
                config.behavior.joke_probability,
            ),
            rules: config.content.rules.clone(),
            attribution: Attribution {
                suffix: config.behavior.attribution.clone(),
                quote: config.behavior.quote_advice,
            },
            startup: config.behavior.startup,
        }
    }
}

/// What a trigger asked the caller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// The trigger was disabled; nothing changed.
    Ignored,
    /// Resolved synchronously (joke path).
    Resolved(AdviceResult),
    /// State is now `Loading`; the caller must await
    /// `source().fetch_advice()` and hand the result to `complete`.
    Fetch,
}

pub struct AdviceController<S, R> {
    source: Arc<S>,
    random: R,
    content: ControllerContent,
    state: DisplayState,
}

impl<S: AdviceSource, R: RandomSource> AdviceController<S, R> {
    pub fn new(source: Arc<S>, random: R, content: ControllerContent) -> Self {
        Self {
            source,
            random,
            content,
            state: DisplayState::default(),
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    pub fn startup_policy(&self) -> StartupPolicy {
        self.content.startup
    }

    /// Apply the startup policy.
    ///
    /// `Idle` leaves the instruction on screen and returns
    /// [`Trigger::Ignored`]. `Eager` moves to `Loading` without a joke draw
    /// and returns [`Trigger::Fetch`].
    pub fn start(&mut self) -> Trigger {
        match self.content.startup {
            StartupPolicy::Idle => Trigger::Ignored,
            StartupPolicy::Eager => self.begin_fetch(),
        }
    }

    /// Handle one user trigger.
    pub fn trigger(&mut self) -> Trigger {
        if !self.state.button_enabled() {
            tracing::debug!("Trigger ignored while button is disabled");
            return Trigger::Ignored;
        }

        let draw = self.random.next_f64();
        if let Some(joke) = self.content.jokes.draw(draw) {
            let text = self.content.attribution.present(joke);
            tracing::debug!(draw, "Joke path selected");
            dispatch_mvi!(
                self,
                state,
                AdviceReducer,
                AdviceIntent::JokeShown { text: text.clone() }
            );
            return Trigger::Resolved(AdviceResult::Joke(text));
        }

        self.begin_fetch()
    }

    fn begin_fetch(&mut self) -> Trigger {
        tracing::info!(source = %self.source.describe(), "Fetching advice");
        dispatch_mvi!(self, state, AdviceReducer, AdviceIntent::FetchStarted);
        Trigger::Fetch
    }

    /// Resolve the in-flight fetch.
    ///
    /// Returns `None` when no fetch is in flight.
    pub fn complete(&mut self, fetched: Result<Advice, AdviceError>) -> Option<AdviceResult> {
        if !self.state.is_loading() {
            tracing::debug!("Dropping fetch result that arrived outside Loading");
            return None;
        }

        let result = match fetched {
            Ok(advice) => {
                let text = self
                    .content
                    .attribution
                    .present(&cheeseify(&advice.text, &self.content.rules));
                tracing::info!(id = ?advice.id, "Advice loaded");
                dispatch_mvi!(
                    self,
                    state,
                    AdviceReducer,
                    AdviceIntent::FetchSucceeded { text: text.clone() }
                );
                AdviceResult::Success(text)
            }
            Err(err) => {
                if err.is_recoverable() {
                    tracing::warn!(error = %err, "Failed to load advice");
                    dispatch_mvi!(self, state, AdviceReducer, AdviceIntent::FetchFailed);
                } else {
                    tracing::warn!(error = %err, "Advice source has no entries");
                    dispatch_mvi!(self, state, AdviceReducer, AdviceIntent::DatasetEmpty);
                }
                AdviceResult::Failure(err)
            }
        };
        Some(result)
    }

    /// Advance the spinner animation.
    pub fn tick(&mut self) {
        dispatch_mvi!(self, state, AdviceReducer, AdviceIntent::SpinnerTick);
    }

    /// Trigger and, on the fetch path, await the source inline.
    pub async fn request(&mut self) -> Option<AdviceResult> {
        match self.trigger() {
            Trigger::Ignored => None,
            Trigger::Resolved(result) => Some(result),
            Trigger::Fetch => self.await_fetch().await,
        }
    }

    /// Apply the startup policy, awaiting the eager fetch inline.
    pub async fn run_startup(&mut self) -> Option<AdviceResult> {
        match self.start() {
            Trigger::Fetch => self.await_fetch().await,
            _ => None,
        }
    }

    async fn await_fetch(&mut self) -> Option<AdviceResult> {
        let source = self.source();
        let fetched = source.fetch_advice().await;
        self.complete(fetched)
    }
}
