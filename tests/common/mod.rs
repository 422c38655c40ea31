//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use cheesy_advice::advice::{Advice, AdviceError, AdviceSource};
use cheesy_advice::controller::{AdviceController, ControllerContent};
use cheesy_advice::random::ScriptedRandom;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// An advice source that replays queued outcomes and counts calls.
#[derive(Default)]
pub struct ScriptedSource {
    outcomes: Mutex<VecDeque<Result<Advice, AdviceError>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(outcomes: Vec<Result<Advice, AdviceError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn advice(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(Advice::new(text))])
    }

    pub fn push(&self, outcome: Result<Advice, AdviceError>) {
        self.outcomes.lock().push_back(outcome);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AdviceSource for ScriptedSource {
    async fn fetch_advice(&self) -> Result<Advice, AdviceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(AdviceError::transport("no scripted outcome left")))
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

/// Ten numbered jokes, so selection is easy to assert.
pub fn numbered_jokes() -> Vec<String> {
    (0..10).map(|i| format!("Joke number {}", i)).collect()
}

/// Controller with default content and draws pinned to `draws`.
pub fn controller_with(
    source: Arc<ScriptedSource>,
    draws: Vec<f64>,
) -> AdviceController<ScriptedSource, ScriptedRandom> {
    AdviceController::new(source, ScriptedRandom::new(draws), ControllerContent::default())
}
