//! Key presses and fetch completions flowing through the UI event channel.

mod common;

use cheesy_advice::advice::{Advice, AdviceError};
use cheesy_advice::ui::advice::{Phase, FAILURE_MESSAGE};
use cheesy_advice::ui::events::AppEvent;
use cheesy_advice::ui::handle_event;
use common::{controller_with, ScriptedSource};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Runtime;

const FETCH_DRAW: f64 = 0.5;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_fetch_result_returns_through_channel() {
    let runtime = Runtime::new().unwrap();
    let (tx, rx) = mpsc::channel();
    let source = ScriptedSource::new(vec![
        Ok(Advice::new("Be good.")),
        Ok(Advice::new("never fetched")),
    ]);
    let mut controller = controller_with(source.clone(), vec![FETCH_DRAW]);

    let flow = handle_event(&mut controller, key(KeyCode::Enter), runtime.handle(), &tx);
    assert_eq!(flow, ControlFlow::Continue(()));
    assert!(controller.state().is_loading());

    // Still loading on this thread, so the second press is dropped
    handle_event(&mut controller, key(KeyCode::Enter), runtime.handle(), &tx);
    assert!(controller.state().is_loading());

    let fetched = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(matches!(fetched, AppEvent::AdviceFetched(Ok(_))));
    handle_event(&mut controller, fetched, runtime.handle(), &tx);

    assert_eq!(
        controller.state().phase(),
        &Phase::Shown("\"Be gouda.\" - The Big Cheese".to_string())
    );
    assert!(controller.state().button_enabled());
    assert_eq!(source.calls(), 1);
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn test_failed_fetch_through_channel_shows_fixed_message() {
    let runtime = Runtime::new().unwrap();
    let (tx, rx) = mpsc::channel();
    let source = ScriptedSource::new(vec![Err(AdviceError::Status { status: 503 })]);
    let mut controller = controller_with(source, vec![FETCH_DRAW]);

    handle_event(&mut controller, key(KeyCode::Char(' ')), runtime.handle(), &tx);
    let fetched = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    handle_event(&mut controller, fetched, runtime.handle(), &tx);

    assert_eq!(controller.state().text(), FAILURE_MESSAGE);
    assert!(controller.state().button_enabled());
}

#[test]
fn test_ticks_spin_only_while_loading() {
    let runtime = Runtime::new().unwrap();
    let (tx, _rx) = mpsc::channel();
    let source = ScriptedSource::advice("unused");
    let mut controller = controller_with(source, vec![FETCH_DRAW]);

    handle_event(&mut controller, AppEvent::Tick, runtime.handle(), &tx);
    assert_eq!(controller.state().spinner_tick(), 0);

    handle_event(&mut controller, key(KeyCode::Enter), runtime.handle(), &tx);
    handle_event(&mut controller, AppEvent::Tick, runtime.handle(), &tx);
    assert_eq!(controller.state().spinner_tick(), 1);
}

#[test]
fn test_quit_key_breaks_the_loop() {
    let runtime = Runtime::new().unwrap();
    let (tx, rx) = mpsc::channel();
    let source = ScriptedSource::advice("unused");
    let mut controller = controller_with(source.clone(), vec![FETCH_DRAW]);

    let flow = handle_event(&mut controller, key(KeyCode::Char('q')), runtime.handle(), &tx);

    assert_eq!(flow, ControlFlow::Break(()));
    assert_eq!(source.calls(), 0);
    assert!(rx.try_recv().is_err());
}
