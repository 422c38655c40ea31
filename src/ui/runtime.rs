use crate::advice::{AdviceResult, AdviceSource};
use crate::controller::{AdviceController, Trigger};
use crate::random::RandomSource;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::ops::ControlFlow;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive widget until the user quits.
///
/// The controller lives on this thread. Fetches run on `runtime` and post
/// their result back as [`AppEvent::AdviceFetched`].
pub fn run<S, R>(mut controller: AdviceController<S, R>, runtime: Handle) -> io::Result<()>
where
    S: AdviceSource,
    R: RandomSource,
{
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);
    let tx = events.sender();

    if controller.start() == Trigger::Fetch {
        spawn_fetch(&runtime, controller.source(), tx.clone());
    }

    loop {
        terminal.draw(|frame| draw(frame, controller.state()))?;

        match events.next(tick_rate) {
            Ok(event) => {
                if handle_event(&mut controller, event, &runtime, &tx).is_break() {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Apply one event to the controller.
///
/// A trigger that starts a fetch spawns it on `runtime`; its result comes
/// back through `tx` as [`AppEvent::AdviceFetched`]. Returns
/// `ControlFlow::Break` when the user asked to quit.
pub fn handle_event<S, R>(
    controller: &mut AdviceController<S, R>,
    event: AppEvent,
    runtime: &Handle,
    tx: &Sender<AppEvent>,
) -> ControlFlow<()>
where
    S: AdviceSource,
    R: RandomSource,
{
    match event {
        AppEvent::Key(key) => match handle_key(key) {
            InputAction::Quit => return ControlFlow::Break(()),
            InputAction::Trigger => match controller.trigger() {
                Trigger::Fetch => spawn_fetch(runtime, controller.source(), tx.clone()),
                Trigger::Resolved(result) => log_result(&result),
                Trigger::Ignored => {}
            },
            InputAction::None => {}
        },
        AppEvent::Tick => controller.tick(),
        // ratatui resizes its buffers on the next draw
        AppEvent::Resize(..) => {}
        AppEvent::AdviceFetched(fetched) => {
            if let Some(result) = controller.complete(fetched) {
                log_result(&result);
            }
        }
    }
    ControlFlow::Continue(())
}

/// Trigger once (after the startup policy) and return the final text.
pub async fn run_once<S, R>(mut controller: AdviceController<S, R>) -> String
where
    S: AdviceSource,
    R: RandomSource,
{
    let result = match controller.run_startup().await {
        Some(result) => Some(result),
        None => controller.request().await,
    };
    if let Some(result) = &result {
        log_result(result);
    }
    controller.state().text().to_string()
}

fn spawn_fetch<S: AdviceSource>(runtime: &Handle, source: Arc<S>, tx: Sender<AppEvent>) {
    runtime.spawn(async move {
        let fetched = source.fetch_advice().await;
        if tx.send(AppEvent::AdviceFetched(fetched)).is_err() {
            tracing::trace!("Fetch result dropped (UI gone)");
        }
    });
}

fn log_result(result: &AdviceResult) {
    match result {
        AdviceResult::Success(text) => tracing::info!(text = %text, "Showing advice"),
        AdviceResult::Joke(text) => tracing::info!(text = %text, "Showing joke"),
        AdviceResult::Failure(err) => tracing::debug!(kind = ?err.kind(), "Request failed"),
    }
}
