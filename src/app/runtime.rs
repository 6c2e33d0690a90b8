use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::{select, sync::mpsc, sync::oneshot};

use super::presenter::TuiPresenter;
use super::terminal::{restore_terminal, setup_terminal};
use crate::config::SessionConfig;
use crate::error::AppError;
use crate::i18n::Translator;
use crate::logic::{Presenter, Session};
use crate::sources::{HttpTransport, Transport, TransportEvent};
use crate::state::{PickResult, PickerUi, SessionPhase};

/// What: Forward terminal input from a blocking thread to the event loop.
///
/// Inputs:
/// - `event_tx`: Channel receiving terminal events.
/// - `cancelled`: Set to stop the thread.
///
/// Details:
/// - Polls with a short timeout so the thread notices cancellation promptly.
/// - Exits when the receiver is dropped.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // transient read errors
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// What: Sleep until a debounce deadline, or forever when none is pending.
async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending::<()>().await,
    }
}

/// What: Drive a session until it closes.
///
/// Inputs:
/// - `session`: Running session.
/// - `events`: Terminal events.
/// - `completions`: Transport completions.
///
/// Details:
/// - Terminal input, transport completions and the debounce deadline are
///   handled one at a time on this task.
/// - Losing the terminal input channel cancels the pick.
pub async fn run_event_loop<T: Transport, B: Backend>(
    session: &mut Session<T, TuiPresenter<B>>,
    events: &mut mpsc::UnboundedReceiver<CEvent>,
    completions: &mut mpsc::UnboundedReceiver<TransportEvent>,
) {
    while session.phase() != SessionPhase::Closed {
        let deadline = session.debounce_deadline();
        select! {
            ev = events.recv() => match ev {
                Some(ev) => crate::events::handle_event(ev, session),
                None => {
                    tracing::warn!("terminal input closed; cancelling pick");
                    session.cancel();
                }
            },
            Some(done) = completions.recv() => {
                session.on_result(done.handle, done.outcome);
            }
            () = sleep_until_deadline(deadline) => {
                session.on_debounce_elapsed(Instant::now());
            }
        }
    }
}

/// What: Run the terminal picker end to end.
///
/// Inputs:
/// - `config`: Validated configuration.
/// - `initial_query`: Query searched right away, if any.
///
/// Output:
/// - The picked item, or `PickResult::Cancelled`.
///
/// # Errors
/// - `AppError::Transport` when the HTTP client cannot be built.
/// - `AppError::Terminal` when the terminal cannot be set up.
/// - `AppError::Session` when the session refuses to start.
///
/// Details:
/// - The terminal is restored when the session detaches its presenter, and
///   again defensively if setup fails halfway.
pub async fn run(config: SessionConfig, initial_query: Option<String>) -> Result<PickResult, AppError> {
    let translator = Translator::new(&config.locale, config.locales_dir.as_deref());
    let previews = (config.summary_preview_max, config.collection_preview_max);
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel();
    let transport = HttpTransport::new(&config.api_base_url, completion_tx)?;

    setup_terminal()?;
    let terminal = match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e.into());
        }
    };
    let presenter = TuiPresenter::new(
        terminal,
        translator,
        PickerUi::with_input(initial_query.as_deref().unwrap_or_default()),
        previews,
    )
    .restoring_terminal();

    let (result_tx, result_rx) = oneshot::channel();
    let mut session = Session::new(config, transport, presenter);
    let started = session.start_session(
        move |result| {
            // The receiver outlives the session.
            let _ = result_tx.send(result);
        },
        initial_query.as_deref(),
    );
    if let Err(e) = started {
        session.presenter_mut().detach();
        return Err(e.into());
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let cancelled = Arc::new(AtomicBool::new(false));
    spawn_event_thread(event_tx, Arc::clone(&cancelled));

    run_event_loop(&mut session, &mut event_rx, &mut completion_rx).await;
    cancelled.store(true, Ordering::Relaxed);

    Ok(result_rx.await.unwrap_or(PickResult::Cancelled))
}
