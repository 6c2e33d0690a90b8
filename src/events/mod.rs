//! Event handling layer of the terminal picker.
//!
//! Keys are translated into session intents. Pane-local changes (field
//! text, list cursor, focus) are applied to the presenter's local state and
//! redrawn here; everything else goes through the session.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;

use crate::app::TuiPresenter;
use crate::logic::Session;
use crate::sources::Transport;
use crate::state::{Focus, PageTarget, PickMode, SessionPhase};

mod results;
mod search;

/// Session type driven by terminal events.
pub type TuiSession<T, B> = Session<T, TuiPresenter<B>>;

/// What: Dispatch a single terminal event.
///
/// Inputs:
/// - `ev`: Terminal event.
/// - `session`: Running session.
///
/// Details:
/// - Only key presses and resizes are handled.
/// - Ctrl+C cancels from anywhere.
pub fn handle_event<T: Transport, B: Backend>(ev: CEvent, session: &mut TuiSession<T, B>) {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(ke, session),
        CEvent::Resize(..) => session.presenter_mut().redraw(),
        _ => {}
    }
}

/// What: Route a key press by phase and focus.
fn handle_key<T: Transport, B: Backend>(ke: KeyEvent, session: &mut TuiSession<T, B>) {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        session.cancel();
        return;
    }
    if session.phase() == SessionPhase::Detail {
        handle_detail_key(ke, session);
        return;
    }
    match ke.code {
        KeyCode::Left | KeyCode::PageUp => {
            session.set_page(PageTarget::Previous);
            return;
        }
        KeyCode::Right | KeyCode::PageDown => {
            session.set_page(PageTarget::Next);
            return;
        }
        _ => {}
    }
    match session.presenter().local().focus {
        Focus::Search => search::handle_search_key(ke, session),
        Focus::Results => results::handle_results_key(ke, session),
    }
    session.presenter_mut().redraw();
}

/// What: Keys of the detail view.
///
/// Details:
/// - `i` picks the image, `l` the catalog page, Esc goes back to the list.
fn handle_detail_key<T: Transport, B: Backend>(ke: KeyEvent, session: &mut TuiSession<T, B>) {
    match ke.code {
        KeyCode::Esc | KeyCode::Backspace => session.close_detail(),
        KeyCode::Char('i') => {
            session.pick(PickMode::UseAsset);
        }
        KeyCode::Char('l') => {
            session.pick(PickMode::UseCatalogPage);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::i18n::Translator;
    use crate::logic::pick_image;
    use crate::sources::{RequestHandle, SearchRequest, SearchResponse};
    use crate::state::{PickResult, PickerUi};
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct Recorder {
        sent: Vec<(RequestHandle, SearchRequest)>,
    }

    impl Transport for Recorder {
        fn send(&mut self, handle: RequestHandle, request: SearchRequest) {
            self.sent.push((handle, request));
        }
        fn cancel(&mut self, _handle: RequestHandle) {}
    }

    type Picked = Arc<Mutex<Option<PickResult>>>;

    fn session(debounce_ms: u64) -> (TuiSession<Recorder, TestBackend>, Picked) {
        let picked: Picked = Arc::default();
        let sink = Arc::clone(&picked);
        let presenter = TuiPresenter::new(
            Terminal::new(TestBackend::new(100, 24)).expect("terminal"),
            Translator::new("en", None),
            PickerUi::default(),
            (40, 20),
        );
        let config = SessionConfig {
            debounce: Duration::from_millis(debounce_ms),
            ..SessionConfig::default()
        };
        let s = pick_image(
            config,
            Recorder::default(),
            presenter,
            move |r| *sink.lock().expect("lock") = Some(r),
            None,
        );
        (s, picked)
    }

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text<T: Transport>(s: &mut TuiSession<T, TestBackend>, text: &str) {
        for c in text.chars() {
            handle_event(key(KeyCode::Char(c)), s);
        }
    }

    fn two_records() -> SearchResponse {
        SearchResponse {
            result_count: 2,
            records: vec![
                json!({"title": "Laiva", "images": ["/Cover/Show?id=a&fullres=1"], "recordPage": "/Record/a"}),
                json!({"title": "Satama", "images": ["/Cover/Show?id=b&fullres=1"], "recordPage": "/Record/b"}),
            ],
        }
    }

    #[test]
    /// What: Typing updates the field and searches once the quiet period passes.
    ///
    /// Inputs:
    /// - Five typed characters with a 400 ms debounce, then the deadline.
    ///
    /// Output:
    /// - Nothing sent while typing; one request for the full text afterwards.
    fn typing_is_debounced() {
        let (mut s, _) = session(400);
        type_text(&mut s, "laiva");
        assert_eq!(s.presenter().local().input, "laiva");
        assert!(s.transport().sent.is_empty());

        s.on_debounce_elapsed(Instant::now() + Duration::from_secs(1));
        assert_eq!(s.transport().sent.len(), 1);
        assert_eq!(s.transport().sent[0].1.query, "laiva");
    }

    #[test]
    /// What: Enter searches immediately and drops the pending typed query.
    fn enter_submits_without_waiting() {
        let (mut s, _) = session(400);
        type_text(&mut s, "tori");
        handle_event(key(KeyCode::Enter), &mut s);
        assert_eq!(s.transport().sent.len(), 1);
        assert_eq!(s.debounce_deadline(), None);
    }

    #[test]
    /// What: Backspace down to an empty field shows the blank state.
    fn clearing_the_field_goes_blank() {
        let (mut s, _) = session(0);
        type_text(&mut s, "a");
        handle_event(key(KeyCode::Backspace), &mut s);
        assert_eq!(s.phase(), SessionPhase::Empty(crate::state::EmptyReason::BlankQuery));
        assert_eq!(s.transport().sent.len(), 1);
    }

    #[test]
    /// What: Full keyboard path from query to a catalog page pick.
    ///
    /// Inputs:
    /// - Submit, a two-item response, Tab, Down, Enter, `l`.
    ///
    /// Output:
    /// - The second item is delivered with only its page locator; the presenter detaches.
    fn keyboard_pick_flow() {
        let (mut s, picked) = session(0);
        type_text(&mut s, "laiva");
        handle_event(key(KeyCode::Enter), &mut s);
        let handle = s.transport().sent.last().expect("request").0;
        s.on_result(handle, Ok(two_records()));

        handle_event(key(KeyCode::Tab), &mut s);
        handle_event(key(KeyCode::Down), &mut s);
        handle_event(key(KeyCode::Enter), &mut s);
        assert_eq!(s.phase(), SessionPhase::Detail);

        handle_event(key(KeyCode::Char('l')), &mut s);
        assert_eq!(s.phase(), SessionPhase::Closed);
        assert!(s.presenter().is_detached());
        let result = picked.lock().expect("lock").clone();
        let item = match result {
            Some(PickResult::Picked(item)) => item,
            other => panic!("expected a pick, got {other:?}"),
        };
        assert_eq!(item.title, "Satama");
        assert_eq!(item.page_url, "https://finna.fi/Record/b");
        assert!(item.image_url.is_empty());
    }

    #[test]
    /// What: Esc leaves the detail view first, then cancels from the field.
    fn escape_backs_out_then_cancels() {
        let (mut s, picked) = session(0);
        type_text(&mut s, "laiva");
        let handle = s.transport().sent.last().expect("request").0;
        s.on_result(handle, Ok(two_records()));
        handle_event(key(KeyCode::Tab), &mut s);
        handle_event(key(KeyCode::Enter), &mut s);
        handle_event(key(KeyCode::Esc), &mut s);
        assert_eq!(s.phase(), SessionPhase::Populated);

        handle_event(key(KeyCode::Esc), &mut s);
        handle_event(key(KeyCode::Esc), &mut s);
        assert_eq!(s.phase(), SessionPhase::Closed);
        assert_eq!(*picked.lock().expect("lock"), Some(PickResult::Cancelled));
    }
}
