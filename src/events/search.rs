use crossterm::event::{KeyCode, KeyEvent};
use ratatui::backend::Backend;

use super::TuiSession;
use crate::sources::Transport;
use crate::state::Focus;

/// What: Keys of the query field.
///
/// Details:
/// - Typing and Backspace go through the debounced `set_query`.
/// - Enter searches immediately; Esc cancels the pick.
/// - Tab or Down moves to the list when it has items.
pub fn handle_search_key<T: Transport, B: Backend>(ke: KeyEvent, session: &mut TuiSession<T, B>) {
    match ke.code {
        KeyCode::Char(c) => {
            let local = session.presenter_mut().local_mut();
            local.input.push(c);
            let text = local.input.clone();
            session.set_query(&text);
        }
        KeyCode::Backspace => {
            let local = session.presenter_mut().local_mut();
            if local.input.pop().is_none() {
                return;
            }
            let text = local.input.clone();
            session.set_query(&text);
        }
        KeyCode::Enter => {
            let text = session.presenter().local().input.clone();
            session.submit_query(&text);
        }
        KeyCode::Tab | KeyCode::Down => {
            if !session.results().items.is_empty() {
                session.presenter_mut().local_mut().focus = Focus::Results;
            }
        }
        KeyCode::Esc => session.cancel(),
        _ => {}
    }
}
