use crossterm::event::{KeyCode, KeyEvent};
use ratatui::backend::Backend;

use super::TuiSession;
use crate::sources::Transport;
use crate::state::Focus;

/// What: Keys of the result list.
///
/// Details:
/// - Up/Down (or k/j) move the cursor, Enter opens the detail view.
/// - Tab or Esc return to the query field.
pub fn handle_results_key<T: Transport, B: Backend>(ke: KeyEvent, session: &mut TuiSession<T, B>) {
    let len = session.results().items.len();
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => {
            session.presenter_mut().local_mut().move_selection(-1, len);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            session.presenter_mut().local_mut().move_selection(1, len);
        }
        KeyCode::Enter => {
            let index = session.presenter().local().selected;
            session.open_detail(index);
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => {
            session.presenter_mut().local_mut().focus = Focus::Search;
        }
        _ => {}
    }
}
