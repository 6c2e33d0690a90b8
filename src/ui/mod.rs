//! Terminal rendering of the picker.
//!
//! Rendering is a pure function of the latest [`SessionView`], the local
//! field/list state and the translator; it never touches the session.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
};

use crate::i18n::Translator;
use crate::state::{PickerUi, SessionPhase, SessionView};

pub mod detail;
pub mod results;
pub mod search;
pub mod theme;

use theme::theme;

/// What: Draw one frame of the picker.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `view`: Latest session snapshot.
/// - `local`: Field text, list cursor and focus.
/// - `t`: Translator.
/// - `previews`: Summary and collections preview lengths.
///
/// Details:
/// - Layout from top: query field, pagination line, list or detail pane, key help.
pub fn ui(
    f: &mut Frame,
    view: &SessionView,
    local: &PickerUi,
    t: &Translator,
    previews: (usize, usize),
) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    search::render_search(f, local, t, chunks[0]);
    results::render_pagination(f, view, t, chunks[1]);
    let help_key = if view.phase == SessionPhase::Detail {
        detail::render_detail(f, view, t, chunks[2]);
        "detail.help"
    } else {
        results::render_results(f, view, local, t, previews, chunks[2]);
        "picker.help"
    };
    f.render_widget(
        Paragraph::new(Span::styled(t.t(help_key), Style::default().fg(th.overlay1))),
        chunks[3],
    );
}

/// Concatenated cell symbols of a test buffer.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EmptyReason;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    /// What: A blank session renders the introduction and the list key help.
    fn blank_frame_shows_introduction() {
        let t = Translator::new("en", None);
        let view = SessionView {
            phase: SessionPhase::Empty(EmptyReason::BlankQuery),
            query: String::new(),
            requested_page: 1,
            results: crate::state::ResultPage::default(),
            pagination: crate::logic::PaginationView::default(),
            focused: None,
            allow_image_pick: true,
            allow_page_pick: true,
        };
        let mut term = Terminal::new(TestBackend::new(120, 12)).expect("terminal");
        term.draw(|f| ui(f, &view, &PickerUi::default(), &t, (40, 20)))
            .expect("draw");
        let text = buffer_text(term.backend().buffer());
        assert!(text.contains("Find the relevant images"));
        assert!(text.contains("No search results"));
        assert!(text.contains("Esc: cancel"));
    }
}
