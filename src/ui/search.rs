use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::Translator;
use crate::state::{Focus, PickerUi};
use crate::ui::theme::theme;

/// Render the query field and place the cursor after the typed text when focused.
pub fn render_search(f: &mut Frame, local: &PickerUi, t: &Translator, area: Rect) {
    let th = theme();
    let focused = local.focus == Focus::Search;

    let prompt = Span::styled(
        "> ",
        Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
    );
    let text = if local.input.is_empty() {
        Span::styled(t.t("picker.placeholder"), Style::default().fg(th.overlay1))
    } else {
        Span::styled(
            local.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        )
    };
    let input = Paragraph::new(Line::from(vec![prompt, text]))
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    t.t("picker.search"),
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface2 })),
        );
    f.render_widget(input, area);

    if focused {
        // Border plus the "> " prompt.
        let typed = u16::try_from(local.input.width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(3)
            .saturating_add(typed)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    /// What: The placeholder shows for an empty field and typed text replaces it.
    ///
    /// Inputs:
    /// - An empty field, then a field containing "laiva".
    ///
    /// Output:
    /// - The rendered buffer contains the placeholder, then the query.
    #[test]
    fn search_shows_placeholder_then_input() {
        let t = Translator::new("en", None);
        let mut term = Terminal::new(TestBackend::new(60, 3)).expect("terminal");

        let empty = PickerUi::default();
        term.draw(|f| {
            let area = f.area();
            render_search(f, &empty, &t, area);
        })
        .expect("draw");
        assert!(crate::ui::buffer_text(term.backend().buffer()).contains("Search Finna"));

        let typed = PickerUi::with_input("laiva");
        term.draw(|f| {
            let area = f.area();
            render_search(f, &typed, &t, area);
        })
        .expect("draw");
        let text = crate::ui::buffer_text(term.backend().buffer());
        assert!(text.contains("> laiva"));
        assert!(!text.contains("Search Finna"));
    }
}
