//! Result list and the status line above it.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::i18n::Translator;
use crate::state::{CatalogItem, EmptyReason, Focus, PickerUi, SessionPhase, SessionView};
use crate::ui::theme::{Theme, theme};

/// What: Text of the pagination line.
///
/// Inputs:
/// - `view`: Session snapshot.
/// - `t`: Translator.
///
/// Output:
/// - "Search results 16 - 30 / 37" style text, or the no-results label.
#[must_use]
pub fn pagination_label(view: &SessionView, t: &Translator) -> String {
    match view.pagination.range {
        Some(range) => format!(
            "{} {} - {} / {}",
            t.t("picker.search_results"),
            range.first,
            range.last,
            view.results.total_count
        ),
        None => t.t("picker.no_search_results"),
    }
}

/// What: Message shown in place of the list, if any.
///
/// Output:
/// - Localized text for the loading and empty phases, `None` when items are shown.
#[must_use]
pub fn status_message(view: &SessionView, t: &Translator) -> Option<String> {
    match view.phase {
        SessionPhase::Searching => Some(t.t("picker.loading")),
        SessionPhase::Empty(EmptyReason::BlankQuery) | SessionPhase::Idle => {
            Some(t.t("picker.introduction"))
        }
        SessionPhase::Empty(EmptyReason::NoMatches) => Some(t.t("picker.no_matches")),
        SessionPhase::Empty(EmptyReason::Failed) => Some(t.t("picker.query_failed")),
        SessionPhase::Populated | SessionPhase::Detail | SessionPhase::Closed => None,
    }
}

/// Render the pagination line with previous/next hints.
pub fn render_pagination(f: &mut Frame, view: &SessionView, t: &Translator, area: Rect) {
    let th = theme();
    let dim = Style::default().fg(th.surface2);
    let lit = Style::default().fg(th.sapphire);
    let line = Line::from(vec![
        Span::styled(
            format!("← {}", t.t("picker.previous_page")),
            if view.pagination.has_previous { lit } else { dim },
        ),
        Span::raw("  "),
        Span::styled(pagination_label(view, t), Style::default().fg(th.overlay1)),
        Span::raw("  "),
        Span::styled(
            format!("{} →", t.t("picker.next_page")),
            if view.pagination.has_next { lit } else { dim },
        ),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.base)),
        area,
    );
}

/// What: One list row for an item.
///
/// Details:
/// - Title in bold, then year and organization, then the truncated summary
///   and collections on a second line.
fn item_row(item: &CatalogItem, view_cfg: (usize, usize), th: &Theme) -> ListItem<'static> {
    let (summary_max, collection_max) = view_cfg;
    let mut head = vec![Span::styled(
        item.title.clone(),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    if !item.year.is_empty() {
        head.push(Span::styled(
            format!("  {}", item.year),
            Style::default().fg(th.overlay1),
        ));
    }
    if !item.organization.is_empty() {
        head.push(Span::styled(
            format!("  {}", item.organization),
            Style::default().fg(th.overlay1),
        ));
    }
    let mut tail = Vec::new();
    let summary = item.summary_preview(summary_max);
    if !summary.is_empty() {
        tail.push(Span::styled(summary, Style::default().fg(th.overlay2)));
    }
    let collections = item.collections_preview(collection_max);
    if !collections.is_empty() {
        if !tail.is_empty() {
            tail.push(Span::raw("  "));
        }
        tail.push(Span::styled(
            format!("[{collections}]"),
            Style::default().fg(th.subtext0),
        ));
    }
    ListItem::new(vec![Line::from(head), Line::from(tail)])
}

/// What: Render the result list, or the status message when there is nothing to list.
///
/// Inputs:
/// - `previews`: Summary and collections preview lengths.
pub fn render_results(
    f: &mut Frame,
    view: &SessionView,
    local: &PickerUi,
    t: &Translator,
    previews: (usize, usize),
    area: Rect,
) {
    let th = theme();
    let focused = local.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(
            format!("{} ({})", t.t("picker.search_results"), view.results.items.len()),
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.sapphire } else { th.surface2 }));

    if let Some(message) = status_message(view, t) {
        let color = match view.phase {
            SessionPhase::Searching => th.yellow,
            SessionPhase::Empty(EmptyReason::Failed) => th.red,
            _ => th.subtext0,
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(color).bg(th.base))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = view
        .results
        .items
        .iter()
        .map(|item| item_row(item, previews, &th))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if focused {
        state.select(Some(local.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::compute_view;
    use crate::state::ResultPage;
    use ratatui::{Terminal, backend::TestBackend};

    fn view(phase: SessionPhase, total: u64, page: u64, items: Vec<CatalogItem>) -> SessionView {
        SessionView {
            phase,
            query: "laiva".into(),
            requested_page: page,
            results: ResultPage {
                total_count: total,
                page,
                items,
            },
            pagination: compute_view(total, 15, page),
            focused: None,
            allow_image_pick: true,
            allow_page_pick: true,
        }
    }

    #[test]
    /// What: The pagination label shows the one-based range or the empty label.
    fn pagination_label_text() {
        let t = Translator::new("en", None);
        let v = view(SessionPhase::Populated, 37, 3, vec![CatalogItem::default()]);
        assert_eq!(pagination_label(&v, &t), "Search results 31 - 37 / 37");
        let empty = view(SessionPhase::Empty(EmptyReason::NoMatches), 0, 1, Vec::new());
        assert_eq!(pagination_label(&empty, &t), "No search results");
    }

    #[test]
    /// What: Failure and no-match states show different messages.
    fn failed_and_no_matches_differ() {
        let t = Translator::new("fi", None);
        let failed = view(SessionPhase::Empty(EmptyReason::Failed), 0, 1, Vec::new());
        let none = view(SessionPhase::Empty(EmptyReason::NoMatches), 0, 1, Vec::new());
        assert_ne!(status_message(&failed, &t), status_message(&none, &t));
        let shown = view(SessionPhase::Populated, 1, 1, vec![CatalogItem::default()]);
        assert_eq!(status_message(&shown, &t), None);
    }

    #[test]
    /// What: Rows show the title and the truncated summary.
    fn list_renders_items() {
        let t = Translator::new("en", None);
        let item = CatalogItem {
            title: "Höyrylaiva Kallavesi".into(),
            year: "1915".into(),
            summary: "Steamship moored at the Kuopio passenger harbour".into(),
            ..CatalogItem::default()
        };
        let v = view(SessionPhase::Populated, 1, 1, vec![item]);
        let local = PickerUi {
            focus: Focus::Results,
            ..PickerUi::default()
        };
        let mut term = Terminal::new(TestBackend::new(80, 8)).expect("terminal");
        term.draw(|f| {
            let area = f.area();
            render_results(f, &v, &local, &t, (20, 20), area);
        })
        .expect("draw");
        let text = crate::ui::buffer_text(term.backend().buffer());
        assert!(text.contains("Höyrylaiva Kallavesi"));
        assert!(text.contains("1915"));
        assert!(text.contains("Steamship moored at ..."));
    }
}
