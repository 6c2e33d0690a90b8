use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::i18n::Translator;
use crate::state::{CatalogItem, SessionView};
use crate::ui::theme::{Theme, theme};

/// What: Labelled line, skipped when the value is empty.
fn field<'a>(label: String, value: String, th: &Theme) -> Option<Line<'a>> {
    (!value.is_empty()).then(|| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(th.overlay1)),
            Span::styled(value, Style::default().fg(th.text)),
        ])
    })
}

/// What: Build the body lines of the detail pane.
///
/// Details:
/// - Attribution keeps its own line breaks; each action is listed only when
///   enabled in the configuration.
fn detail_lines(item: &CatalogItem, view: &SessionView, t: &Translator) -> Vec<Line<'static>> {
    let th = theme();
    let mut lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(
        item.attribution
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.subtext0)))),
    );
    lines.push(Line::default());
    lines.extend(
        [
            field(t.t("detail.organization"), item.organization.clone(), &th),
            field(t.t("detail.collections"), item.collections.join(", "), &th),
            field(t.t("detail.measurements"), item.measurements.join(", "), &th),
        ]
        .into_iter()
        .flatten(),
    );
    if !item.summary.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            item.summary.clone(),
            Style::default().fg(th.overlay2),
        )));
    }
    lines.push(Line::default());
    let mut actions = Vec::new();
    if view.allow_image_pick {
        actions.push(Span::styled(
            format!("[i] {}", t.t("detail.use_image")),
            Style::default().fg(th.green),
        ));
    }
    if view.allow_page_pick {
        if !actions.is_empty() {
            actions.push(Span::raw("   "));
        }
        actions.push(Span::styled(
            format!("[l] {}", t.t("detail.use_as_link")),
            Style::default().fg(th.green),
        ));
    }
    lines.push(Line::from(actions));
    lines
}

/// Render the focused item with its pick actions.
pub fn render_detail(f: &mut Frame, view: &SessionView, t: &Translator, area: Rect) {
    let th = theme();
    let Some(item) = view.focused.as_ref() else {
        return;
    };
    let paragraph = Paragraph::new(detail_lines(item, view, t))
        .style(Style::default().bg(th.base))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(item.format.clone(), Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.sapphire)),
        );
    f.render_widget(paragraph, area);
}
