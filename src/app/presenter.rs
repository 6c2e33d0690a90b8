//! Terminal presenter: draws session snapshots with ratatui.

use ratatui::{Terminal, backend::Backend};

use crate::i18n::Translator;
use crate::logic::Presenter;
use crate::state::{Focus, PickerUi, SessionPhase, SessionView};

/// Presenter drawing into a ratatui terminal.
///
/// Besides the session snapshot it owns the field text and list cursor, so
/// key handling can update those and redraw without a session transition.
pub struct TuiPresenter<B: Backend> {
    /// Target terminal; `None` once detached.
    terminal: Option<Terminal<B>>,
    /// UI strings.
    translator: Translator,
    /// Field text, list cursor and focus.
    local: PickerUi,
    /// Latest snapshot received from the session.
    view: Option<SessionView>,
    /// Summary and collections preview lengths.
    previews: (usize, usize),
    /// Leave raw mode and the alternate screen on detach.
    restore_on_detach: bool,
}

impl<B: Backend> TuiPresenter<B> {
    /// What: Presenter over a terminal.
    ///
    /// Inputs:
    /// - `terminal`: Target terminal.
    /// - `translator`: UI strings.
    /// - `local`: Initial field state (e.g. seeded with the initial query).
    /// - `previews`: Summary and collections preview lengths.
    pub fn new(
        terminal: Terminal<B>,
        translator: Translator,
        local: PickerUi,
        previews: (usize, usize),
    ) -> Self {
        Self {
            terminal: Some(terminal),
            translator,
            local,
            view: None,
            previews,
            restore_on_detach: false,
        }
    }

    /// What: Restore the real terminal when the picker detaches.
    #[must_use]
    pub const fn restoring_terminal(mut self) -> Self {
        self.restore_on_detach = true;
        self
    }

    /// Field text, list cursor and focus.
    pub const fn local(&self) -> &PickerUi {
        &self.local
    }

    /// Field text, list cursor and focus, mutably.
    pub const fn local_mut(&mut self) -> &mut PickerUi {
        &mut self.local
    }

    /// Whether the picker has been removed from view.
    pub const fn is_detached(&self) -> bool {
        self.terminal.is_none()
    }

    /// What: Draw the latest snapshot with the current local state.
    ///
    /// Details:
    /// - Does nothing before the first snapshot or after detach.
    pub fn redraw(&mut self) {
        let (Some(terminal), Some(view)) = (self.terminal.as_mut(), self.view.as_ref()) else {
            return;
        };
        let local = &self.local;
        let translator = &self.translator;
        let previews = self.previews;
        if terminal
            .draw(|f| crate::ui::ui(f, view, local, translator, previews))
            .is_err()
        {
            tracing::warn!("failed to draw picker frame");
        }
    }
}

impl<B: Backend> Presenter for TuiPresenter<B> {
    fn render(&mut self, view: &SessionView) {
        let count = view.results.items.len();
        if view.phase == SessionPhase::Searching {
            self.local.selected = 0;
        }
        if count == 0 {
            self.local.focus = Focus::Search;
        }
        self.local.move_selection(0, count);
        self.view = Some(view.clone());
        self.redraw();
    }

    fn detach(&mut self) {
        if self.terminal.take().is_none() {
            return;
        }
        if self.restore_on_detach
            && let Err(e) = super::terminal::restore_terminal()
        {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
        tracing::debug!("picker detached");
    }
}
