//! Terminal-only picker state: the text field, list cursor and focus.
//!
//! None of this belongs to the session. The session only sees the query
//! text once it is typed and the item index once it is opened.

/// Which pane receives keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Query text field.
    #[default]
    Search,
    /// Result list.
    Results,
}

/// Local state of the terminal picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickerUi {
    /// Contents of the query field.
    pub input: String,
    /// Cursor position in the result list.
    pub selected: usize,
    /// Pane receiving keys.
    pub focus: Focus,
}

impl PickerUi {
    /// What: Field state seeded with an initial query.
    #[must_use]
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            ..Self::default()
        }
    }

    /// What: Move the list cursor by `delta`, staying within `len` items.
    ///
    /// Inputs:
    /// - `delta`: Signed step.
    /// - `len`: Number of items on the page.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut ui = PickerUi::default();
        ui.move_selection(-1, 3);
        assert_eq!(ui.selected, 0);
        ui.move_selection(5, 3);
        assert_eq!(ui.selected, 2);
        ui.move_selection(1, 0);
        assert_eq!(ui.selected, 0);
    }
}
