//! Fixed colour palette of the picker.

use ratatui::style::Color;

/// Colours used by the picker panes.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Canvas background.
    pub base: Color,
    /// Background of the highlighted list row.
    pub surface1: Color,
    /// Unfocused borders.
    pub surface2: Color,
    /// Muted labels and titles.
    pub overlay1: Color,
    /// Secondary text such as summaries.
    pub overlay2: Color,
    /// Primary text.
    pub text: Color,
    /// Text of unfocused inputs.
    pub subtext0: Color,
    /// Prompt and focused accents.
    pub sapphire: Color,
    /// Focused pane titles.
    pub mauve: Color,
    /// Enabled actions.
    pub green: Color,
    /// Loading indicator.
    pub yellow: Color,
    /// Failures.
    pub red: Color,
}

/// Catppuccin Mocha.
const MOCHA: Theme = Theme {
    base: Color::Rgb(30, 30, 46),        // #1e1e2e
    surface1: Color::Rgb(69, 71, 90),    // #45475a
    surface2: Color::Rgb(88, 91, 112),   // #585b70
    overlay1: Color::Rgb(127, 132, 156), // #7f849c
    overlay2: Color::Rgb(147, 153, 178), // #9399b2
    text: Color::Rgb(205, 214, 244),     // #cdd6f4
    subtext0: Color::Rgb(166, 173, 200), // #a6adc8
    sapphire: Color::Rgb(116, 199, 236), // #74c7ec
    mauve: Color::Rgb(203, 166, 247),    // #cba6f7
    green: Color::Rgb(166, 227, 161),    // #a6e3a1
    yellow: Color::Rgb(249, 226, 175),   // #f9e2af
    red: Color::Rgb(243, 139, 168),      // #f38ba8
};

/// Palette in use.
#[must_use]
pub const fn theme() -> Theme {
    MOCHA
}
