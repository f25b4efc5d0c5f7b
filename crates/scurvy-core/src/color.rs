//! Named color decorators.

use crate::ansi::{AnsiColor, AnsiStyle};
use std::fmt;

/// A string decorating function.
pub type ColorFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// The eight semantic colors a scheme provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// Red
    Red,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Green
    Green,
    /// Gray (bright black)
    Gray,
    /// Bold default foreground
    Bold,
}

impl Color {
    /// Every color slot.
    pub const ALL: [Color; 8] = [
        Color::Magenta,
        Color::Cyan,
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Gray,
        Color::Bold,
    ];

    /// Terminal style backing this slot.
    pub fn style(self) -> AnsiStyle {
        match self {
            Color::Magenta => AnsiStyle::new(AnsiColor::Magenta),
            Color::Cyan => AnsiStyle::new(AnsiColor::Cyan),
            Color::Red => AnsiStyle::new(AnsiColor::Red),
            Color::Yellow => AnsiStyle::new(AnsiColor::Yellow),
            Color::Blue => AnsiStyle::new(AnsiColor::Blue),
            Color::Green => AnsiStyle::new(AnsiColor::Green),
            Color::Gray => AnsiStyle::new(AnsiColor::Black).bright(),
            Color::Bold => AnsiStyle::new(AnsiColor::Default).bold(),
        }
    }
}

fn make_color_fn(color: Color, enabled: bool) -> ColorFn {
    if enabled {
        let style = color.style();
        Box::new(move |v: &str| style.paint(v))
    } else {
        Box::new(|v: &str| v.to_string())
    }
}

/// Decorating functions for each [`Color`], fixed at construction.
pub struct ColorScheme {
    /// Magenta decorator
    pub magenta: ColorFn,
    /// Cyan decorator
    pub cyan: ColorFn,
    /// Red decorator
    pub red: ColorFn,
    /// Yellow decorator
    pub yellow: ColorFn,
    /// Blue decorator
    pub blue: ColorFn,
    /// Green decorator
    pub green: ColorFn,
    /// Gray decorator
    pub gray: ColorFn,
    /// Bold decorator
    pub bold: ColorFn,
    enabled: bool,
}

impl ColorScheme {
    /// Build a scheme. When `enabled` is false every decorator returns its
    /// input unchanged.
    pub fn new(enabled: bool) -> Self {
        Self {
            magenta: make_color_fn(Color::Magenta, enabled),
            cyan: make_color_fn(Color::Cyan, enabled),
            red: make_color_fn(Color::Red, enabled),
            yellow: make_color_fn(Color::Yellow, enabled),
            blue: make_color_fn(Color::Blue, enabled),
            green: make_color_fn(Color::Green, enabled),
            gray: make_color_fn(Color::Gray, enabled),
            bold: make_color_fn(Color::Bold, enabled),
            enabled,
        }
    }

    /// Whether decorators emit escape sequences.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Decorate `text` with the slot named by `color`.
    pub fn paint(&self, color: Color, text: &str) -> String {
        let f = match color {
            Color::Magenta => &self.magenta,
            Color::Cyan => &self.cyan,
            Color::Red => &self.red,
            Color::Yellow => &self.yellow,
            Color::Blue => &self.blue,
            Color::Green => &self.green,
            Color::Gray => &self.gray,
            Color::Bold => &self.bold,
        };
        f(text)
    }
}

impl fmt::Debug for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorScheme")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESCAPE_BLUE_START: &str = "\x1b[0;34m";
    const ESCAPE_GREY_START: &str = "\x1b[0;90m";
    const ESCAPE_BOLD_START: &str = "\x1b[0;1;39m";
    const ESCAPE_END: &str = "\x1b[0m";

    #[test]
    fn test_terminal_colors() {
        let color = ColorScheme::new(true);
        assert_eq!((color.blue)("Blue"), format!("{}Blue{}", ESCAPE_BLUE_START, ESCAPE_END));
        assert_eq!((color.gray)("Grey"), format!("{}Grey{}", ESCAPE_GREY_START, ESCAPE_END));
        assert_eq!((color.bold)("Bold"), format!("{}Bold{}", ESCAPE_BOLD_START, ESCAPE_END));
        assert_eq!((color.blue)("Blue"), "\x1b[0;34mBlue\x1b[0m");

        let no_color = ColorScheme::new(false);
        assert_eq!((no_color.blue)("Blue"), "Blue");
        assert_eq!((no_color.gray)("Grey"), "Grey");
        assert_eq!((no_color.bold)("Bold"), "Bold");
    }

    #[test]
    fn test_paint_by_name() {
        let color = ColorScheme::new(true);
        assert!(color.is_enabled());
        assert_eq!(color.paint(Color::Magenta, "m"), "\x1b[0;35mm\x1b[0m");
        assert_eq!(color.paint(Color::Cyan, "c"), "\x1b[0;36mc\x1b[0m");
        assert_eq!(color.paint(Color::Red, "r"), "\x1b[0;31mr\x1b[0m");
        assert_eq!(color.paint(Color::Yellow, "y"), "\x1b[0;33my\x1b[0m");
        assert_eq!(color.paint(Color::Green, "g"), "\x1b[0;32mg\x1b[0m");
    }

    #[test]
    fn test_disabled_is_identity() {
        let no_color = ColorScheme::new(false);
        assert!(!no_color.is_enabled());
        for c in Color::ALL {
            assert_eq!(no_color.paint(c, "plain"), "plain");
        }
    }
}
