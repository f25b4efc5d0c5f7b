//! ANSI escape sequences for terminal styling.

/// Sequence that resets every attribute.
pub const RESET: &str = "\x1b[0m";

/// Foreground colors understood by ANSI terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    /// Black (bright black renders as gray)
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// White
    White,
    /// The terminal's default foreground
    Default,
}

impl AnsiColor {
    /// SGR foreground code in the normal range.
    pub fn code(self) -> u8 {
        match self {
            AnsiColor::Black => 30,
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
            AnsiColor::White => 37,
            AnsiColor::Default => 39,
        }
    }
}

/// A foreground color plus attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnsiStyle {
    fg: AnsiColor,
    bright: bool,
    bold: bool,
}

impl AnsiStyle {
    /// Plain style with the given foreground.
    pub const fn new(fg: AnsiColor) -> Self {
        Self {
            fg,
            bright: false,
            bold: false,
        }
    }

    /// Use the high-intensity variant of the color.
    pub const fn bright(mut self) -> Self {
        self.bright = true;
        self
    }

    /// Render in bold.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Escape sequence that switches this style on.
    ///
    /// Every sequence starts by clearing attributes, e.g. blue is
    /// `ESC[0;34m` and bold default is `ESC[0;1;39m`.
    pub fn start(&self) -> String {
        // Default has no bright variant
        let code = if self.bright && self.fg != AnsiColor::Default {
            self.fg.code() + 60
        } else {
            self.fg.code()
        };

        let bold = if self.bold { "1;" } else { "" };
        format!("\x1b[0;{}{}m", bold, code)
    }

    /// Wrap `text` in this style and a trailing reset.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}{}", self.start(), text, RESET)
    }
}
