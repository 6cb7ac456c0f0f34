//! Terminal colour palette for WHOIS output.
//!
//! Roles map onto ANSI bright colours, which render on nearly every
//! terminal.

use colored::{ColoredString, Colorize};

/// Extension trait assigning output roles a colour.
pub trait PaletteExt {
    /// Section titles.
    fn heading(&self) -> ColoredString;
    /// Underlines beneath titles.
    fn rule(&self) -> ColoredString;
    /// Field names.
    fn label(&self) -> ColoredString;
    /// Field values.
    fn value(&self) -> ColoredString;
    /// Raw response text and comments.
    fn muted(&self) -> ColoredString;
    /// Fields that were requested but not present.
    fn missing(&self) -> ColoredString;
    fn error(&self) -> ColoredString;
}

impl<S: AsRef<str>> PaletteExt for S {
    fn heading(&self) -> ColoredString {
        self.as_ref().bright_purple().bold()
    }

    fn rule(&self) -> ColoredString {
        self.as_ref().white()
    }

    fn label(&self) -> ColoredString {
        self.as_ref().bright_cyan().bold()
    }

    fn value(&self) -> ColoredString {
        self.as_ref().bright_white()
    }

    fn muted(&self) -> ColoredString {
        self.as_ref().bright_black()
    }

    fn missing(&self) -> ColoredString {
        self.as_ref().bright_yellow()
    }

    fn error(&self) -> ColoredString {
        self.as_ref().bright_red().bold()
    }
}
