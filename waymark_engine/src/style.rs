//! Styling helpers for terminal output.
//!
//! The [`GuideStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly. Requirement lines
//! take their color from the engine [`Config`](crate::config::Config) through
//! [`paint`] instead, since those colors are user-configurable.

use colored::{ColoredString, Colorize};

use crate::config::Rgb;

/// Apply a configured RGB color to a piece of text.
pub fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.r, color.g, color.b)
}

/// Convenience trait for fixed styles used by the demo renderer.
pub trait GuideStyle {
    fn quest_title_style(&self) -> ColoredString;
    fn step_style(&self) -> ColoredString;
    fn step_done_style(&self) -> ColoredString;
    fn dialog_choice_style(&self) -> ColoredString;
    fn tooltip_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GuideStyle for &str {
    fn quest_title_style(&self) -> ColoredString {
        self.bold().truecolor(220, 180, 40)
    }
    fn step_style(&self) -> ColoredString {
        self.truecolor(102, 208, 250)
    }
    fn step_done_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110).strikethrough()
    }
    fn dialog_choice_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn tooltip_style(&self) -> ColoredString {
        self.dimmed().italic()
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GuideStyle for String {
    fn quest_title_style(&self) -> ColoredString {
        self.as_str().quest_title_style()
    }
    fn step_style(&self) -> ColoredString {
        self.as_str().step_style()
    }
    fn step_done_style(&self) -> ColoredString {
        self.as_str().step_done_style()
    }
    fn dialog_choice_style(&self) -> ColoredString {
        self.as_str().dialog_choice_style()
    }
    fn tooltip_style(&self) -> ColoredString {
        self.as_str().tooltip_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
