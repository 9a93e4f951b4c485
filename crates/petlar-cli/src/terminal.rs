// Rust guideline compliant 2026-10-18

//! Terminal UI utilities for the PetLar CLI.
//!
//! This module provides color support detection, status badges and
//! colored status messages.

use petlar_core::StatusColors;
use std::env;
use std::io::{IsTerminal, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    std::io::stdout().is_terminal()
}

/// Parses a `#RRGGBB` hex string into a terminal color.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Renders text as a colored badge using the status colors.
///
/// Returns the text unchanged when color is disabled.
pub fn badge(text: &str, colors: StatusColors, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }

    let mut buffer = Buffer::ansi();
    let mut spec = ColorSpec::new();
    spec.set_fg(hex_color(colors.text))
        .set_bg(hex_color(colors.background))
        .set_bold(true);
    let _ = buffer.set_color(&spec);
    let _ = write!(buffer, " {} ", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

/// Prints a status message with a colored prefix.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    print_status("✗", Color::Red, message);
}
