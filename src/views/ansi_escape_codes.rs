//! ANSI escape code constants for terminal styling
//!
//! The small set of codes the card renderers use, plus a helper that applies
//! a code only when styling is enabled (stdout is a tty).

#![allow(dead_code)]

// ============================================================================
// TEXT ATTRIBUTES
// ============================================================================

pub const RESET: &str = "\x1b[0m"; // Reset all attributes
pub const BOLD: &str = "\x1b[1m"; // Bold text
pub const DIM: &str = "\x1b[2m"; // Dimmed/faint text
pub const UNDERLINE: &str = "\x1b[4m"; // Underlined text

// ============================================================================
// STANDARD FOREGROUND COLORS (30-37)
// ============================================================================

pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_CYAN: &str = "\x1b[36m";

// ============================================================================
// BRIGHT/HIGH INTENSITY FOREGROUND COLORS (90-97)
// ============================================================================

pub const FG_BRIGHT_BLACK: &str = "\x1b[90m"; // Also known as dark gray

/// Wrap `text` in `code`…RESET when styling is enabled, pass through otherwise.
pub fn paint(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_should_wrap_when_enabled() {
        assert_eq!(paint("hi", BOLD, true), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn paint_should_pass_through_when_disabled() {
        assert_eq!(paint("hi", BOLD, false), "hi");
    }
}
