//! # Views Module
//!
//! Declarative view layer: pure functions from entities to card/line
//! structures, separated from event wiring so the rendering rules can be
//! unit-tested without a terminal.

pub mod ansi_escape_codes;
pub mod cards;
pub mod display;

pub use cards::{Card, Control, ViewState};
pub use display::{card_lines, feed_lines, my_profile_header, post_detail_lines, profile_header};
