//! # Interaction Abstraction
//!
//! The original client used blocking `confirm`/`prompt`/`alert` dialogs for
//! destructive and edit actions. This module replaces them with a trait so
//! call sites stay synchronous-looking while tests supply canned responses.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::Mutex;

use anyhow::Result;

/// User-facing confirm/prompt/notify surface.
///
/// Controllers never touch stdin/stdout directly; they go through this
/// trait, which makes every destructive flow testable without a terminal.
pub trait Interaction: Send + Sync {
    /// Ask a yes/no question. Default answer is no.
    fn confirm(&self, question: &str) -> Result<bool>;

    /// Ask for a line of input, offering a default. Returns `None` when the
    /// user submits nothing and no default applies.
    fn prompt(&self, question: &str, default: &str) -> Result<Option<String>>;

    /// Show a one-way message.
    fn notify(&self, message: &str);
}

/// Interaction over the process's stdin/stdout.
pub struct TerminalInteraction;

impl TerminalInteraction {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl Interaction for TerminalInteraction {
    fn confirm(&self, question: &str) -> Result<bool> {
        print!("{question} [y/N] ");
        std::io::stdout().flush()?;
        let answer = self.read_line()?;
        Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }

    fn prompt(&self, question: &str, default: &str) -> Result<Option<String>> {
        if default.is_empty() {
            print!("{question}: ");
        } else {
            print!("{question} [{default}]: ");
        }
        std::io::stdout().flush()?;
        let answer = self.read_line()?;
        if answer.is_empty() {
            if default.is_empty() {
                Ok(None)
            } else {
                Ok(Some(default.to_string()))
            }
        } else {
            Ok(Some(answer))
        }
    }

    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

/// Scripted interaction for tests: replays queued answers and records every
/// notification for later assertions.
#[derive(Default)]
pub struct CannedInteraction {
    confirms: Mutex<VecDeque<bool>>,
    prompts: Mutex<VecDeque<Option<String>>>,
    notifications: Mutex<Vec<String>>,
}

impl CannedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next `confirm` call.
    pub fn push_confirm(&self, answer: bool) {
        self.confirms.lock().unwrap().push_back(answer);
    }

    /// Queue the answer to the next `prompt` call.
    pub fn push_prompt(&self, answer: Option<&str>) {
        self.prompts
            .lock()
            .unwrap()
            .push_back(answer.map(|s| s.to_string()));
    }

    /// Everything `notify` has been called with, in order.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Interaction for CannedInteraction {
    fn confirm(&self, _question: &str) -> Result<bool> {
        Ok(self.confirms.lock().unwrap().pop_front().unwrap_or(false))
    }

    fn prompt(&self, _question: &str, default: &str) -> Result<Option<String>> {
        match self.prompts.lock().unwrap().pop_front() {
            Some(answer) => Ok(answer),
            None if default.is_empty() => Ok(None),
            None => Ok(Some(default.to_string())),
        }
    }

    fn notify(&self, message: &str) {
        self.notifications.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_confirm_should_default_to_no() {
        let canned = CannedInteraction::new();
        assert!(!canned.confirm("Delete?").unwrap());
    }

    #[test]
    fn canned_confirm_should_replay_queued_answers() {
        let canned = CannedInteraction::new();
        canned.push_confirm(true);
        canned.push_confirm(false);
        assert!(canned.confirm("first").unwrap());
        assert!(!canned.confirm("second").unwrap());
    }

    #[test]
    fn canned_prompt_should_fall_back_to_default() {
        let canned = CannedInteraction::new();
        assert_eq!(
            canned.prompt("Title", "old title").unwrap(),
            Some("old title".to_string())
        );
        assert_eq!(canned.prompt("Title", "").unwrap(), None);
    }

    #[test]
    fn canned_should_record_notifications() {
        let canned = CannedInteraction::new();
        canned.notify("Post has been deleted.");
        canned.notify("done");
        assert_eq!(canned.notifications(), vec!["Post has been deleted.", "done"]);
    }
}
