//! Confirmation required before rewriting many files at once.

use std::io;

use tracing::warn;

use crate::console::Console;

/// Result of consulting the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// At or below the threshold; nobody was asked.
    NotRequired,
    Approved,
    Declined,
}

impl Verdict {
    #[must_use]
    pub const fn proceeds(self) -> bool {
        !matches!(self, Self::Declined)
    }
}

/// Asks the operator to confirm once the file count passes a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyGate {
    threshold: usize,
}

impl Default for SafetyGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl SafetyGate {
    pub const DEFAULT_THRESHOLD: usize = 10;

    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn requires_confirmation(&self, count: usize) -> bool {
        count > self.threshold
    }

    /// Only `y` or `Y` approves. Anything else, an empty answer included,
    /// declines.
    #[must_use]
    pub fn is_approval(answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case("y")
    }

    /// Prompt when `count` exceeds the threshold and judge the answer.
    pub fn confirm(&self, count: usize, console: &mut dyn Console) -> io::Result<Verdict> {
        if !self.requires_confirmation(count) {
            return Ok(Verdict::NotRequired);
        }

        let question = format!(
            "The number of target files exceeds {}. Do you want to run it? (Y/n) [n]",
            self.threshold
        );
        let answer = console.prompt(&question)?;
        if Self::is_approval(&answer) {
            Ok(Verdict::Approved)
        } else {
            warn!(count, answer = %answer.trim(), "bulk rewrite declined");
            Ok(Verdict::Declined)
        }
    }
}
