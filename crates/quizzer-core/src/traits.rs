//! The prompting seam between command handlers and the terminal.

use crate::error::QuizError;

/// A line reader that asks the user one question at a time.
///
/// Each call blocks until the user has answered, so a handler asking two
/// questions in a row always gets them answered in order. Implementations
/// return the entered text with surrounding whitespace trimmed, and
/// `QuizError::InputAborted` when the user closes or interrupts input.
pub trait Prompter {
    /// Show `prompt` and read one line.
    fn ask(&mut self, prompt: &str) -> Result<String, QuizError>;

    /// Like [`Prompter::ask`], but with `initial` already typed into the
    /// line for the user to edit.
    ///
    /// Readers that cannot edit a line ignore `initial`.
    fn ask_with_initial(&mut self, prompt: &str, initial: &str) -> Result<String, QuizError> {
        let _ = initial;
        self.ask(prompt)
    }

    /// Whether the reader is attached to an interactive terminal.
    fn is_interactive(&self) -> bool {
        false
    }
}
