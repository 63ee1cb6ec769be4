//! Scripted prompter for testing.

use std::collections::VecDeque;

use crate::error::QuizError;
use crate::traits::Prompter;

/// A prompter that replays canned answers in order.
///
/// Once the script runs out it behaves like a closed terminal and returns
/// `QuizError::InputAborted`.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    /// Answers still to be given.
    answers: VecDeque<String>,
    /// Every prompt shown, in order.
    prompts: Vec<String>,
    /// Pre-filled text offered with each prompt (empty when none).
    initials: Vec<String>,
    interactive: bool,
}

impl ScriptedPrompter {
    /// Create a prompter that answers with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Pretend to be attached to a terminal.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Text pre-filled into each prompt so far.
    pub fn initials(&self) -> &[String] {
        &self.initials
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        self.ask_with_initial(prompt, "")
    }

    fn ask_with_initial(&mut self, prompt: &str, initial: &str) -> Result<String, QuizError> {
        self.prompts.push(prompt.to_string());
        self.initials.push(initial.to_string());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or(QuizError::InputAborted)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
