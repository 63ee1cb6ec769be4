//! Quiz error types.
//!
//! Handlers recover from bad user input and report it in one line, while
//! storage and reader failures abort the session. `is_recoverable` draws
//! that line so callers don't have to match on messages.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the repository, id parsing, and prompting.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The `<id>` parameter was not given.
    #[error("missing parameter <id>")]
    MissingId,

    /// The `<id>` parameter is not a non-negative integer.
    #[error("the value of parameter <id> is not a number: '{0}'")]
    NotANumber(String),

    /// No quiz exists at the given position.
    #[error("the value of parameter <id> is not valid: no quiz with id={0}")]
    InvalidId(usize),

    /// The `<id>` parameter is numeric but too large to name any quiz.
    #[error("the value of parameter <id> is not valid: no quiz with id={0}")]
    IdOutOfRange(String),

    /// The quiz failed validation (e.g. an empty question).
    #[error("the quiz is invalid: {0}")]
    InvalidQuiz(String),

    /// The user closed or interrupted input while a question was pending.
    #[error("input aborted")]
    InputAborted,

    /// The line reader itself failed.
    #[error("input error: {0}")]
    Input(String),

    /// Reading the store from disk failed.
    #[error("failed to read quizzes from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The store on disk is not a JSON array of quizzes.
    #[error("failed to parse quizzes in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Writing the store to disk failed.
    #[error("failed to write quizzes to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing the collection failed.
    #[error("failed to serialize quizzes: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl QuizError {
    /// Returns `true` if the interactive loop should report this error and
    /// keep going, `false` if it must abort.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::MissingId
                | QuizError::NotANumber(_)
                | QuizError::InvalidId(_)
                | QuizError::IdOutOfRange(_)
                | QuizError::InvalidQuiz(_)
                | QuizError::InputAborted
        )
    }
}
