//! Core data model types for quizzer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// The question shown to the player.
    pub question: String,
    /// The expected answer.
    pub answer: String,
}

impl Quiz {
    /// Build a quiz, trimming surrounding whitespace from both fields.
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        }
    }

    /// Reject quizzes with an empty question or answer.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.question.trim().is_empty() {
            return Err(QuizError::InvalidQuiz("the question must not be empty".into()));
        }
        if self.answer.trim().is_empty() {
            return Err(QuizError::InvalidQuiz("the answer must not be empty".into()));
        }
        Ok(())
    }
}

impl fmt::Display for Quiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.question, self.answer)
    }
}

/// Quizzes a fresh store starts with.
pub fn seed_quizzes() -> Vec<Quiz> {
    vec![
        Quiz::new("Capital of Italy", "Rome"),
        Quiz::new("Capital of France", "Paris"),
        Quiz::new("Capital of Spain", "Madrid"),
        Quiz::new("Capital of Portugal", "Lisbon"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_both_fields() {
        let quiz = Quiz::new("  Capital of Spain \t", " Madrid\n");
        assert_eq!(quiz.question, "Capital of Spain");
        assert_eq!(quiz.answer, "Madrid");
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert!(Quiz::new("Q", "A").validate().is_ok());
        assert!(matches!(
            Quiz::new("   ", "A").validate(),
            Err(QuizError::InvalidQuiz(_))
        ));
        assert!(matches!(
            Quiz::new("Q", "").validate(),
            Err(QuizError::InvalidQuiz(_))
        ));
    }

    #[test]
    fn display_joins_with_arrow() {
        assert_eq!(
            Quiz::new("Capital of Italy", "Rome").to_string(),
            "Capital of Italy => Rome"
        );
    }

    #[test]
    fn serializes_as_question_answer_object() {
        let json = serde_json::to_value(Quiz::new("Q", "A")).unwrap();
        assert_eq!(json, serde_json::json!({"question": "Q", "answer": "A"}));
    }

    #[test]
    fn seed_list_is_valid() {
        let seeds = seed_quizzes();
        assert_eq!(seeds.len(), 4);
        assert!(seeds.iter().all(|q| q.validate().is_ok()));
    }
}
