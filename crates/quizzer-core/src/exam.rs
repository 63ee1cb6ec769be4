//! Answer checking and the play-all exam.
//!
//! An exam walks the quiz list in random order. Each correct answer scores a
//! point and retires the question; the first wrong answer ends the exam with
//! whatever has been scored so far.

use rand::Rng;

use crate::model::Quiz;

/// Compare a given answer against the expected one, ignoring case and
/// surrounding whitespace.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Result of answering the pending question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The answer was right; `score` includes this point.
    Correct { score: u32 },
    /// The answer was wrong and the exam is over.
    Incorrect { score: u32 },
}

/// One play session over a working copy of the quiz list.
#[derive(Debug, Clone)]
pub struct Exam {
    remaining: Vec<Quiz>,
    pending: Option<usize>,
    score: u32,
    failed: bool,
}

impl Exam {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            remaining: quizzes,
            pending: None,
            score: 0,
            failed: false,
        }
    }

    /// Pick the next question uniformly at random from what is left.
    ///
    /// Returns `None` once the exam is over, either because every question
    /// has been answered or because an answer was wrong.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Quiz> {
        if self.is_over() {
            self.pending = None;
            return None;
        }
        let index = rng.gen_range(0..self.remaining.len());
        self.pending = Some(index);
        self.remaining.get(index)
    }

    /// Answer the pending question. `None` if no question is pending.
    pub fn answer(&mut self, given: &str) -> Option<Verdict> {
        let index = self.pending.take()?;
        if answers_match(given, &self.remaining[index].answer) {
            self.remaining.remove(index);
            self.score += 1;
            Some(Verdict::Correct { score: self.score })
        } else {
            self.failed = true;
            Some(Verdict::Incorrect { score: self.score })
        }
    }

    /// Points scored so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions not yet answered correctly.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_over(&self) -> bool {
        self.failed || self.remaining.is_empty()
    }
}
