//! File-backed quiz repository.
//!
//! The whole collection lives in memory and is rewritten to a single JSON
//! file after every mutation. Records are addressed by position; reads hand
//! out owned copies so callers can never reach into the stored records.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::QuizError;
use crate::model::{seed_quizzes, Quiz};

/// Default name of the JSON store.
pub const DEFAULT_DATA_FILE: &str = "quizzes.json";

/// Owned collection of quizzes plus the file it persists to.
#[derive(Debug)]
pub struct QuizRepository {
    quizzes: Vec<Quiz>,
    path: Option<PathBuf>,
}

impl QuizRepository {
    /// Load the store at `path`.
    ///
    /// A missing file is the first-run case: the repository starts from the
    /// seed list and writes it out immediately. Any other read or parse
    /// failure is returned as a fatal error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, QuizError> {
        let path = path.into();
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let quizzes: Vec<Quiz> =
                    serde_json::from_str(&content).map_err(|source| QuizError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                debug!(path = %path.display(), count = quizzes.len(), "loaded quizzes");
                Ok(Self {
                    quizzes,
                    path: Some(path),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "quiz store not found, seeding a new one");
                let repo = Self {
                    quizzes: seed_quizzes(),
                    path: Some(path),
                };
                repo.save()?;
                Ok(repo)
            }
            Err(source) => Err(QuizError::Load { path, source }),
        }
    }

    /// A repository with no backing file. Saving is a no-op.
    pub fn in_memory(quizzes: Vec<Quiz>) -> Self {
        Self {
            quizzes,
            path: None,
        }
    }

    /// The file this repository persists to, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of stored quizzes.
    pub fn count(&self) -> usize {
        self.quizzes.len()
    }

    /// Append a quiz and return its id.
    pub fn add(&mut self, question: &str, answer: &str) -> Result<usize, QuizError> {
        self.quizzes.push(Quiz::new(question, answer));
        let id = self.quizzes.len() - 1;
        debug!(id, "added quiz");
        self.save()?;
        Ok(id)
    }

    /// Replace the quiz at `id`.
    pub fn update(&mut self, id: usize, question: &str, answer: &str) -> Result<(), QuizError> {
        let slot = self.quizzes.get_mut(id).ok_or(QuizError::InvalidId(id))?;
        *slot = Quiz::new(question, answer);
        debug!(id, "updated quiz");
        self.save()
    }

    /// Copies of every stored quiz, in id order.
    pub fn get_all(&self) -> Vec<Quiz> {
        self.quizzes.clone()
    }

    /// Copy of the quiz at `id`.
    pub fn get_by_index(&self, id: usize) -> Result<Quiz, QuizError> {
        self.quizzes.get(id).cloned().ok_or(QuizError::InvalidId(id))
    }

    /// Remove the quiz at `id`; later quizzes move down by one.
    pub fn delete_by_index(&mut self, id: usize) -> Result<Quiz, QuizError> {
        if id >= self.quizzes.len() {
            return Err(QuizError::InvalidId(id));
        }
        let removed = self.quizzes.remove(id);
        debug!(id, "deleted quiz");
        self.save()?;
        Ok(removed)
    }

    /// Rewrite the whole collection to the backing file.
    pub fn save(&self) -> Result<(), QuizError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.quizzes)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| QuizError::Save {
                path: path.clone(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| QuizError::Save {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), count = self.quizzes.len(), "saved quizzes");
        Ok(())
    }
}
