//! quizzer-core — Quiz repository, exam logic, and configuration.
//!
//! This crate owns the quiz collection and its JSON persistence, and defines
//! the prompting seam that the interactive command handlers are built on.

pub mod config;
pub mod error;
pub mod exam;
pub mod id;
pub mod mock;
pub mod model;
pub mod repository;
pub mod traits;

pub use error::QuizError;
pub use model::Quiz;
pub use repository::QuizRepository;
