//! coursecraft-exercises — Exercise creation and assessment rubrics.
//!
//! Provides the [`ExerciseBank`] for building exercises with multiple
//! question types and scoring submitted answers against stored rubrics.
//! Exercises reference curriculum topics only by id string.

pub mod bank;
pub mod model;
pub mod scoring;

pub use bank::ExerciseBank;
pub use model::{Exercise, Question, QuestionType};
pub use scoring::{ExerciseScore, QuestionScore};
