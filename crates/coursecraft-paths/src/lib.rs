//! coursecraft-paths — Learning path management and progression tracking.
//!
//! Provides the [`LearningPath`] for defining ordered sequences of
//! curriculum modules (referenced by id string) with per-step completion
//! state, timestamps, and score tracking.

pub mod model;
pub mod path;

pub use model::PathStep;
pub use path::{LearningPath, PathExport};
