//! Learning path data model.

use serde::{Deserialize, Serialize};

/// A single step in a learning path.
///
/// Step ids are dense, 0-based, assigned by insertion order, and never
/// reused; no deletion operation exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathStep {
    /// Position of the step within its path.
    pub step_id: usize,
    /// The curriculum module this step covers (by id; unvalidated).
    pub module_id: String,
    /// Human-readable step title.
    pub title: String,
    /// Whether the step has been completed.
    pub completed: bool,
    /// ISO-8601 UTC timestamp, set only on completion.
    pub completed_at: Option<String>,
    /// Achievement score in [0.0, 1.0], set only on completion.
    pub score: Option<f64>,
}
