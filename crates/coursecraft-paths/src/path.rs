//! The learning path and its export snapshot.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use coursecraft_core::round_dp;

use crate::model::PathStep;

/// An ordered learning path through curriculum modules.
///
/// A path defines the recommended order for completing modules and tracks
/// learner progress through each step. Out-of-range step ids return
/// `false`/`None` rather than erroring.
#[derive(Debug, Clone)]
pub struct LearningPath {
    path_name: String,
    learner_id: String,
    steps: Vec<PathStep>,
}

impl LearningPath {
    /// Create an empty path for the "anonymous" learner.
    pub fn new(path_name: impl Into<String>) -> Self {
        Self::for_learner(path_name, "anonymous")
    }

    /// Create an empty path for a specific learner.
    pub fn for_learner(path_name: impl Into<String>, learner_id: impl Into<String>) -> Self {
        Self {
            path_name: path_name.into(),
            learner_id: learner_id.into(),
            steps: Vec::new(),
        }
    }

    /// The path name.
    pub fn name(&self) -> &str {
        &self.path_name
    }

    /// The learner this path belongs to.
    pub fn learner_id(&self) -> &str {
        &self.learner_id
    }

    /// Total number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Number of completed steps.
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// Completion percentage (0.0-100.0), rounded to one decimal place.
    /// 0.0 for an empty path.
    pub fn progress_pct(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        round_dp(self.completed_count() as f64 / self.steps.len() as f64 * 100.0, 1)
    }

    /// Look up a step by id.
    pub fn step(&self, step_id: usize) -> Option<&PathStep> {
        self.steps.get(step_id)
    }

    /// All steps in order.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Append a step referencing a curriculum module.
    ///
    /// The new step's id equals the step count before insertion, keeping
    /// ids dense and 0-based.
    pub fn add_step(&mut self, module_id: impl Into<String>, title: impl Into<String>) -> &PathStep {
        let step = PathStep {
            step_id: self.steps.len(),
            module_id: module_id.into(),
            title: title.into(),
            completed: false,
            completed_at: None,
            score: None,
        };
        self.steps.push(step);
        // Just pushed, so the list is non-empty.
        &self.steps[self.steps.len() - 1]
    }

    /// Mark a step as completed with an achievement score.
    ///
    /// The score is clamped into [0.0, 1.0] and the completion time is
    /// stamped as an ISO-8601 UTC string. Returns `false` when `step_id`
    /// is out of range; hosts conventionally pass 1.0 for unscored
    /// completions.
    pub fn complete_step(&mut self, step_id: usize, score: f64) -> bool {
        let Some(step) = self.steps.get_mut(step_id) else {
            tracing::warn!("step {step_id} out of range, not completed");
            return false;
        };
        step.completed = true;
        step.completed_at = Some(Utc::now().to_rfc3339());
        step.score = Some(score.clamp(0.0, 1.0));
        true
    }

    /// The first incomplete step, or `None` when every step is done
    /// (or the path is empty).
    pub fn get_next_step(&self) -> Option<&PathStep> {
        self.steps.iter().find(|s| !s.completed)
    }

    /// Average score across steps that are completed and scored, rounded
    /// to three decimal places. `None` when no such step exists, which is
    /// distinct from an average of zero.
    pub fn get_average_score(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .steps
            .iter()
            .filter(|s| s.completed)
            .filter_map(|s| s.score)
            .collect();
        if scores.is_empty() {
            return None;
        }
        Some(round_dp(scores.iter().sum::<f64>() / scores.len() as f64, 3))
    }

    /// Take a snapshot of the path state suitable for host serialization.
    pub fn export(&self) -> PathExport {
        PathExport {
            path_name: self.path_name.clone(),
            learner_id: self.learner_id.clone(),
            steps: self.steps.len(),
            completed: self.completed_count(),
            progress_pct: self.progress_pct(),
            average_score: self.get_average_score(),
        }
    }
}

/// Point-in-time snapshot of a learning path, detached from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathExport {
    pub path_name: String,
    pub learner_id: String,
    pub steps: usize,
    pub completed: usize,
    pub progress_pct: f64,
    /// `None` (serialized as null) until at least one scored completion.
    pub average_score: Option<f64>,
}
