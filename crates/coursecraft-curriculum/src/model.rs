//! Curriculum data model: modules, topics, and learning objectives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use coursecraft_core::LabelError;

/// Bloom's-taxonomy cognitive skill level for a learning objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl fmt::Display for BloomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloomLevel::Remember => write!(f, "remember"),
            BloomLevel::Understand => write!(f, "understand"),
            BloomLevel::Apply => write!(f, "apply"),
            BloomLevel::Analyze => write!(f, "analyze"),
            BloomLevel::Evaluate => write!(f, "evaluate"),
            BloomLevel::Create => write!(f, "create"),
        }
    }
}

impl FromStr for BloomLevel {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remember" => Ok(BloomLevel::Remember),
            "understand" => Ok(BloomLevel::Understand),
            "apply" => Ok(BloomLevel::Apply),
            "analyze" => Ok(BloomLevel::Analyze),
            "evaluate" => Ok(BloomLevel::Evaluate),
            "create" => Ok(BloomLevel::Create),
            other => Err(LabelError::UnknownBloomLevel(other.to_string())),
        }
    }
}

/// A measurable learning objective within a topic.
///
/// Immutable once created; no mutators are exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningObjective {
    /// Unique identifier within the owning topic.
    pub objective_id: String,
    /// What the learner should be able to do.
    pub description: String,
    /// Cognitive level being targeted.
    pub bloom_level: BloomLevel,
    /// How achievement of the objective is assessed.
    #[serde(default)]
    pub assessment_criteria: Vec<String>,
}

/// A single topic within a curriculum module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier within the owning module.
    pub topic_id: String,
    /// Topic title.
    pub title: String,
    /// Topic description.
    pub description: String,
    /// Estimated time to complete, in minutes. Not validated; hosts
    /// conventionally default to 60.
    pub duration_minutes: i64,
    /// Objectives in presentation order.
    #[serde(default)]
    pub objectives: Vec<LearningObjective>,
    /// Resource URLs or free-form references.
    #[serde(default)]
    pub resources: Vec<String>,
}

/// A curriculum module containing related topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Unique identifier within the owning builder.
    pub module_id: String,
    /// Module title.
    pub title: String,
    /// Brief description of the module content.
    pub description: String,
    /// Topics in presentation order.
    #[serde(default)]
    pub topics: Vec<Topic>,
    /// Ids of modules that should be completed first. These are references,
    /// not ownership; ids that name no known module are tolerated.
    #[serde(default)]
    pub prerequisites: Vec<String>,
}
