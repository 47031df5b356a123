//! The curriculum builder and its export snapshot.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use coursecraft_core::short_id;

use crate::model::{BloomLevel, LearningObjective, Module, Topic};

/// Builds structured curricula from modules and topics.
///
/// Modules are kept in insertion order and addressed by opaque id. All
/// "parent not found" conditions return `None` rather than erroring;
/// absence is an expected outcome here, not a failure.
#[derive(Debug, Clone)]
pub struct CurriculumBuilder {
    title: String,
    domain: String,
    modules: IndexMap<String, Module>,
}

impl CurriculumBuilder {
    /// Create an empty builder in the "general" domain.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_domain(title, "general")
    }

    /// Create an empty builder with an explicit domain tag.
    pub fn with_domain(title: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            domain: domain.into(),
            modules: IndexMap::new(),
        }
    }

    /// The curriculum title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The free-form domain tag.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Number of modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Look up a module by id.
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.get(module_id)
    }

    /// Iterate over modules in insertion order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Add a new module with an empty topic list.
    ///
    /// `prerequisites` holds ids of modules that should come first; they may
    /// name modules that do not exist yet (or ever) without error.
    pub fn add_module(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> &Module {
        let module = Module {
            module_id: short_id(),
            title: title.into(),
            description: description.into(),
            topics: Vec::new(),
            prerequisites,
        };
        let id = module.module_id.clone();
        self.modules.insert(id.clone(), module);
        &self.modules[&id]
    }

    /// Add a topic to an existing module.
    ///
    /// Returns `None` without touching any state when `module_id` is
    /// unknown. Hosts conventionally pass 60 for `duration_minutes`.
    pub fn add_topic(
        &mut self,
        module_id: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: i64,
        resources: Vec<String>,
    ) -> Option<&Topic> {
        let Some(module) = self.modules.get_mut(module_id) else {
            tracing::warn!("module '{module_id}' not found, topic not added");
            return None;
        };
        module.topics.push(Topic {
            topic_id: short_id(),
            title: title.into(),
            description: description.into(),
            duration_minutes,
            objectives: Vec::new(),
            resources,
        });
        module.topics.last()
    }

    /// Attach a learning objective to a topic.
    ///
    /// Returns `None` when either the module or the topic is unknown.
    pub fn add_objective(
        &mut self,
        module_id: &str,
        topic_id: &str,
        description: impl Into<String>,
        bloom_level: BloomLevel,
        assessment_criteria: Vec<String>,
    ) -> Option<&LearningObjective> {
        let Some(module) = self.modules.get_mut(module_id) else {
            tracing::warn!("module '{module_id}' not found, objective not added");
            return None;
        };
        let Some(topic) = module.topics.iter_mut().find(|t| t.topic_id == topic_id) else {
            tracing::warn!("topic '{topic_id}' not found in module '{module_id}'");
            return None;
        };
        topic.objectives.push(LearningObjective {
            objective_id: short_id(),
            description: description.into(),
            bloom_level,
            assessment_criteria,
        });
        topic.objectives.last()
    }

    /// Total curriculum duration in minutes, summed over every topic.
    pub fn get_total_duration(&self) -> i64 {
        self.modules
            .values()
            .flat_map(|m| &m.topics)
            .map(|t| t.duration_minutes)
            .sum()
    }

    /// Compute the full prerequisite chain for a module.
    ///
    /// Depth-first post-order over the prerequisite graph: deepest
    /// prerequisites come first, direct prerequisites of the target last,
    /// and the target itself is excluded. Unknown ids are skipped silently
    /// and cycles terminate via the visited set, so recursion depth is
    /// bounded by the number of modules.
    pub fn get_prerequisite_chain(&self, module_id: &str) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut chain = Vec::new();
        self.resolve(module_id, module_id, &mut visited, &mut chain);
        tracing::debug!(
            "resolved {} prerequisite(s) for module '{module_id}'",
            chain.len()
        );
        chain
    }

    fn resolve(
        &self,
        current: &str,
        root: &str,
        visited: &mut HashSet<String>,
        chain: &mut Vec<String>,
    ) {
        if !visited.insert(current.to_string()) {
            return;
        }
        let Some(module) = self.modules.get(current) else {
            return;
        };
        for prereq in &module.prerequisites {
            self.resolve(prereq, root, visited, chain);
        }
        if current != root {
            chain.push(current.to_string());
        }
    }

    /// Take a snapshot of the curriculum suitable for host serialization.
    pub fn export(&self) -> CurriculumExport {
        CurriculumExport {
            title: self.title.clone(),
            domain: self.domain.clone(),
            module_count: self.modules.len(),
            total_duration_minutes: self.get_total_duration(),
            modules: self
                .modules
                .values()
                .map(|m| ModuleSummary {
                    module_id: m.module_id.clone(),
                    title: m.title.clone(),
                    description: m.description.clone(),
                    prerequisites: m.prerequisites.clone(),
                    topic_count: m.topics.len(),
                })
                .collect(),
        }
    }
}

/// Point-in-time snapshot of a curriculum, detached from the builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumExport {
    pub title: String,
    pub domain: String,
    pub module_count: usize,
    pub total_duration_minutes: i64,
    pub modules: Vec<ModuleSummary>,
}

/// Per-module summary inside a [`CurriculumExport`] (without the full
/// topic definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub module_id: String,
    pub title: String,
    pub description: String,
    pub prerequisites: Vec<String>,
    pub topic_count: usize,
}
