//! coursecraft-curriculum — Curriculum design and management.
//!
//! Provides the [`CurriculumBuilder`] for constructing structured learning
//! curricula with modules, topics, learning objectives, and prerequisite
//! chains. Other coursecraft components refer to modules and topics only by
//! their opaque id strings; nothing here depends on them.

pub mod builder;
pub mod model;

pub use builder::{CurriculumBuilder, CurriculumExport, ModuleSummary};
pub use model::{BloomLevel, LearningObjective, Module, Topic};
