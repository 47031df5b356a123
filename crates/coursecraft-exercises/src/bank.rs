//! The exercise bank.

use std::collections::HashMap;

use indexmap::IndexMap;

use coursecraft_core::short_id;

use crate::model::{Exercise, Question, QuestionType};
use crate::scoring::{score_exercise, ExerciseScore};

/// Manages a bank of exercises with creation and scoring.
///
/// Exercises are kept in insertion order and addressed by opaque id.
/// Unknown-exercise conditions return `None` rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct ExerciseBank {
    exercises: IndexMap<String, Exercise>,
}

impl ExerciseBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of exercises in the bank.
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Look up an exercise by id.
    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.get(exercise_id)
    }

    /// Iterate over exercises in insertion order.
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.values()
    }

    /// Create a new exercise with an empty question list.
    ///
    /// `topic_id` names the curriculum topic this exercise assesses; it is
    /// stored as-is and never validated against any curriculum.
    pub fn create_exercise(
        &mut self,
        title: impl Into<String>,
        topic_id: impl Into<String>,
    ) -> &Exercise {
        let exercise = Exercise {
            exercise_id: short_id(),
            title: title.into(),
            topic_id: topic_id.into(),
            questions: Vec::new(),
        };
        let id = exercise.exercise_id.clone();
        self.exercises.insert(id.clone(), exercise);
        &self.exercises[&id]
    }

    /// Add a question to an exercise.
    ///
    /// Returns `None` when `exercise_id` is unknown. Pass `None` for
    /// `correct_answer` on reflection questions; hosts conventionally pass
    /// 10 for `points`.
    pub fn add_question(
        &mut self,
        exercise_id: &str,
        question_type: QuestionType,
        prompt: impl Into<String>,
        correct_answer: Option<String>,
        points: i64,
        hints: Vec<String>,
    ) -> Option<&Question> {
        let Some(exercise) = self.exercises.get_mut(exercise_id) else {
            tracing::warn!("exercise '{exercise_id}' not found, question not added");
            return None;
        };
        exercise.questions.push(Question {
            question_id: short_id(),
            question_type,
            prompt: prompt.into(),
            correct_answer,
            points,
            hints,
        });
        exercise.questions.last()
    }

    /// Score a set of submitted answers against an exercise.
    ///
    /// `answers` maps question id to the submitted string. Returns `None`
    /// when `exercise_id` is unknown; see [`score_exercise`] for the
    /// scoring rules.
    pub fn score_answers(
        &self,
        exercise_id: &str,
        answers: &HashMap<String, String>,
    ) -> Option<ExerciseScore> {
        let exercise = self.exercises.get(exercise_id)?;
        Some(score_exercise(exercise, answers))
    }
}
