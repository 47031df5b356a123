//! Exercise data model: questions and exercises.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use coursecraft_core::LabelError;

/// Kinds of exercise questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    ShortAnswer,
    CodeChallenge,
    Reflection,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice"),
            QuestionType::ShortAnswer => write!(f, "short_answer"),
            QuestionType::CodeChallenge => write!(f, "code_challenge"),
            QuestionType::Reflection => write!(f, "reflection"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiple_choice" => Ok(QuestionType::MultipleChoice),
            "short_answer" => Ok(QuestionType::ShortAnswer),
            "code_challenge" => Ok(QuestionType::CodeChallenge),
            "reflection" => Ok(QuestionType::Reflection),
            other => Err(LabelError::UnknownQuestionType(other.to_string())),
        }
    }
}

/// A single exercise question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the owning exercise.
    pub question_id: String,
    /// Kind of question.
    pub question_type: QuestionType,
    /// The question text shown to the learner.
    pub prompt: String,
    /// Expected answer. `None` for reflection questions, which are never
    /// auto-scored as correct.
    pub correct_answer: Option<String>,
    /// Point value. Hosts conventionally default to 10.
    pub points: i64,
    /// Optional hints for the learner.
    #[serde(default)]
    pub hints: Vec<String>,
}

/// A collection of questions forming an exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier within the owning bank.
    pub exercise_id: String,
    /// Exercise title.
    pub title: String,
    /// The curriculum topic this exercise assesses (by id; unvalidated).
    pub topic_id: String,
    /// Questions in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Exercise {
    /// Maximum possible score: the sum of all question point values.
    pub fn total_points(&self) -> i64 {
        self.questions.iter().map(|q| q.points).sum()
    }
}
