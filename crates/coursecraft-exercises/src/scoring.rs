//! Answer scoring against stored rubrics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use coursecraft_core::round_dp;

use crate::model::Exercise;

/// Normalize a submitted or stored answer for comparison: leading and
/// trailing whitespace is stripped and the remainder is lowercased.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Scoring summary for one exercise submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseScore {
    pub exercise_id: String,
    pub total_points: i64,
    pub earned_points: i64,
    /// Earned over total as a percentage, rounded to one decimal place.
    /// 0.0 when the exercise has no points at stake.
    pub percentage: f64,
    /// Per-question results in question order.
    pub details: Vec<QuestionScore>,
}

/// Result for a single question within an [`ExerciseScore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionScore {
    pub question_id: String,
    pub correct: bool,
    pub points_earned: i64,
    pub points_possible: i64,
}

/// Score a set of submitted answers against an exercise.
///
/// A missing submission counts as the empty string. A question is correct
/// only when it has a stored answer and the normalized strings match, so
/// reflection questions never score.
pub fn score_exercise(exercise: &Exercise, answers: &HashMap<String, String>) -> ExerciseScore {
    let mut total = 0;
    let mut earned = 0;
    let mut details = Vec::with_capacity(exercise.questions.len());

    for question in &exercise.questions {
        total += question.points;
        let submitted = answers.get(&question.question_id).map(String::as_str).unwrap_or("");
        let correct = question
            .correct_answer
            .as_deref()
            .is_some_and(|expected| normalize(submitted) == normalize(expected));
        let points_earned = if correct { question.points } else { 0 };
        earned += points_earned;
        details.push(QuestionScore {
            question_id: question.question_id.clone(),
            correct,
            points_earned,
            points_possible: question.points,
        });
    }

    let percentage = if total > 0 {
        round_dp(earned as f64 / total as f64 * 100.0, 1)
    } else {
        0.0
    };

    ExerciseScore {
        exercise_id: exercise.exercise_id.clone(),
        total_points: total,
        earned_points: earned,
        percentage,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionType};

    fn quiz(questions: Vec<Question>) -> Exercise {
        Exercise {
            exercise_id: "ex1".into(),
            title: "Quiz".into(),
            topic_id: "t1".into(),
            questions,
        }
    }

    fn short_answer(id: &str, expected: &str, points: i64) -> Question {
        Question {
            question_id: id.into(),
            question_type: QuestionType::ShortAnswer,
            prompt: "?".into(),
            correct_answer: Some(expected.into()),
            points,
            hints: vec![],
        }
    }

    #[test]
    fn normalize_strips_and_lowercases() {
        assert_eq!(normalize("  Paris "), "paris");
        assert_eq!(normalize("PARIS"), "paris");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn case_and_whitespace_variants_score_as_correct() {
        let exercise = quiz(vec![short_answer("q1", "Paris", 10)]);
        let answers = HashMap::from([("q1".to_string(), " paris ".to_string())]);
        let score = score_exercise(&exercise, &answers);
        assert_eq!(score.earned_points, 10);
        assert!(score.details[0].correct);
        assert_eq!(score.percentage, 100.0);
    }

    #[test]
    fn trailing_punctuation_scores_as_incorrect() {
        let exercise = quiz(vec![short_answer("q1", "Paris", 10)]);
        let answers = HashMap::from([("q1".to_string(), "paris.".to_string())]);
        let score = score_exercise(&exercise, &answers);
        assert_eq!(score.earned_points, 0);
        assert!(!score.details[0].correct);
        assert_eq!(score.percentage, 0.0);
    }

    #[test]
    fn missing_submission_counts_as_empty() {
        let exercise = quiz(vec![short_answer("q1", "Paris", 10)]);
        let score = score_exercise(&exercise, &HashMap::new());
        assert_eq!(score.earned_points, 0);
        assert_eq!(score.total_points, 10);
    }

    #[test]
    fn reflection_questions_never_score() {
        let exercise = quiz(vec![Question {
            question_id: "q1".into(),
            question_type: QuestionType::Reflection,
            prompt: "Reflect".into(),
            correct_answer: None,
            points: 10,
            hints: vec![],
        }]);
        let answers = HashMap::from([("q1".to_string(), "anything".to_string())]);
        let score = score_exercise(&exercise, &answers);
        assert!(!score.details[0].correct);
        assert_eq!(score.earned_points, 0);
    }

    #[test]
    fn zero_question_exercise_scores_zero_percent() {
        let score = score_exercise(&quiz(vec![]), &HashMap::new());
        assert_eq!(score.total_points, 0);
        assert_eq!(score.earned_points, 0);
        assert_eq!(score.percentage, 0.0);
        assert!(score.details.is_empty());
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        let exercise = quiz(vec![
            short_answer("q1", "a", 10),
            short_answer("q2", "b", 10),
            short_answer("q3", "c", 10),
        ]);
        let answers = HashMap::from([("q1".to_string(), "a".to_string())]);
        let score = score_exercise(&exercise, &answers);
        // 10/30 = 33.333... -> 33.3
        assert_eq!(score.percentage, 33.3);
    }

    #[test]
    fn details_follow_question_order() {
        let exercise = quiz(vec![
            short_answer("first", "a", 5),
            short_answer("second", "b", 5),
        ]);
        let answers = HashMap::from([("second".to_string(), "b".to_string())]);
        let score = score_exercise(&exercise, &answers);
        assert_eq!(score.details[0].question_id, "first");
        assert_eq!(score.details[1].question_id, "second");
        assert!(!score.details[0].correct);
        assert!(score.details[1].correct);
    }

    #[test]
    fn score_serializes_with_documented_keys() {
        let exercise = quiz(vec![short_answer("q1", "Paris", 10)]);
        let answers = HashMap::from([("q1".to_string(), "paris".to_string())]);
        let json = serde_json::to_value(score_exercise(&exercise, &answers)).unwrap();
        assert_eq!(json["exercise_id"], "ex1");
        assert_eq!(json["total_points"], 10);
        assert_eq!(json["earned_points"], 10);
        assert_eq!(json["percentage"], 100.0);
        assert_eq!(json["details"][0]["points_possible"], 10);
    }
}
