use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coursecraft_exercises::model::{Exercise, Question, QuestionType};
use coursecraft_exercises::scoring::{normalize, score_exercise};

fn make_exercise(question_count: usize) -> (Exercise, HashMap<String, String>) {
    let questions: Vec<Question> = (0..question_count)
        .map(|i| Question {
            question_id: format!("q{i}"),
            question_type: QuestionType::ShortAnswer,
            prompt: format!("Question {i}?"),
            correct_answer: Some(format!("Answer {i}")),
            points: 10,
            hints: vec![],
        })
        .collect();
    // Half the submissions are correct (case variants), half are wrong.
    let answers: HashMap<String, String> = (0..question_count)
        .map(|i| {
            let submitted = if i % 2 == 0 {
                format!("  answer {i} ")
            } else {
                "wrong".to_string()
            };
            (format!("q{i}"), submitted)
        })
        .collect();
    let exercise = Exercise {
        exercise_id: "bench".into(),
        title: "Bench".into(),
        topic_id: "t1".into(),
        questions,
    };
    (exercise, answers)
}

fn bench_score_exercise(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_exercise");

    let (exercise, answers) = make_exercise(10);
    group.bench_function("questions_10", |b| {
        b.iter(|| score_exercise(black_box(&exercise), black_box(&answers)))
    });

    let (exercise, answers) = make_exercise(100);
    group.bench_function("questions_100", |b| {
        b.iter(|| score_exercise(black_box(&exercise), black_box(&answers)))
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("  The Quick Brown Fox  ")))
    });
}

criterion_group!(benches, bench_score_exercise, bench_normalize);
criterion_main!(benches);
