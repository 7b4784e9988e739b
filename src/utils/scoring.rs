// src/utils/scoring.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MARKS_PER_QUESTION, DEFAULT_NEGATIVE_MARKS};

/// Learner answers keyed by zero-based question index.
/// Skipped questions are simply absent.
pub type AnswerMap = HashMap<usize, String>;

/// Anything that carries a correct answer can be scored.
pub trait AnswerKey {
    fn correct_answer(&self) -> &str;
}

impl<T: AnswerKey + ?Sized> AnswerKey for &T {
    fn correct_answer(&self) -> &str {
        (**self).correct_answer()
    }
}

/// Positive marks per correct answer and the penalty per wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkingScheme {
    pub marks_per_question: f64,
    pub negative_marks: f64,
}

impl Default for MarkingScheme {
    fn default() -> Self {
        Self {
            marks_per_question: DEFAULT_MARKS_PER_QUESTION,
            negative_marks: DEFAULT_NEGATIVE_MARKS,
        }
    }
}

/// Summary of one mock-test attempt.
///
/// `attempted + skipped == total_questions` and `correct + wrong == attempted`
/// always hold. `score` is never negative and has at most two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockResult {
    pub total_questions: usize,
    pub attempted: usize,
    pub correct: usize,
    pub wrong: usize,
    pub skipped: usize,
    pub score: f64,
}

/// Scores a set of answers against the questions of a mock test.
///
/// An empty answer string counts as skipped. Matching is exact: no
/// trimming, no case folding, no partial credit. Answers for indices
/// past the end of `questions` are ignored.
pub fn score_mock_test<Q: AnswerKey>(
    questions: &[Q],
    answers: &AnswerMap,
    scheme: &MarkingScheme,
) -> MockResult {
    let total_questions = questions.len();
    let mut attempted = 0;
    let mut correct = 0;
    let mut wrong = 0;

    for (idx, question) in questions.iter().enumerate() {
        let Some(answer) = answers.get(&idx).filter(|a| !a.is_empty()) else {
            continue;
        };

        attempted += 1;
        if answer == question.correct_answer() {
            correct += 1;
        } else {
            wrong += 1;
        }
    }

    let raw = correct as f64 * scheme.marks_per_question - wrong as f64 * scheme.negative_marks;

    MockResult {
        total_questions,
        attempted,
        correct,
        wrong,
        skipped: total_questions - attempted,
        score: round_to_cents(raw.max(0.0)),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
