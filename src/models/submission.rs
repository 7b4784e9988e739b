// src/models/submission.rs

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::utils::scoring::{AnswerMap, MockResult};

/// A scored attempt at a mock test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub mock_test_id: i64,
    pub learner: String,
    pub result: MockResult,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Input for the content store when recording an attempt.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub mock_test_id: i64,
    pub learner: String,
    pub result: MockResult,
}

/// DTO for submitting a mock test attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitMockTestRequest {
    #[validate(length(min = 1, max = 50))]
    pub learner: String,

    /// Key: zero-based question index. Value: chosen option letter.
    /// Unanswered questions are left out. Non-string values (`null`,
    /// numbers, ...) are dropped and so score as skipped.
    #[validate(length(max = 1000))]
    #[serde(default, deserialize_with = "string_answers")]
    pub answers: AnswerMap,
}

fn string_answers<'de, D>(deserializer: D) -> Result<AnswerMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<usize, serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(idx, value)| match value {
            serde_json::Value::String(answer) => Some((idx, answer)),
            _ => None,
        })
        .collect())
}

/// DTO returned after a submission: the scored result plus the record id.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitMockTestResponse {
    pub submission_id: i64,
    #[serde(flatten)]
    pub result: MockResult,
}

/// One row of a mock test leaderboard.
#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub learner: String,
    pub score: f64,
    pub correct: usize,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl From<Submission> for LeaderboardEntry {
    fn from(s: Submission) -> Self {
        Self {
            learner: s.learner,
            score: s.result.score,
            correct: s.result.correct,
            submitted_at: s.submitted_at,
        }
    }
}
