// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::scoring::AnswerKey;

/// One multiple-choice question as produced by the bulk parser.
///
/// `correct_answer` holds the option letter ("A" to "D") by convention,
/// but is stored exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_text: String,
    pub options: [String; 4],
    pub correct_answer: String,
}

impl AnswerKey for Question {
    fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}

/// Question shape expected by the content store, nested under a [`Section`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionQuestion {
    pub text: String,

    /// Always "single" for bulk-uploaded questions.
    #[serde(rename = "type")]
    pub question_type: String,

    pub options: Vec<String>,
    pub answer: String,
}

impl From<Question> for SectionQuestion {
    fn from(q: Question) -> Self {
        Self {
            text: q.question_text,
            question_type: "single".to_string(),
            options: q.options.into(),
            answer: q.correct_answer,
        }
    }
}

impl AnswerKey for SectionQuestion {
    fn correct_answer(&self) -> &str {
        &self.answer
    }
}

/// A titled group of questions inside a mock test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub questions: Vec<SectionQuestion>,
}

/// DTO for sending a question to learners (excludes the answer).
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicQuestion {
    /// Zero-based position across the whole mock test; learners key
    /// their answers by it.
    pub index: usize,
    pub text: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PublicSection {
    pub title: String,
    pub questions: Vec<PublicQuestion>,
}

/// DTO for the bulk-upload endpoints. `title` is only used when the
/// questions are appended to a mock test.
#[derive(Debug, Deserialize, Validate)]
pub struct BulkUploadRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub text: String,
}
