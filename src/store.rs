// src/store.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{
        mock_test::{MockTest, NewMockTest},
        question::Section,
        submission::{NewSubmission, Submission},
    },
};

/// Persistence collaborator for mock tests and their submissions.
///
/// Every method is fallible so a hosted database can sit behind it.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn create_mock_test(&self, new: NewMockTest) -> Result<MockTest, AppError>;

    /// All mock tests, oldest first.
    async fn list_mock_tests(&self) -> Result<Vec<MockTest>, AppError>;

    async fn get_mock_test(&self, id: i64) -> Result<Option<MockTest>, AppError>;

    /// Appends a section and returns the updated test, or `None` if the
    /// test does not exist. Section titles are unique within a test: a
    /// repeated title fails with `AppError::Conflict` and nothing is appended.
    async fn append_section(&self, id: i64, section: Section) -> Result<Option<MockTest>, AppError>;

    async fn save_submission(&self, new: NewSubmission) -> Result<Submission, AppError>;

    /// Best submissions for a test: highest score first, earlier attempt wins ties.
    async fn top_submissions(&self, mock_test_id: i64, limit: usize)
    -> Result<Vec<Submission>, AppError>;
}

#[derive(Default)]
struct Inner {
    next_test_id: i64,
    next_submission_id: i64,
    mock_tests: BTreeMap<i64, MockTest>,
    submissions: Vec<Submission>,
}

/// Process-local store. Data is lost on restart.
///
/// Submissions are kept in one unbounded list, and every leaderboard read
/// filters and sorts it, so this only suits single-node use with modest
/// traffic.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn create_mock_test(&self, new: NewMockTest) -> Result<MockTest, AppError> {
        let mut inner = self.inner.write().await;
        inner.next_test_id += 1;

        let test = MockTest {
            id: inner.next_test_id,
            title: new.title,
            description: new.description,
            marking: new.marking,
            sections: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        inner.mock_tests.insert(test.id, test.clone());

        Ok(test)
    }

    async fn list_mock_tests(&self) -> Result<Vec<MockTest>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.mock_tests.values().cloned().collect())
    }

    async fn get_mock_test(&self, id: i64) -> Result<Option<MockTest>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.mock_tests.get(&id).cloned())
    }

    async fn append_section(&self, id: i64, section: Section) -> Result<Option<MockTest>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(test) = inner.mock_tests.get_mut(&id) else {
            return Ok(None);
        };

        // Checked under the same write lock as the push.
        if test.sections.iter().any(|s| s.title == section.title) {
            return Err(AppError::Conflict(format!(
                "Section '{}' already exists",
                section.title
            )));
        }

        test.sections.push(section);
        Ok(Some(test.clone()))
    }

    async fn save_submission(&self, new: NewSubmission) -> Result<Submission, AppError> {
        let mut inner = self.inner.write().await;
        inner.next_submission_id += 1;

        let submission = Submission {
            id: inner.next_submission_id,
            mock_test_id: new.mock_test_id,
            learner: new.learner,
            result: new.result,
            submitted_at: chrono::Utc::now(),
        };
        inner.submissions.push(submission.clone());

        Ok(submission)
    }

    async fn top_submissions(
        &self,
        mock_test_id: i64,
        limit: usize,
    ) -> Result<Vec<Submission>, AppError> {
        let inner = self.inner.read().await;

        // Submissions are stored in id order, and the sort is stable.
        let mut matching: Vec<Submission> = inner
            .submissions
            .iter()
            .filter(|s| s.mock_test_id == mock_test_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.result.score.total_cmp(&a.result.score));
        matching.truncate(limit);

        Ok(matching)
    }
}
