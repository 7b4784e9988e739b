// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::{BULK_FORMAT_HINT, Config},
    error::AppError,
    models::{
        mock_test::{CreateMockTestRequest, NewMockTest},
        question::{BulkUploadRequest, Section},
    },
    state::SharedStore,
    utils::{bulk_parser::parse_bulk_questions_with_report, html::clean_html, scoring::MarkingScheme},
};

/// Unwraps a bulk-upload body. Anything that is not `{"text": "..."}`
/// gets the format hint instead of a serde message.
fn bulk_payload(
    payload: Result<Json<BulkUploadRequest>, JsonRejection>,
) -> Result<BulkUploadRequest, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Rejected bulk upload body: {}", e);
        AppError::BadRequest(BULK_FORMAT_HINT.to_string())
    })?;
    req.validate()?;
    Ok(req)
}

/// Sanitizes an operator-entered title. Markup-only input such as
/// `<script>x</script>` cleans down to nothing and is refused.
fn clean_title(raw: &str, what: &str) -> Result<String, AppError> {
    let cleaned = clean_html(raw);
    if cleaned.trim().is_empty() {
        return Err(AppError::BadRequest(format!(
            "{} must contain visible text",
            what
        )));
    }
    Ok(cleaned)
}

/// Parses a bulk question block without storing anything.
/// Lets the operator check the count before committing.
pub async fn preview_questions(
    payload: Result<Json<BulkUploadRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = bulk_payload(payload)?;
    let report = parse_bulk_questions_with_report(&req.text);

    tracing::debug!(
        "Bulk preview: {} accepted, {} skipped",
        report.questions.len(),
        report.skipped_lines.len()
    );

    Ok(Json(serde_json::json!({
        "count": report.questions.len(),
        "questions": report.questions,
        "skipped_lines": report.skipped_lines,
    })))
}

/// Creates an empty mock test.
pub async fn create_mock_test(
    State(store): State<SharedStore>,
    State(config): State<Config>,
    Json(payload): Json<CreateMockTestRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let title = clean_title(&payload.title, "Mock test title")?;

    let marking = MarkingScheme {
        marks_per_question: payload.marks_per_question.unwrap_or(config.marks_per_question),
        negative_marks: payload.negative_marks.unwrap_or(config.negative_marks),
    };

    let test = store
        .create_mock_test(NewMockTest {
            title,
            description: payload.description.as_deref().map(clean_html),
            marking,
        })
        .await?;

    tracing::info!("Created mock test {} ({})", test.id, test.title);

    Ok((StatusCode::CREATED, Json(serde_json::json!({"id": test.id}))))
}

/// Parses a bulk question block and appends it to a mock test as a new section.
///
/// Malformed lines are dropped. If nothing survives, the upload is
/// rejected with the format hint and the test is left untouched.
/// A title already used in the test is a conflict; the store checks it
/// atomically with the append.
pub async fn upload_section(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    payload: Result<Json<BulkUploadRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = bulk_payload(payload)?;
    let raw_title = req
        .title
        .as_deref()
        .ok_or(AppError::BadRequest("Section title is required".to_string()))?;
    let title = clean_title(raw_title, "Section title")?;

    if store.get_mock_test(id).await?.is_none() {
        return Err(AppError::NotFound("Mock test not found".to_string()));
    }

    let report = parse_bulk_questions_with_report(&req.text);
    for skipped in &report.skipped_lines {
        tracing::debug!(
            "Skipped line {} ({} segments)",
            skipped.line_number,
            skipped.segment_count
        );
    }

    if report.questions.is_empty() {
        return Err(AppError::BadRequest(BULK_FORMAT_HINT.to_string()));
    }

    let count = report.questions.len();
    let section = Section {
        title,
        questions: report.questions.into_iter().map(Into::into).collect(),
    };

    let updated = store
        .append_section(id, section)
        .await?
        .ok_or(AppError::NotFound("Mock test not found".to_string()))?;

    tracing::info!(
        "Uploaded {} questions to mock test {} ({} lines skipped)",
        count,
        id,
        report.skipped_lines.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "count": count,
            "total_questions": updated.question_count(),
            "skipped_lines": report.skipped_lines,
        })),
    ))
}
