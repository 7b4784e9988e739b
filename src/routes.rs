// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, mock_test},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the admin and learner sub-routers.
/// * Applies global middleware (Trace, CORS, body size limit).
/// * Injects global state (content store and config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let admin_routes = Router::new()
        .route("/questions/parse", post(admin::preview_questions))
        .route("/mock-tests", post(admin::create_mock_test))
        .route("/mock-tests/{id}/sections", post(admin::upload_section));

    let mock_test_routes = Router::new()
        .route("/", get(mock_test::list_mock_tests))
        .route("/{id}", get(mock_test::get_mock_test))
        .route("/{id}/submit", post(mock_test::submit_mock_test))
        .route("/{id}/leaderboard", get(mock_test::get_leaderboard));

    Router::new()
        .nest("/api/admin", admin_routes)
        .nest("/api/mock-tests", mock_test_routes)
        // Global Middleware (applied from outside in)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
