// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

pub use routes::create_router;
pub use utils::bulk_parser::{parse_bulk_questions, parse_bulk_questions_with_report};
pub use utils::scoring::{MarkingScheme, MockResult, score_mock_test};
