// src/config.rs

use std::env;
use std::str::FromStr;
use dotenvy::dotenv;

/// Marks awarded per correct answer when a mock test does not set its own.
pub const DEFAULT_MARKS_PER_QUESTION: f64 = 1.0;

/// Penalty per wrong answer when a mock test does not set its own.
pub const DEFAULT_NEGATIVE_MARKS: f64 = 0.25;

/// Number of entries returned by the leaderboard.
pub const LEADERBOARD_SIZE: usize = 5;

/// Shown to the operator whenever a bulk upload cannot be used at all.
pub const BULK_FORMAT_HINT: &str =
    "Invalid format. Use: Question | Option A | Option B | Option C | Option D | Answer";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
    pub max_upload_bytes: usize,
    pub marks_per_question: f64,
    pub negative_marks: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            max_upload_bytes: 1024 * 1024,
            marks_per_question: DEFAULT_MARKS_PER_QUESTION,
            negative_marks: DEFAULT_NEGATIVE_MARKS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
            marks_per_question: env_or("DEFAULT_MARKS_PER_QUESTION", defaults.marks_per_question),
            negative_marks: env_or("DEFAULT_NEGATIVE_MARKS", defaults.negative_marks),
        }
    }
}

/// Reads and parses an env var, falling back to `default` when it is
/// missing or malformed.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok().as_deref(), default)
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
