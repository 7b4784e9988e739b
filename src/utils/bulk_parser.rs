// src/utils/bulk_parser.rs

use serde::Serialize;

use crate::models::question::Question;

/// Number of `|`-separated segments a bulk line must have:
/// question text, four options, answer.
pub const SEGMENTS_PER_LINE: usize = 6;

/// A non-blank input line that was dropped because it did not split
/// into exactly six segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based position in the raw input (blank lines are counted).
    pub line_number: usize,
    pub segment_count: usize,
}

/// Outcome of a bulk parse: accepted questions in input order plus the
/// lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkParseReport {
    pub questions: Vec<Question>,
    pub skipped_lines: Vec<SkippedLine>,
}

/// Parses the admin bulk-upload format into question records.
///
/// Each non-blank line must look like
/// `Question | Option A | Option B | Option C | Option D | Answer`.
/// Malformed lines are dropped silently; use
/// [`parse_bulk_questions_with_report`] to see which ones.
pub fn parse_bulk_questions(text: &str) -> Vec<Question> {
    parse_bulk_questions_with_report(text).questions
}

/// Same as [`parse_bulk_questions`], but also reports every dropped line.
///
/// Only the whole line is trimmed. Segments are taken verbatim, so
/// `"Q | A"` yields `"Q "` and `" A"`, and empty segments are kept.
pub fn parse_bulk_questions_with_report(text: &str) -> BulkParseReport {
    let mut report = BulkParseReport::default();

    for (idx, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        match <[&str; SEGMENTS_PER_LINE]>::try_from(parts.as_slice()) {
            Ok([body, a, b, c, d, answer]) => report.questions.push(Question {
                question_text: body.to_string(),
                options: [a.to_string(), b.to_string(), c.to_string(), d.to_string()],
                correct_answer: answer.to_string(),
            }),
            Err(_) => report.skipped_lines.push(SkippedLine {
                line_number: idx + 1,
                segment_count: parts.len(),
            }),
        }
    }

    report
}
