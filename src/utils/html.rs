// src/utils/html.rs

/// Strips unsafe markup from operator-entered titles and descriptions.
///
/// Whitelist-based: harmless tags like <b> survive, <script> is removed
/// together with its content, event-handler attributes are dropped.
/// Question text from bulk uploads is stored verbatim and is not passed
/// through here.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}
