//! URL extraction from raw search-result markup.
//!
//! Result pages are scraped as plain text, not parsed as HTML. The matcher
//! looks for URL-shaped substrings whose path ends in a given filename
//! suffix, so its behavior is testable against fixture strings without any
//! live pages.

use crate::types::{AppError, Result};
use std::collections::HashSet;

/// Extract every URL-shaped substring of `page` whose path ends exactly in
/// `/{suffix}`, normalized and deduplicated preserving first-occurrence order.
///
/// The match is case-insensitive and accepts an optional `http://`/`https://`
/// scheme; bare host/path spellings are normalized to `https://`. The suffix
/// must terminate the filename: a trailing word character or a further
/// `.extension` (e.g. `llms.txt.backup`) disqualifies the match, while
/// surrounding prose punctuation (`see react.dev/llms.txt.`) does not.
pub fn extract_urls(page: &str, suffix: &str) -> Result<Vec<String>> {
    let pattern = format!(
        r"(?i)((?:https?://)?[\w\-.]+\.[\w\-.]+\S*?/{})(?:\.$|\.[^\w]|[^\w.]|$)",
        regex::escape(suffix)
    );
    let re = regex::Regex::new(&pattern)
        .map_err(|e| AppError::Internal(format!("invalid match pattern for {}: {}", suffix, e)))?;

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for caps in re.captures_iter(page) {
        let url = normalize(&caps[1]);
        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }
    Ok(urls)
}

/// Lowercase the scheme if present, otherwise assume https.
fn normalize(raw: &str) -> String {
    let lower = raw.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("https://") {
        format!("https://{}", &raw[raw.len() - rest.len()..])
    } else if let Some(rest) = lower.strip_prefix("http://") {
        format!("http://{}", &raw[raw.len() - rest.len()..])
    } else {
        format!("https://{}", raw)
    }
}
