use once_cell::sync::Lazy;
use regex::Regex;

// ``` + optional language tag + optional newline + body + optional newline + ```,
// anchored on both ends so the fence must span the whole string.
static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence pattern is valid")
});

/// Strip a fenced-code wrapper spanning the whole (trimmed) text.
///
/// Returns the trimmed body when the fence matches and has a non-empty body,
/// otherwise the trimmed input unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    FENCE
        .captures(trimmed)
        .and_then(|caps| caps.get(2))
        .map(|body| body.as_str())
        .filter(|body| !body.is_empty())
        .map(str::trim)
        .unwrap_or(trimmed)
}
