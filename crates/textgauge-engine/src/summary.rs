/// Character budget applied when the caller does not configure one.
pub const DEFAULT_MAX_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters.
///
/// Input that already fits is returned unchanged, without a marker.
/// Longer input is cut so that the trailing `"..."` still lands inside
/// the budget, and whitespace left dangling at the cut is trimmed first.
/// Truncation is character-based, never mid-`char`. Budgets of three
/// characters or fewer leave no room for content and collapse to the
/// marker alone; callers are expected to pass something sensible.
pub fn summarize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.chars().count());
    let prefix: String = text.chars().take(keep).collect();
    format!("{}{}", prefix.trim_end(), ELLIPSIS)
}
