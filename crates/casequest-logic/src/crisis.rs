//! Rules for the timed crisis-response stage.

use crate::constants::CRISIS_MIN_RESPONSE_CHARS;

/// Whether a crisis response is substantial enough to score.
///
/// The bar is deliberately low: strictly more than
/// [`CRISIS_MIN_RESPONSE_CHARS`] characters after trimming.
pub fn response_qualifies(text: &str) -> bool {
    text.trim().chars().count() > CRISIS_MIN_RESPONSE_CHARS
}

/// Countdown display as `M:SS`, e.g. `300` → `"5:00"`, `61` → `"1:01"`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
