//! Display text helpers.

/// Render a count with its noun, adding an `s` unless the count is exactly one.
///
/// ```rust
/// # use sole_ankle_core::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 3), "3 Colors");
/// ```
#[must_use]
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
