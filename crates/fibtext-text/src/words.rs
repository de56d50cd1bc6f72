//! Word counting over UAX #29 word boundaries.

use unicode_segmentation::UnicodeSegmentation;

/// Count word segments that contain at least one letter or digit.
///
/// # Example
/// ```
/// assert_eq!(fibtext_text::words::count_words("Hello, world!"), 2);
/// ```
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.unicode_words().count()
}
