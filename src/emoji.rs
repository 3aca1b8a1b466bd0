//! Canonical emoji code-point table.
//!
//! A character counts as an emoji if it falls in one of the Unicode blocks
//! below. The table covers the pictographic blocks that appear in chat
//! exports; it deliberately excludes zero-width joiners and variation
//! selectors, so a composed sequence like a family emoji counts once per
//! visible pictograph rather than once per scalar value.
//!
//! The table is process-wide, read-only state: a sorted `const` array of
//! inclusive ranges checked by binary search.

/// Inclusive code-point ranges considered emoji, sorted ascending.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x2600, 0x26FF),   // misc symbols (sun, umbrella, ...)
    (0x2700, 0x27BF),   // dingbats (scissors, hearts, ...)
    (0x2B05, 0x2B07),   // arrows
    (0x2B1B, 0x2B1C),   // black/white large squares
    (0x2B50, 0x2B50),   // star
    (0x2B55, 0x2B55),   // hollow red circle
    (0x1F1E6, 0x1F1FF), // regional indicators (flags)
    (0x1F300, 0x1F5FF), // misc symbols and pictographs
    (0x1F600, 0x1F64F), // emoticons
    (0x1F680, 0x1F6FF), // transport and map symbols
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-A
];

/// Returns `true` if the character is in the emoji table.
///
/// # Example
///
/// ```
/// use chatlens::emoji::is_emoji;
///
/// assert!(is_emoji('😀'));
/// assert!(is_emoji('🚀'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('й'));
/// ```
pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES
        .binary_search_by(|&(lo, hi)| {
            if cp < lo {
                std::cmp::Ordering::Greater
            } else if cp > hi {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}
