//! Section splitter - carve completion prose into candidate blocks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Numbered list markers ("1. ", "2. ") and paragraph breaks both
    // delimit resource blocks; one alternation covers list-formatted
    // and paragraph-formatted responses.
    static ref SECTION_DELIMITER: Regex = Regex::new(r"\d+\.\s|\n\n").unwrap();
}

/// Split prose into candidate resource blocks.
///
/// Whitespace-only segments are discarded. Block order follows the
/// source prose and determines final resource order; nothing downstream
/// re-sorts. Prose with neither numbered markers nor blank lines
/// collapses to a single block.
pub fn split_sections(content: &str) -> Vec<&str> {
    SECTION_DELIMITER
        .split(content)
        .filter(|section| !section.trim().is_empty())
        .collect()
}
