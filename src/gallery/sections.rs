/// Mapping from continuous scroll progress to discrete gallery sections.

use crate::core::config::SECTION_COUNT;

/// Section index for `progress`: `floor(4p)`, clamped to `0..=3`.
///
/// Out-of-range and NaN progress values clamp (NaN lands on section 0).
pub fn section_for_progress(progress: f64) -> usize {
    if progress.is_nan() || progress <= 0.0 {
        return 0;
    }
    let section = (progress * SECTION_COUNT as f64).floor() as usize;
    section.min(SECTION_COUNT - 1)
}

/// One-based asset set number for a section index.
pub fn set_number(section: usize) -> usize {
    section + 1
}
