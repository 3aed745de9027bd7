//! Length section - scores password length.

use super::SectionOutcome;

const MIN_RECOMMENDED: usize = 8;

/// Scores the password length, counted in chars.
///
/// | length  | points |
/// |---------|--------|
/// | >= 16   | 4      |
/// | 12..16  | 3      |
/// | 8..12   | 2      |
/// | 1..8    | 1      |
/// | 0       | 0      |
pub fn length_section(password: &str) -> SectionOutcome {
    let len = password.chars().count();
    let points = match len {
        16.. => 4,
        12..=15 => 3,
        8..=11 => 2,
        1..=7 => 1,
        0 => 0,
    };

    let reason = (len < MIN_RECOMMENDED).then(|| {
        format!("Password is shorter than {} characters", MIN_RECOMMENDED)
    });

    SectionOutcome::new(points, reason)
}
