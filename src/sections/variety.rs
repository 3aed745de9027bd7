//! Character variety section - checks for uppercase, lowercase, numbers, symbols.

use super::SectionOutcome;
use crate::charset::CharacterClass;

/// One point for each character type present.
///
/// Uppercase, lowercase and digits are ASCII only. Anything that is neither
/// ASCII alphanumeric nor whitespace counts as a symbol.
pub fn variety_section(password: &str) -> SectionOutcome {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace());

    let checks = [
        (has_upper, CharacterClass::Uppercase),
        (has_lower, CharacterClass::Lowercase),
        (has_digit, CharacterClass::Digits),
        (has_symbol, CharacterClass::Symbols),
    ];

    let points = checks.iter().filter(|(present, _)| *present).count() as u8;
    let missing: Vec<&str> = checks
        .iter()
        .filter(|(present, _)| !present)
        .map(|(_, class)| class.name())
        .collect();

    let reason = (!missing.is_empty()).then(|| format!("Missing: {}", missing.join(", ")));

    SectionOutcome::new(points, reason)
}
