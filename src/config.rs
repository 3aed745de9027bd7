//! Environment-derived defaults.

/// Environment variable holding the default generation length.
pub const LENGTH_ENV_VAR: &str = "PWD_FORGE_LENGTH";

/// Length used when nothing else is configured.
pub const DEFAULT_LENGTH: usize = 16;

/// Shortest length offered to users.
pub const MIN_LENGTH: usize = 4;

/// Longest length offered to users.
pub const MAX_LENGTH: usize = 128;

/// Returns the default generation length.
///
/// Priority:
/// 1. Environment variable `PWD_FORGE_LENGTH`, clamped to `MIN_LENGTH..=MAX_LENGTH`
/// 2. `DEFAULT_LENGTH`
///
/// Values that do not parse as an unsigned integer are ignored.
pub fn default_length() -> usize {
    match std::env::var(LENGTH_ENV_VAR) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(len) => len.clamp(MIN_LENGTH, MAX_LENGTH),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Ignoring {}={:?}: {}", LENGTH_ENV_VAR, raw, _e);
                DEFAULT_LENGTH
            }
        },
        Err(_) => DEFAULT_LENGTH,
    }
}
