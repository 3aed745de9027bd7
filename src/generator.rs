//! Password generator - builds a random password from the selected character classes.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::{self, CharacterClass};
use crate::config;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("No character types selected")]
    NoCharacterClassSelected,
}

/// Options for a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: config::DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationOptions {
    /// Default options with the length taken from `PWD_FORGE_LENGTH`.
    pub fn from_env() -> Self {
        Self {
            length: config::default_length(),
            ..Self::default()
        }
    }

    /// Sets the length, clamped to `MIN_LENGTH..=MAX_LENGTH`.
    pub fn with_length_clamped(mut self, length: usize) -> Self {
        self.length = length.clamp(config::MIN_LENGTH, config::MAX_LENGTH);
        self
    }

    pub fn is_selected(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digits => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Selected classes in guarantee order (Uppercase, Lowercase, Digits, Symbols).
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| self.is_selected(class))
            .collect()
    }
}

/// Generates a password using the thread-local CSPRNG.
///
/// # Returns
/// - `Ok("")` if `length` is 0
/// - `Err(GenerateError::NoCharacterClassSelected)` if every class is off
/// - `Ok(password)` of exactly `length` characters otherwise
pub fn generate(options: &GenerationOptions) -> Result<String, GenerateError> {
    generate_with_rng(options, &mut rand::thread_rng())
}

/// Same as [`generate`], wrapped in a `SecretString`.
pub fn generate_secret(options: &GenerationOptions) -> Result<SecretString, GenerateError> {
    generate(options).map(|pwd| SecretString::new(pwd.into()))
}

/// Generates a password drawing from `rng`.
///
/// One character of each selected class is guaranteed, in class order, while
/// the guaranteed characters still fit in `length`. With a length shorter than
/// the number of selected classes, the later classes get no guaranteed character.
pub fn generate_with_rng<R: Rng>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let length = options.length;
    if length == 0 {
        return Ok(String::new());
    }

    let classes = options.selected_classes();
    if classes.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation rejected: no character types selected");
        return Err(GenerateError::NoCharacterClassSelected);
    }

    let pool = charset::build_pool(&classes);
    let mut password: Vec<char> = Vec::with_capacity(length);

    for class in &classes {
        if password.len() < length {
            password.push(random_char(class.chars().as_bytes(), rng));
        }
    }

    while password.len() < length {
        password.push(pool[rng.gen_range(0..pool.len())]);
    }

    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of length {} from {} classes", length, classes.len());

    Ok(password.into_iter().collect())
}

// Class sets are ASCII, so a byte index is a char index.
#[inline]
fn random_char<R: Rng>(set: &[u8], rng: &mut R) -> char {
    set[rng.gen_range(0..set.len())] as char
}
