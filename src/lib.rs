//! Password generation and strength estimation library
//!
//! This library generates random passwords from selected character
//! classes and scores password strength with a fixed heuristic.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FORGE_LENGTH`: Default generation length used by
//!   `GenerationOptions::from_env()` (default: 16, clamped to 4..=128)
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{generate, score, GenerationOptions, StrengthLevel};
//!
//! let options = GenerationOptions::default();
//! let password = generate(&options).expect("at least one class is selected");
//! assert_eq!(password.len(), 16);
//!
//! let strength = score(&password);
//! assert_eq!(strength.level, StrengthLevel::Excellent);
//! println!("{}", strength.label);
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use charset::CharacterClass;
pub use config::{DEFAULT_LENGTH, LENGTH_ENV_VAR, MAX_LENGTH, MIN_LENGTH, default_length};
pub use evaluator::{GeneratedPassword, generate_and_score, score, score_secret};
pub use generator::{GenerateError, GenerationOptions, generate, generate_secret, generate_with_rng};
pub use types::{StrengthLevel, StrengthResult};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, score_password_tx};
