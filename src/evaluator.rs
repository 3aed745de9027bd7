//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::generator::{self, GenerateError, GenerationOptions};
use crate::sections::{SectionOutcome, length_section, variety_section};
use crate::types::StrengthResult;

/// Passwords shorter than this are capped at `SHORT_PASSWORD_CAP`.
const SHORT_PASSWORD_LEN: usize = 4;
const SHORT_PASSWORD_CAP: u8 = 1;

/// Delay before an async evaluation runs, so rapid edits can cancel it.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Scores a password.
///
/// The raw score is the sum of the length section (0-4) and the
/// variety section (0-4). Passwords of 1 to 3 chars are capped at 1.
///
/// # Returns
/// A `StrengthResult`; the empty password yields `StrengthResult::empty()`.
pub fn score(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::empty();
    }

    let mut reasons = Vec::new();
    let mut total: u8 = 0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&str) -> SectionOutcome); 2] = [
        ("length", length_section),
        ("variety", variety_section),
    ];

    for (_section_name, section_fn) in sections {
        let outcome = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::debug!("Section {} scored {} points", _section_name, outcome.points);

        total += outcome.points;
        if let Some(reason) = outcome.reason {
            reasons.push(reason);
        }
    }

    if password.chars().count() < SHORT_PASSWORD_LEN {
        total = total.min(SHORT_PASSWORD_CAP);
    }

    StrengthResult::from_score(total, reasons)
}

/// Scores a password held in a `SecretString`.
pub fn score_secret(password: &SecretString) -> StrengthResult {
    score(password.expose_secret())
}

/// A freshly generated password with its strength.
#[derive(Debug)]
pub struct GeneratedPassword {
    pub password: SecretString,
    pub strength: StrengthResult,
}

/// Generates a password and scores it in one call.
pub fn generate_and_score(options: &GenerationOptions) -> Result<GeneratedPassword, GenerateError> {
    let password = generator::generate_secret(options)?;
    let strength = score_secret(&password);
    Ok(GeneratedPassword { password, strength })
}

/// Async version that sends the strength result via channel.
///
/// Waits `EVALUATION_DEBOUNCE` first. If `token` is cancelled by then,
/// nothing is sent.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("strength evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("strength evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let result = score_secret(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength result: {}", _e);
    }
}
