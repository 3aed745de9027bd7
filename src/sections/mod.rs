//! Password scoring sections
//!
//! Each section scores a specific aspect of password strength.

mod length;
mod variety;

pub use length::length_section;
pub use variety::variety_section;

/// Points a section contributes, plus an optional advisory hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: u8,
    pub reason: Option<String>,
}

impl SectionOutcome {
    pub fn new(points: u8, reason: Option<String>) -> Self {
        Self { points, reason }
    }
}
