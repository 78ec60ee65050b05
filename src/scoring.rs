//! Lead quality scoring.
//!
//! The score is the share of supplied checks that passed, as a whole
//! percentage. Tiers band the score for display.

use crate::models::{EmailResult, PhoneResult};
use std::fmt;

/// Percentage of passed checks, rounded half up. Zero checks score 0.
pub fn compute_score(passed: usize, checks: usize) -> u8 {
    if checks == 0 {
        return 0;
    }
    let passed = passed.min(checks);
    ((passed as f64 / checks as f64) * 100.0).round() as u8
}

/// Score the checks that were actually requested.
pub fn score_results(email: Option<&EmailResult>, phone: Option<&PhoneResult>) -> u8 {
    let outcomes = [email.map(EmailResult::passed), phone.map(PhoneResult::passed)];
    let checks = outcomes.iter().flatten().count();
    let passed = outcomes.iter().flatten().filter(|p| **p).count();
    compute_score(passed, checks)
}

/// Display band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    High,
    Medium,
    Low,
}

impl QualityTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            QualityTier::High
        } else if score >= 50 {
            QualityTier::Medium
        } else {
            QualityTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::High => "High Quality",
            QualityTier::Medium => "Medium Quality",
            QualityTier::Low => "Low Quality",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
