//! Plain-text rendering of validation results.

use crate::models::{AggregateResult, EmailResult, PhoneResult};
use crate::scoring::QualityTier;
use std::fmt;

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "--";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(PLACEHOLDER)
}

/// Result panel for one lead: score banner followed by one section per channel.
pub struct ResultPanel<'a>(pub &'a AggregateResult);

impl ResultPanel<'_> {
    pub fn tier(&self) -> QualityTier {
        QualityTier::from_score(self.0.score)
    }

    fn write_email(f: &mut fmt::Formatter<'_>, email: Option<&EmailResult>) -> fmt::Result {
        writeln!(f, "Email Validation")?;
        let Some(email) = email else {
            return writeln!(f, "  {}", PLACEHOLDER);
        };
        writeln!(f, "  Email:      {}", email.email)?;
        writeln!(f, "  Valid:      {}", yes_no(email.valid))?;
        writeln!(f, "  Disposable: {}", yes_no(email.disposable))?;
        writeln!(f, "  Domain:     {}", or_placeholder(email.domain.as_deref()))
    }

    fn write_phone(f: &mut fmt::Formatter<'_>, phone: Option<&PhoneResult>) -> fmt::Result {
        writeln!(f, "Phone Validation")?;
        let Some(phone) = phone else {
            return writeln!(f, "  {}", PLACEHOLDER);
        };
        let number = phone
            .formatted
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(phone.number.as_str());
        writeln!(f, "  Number:     {}", or_placeholder(Some(number)))?;
        writeln!(f, "  Valid:      {}", yes_no(phone.valid))?;
        writeln!(f, "  Type:       {}", or_placeholder(Some(phone.line_type.as_str())))?;
        writeln!(f, "  Carrier:    {}", or_placeholder(phone.carrier.as_deref()))
    }
}

impl fmt::Display for ResultPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Lead Quality Score: {} ({} Lead)",
            self.0.score,
            self.tier()
        )?;
        writeln!(f)?;
        Self::write_email(f, self.0.email.as_ref())?;
        writeln!(f)?;
        Self::write_phone(f, self.0.phone.as_ref())
    }
}
