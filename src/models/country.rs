//! Countries offered by the form's country selector.

/// A selectable country and its international dialing prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
}

/// Countries the form accepts, in display order.
pub const SUPPORTED_COUNTRIES: &[Country] = &[
    Country { code: "US", name: "United States", dial_code: "+1" },
    Country { code: "GB", name: "United Kingdom", dial_code: "+44" },
    Country { code: "CA", name: "Canada", dial_code: "+1" },
    Country { code: "AU", name: "Australia", dial_code: "+61" },
    Country { code: "DE", name: "Germany", dial_code: "+49" },
    Country { code: "FR", name: "France", dial_code: "+33" },
    Country { code: "IN", name: "India", dial_code: "+91" },
    Country { code: "JP", name: "Japan", dial_code: "+81" },
    Country { code: "BR", name: "Brazil", dial_code: "+55" },
    Country { code: "MX", name: "Mexico", dial_code: "+52" },
];

impl Country {
    /// Look up a supported country by code, case-insensitively.
    pub fn find(code: &str) -> Option<&'static Country> {
        SUPPORTED_COUNTRIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Selector label, e.g. "United Kingdom (+44)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.dial_code)
    }
}
