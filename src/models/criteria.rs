use serde::{Deserialize, Serialize};
use crate::errors::DashboardError;

/// Selection value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Site dropdown value: either every site or one named site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Site(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(name) => name,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass window in kilograms.
///
/// Construction does not validate; the filter engine rejects `min > max`
/// (and NaN bounds) at its boundary instead of silently correcting them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        // `!(min <= max)` also catches NaN on either side
        if !(self.min <= self.max) {
            return Err(DashboardError::InvalidRange { min: self.min, max: self.max });
        }
        Ok(())
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.min <= payload_mass_kg && payload_mass_kg <= self.max
    }
}

/// The active dashboard selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl FilterCriteria {
    pub fn new(site: impl Into<SiteSelection>, payload_range: PayloadRange) -> Self {
        Self { site: site.into(), payload_range }
    }

    /// Default selection: every site over the given payload bounds.
    pub fn all_sites(bounds: PayloadRange) -> Self {
        Self { site: SiteSelection::All, payload_range: bounds }
    }
}
