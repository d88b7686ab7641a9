use serde::{Deserialize, Serialize};

/// Binary launch outcome as recorded in the dataset's `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub const ALL: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Failure),
            1 => Ok(Self::Success),
            other => Err(format!("outcome must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.as_u8()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// One historical launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub booster_category: String,
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        booster_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            booster_category: booster_category.into(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class_value() {
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert!(Outcome::try_from(2).is_err());
    }

    #[test]
    fn test_outcome_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Outcome::Success).unwrap(), "1");
        let parsed: Outcome = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, Outcome::Failure);
        assert!(serde_json::from_str::<Outcome>("3").is_err());
    }

    #[test]
    fn test_record_serializes_snake_case() {
        let record = LaunchRecord::new("KSC LC-39A", 3000.0, "FT", Outcome::Success);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["site"], "KSC LC-39A");
        assert_eq!(value["payload_mass_kg"], 3000.0);
        assert_eq!(value["booster_category"], "FT");
        assert_eq!(value["outcome"], 1);
    }
}
