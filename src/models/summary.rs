use serde::{Deserialize, Serialize};
use super::record::Outcome;

/// Successful launches for one site, used for the all-sites share chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSuccesses {
    pub site: String,
    pub successes: usize,
}

/// Number of launches with a given outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: usize,
}

/// Outcome-share breakdown. The shape depends on the site selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OutcomeSummary {
    /// One entry per distinct site (zero counts included), in site order.
    AllSites { sites: Vec<SiteSuccesses> },
    /// Failure and success counts for one site, always both present.
    SingleSite { site: String, outcomes: Vec<OutcomeCount> },
}

impl OutcomeSummary {
    /// Sum of all slice values.
    pub fn total(&self) -> usize {
        match self {
            Self::AllSites { sites } => sites.iter().map(|s| s.successes).sum(),
            Self::SingleSite { outcomes, .. } => outcomes.iter().map(|o| o.count).sum(),
        }
    }

    /// True when every slice is zero and the chart has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Slice labels paired with their fraction of the total.
    /// Returns `None` when the total is zero.
    pub fn shares(&self) -> Option<Vec<(String, f64)>> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let total = total as f64;
        let shares = match self {
            Self::AllSites { sites } => sites
                .iter()
                .map(|s| (s.site.clone(), s.successes as f64 / total))
                .collect(),
            Self::SingleSite { outcomes, .. } => outcomes
                .iter()
                .map(|o| (o.outcome.to_string(), o.count as f64 / total))
                .collect(),
        };
        Some(shares)
    }

    /// Count for one outcome in single-site mode.
    pub fn outcome_count(&self, outcome: Outcome) -> Option<usize> {
        match self {
            Self::SingleSite { outcomes, .. } => outcomes
                .iter()
                .find(|o| o.outcome == outcome)
                .map(|o| o.count),
            Self::AllSites { .. } => None,
        }
    }

    /// Success count for one site in all-sites mode.
    pub fn site_successes(&self, site: &str) -> Option<usize> {
        match self {
            Self::AllSites { sites } => sites
                .iter()
                .find(|s| s.site == site)
                .map(|s| s.successes),
            Self::SingleSite { .. } => None,
        }
    }
}

/// A record reduced to what the payload-vs-outcome plot needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(failures: usize, successes: usize) -> OutcomeSummary {
        OutcomeSummary::SingleSite {
            site: "KSC LC-39A".to_string(),
            outcomes: vec![
                OutcomeCount { outcome: Outcome::Failure, count: failures },
                OutcomeCount { outcome: Outcome::Success, count: successes },
            ],
        }
    }

    #[test]
    fn test_shares_single_site() {
        let shares = single(1, 3).shares().unwrap();
        assert_eq!(shares, vec![("0".to_string(), 0.25), ("1".to_string(), 0.75)]);
    }

    #[test]
    fn test_shares_none_when_empty() {
        assert!(single(0, 0).shares().is_none());
        let all = OutcomeSummary::AllSites {
            sites: vec![SiteSuccesses { site: "KSC".into(), successes: 0 }],
        };
        assert!(all.is_empty());
        assert!(all.shares().is_none());
    }

    #[test]
    fn test_lookups_by_mode() {
        let all = OutcomeSummary::AllSites {
            sites: vec![
                SiteSuccesses { site: "KSC".into(), successes: 2 },
                SiteSuccesses { site: "CCAFS".into(), successes: 0 },
            ],
        };
        assert_eq!(all.site_successes("CCAFS"), Some(0));
        assert_eq!(all.site_successes("VAFB"), None);
        assert_eq!(all.outcome_count(Outcome::Success), None);
        assert_eq!(single(4, 1).outcome_count(Outcome::Failure), Some(4));
    }

    #[test]
    fn test_summary_serializes_with_mode_tag() {
        let value = serde_json::to_value(single(1, 2)).unwrap();
        assert_eq!(value["mode"], "single_site");
        assert_eq!(value["site"], "KSC LC-39A");
        assert_eq!(value["outcomes"][1]["outcome"], 1);
        assert_eq!(value["outcomes"][1]["count"], 2);
    }
}
