use std::collections::HashMap;
use tracing::debug;
use crate::errors::DashboardError;
use crate::models::{FilterCriteria, LaunchRecord, Outcome, OutcomeCount, OutcomeSummary, SiteSelection, SiteSuccesses};
use crate::store::RecordStore;
use super::filter::filter;

/// Outcome-share summary for the current selection.
///
/// With `ALL`, counts successes per site inside the payload window; every
/// distinct site appears, zero or not. With a single site, counts failures
/// and successes over that site's full history: the payload window does not
/// apply in this mode and is not validated.
pub fn aggregate(store: &RecordStore, criteria: &FilterCriteria) -> Result<OutcomeSummary, DashboardError> {
    store.check_selection(&criteria.site)?;

    let summary = match &criteria.site {
        SiteSelection::All => {
            let view = filter(store.all(), criteria)?;
            successes_by_site(store.distinct_sites(), view.iter())
        }
        SiteSelection::Site(site) => outcomes_for_site(site, store.all()),
    };

    debug!(site = %criteria.site, total = summary.total(), "Aggregated launch outcomes");
    Ok(summary)
}

fn successes_by_site<'a>(
    sites: &[String],
    records: impl Iterator<Item = &'a LaunchRecord>,
) -> OutcomeSummary {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records.filter(|r| r.outcome.is_success()) {
        *counts.entry(record.site.as_str()).or_default() += 1;
    }

    let sites = sites
        .iter()
        .map(|site| SiteSuccesses {
            site: site.clone(),
            successes: counts.get(site.as_str()).copied().unwrap_or(0),
        })
        .collect();
    OutcomeSummary::AllSites { sites }
}

fn outcomes_for_site(site: &str, records: &[LaunchRecord]) -> OutcomeSummary {
    let at_site: Vec<&LaunchRecord> = records.iter().filter(|r| r.site == site).collect();
    let outcomes = Outcome::ALL
        .iter()
        .map(|&outcome| OutcomeCount {
            outcome,
            count: at_site.iter().filter(|r| r.outcome == outcome).count(),
        })
        .collect();
    OutcomeSummary::SingleSite { site: site.to_string(), outcomes }
}
