use tracing::debug;
use crate::errors::DashboardError;
use crate::models::{FilterCriteria, LaunchRecord, PayloadRange, SiteSelection};

/// Records matching the active criteria, borrowed from the dataset in its
/// original order. Rebuilt on every criteria change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    records: Vec<&'a LaunchRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LaunchRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> FromIterator<&'a LaunchRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a LaunchRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

pub fn matches_payload(record: &LaunchRecord, range: &PayloadRange) -> bool {
    range.contains(record.payload_mass_kg)
}

/// Always true for `SiteSelection::All`.
pub fn matches_site(record: &LaunchRecord, site: &SiteSelection) -> bool {
    match site {
        SiteSelection::All => true,
        SiteSelection::Site(name) => record.site == *name,
    }
}

/// Narrow `records` to those inside the payload window and, unless the
/// selection is `ALL`, at the selected site.
///
/// An unknown site simply matches nothing here; site membership is enforced
/// by the aggregator and the dashboard shell.
pub fn filter<'a>(
    records: &'a [LaunchRecord],
    criteria: &FilterCriteria,
) -> Result<FilteredView<'a>, DashboardError> {
    criteria.payload_range.validate()?;

    let view: FilteredView<'a> = records
        .iter()
        .filter(|r| matches_payload(r, &criteria.payload_range))
        .filter(|r| matches_site(r, &criteria.site))
        .collect();

    debug!(
        site = %criteria.site,
        min = criteria.payload_range.min,
        max = criteria.payload_range.max,
        matched = view.len(),
        total = records.len(),
        "Filtered launch records"
    );
    Ok(view)
}
