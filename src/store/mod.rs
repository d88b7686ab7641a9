pub mod loader;

use std::collections::HashSet;
use std::path::Path;
use tracing::info;
use crate::errors::DashboardError;
use crate::models::{LaunchRecord, PayloadRange, SiteSelection};

pub use loader::load_dataset;

/// Immutable launch dataset with the values derived from it at load time.
///
/// Never mutated after construction, so it can be shared read-only across
/// sessions behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    bounds: PayloadRange,
}

impl RecordStore {
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self, DashboardError> {
        let first = records.first().ok_or(DashboardError::EmptyDataset)?;

        let mut bounds = PayloadRange::new(first.payload_mass_kg, first.payload_mass_kg);
        let mut sites = Vec::new();
        {
            let mut seen = HashSet::new();
            for record in &records {
                if seen.insert(record.site.as_str()) {
                    sites.push(record.site.clone());
                }
                bounds.min = bounds.min.min(record.payload_mass_kg);
                bounds.max = bounds.max.max(record.payload_mass_kg);
            }
        }

        Ok(Self { records, sites, bounds })
    }

    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let records = load_dataset(path)?;
        let store = Self::new(records)?;
        info!(
            path = %path.display(),
            records = store.len(),
            sites = store.sites.len(),
            "Loaded launch dataset"
        );
        Ok(store)
    }

    /// Every record, in load order.
    pub fn all(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct sites in first-seen order.
    pub fn distinct_sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed minimum and maximum payload mass.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Rejects a selection naming a site that is not in the dataset.
    pub fn check_selection(&self, selection: &SiteSelection) -> Result<(), DashboardError> {
        match selection.site() {
            Some(site) if !self.contains_site(site) => {
                Err(DashboardError::UnknownSite(site.to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn sample() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("KSC", 3000.0, "v1.0", Outcome::Success),
            LaunchRecord::new("KSC", 5000.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("CCAFS", 1000.0, "v1.1", Outcome::Success),
        ]
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(matches!(RecordStore::new(Vec::new()), Err(DashboardError::EmptyDataset)));
    }

    #[test]
    fn test_distinct_sites_first_seen_order() {
        let store = RecordStore::new(sample()).unwrap();
        assert_eq!(store.distinct_sites(), &["KSC".to_string(), "CCAFS".to_string()]);
        // stable across calls
        assert_eq!(store.distinct_sites(), store.distinct_sites());
    }

    #[test]
    fn test_payload_bounds() {
        let store = RecordStore::new(sample()).unwrap();
        assert_eq!(store.payload_bounds(), PayloadRange::new(1000.0, 5000.0));
    }

    #[test]
    fn test_single_record_bounds_are_degenerate() {
        let store = RecordStore::new(vec![LaunchRecord::new("VAFB", 9600.0, "FT", Outcome::Success)]).unwrap();
        assert_eq!(store.payload_bounds(), PayloadRange::new(9600.0, 9600.0));
    }

    #[test]
    fn test_all_preserves_order() {
        let store = RecordStore::new(sample()).unwrap();
        assert_eq!(store.all(), sample().as_slice());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_check_selection() {
        let store = RecordStore::new(sample()).unwrap();
        assert!(store.check_selection(&SiteSelection::All).is_ok());
        assert!(store.check_selection(&SiteSelection::from("CCAFS")).is_ok());
        assert!(matches!(
            store.check_selection(&SiteSelection::from("MARS")),
            Err(DashboardError::UnknownSite(s)) if s == "MARS"
        ));
    }
}
