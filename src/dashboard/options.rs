use serde::{Deserialize, Serialize};
use crate::config::SliderConfig;
use crate::models::ALL_SITES;
use crate::store::RecordStore;
use crate::utils::formatting::format_mass;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial selection: the dataset's payload bounds.
    pub value: [f64; 2],
}

/// Everything the selection widgets need to be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub sites: Vec<SiteOption>,
    pub payload_slider: PayloadSlider,
}

impl DashboardOptions {
    pub fn build(store: &RecordStore, slider: &SliderConfig) -> Self {
        Self {
            sites: site_options(store),
            payload_slider: payload_slider(store, slider),
        }
    }
}

/// "All Sites" first, then one option per distinct site.
pub fn site_options(store: &RecordStore) -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(store.distinct_sites().iter().map(|site| SiteOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect()
}

pub fn payload_slider(store: &RecordStore, slider: &SliderConfig) -> PayloadSlider {
    let bounds = store.payload_bounds();
    PayloadSlider {
        min: slider.min,
        max: slider.max,
        step: slider.step,
        marks: slider
            .marks
            .iter()
            .map(|&value| SliderMark { value, label: format_mass(value) })
            .collect(),
        value: [bounds.min, bounds.max],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome};

    fn store(sites: &[&str]) -> RecordStore {
        RecordStore::new(
            sites
                .iter()
                .enumerate()
                .map(|(i, s)| LaunchRecord::new(*s, 1000.0 * (i as f64 + 1.0), "FT", Outcome::Success))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_site_options_any_number_of_sites() {
        let options = site_options(&store(&["KSC LC-39A"]));
        assert_eq!(options.len(), 2);
        assert_eq!(options[0], SiteOption { label: "All Sites".into(), value: "ALL".into() });
        assert_eq!(options[1].value, "KSC LC-39A");

        let options = site_options(&store(&["A", "B", "C", "D", "E", "A"]));
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ALL", "A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_slider_value_is_dataset_bounds() {
        let slider = payload_slider(&store(&["A", "B", "C"]), &SliderConfig::default());
        assert_eq!(slider.value, [1000.0, 3000.0]);
        assert_eq!(slider.max, 10000.0);
        assert_eq!(slider.marks[1], SliderMark { value: 2500.0, label: "2500".into() });
    }
}
