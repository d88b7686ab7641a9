use serde::Deserialize;
use crate::models::{FilterCriteria, PayloadRange, SiteSelection};

/// Selection passed as query parameters. Missing values fall back to the
/// dashboard defaults: all sites and the dataset's payload bounds.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub site: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SelectionQuery {
    pub fn into_criteria(self, bounds: PayloadRange) -> FilterCriteria {
        FilterCriteria {
            site: self.site.map(SiteSelection::from).unwrap_or_default(),
            payload_range: PayloadRange::new(
                self.min.unwrap_or(bounds.min),
                self.max.unwrap_or(bounds.max),
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectSiteRequest {
    pub site: SiteSelection,
}

#[derive(Debug, Deserialize)]
pub struct SelectPayloadRequest {
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_to_bounds() {
        let bounds = PayloadRange::new(0.0, 9600.0);
        let criteria = SelectionQuery::default().into_criteria(bounds);
        assert_eq!(criteria, FilterCriteria::all_sites(bounds));
    }

    #[test]
    fn test_query_partial_range() {
        let query = SelectionQuery { site: Some("KSC".into()), min: Some(500.0), max: None };
        let criteria = query.into_criteria(PayloadRange::new(0.0, 9600.0));
        assert_eq!(criteria.site, SiteSelection::from("KSC"));
        assert_eq!(criteria.payload_range, PayloadRange::new(500.0, 9600.0));
    }
}
