use crate::models::ProjectionPoint;
use super::filter::FilteredView;

/// One plot point per filtered record, in view order.
pub fn project(view: &FilteredView<'_>) -> Vec<ProjectionPoint> {
    view.iter()
        .map(|record| ProjectionPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_category: record.booster_category.clone(),
        })
        .collect()
}
