use serde::{Deserialize, Serialize};
use crate::engine::{aggregate, filter, project};
use crate::errors::DashboardError;
use crate::models::{FilterCriteria, OutcomeSummary, ProjectionPoint, SiteSelection};
use crate::store::RecordStore;

/// Structured chart data handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView<T> {
    pub title: String,
    /// Nothing to plot; the renderer shows a "no data" state.
    pub empty: bool,
    pub data: T,
}

/// Payload-vs-outcome points plus the booster categories used for coloring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub points: Vec<ProjectionPoint>,
    /// Distinct categories among `points`, first-seen order.
    pub categories: Vec<String>,
}

impl Distribution {
    pub fn new(points: Vec<ProjectionPoint>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for point in &points {
            if !categories.contains(&point.booster_category) {
                categories.push(point.booster_category.clone());
            }
        }
        Self { points, categories }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub outcome: ChartView<OutcomeSummary>,
    pub distribution: ChartView<Distribution>,
}

pub fn outcome_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Total Success Launches By Site".to_string(),
        SiteSelection::Site(name) => format!("Total Success Launches for {}", name),
    }
}

pub fn distribution_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(name) => format!("Total Success Launches for {}", name),
    }
}

pub fn render_outcomes(
    store: &RecordStore,
    criteria: &FilterCriteria,
) -> Result<ChartView<OutcomeSummary>, DashboardError> {
    let summary = aggregate(store, criteria)?;
    Ok(ChartView {
        title: outcome_title(&criteria.site),
        empty: summary.is_empty(),
        data: summary,
    })
}

pub fn render_distribution(
    store: &RecordStore,
    criteria: &FilterCriteria,
) -> Result<ChartView<Distribution>, DashboardError> {
    store.check_selection(&criteria.site)?;
    let view = filter(store.all(), criteria)?;
    let distribution = Distribution::new(project(&view));
    Ok(ChartView {
        title: distribution_title(&criteria.site),
        empty: distribution.points.is_empty(),
        data: distribution,
    })
}

/// Recompute both charts from scratch for the given selection.
pub fn render(store: &RecordStore, criteria: &FilterCriteria) -> Result<DashboardView, DashboardError> {
    Ok(DashboardView {
        outcome: render_outcomes(store, criteria)?,
        distribution: render_distribution(store, criteria)?,
    })
}
