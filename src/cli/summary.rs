use console::style;
use crate::cli::commands::SummaryArgs;
use crate::config::DashboardConfig;
use crate::dashboard::{render, DashboardView};
use crate::errors::DashboardError;
use crate::models::{FilterCriteria, OutcomeSummary, PayloadRange};
use crate::utils::formatting::{format_mass, format_range, format_share};
use tracing::info;

pub async fn handle_summary(args: SummaryArgs, config: DashboardConfig) -> Result<(), DashboardError> {
    let store = super::open_store(args.dataset.as_deref(), &config).await?;
    let bounds = store.payload_bounds();
    let criteria = FilterCriteria::new(
        args.site.as_str(),
        PayloadRange::new(args.min.unwrap_or(bounds.min), args.max.unwrap_or(bounds.max)),
    );
    info!(site = %criteria.site, min = criteria.payload_range.min, max = criteria.payload_range.max, "Rendering summary");

    let view = render(&store, &criteria)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_view(&criteria, &view));
    }
    Ok(())
}

pub fn format_view(criteria: &FilterCriteria, view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Site: {}  Payload: {}\n\n",
        criteria.site,
        format_range(criteria.payload_range.min, criteria.payload_range.max)
    ));

    out.push_str(&format!("{}\n", style(&view.outcome.title).bold()));
    out.push_str(&format_outcomes(&view.outcome.data));

    out.push_str(&format!("\n{}\n", style(&view.distribution.title).bold()));
    let distribution = &view.distribution.data;
    if view.distribution.empty {
        out.push_str("  No launches in the selected range\n");
        return out;
    }
    out.push_str(&format!(
        "  {} launches, categories: {}\n",
        distribution.points.len(),
        distribution.categories.join(", ")
    ));
    out.push_str(&format!("  {:>10}  {:>7}  {}\n", "Payload kg", "Outcome", "Category"));
    for point in &distribution.points {
        out.push_str(&format!(
            "  {:>10}  {:>7}  {}\n",
            format_mass(point.payload_mass_kg),
            point.outcome,
            point.booster_category
        ));
    }
    out
}

fn format_outcomes(summary: &OutcomeSummary) -> String {
    let Some(shares) = summary.shares() else {
        return "  No successful launches in the selected range\n".to_string();
    };

    let counts: Vec<usize> = match summary {
        OutcomeSummary::AllSites { sites } => sites.iter().map(|s| s.successes).collect(),
        OutcomeSummary::SingleSite { outcomes, .. } => outcomes.iter().map(|o| o.count).collect(),
    };
    let width = shares.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    shares
        .iter()
        .zip(counts)
        .map(|((label, share), count)| {
            format!("  {:<width$}  {:>5}  {:>6}\n", label, count, format_share(*share), width = width)
        })
        .collect()
}
