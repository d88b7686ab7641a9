use serde_json::json;
use crate::cli::commands::SitesArgs;
use crate::config::DashboardConfig;
use crate::errors::DashboardError;
use crate::utils::formatting::format_range;

pub async fn handle_sites(args: SitesArgs, config: DashboardConfig) -> Result<(), DashboardError> {
    let store = super::open_store(args.dataset.as_deref(), &config).await?;
    let bounds = store.payload_bounds();

    if args.json {
        let out = json!({
            "records": store.len(),
            "sites": store.distinct_sites(),
            "payload_bounds": bounds,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Records: {}", store.len());
    println!("Payload: {}", format_range(bounds.min, bounds.max));
    println!("Sites:");
    for site in store.distinct_sites() {
        let launches = store.all().iter().filter(|r| r.site == *site).count();
        println!("  {} ({} launches)", site, launches);
    }
    Ok(())
}
