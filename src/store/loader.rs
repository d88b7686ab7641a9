use std::path::Path;
use serde::Deserialize;
use tracing::debug;
use crate::errors::DashboardError;
use crate::models::{LaunchRecord, Outcome};

/// One dataset row as stored on disk, before validation.
///
/// Uses the dataset's column headers (`Launch Site`, `Payload Mass (kg)`,
/// `Booster Version Category`, `class`) and also accepts the snake_case
/// names `LaunchRecord` serializes to.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "Launch Site", alias = "site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)", alias = "payload_mass_kg")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category", alias = "booster_category")]
    booster_category: String,
    #[serde(rename = "class", alias = "outcome")]
    class: i64,
}

/// Read launch records from a CSV file, or from a JSON array when the file
/// has a `.json` extension. Columns beyond the four used are ignored.
pub fn load_dataset(path: &Path) -> Result<Vec<LaunchRecord>, DashboardError> {
    if !path.exists() {
        return Err(DashboardError::Dataset(format!("Dataset file not found: {}", path.display())));
    }

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let records = if is_json {
        let content = std::fs::read_to_string(path)?;
        parse_json(&content)?
    } else {
        let reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
        parse_csv(reader)?
    };

    debug!(path = %path.display(), rows = records.len(), "Parsed dataset file");
    Ok(records)
}

pub fn parse_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<LaunchRecord>, DashboardError> {
    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<DatasetRow>().enumerate() {
        let row = row?;
        records.push(normalize(row, index + 1)?);
    }
    Ok(records)
}

pub fn parse_json(content: &str) -> Result<Vec<LaunchRecord>, DashboardError> {
    let rows: Vec<DatasetRow> = serde_json::from_str(content)?;
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| normalize(row, index + 1))
        .collect()
}

fn normalize(row: DatasetRow, index: usize) -> Result<LaunchRecord, DashboardError> {
    if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
        return Err(DashboardError::Dataset(format!(
            "Row {}: payload mass must be a non-negative number, got {}",
            index, row.payload_mass_kg
        )));
    }

    let outcome = u8::try_from(row.class)
        .ok()
        .and_then(|class| Outcome::try_from(class).ok())
        .ok_or_else(|| {
            DashboardError::Dataset(format!("Row {}: class must be 0 or 1, got {}", index, row.class))
        })?;

    let site = row.site.trim();
    if site.is_empty() {
        return Err(DashboardError::Dataset(format!("Row {}: launch site is empty", index)));
    }

    Ok(LaunchRecord::new(site, row.payload_mass_kg, row.booster_category.trim(), outcome))
}
