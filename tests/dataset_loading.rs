use std::fs;
use launchboard::errors::DashboardError;
use launchboard::models::Outcome;
use launchboard::store::RecordStore;
use tempfile::TempDir;

const HEADER: &str = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

fn write_csv(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("spacex_launch_dash.csv");
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_csv_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &[
        "0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0",
        "1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0",
        "2,3,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1",
        "3,4,KSC LC-39A,1,9600.0,F9 FT B1029.2,FT",
        "4,5,CCAFS SLC-40,1,2034.0,F9 B4 B1045.1,B4",
    ]);

    let store = RecordStore::load(&path).unwrap();
    assert_eq!(store.len(), 5);
    assert_eq!(
        store.distinct_sites(),
        &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"].map(String::from)
    );
    assert_eq!(store.payload_bounds().min, 0.0);
    assert_eq!(store.payload_bounds().max, 9600.0);
    assert_eq!(store.all()[3].booster_category, "FT");
    assert_eq!(store.all()[3].outcome, Outcome::Success);
}

#[test]
fn test_load_header_only_is_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &[]);
    assert!(matches!(RecordStore::load(&path), Err(DashboardError::EmptyDataset)));
}

#[test]
fn test_load_rejects_malformed_row() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &["0,1,KSC LC-39A,1,heavy,F9 FT B1029.2,FT"]);
    assert!(matches!(RecordStore::load(&path), Err(DashboardError::Csv(_))));
}

#[test]
fn test_load_rejects_class_outside_binary() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &[
        "0,1,KSC LC-39A,1,9600.0,F9 FT B1029.2,FT",
        "1,2,KSC LC-39A,3,9600.0,F9 FT B1029.2,FT",
    ]);
    let err = RecordStore::load(&path).unwrap_err();
    assert!(matches!(&err, DashboardError::Dataset(msg) if msg.starts_with("Row 2:")), "{}", err);
}

#[test]
fn test_load_json_dataset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("launches.json");
    let rows = serde_json::json!([
        {"site": "KSC", "payload_mass_kg": 3000.0, "booster_category": "v1.0", "outcome": 1},
        {"site": "CCAFS", "payload_mass_kg": 1000.0, "booster_category": "v1.1", "outcome": 0},
    ]);
    fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

    let store = RecordStore::load(&path).unwrap();
    assert_eq!(store.distinct_sites(), &["KSC".to_string(), "CCAFS".to_string()]);
    assert_eq!(store.all()[1].outcome, Outcome::Failure);
}

#[test]
fn test_load_empty_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("launches.json");
    fs::write(&path, "[]").unwrap();
    assert!(matches!(RecordStore::load(&path), Err(DashboardError::EmptyDataset)));
}
