use std::path::Path;
use crate::errors::DashboardError;
use super::types::DashboardConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<DashboardConfig, DashboardError> {
    if !path.exists() {
        return Err(DashboardError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(DashboardError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<DashboardConfig, DashboardError> {
    // An empty file parses to YAML null; treat it as "all defaults"
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(DashboardConfig::default());
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: DashboardConfig = serde_yaml::from_value(yaml)?;

    validate_slider(&config)?;
    validate_server(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), DashboardError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| DashboardError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| DashboardError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; typed parsing below is the hard gate
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Slider layout must describe a usable range.
fn validate_slider(config: &DashboardConfig) -> Result<(), DashboardError> {
    if let Some(slider) = &config.slider {
        if !(slider.min <= slider.max) {
            return Err(DashboardError::Config(format!(
                "Slider min {} is greater than max {}",
                slider.min, slider.max
            )));
        }
        if !(slider.step > 0.0) {
            return Err(DashboardError::Config(format!("Slider step must be positive, got {}", slider.step)));
        }
        if let Some(mark) = slider.marks.iter().find(|m| **m < slider.min || **m > slider.max) {
            warn!(mark = *mark, "Slider mark lies outside the slider range");
        }
    }

    Ok(())
}

/// Session limits must leave room for at least one session.
fn validate_server(config: &DashboardConfig) -> Result<(), DashboardError> {
    if let Some(server) = &config.server {
        if server.max_sessions == Some(0) {
            return Err(DashboardError::Config("server.max_sessions must be at least 1".into()));
        }
        if server.session_ttl_secs == Some(0) {
            return Err(DashboardError::Config("server.session_ttl_secs must be at least 1".into()));
        }
    }

    Ok(())
}
