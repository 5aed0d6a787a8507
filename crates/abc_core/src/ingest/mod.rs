use tracing::debug;

use crate::domain::{Incident, Observed};
use crate::error::AppError;

/// Decode the incident list returned by the backend for one observed subject.
pub fn parse_incidents_json(text: &str) -> Result<Vec<Incident>, AppError> {
    let incidents: Vec<Incident> = serde_json::from_str(text).map_err(|e| {
        AppError::new(
            "INGEST_INCIDENTS_JSON_INVALID",
            "Failed to decode incident list JSON",
        )
        .with_details(e.to_string())
    })?;
    debug!(count = incidents.len(), "decoded incident list");
    Ok(incidents)
}

pub fn parse_observed_json(text: &str) -> Result<Observed, AppError> {
    serde_json::from_str(text).map_err(|e| {
        AppError::new(
            "INGEST_OBSERVED_JSON_INVALID",
            "Failed to decode observed JSON",
        )
        .with_details(e.to_string())
    })
}
