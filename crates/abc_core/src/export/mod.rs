use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::info;

use crate::config::LogConfig;
use crate::domain::{AbcValue, Incident};
use crate::duration::format_duration;
use crate::error::AppError;

const HEADERS: [&str; 8] = [
    "Date/Time",
    "Duration",
    "Intensity",
    "Location",
    "Antecedents",
    "Behaviors",
    "Consequences",
    "Description",
];

fn incident_dt_rfc3339(incident: &Incident) -> Result<String, AppError> {
    let nanos = i128::from(incident.incident_dt) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .map_err(|e| e.to_string())
        .and_then(|dt| dt.format(&Rfc3339).map_err(|e| e.to_string()))
        .map_err(|e| {
            AppError::new(
                "EXPORT_TIMESTAMP_INVALID",
                "Incident timestamp cannot be exported",
            )
            .with_details(format!(
                "incident_id={}; incident_dt={}; err={e}",
                incident.id, incident.incident_dt
            ))
        })
}

fn join_labels(values: &[AbcValue]) -> String {
    values
        .iter()
        .map(|v| v.type_value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn csv_write_error(e: impl ToString) -> AppError {
    AppError::new("EXPORT_CSV_WRITE_FAILED", "Failed to write incident CSV")
        .with_details(e.to_string())
}

/// Write the incidents, in the order given, as CSV with a header row.
pub fn export_incidents_csv<W: Write>(incidents: &[Incident], writer: W) -> Result<(), AppError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS).map_err(csv_write_error)?;

    for inc in incidents {
        let dt = incident_dt_rfc3339(inc)?;
        wtr.write_record([
            dt.as_str(),
            format_duration(inc.duration).as_str(),
            inc.intensity.label(),
            inc.location.as_str(),
            join_labels(&inc.antecedents).as_str(),
            join_labels(&inc.behaviors).as_str(),
            join_labels(&inc.consequences).as_str(),
            inc.description.as_deref().unwrap_or(""),
        ])
        .map_err(csv_write_error)?;
    }

    wtr.flush().map_err(csv_write_error)
}

pub fn export_incidents_csv_string(incidents: &[Incident]) -> Result<String, AppError> {
    let mut buf = Vec::new();
    export_incidents_csv(incidents, &mut buf)?;
    String::from_utf8(buf).map_err(csv_write_error)
}

fn filename_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect()
}

/// Export into `dir` as `<prefix>-<observed name>.csv`, returning the written path.
pub fn export_incidents_csv_file(
    incidents: &[Incident],
    dir: &Path,
    observed_nm: &str,
    config: &LogConfig,
) -> Result<PathBuf, AppError> {
    let path = dir.join(format!(
        "{}-{}.csv",
        filename_safe(&config.export_file_prefix),
        filename_safe(observed_nm)
    ));

    let file = fs::File::create(&path).map_err(|e| {
        AppError::new("EXPORT_FILE_CREATE_FAILED", "Failed to create export file")
            .with_details(format!("path={}: {}", path.display(), e))
    })?;
    export_incidents_csv(incidents, file)?;

    info!(
        path = %path.display(),
        incidents = incidents.len(),
        "exported incident log"
    );
    Ok(path)
}
