use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Ordinal severity classification recorded with every incident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    Mild,
    Moderate,
    Severe,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Mild, Intensity::Moderate, Intensity::Severe];

    pub fn label(self) -> &'static str {
        match self {
            Intensity::Mild => "Mild",
            Intensity::Moderate => "Moderate",
            Intensity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|i| i.label() == s)
            .ok_or_else(|| {
                AppError::new("DOMAIN_INTENSITY_UNKNOWN", "Unknown incident intensity")
                    .with_details(format!("value={s}"))
            })
    }
}

/// One configured label for an observed subject (an antecedent, behavior, consequence or
/// location). Entries with `value_id <= 0` are placeholders created by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AbcValue {
    pub value_id: i64,
    pub type_value: String,
}

impl AbcValue {
    pub fn new(value_id: i64, type_value: impl Into<String>) -> Self {
        Self {
            value_id,
            type_value: type_value.into(),
        }
    }
}

/// A logged incident as returned by the backend.
///
/// Notes:
/// - `incident_dt` is epoch milliseconds.
/// - `duration` is total seconds (the `MM:SS` entry field, already normalized).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: i64,
    pub incident_dt: i64,
    pub duration: i64,
    pub intensity: Intensity,
    pub location: String,
    #[serde(default)]
    pub antecedents: Vec<AbcValue>,
    #[serde(default)]
    pub behaviors: Vec<AbcValue>,
    #[serde(default)]
    pub consequences: Vec<AbcValue>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The subject whose incidents are tracked, with the labels configured for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Observed {
    pub id: i64,
    pub observed_nm: String,
    #[serde(default)]
    pub locations: Vec<AbcValue>,
    #[serde(default)]
    pub antecedents: Vec<AbcValue>,
    #[serde(default)]
    pub behaviors: Vec<AbcValue>,
    #[serde(default)]
    pub consequences: Vec<AbcValue>,
}

impl Observed {
    /// Locations that can be offered as filter choices (placeholders excluded).
    pub fn selectable_locations(&self) -> Vec<&AbcValue> {
        self.locations.iter().filter(|l| l.value_id > 0).collect()
    }
}
