use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use time::{format_description, Date, Duration};

use crate::config::LogConfig;
use crate::domain::{AbcValue, Incident, Intensity};
use crate::error::AppError;

/// The three descriptive facets recorded per incident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AbcFacet {
    Antecedent,
    Behavior,
    Consequence,
}

impl AbcFacet {
    pub const ALL: [AbcFacet; 3] = [
        AbcFacet::Antecedent,
        AbcFacet::Behavior,
        AbcFacet::Consequence,
    ];

    fn values(self, incident: &Incident) -> &[AbcValue] {
        match self {
            AbcFacet::Antecedent => &incident.antecedents,
            AbcFacet::Behavior => &incident.behaviors,
            AbcFacet::Consequence => &incident.consequences,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCount {
    pub value: String,
    pub count: i64,
}

/// Tally ABC labels across incidents for the word cloud.
///
/// Facets are visited antecedent, behavior, consequence for each incident; the output keeps
/// the order in which each label was first seen.
pub fn abc_word_counts(incidents: &[Incident], facets: &BTreeSet<AbcFacet>) -> Vec<WordCount> {
    let mut counts: Vec<WordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for inc in incidents {
        for facet in AbcFacet::ALL.into_iter().filter(|f| facets.contains(f)) {
            for v in facet.values(inc) {
                match index.get(&v.type_value).copied() {
                    Some(idx) => counts[idx].count += 1,
                    None => {
                        index.insert(v.type_value.clone(), counts.len());
                        counts.push(WordCount {
                            value: v.type_value.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }
    }

    counts
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntensityCount {
    pub intensity: Intensity,
    pub count: i64,
    pub incident_ids: Vec<i64>,
}

/// One bucket per intensity in ordinal order, zero buckets included, so counts always
/// reconcile to `incidents.len()`.
pub fn intensity_counts(incidents: &[Incident]) -> Vec<IntensityCount> {
    let mut buckets: BTreeMap<Intensity, Vec<i64>> =
        Intensity::ALL.into_iter().map(|i| (i, Vec::new())).collect();
    for inc in incidents {
        buckets.entry(inc.intensity).or_default().push(inc.id);
    }

    buckets
        .into_iter()
        .map(|(intensity, mut ids)| {
            ids.sort();
            IntensityCount {
                intensity,
                count: ids.len() as i64,
                incident_ids: ids,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardPeriod {
    pub days: u32,
    pub label: String,
}

impl DashboardPeriod {
    pub fn new(days: u32) -> Self {
        Self {
            days,
            label: format!("Last {days} Days"),
        }
    }
}

pub fn dashboard_periods(config: &LogConfig) -> Vec<DashboardPeriod> {
    config
        .dashboard_periods
        .iter()
        .map(|&days| DashboardPeriod::new(days))
        .collect()
}

/// The period selected when the dashboard first opens.
pub fn default_dashboard_period(config: &LogConfig) -> DashboardPeriod {
    DashboardPeriod::new(config.default_period_days)
}

/// Start date for the dashboard's initial incident query.
pub fn default_period_start_date(today: Date, config: &LogConfig) -> Result<String, AppError> {
    period_start_date(today, config.default_period_days)
}

/// First day of a dashboard window, as the `YYYY-MM-DD` start date sent with the incident query.
pub fn period_start_date(today: Date, days: u32) -> Result<String, AppError> {
    let start = today
        .checked_sub(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            AppError::new(
                "DASHBOARD_PERIOD_OUT_OF_RANGE",
                "Dashboard period start date is out of range",
            )
            .with_details(format!("today={today}; days={days}"))
        })?;

    let fmt = format_description::parse("[year]-[month]-[day]").map_err(|e| {
        AppError::new(
            "DASHBOARD_DATE_FORMAT_CONFIG_FAILED",
            "Dashboard date format config error",
        )
        .with_details(e.to_string())
    })?;

    start.format(&fmt).map_err(|e| {
        AppError::new(
            "DASHBOARD_DATE_FORMAT_FAILED",
            "Failed to format dashboard start date",
        )
        .with_details(e.to_string())
    })
}
