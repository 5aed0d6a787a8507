use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Incident, Intensity};
use crate::duration::DurationBound;

/// Criteria selected in the incident filter dialog.
///
/// Every criterion is opt-in: `None` dates, blank/unparseable duration text and empty sets
/// never exclude an incident. Date bounds are inclusive epoch milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub from_date: Option<i64>,
    pub to_date: Option<i64>,
    pub from_duration: String,
    pub to_duration: String,
    pub intensities: BTreeSet<Intensity>,
    pub locations: BTreeSet<String>,
}

impl FilterSpec {
    /// The filters the dialog opens with: no criteria except an upper date bound of `now_ms`.
    pub fn initial(now_ms: i64) -> Self {
        Self {
            to_date: Some(now_ms),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from_date.is_none()
            && self.to_date.is_none()
            && DurationBound::parse(&self.from_duration).is_none()
            && DurationBound::parse(&self.to_duration).is_none()
            && self.intensities.is_empty()
            && self.locations.is_empty()
    }

    pub fn with_date_range(mut self, from: Option<i64>, to: Option<i64>) -> Self {
        self.from_date = from;
        self.to_date = to;
        self
    }

    pub fn with_duration_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_duration = from.into();
        self.to_duration = to.into();
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensities.insert(intensity);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.insert(location.into());
        self
    }
}

/// A `FilterSpec` with its duration text resolved, ready to test incidents.
#[derive(Debug, Clone, Copy)]
pub struct CompiledFilter<'a> {
    spec: &'a FilterSpec,
    from_duration: Option<DurationBound>,
    to_duration: Option<DurationBound>,
}

impl<'a> CompiledFilter<'a> {
    pub fn compile(spec: &'a FilterSpec) -> Self {
        Self {
            spec,
            from_duration: DurationBound::parse(&spec.from_duration),
            to_duration: DurationBound::parse(&spec.to_duration),
        }
    }

    pub fn from_duration(&self) -> Option<DurationBound> {
        self.from_duration
    }

    pub fn to_duration(&self) -> Option<DurationBound> {
        self.to_duration
    }

    fn intensity_ok(&self, incident: &Incident) -> bool {
        self.spec.intensities.is_empty() || self.spec.intensities.contains(&incident.intensity)
    }

    fn location_ok(&self, incident: &Incident) -> bool {
        self.spec.locations.is_empty() || self.spec.locations.contains(&incident.location)
    }

    fn date_ok(&self, incident: &Incident) -> bool {
        if matches!(self.spec.from_date, Some(from) if incident.incident_dt < from) {
            return false;
        }
        !matches!(self.spec.to_date, Some(to) if incident.incident_dt > to)
    }

    fn duration_ok(&self, incident: &Incident) -> bool {
        if matches!(self.from_duration, Some(b) if incident.duration < b.seconds()) {
            return false;
        }
        !matches!(self.to_duration, Some(b) if incident.duration > b.seconds())
    }

    /// True when the incident satisfies every populated criterion.
    pub fn matches(&self, incident: &Incident) -> bool {
        self.intensity_ok(incident)
            && self.location_ok(incident)
            && self.date_ok(incident)
            && self.duration_ok(incident)
    }
}

/// Return the incidents satisfying every populated criterion of `spec`, in input order.
pub fn filter_incidents(incidents: &[Incident], spec: &FilterSpec) -> Vec<Incident> {
    let compiled = CompiledFilter::compile(spec);
    let out: Vec<Incident> = incidents
        .iter()
        .filter(|inc| compiled.matches(inc))
        .cloned()
        .collect();

    debug!(
        input = incidents.len(),
        output = out.len(),
        from_duration = compiled.from_duration.map(DurationBound::seconds),
        to_duration = compiled.to_duration.map(DurationBound::seconds),
        "filtered incident log"
    );
    out
}

/// Clear all filters: the full collection, unchanged.
pub fn reset_incidents(incidents: &[Incident]) -> Vec<Incident> {
    incidents.to_vec()
}
