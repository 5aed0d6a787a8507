use serde::{Deserialize, Serialize};

use crate::domain::{Incident, Intensity, Observed};
use crate::filter::{filter_incidents, reset_incidents, FilterSpec};

/// Incident Log view state: the fetched collection, the rows currently shown and the
/// filters that produced them. The three are always replaced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentLog {
    all: Vec<Incident>,
    shown: Vec<Incident>,
    filters: FilterSpec,
}

impl IncidentLog {
    pub fn new(incidents: Vec<Incident>, now_ms: i64) -> Self {
        Self {
            shown: reset_incidents(&incidents),
            all: incidents,
            filters: FilterSpec::initial(now_ms),
        }
    }

    pub fn all(&self) -> &[Incident] {
        &self.all
    }

    pub fn shown(&self) -> &[Incident] {
        &self.shown
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    /// Apply a new spec. Always filters the full collection, never the rows currently shown.
    pub fn apply(&mut self, spec: FilterSpec) {
        self.shown = filter_incidents(&self.all, &spec);
        self.filters = spec;
    }

    pub fn clear(&mut self, now_ms: i64) {
        self.shown = reset_incidents(&self.all);
        self.filters = FilterSpec::initial(now_ms);
    }

    /// Swap in a fresh fetch. Every incident is shown again; the dialog keeps its filters.
    pub fn replace_incidents(&mut self, incidents: Vec<Incident>) {
        self.shown = reset_incidents(&incidents);
        self.all = incidents;
    }
}

/// Choices offered by the filter dialog for one observed subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub intensities: Vec<Intensity>,
    pub locations: Vec<String>,
}

pub fn filter_options(observed: &Observed) -> FilterOptions {
    FilterOptions {
        intensities: Intensity::ALL.to_vec(),
        locations: observed
            .selectable_locations()
            .into_iter()
            .map(|l| l.type_value.clone())
            .collect(),
    }
}
