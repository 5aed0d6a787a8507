use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use time::{Date, Month};

use abc_core::analytics::{
    abc_word_counts, dashboard_periods, default_dashboard_period, default_period_start_date,
    intensity_counts, period_start_date, AbcFacet, DashboardPeriod, WordCount,
};
use abc_core::config::LogConfig;
use abc_core::domain::{AbcValue, Incident, Intensity};

fn abc(labels: &[&str]) -> Vec<AbcValue> {
    labels
        .iter()
        .enumerate()
        .map(|(i, l)| AbcValue::new(i as i64 + 1, *l))
        .collect()
}

fn incident(id: i64, intensity: Intensity, a: &[&str], b: &[&str], c: &[&str]) -> Incident {
    Incident {
        id,
        incident_dt: 0,
        duration: 10,
        intensity,
        location: "Home".to_string(),
        antecedents: abc(a),
        behaviors: abc(b),
        consequences: abc(c),
        description: None,
    }
}

fn sample() -> Vec<Incident> {
    vec![
        incident(1, Intensity::Severe, &["Transition"], &["Yelling", "Hitting"], &["Redirect"]),
        incident(2, Intensity::Mild, &["Demand", "Transition"], &["Yelling"], &["Ignore"]),
        incident(3, Intensity::Severe, &[], &["Hitting"], &["Redirect"]),
    ]
}

fn wc(value: &str, count: i64) -> WordCount {
    WordCount {
        value: value.to_string(),
        count,
    }
}

#[test]
fn word_counts_across_all_facets_keep_first_seen_order() {
    let facets: BTreeSet<AbcFacet> = AbcFacet::ALL.into_iter().collect();
    let counts = abc_word_counts(&sample(), &facets);
    assert_eq!(
        counts,
        vec![
            wc("Transition", 2),
            wc("Yelling", 2),
            wc("Hitting", 2),
            wc("Redirect", 2),
            wc("Demand", 1),
            wc("Ignore", 1),
        ]
    );
}

#[test]
fn word_counts_respect_selected_facets() {
    let behaviors = BTreeSet::from([AbcFacet::Behavior]);
    assert_eq!(
        abc_word_counts(&sample(), &behaviors),
        vec![wc("Yelling", 2), wc("Hitting", 2)]
    );
    assert!(abc_word_counts(&sample(), &BTreeSet::new()).is_empty());
}

#[test]
fn intensity_buckets_reconcile_to_total() {
    let buckets = intensity_counts(&sample());
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets[0].intensity, Intensity::Mild);
    assert_eq!(buckets[0].incident_ids, vec![2]);
    assert_eq!(buckets[1].intensity, Intensity::Moderate);
    assert_eq!(buckets[1].count, 0);
    assert_eq!(buckets[2].incident_ids, vec![1, 3]);
    let total: i64 = buckets.iter().map(|b| b.count).sum();
    assert_eq!(total, 3);
}

#[test]
fn periods_come_from_config() {
    let periods = dashboard_periods(&LogConfig::default());
    let labels: Vec<&str> = periods.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Last 7 Days", "Last 30 Days", "Last 90 Days"]);
}

#[test]
fn period_start_date_is_zero_padded_and_crosses_years() {
    let today = Date::from_calendar_date(2026, Month::January, 5).expect("date");
    assert_eq!(period_start_date(today, 7).expect("start"), "2025-12-29");
    assert_eq!(period_start_date(today, 0).expect("start"), "2026-01-05");

    let today = Date::from_calendar_date(2026, Month::March, 31).expect("date");
    assert_eq!(period_start_date(today, 30).expect("start"), "2026-03-01");
}

#[test]
fn dashboard_opens_on_the_configured_default_period() {
    let config = LogConfig::default();
    assert_eq!(
        default_dashboard_period(&config),
        DashboardPeriod {
            days: 7,
            label: "Last 7 Days".to_string(),
        }
    );

    let config = LogConfig::from_json_str(r#"{"dashboard_periods":[7,30],"default_period_days":30}"#)
        .expect("config");
    assert_eq!(default_dashboard_period(&config).days, 30);
    assert!(dashboard_periods(&config).contains(&default_dashboard_period(&config)));

    let today = Date::from_calendar_date(2026, Month::March, 31).expect("date");
    assert_eq!(
        default_period_start_date(today, &config).expect("start"),
        "2026-03-01"
    );
}
