//! Attrition Pareto tests: cause resolution, ranking, rounding, filtering.

use chrono::NaiveDate;
use staffing_core::{
    attrition_pareto::{attrition_pareto, ParetoEntry},
    config::{ReportConfig, RoundingMode},
    dataset::Dataset,
    error::AnalyticsError,
    model::{DismissalOrder, DismissalReason, Function, Specialist},
    store::{EntityStore, HrStore, MemoryStore},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reason(reason_id: i64, short_label: &str, full_text: &str) -> DismissalReason {
    DismissalReason {
        reason_id,
        short_label: short_label.into(),
        full_text: full_text.into(),
    }
}

fn specialist(specialist_id: i64, end_date: Option<NaiveDate>) -> Specialist {
    Specialist {
        specialist_id,
        name: format!("Specialist {specialist_id}"),
        birth_date: date(1980, 1, 1),
        function_id: 1,
        start_date: date(2010, 1, 1),
        end_date,
    }
}

fn order(order_id: i64, order_date: NaiveDate, specialist_id: i64, reason_id: i64, true_reason: &str) -> DismissalOrder {
    DismissalOrder {
        order_id,
        order_date,
        specialist_id,
        reason_id,
        true_reason: true_reason.into(),
    }
}

/// Eight dismissals between 2014 and 2022; specialist 11 left at the end of
/// 2016 but the order is dated January 2017.
fn fixture() -> Dataset {
    let ends = [
        (10, date(2014, 6, 30)),
        (11, date(2016, 12, 30)),
        (12, date(2017, 3, 15)),
        (13, date(2018, 4, 2)),
        (14, date(2019, 9, 9)),
        (15, date(2020, 2, 28)),
        (16, date(2021, 11, 1)),
        (17, date(2022, 7, 19)),
    ];
    let mut specialists: Vec<_> = ends.iter().map(|&(id, end)| specialist(id, Some(end))).collect();
    specialists.push(specialist(18, None));

    Dataset {
        functions: vec![Function {
            function_id: 1,
            name: "Clerk".into(),
            department: "Office".into(),
            salary: 3000.0,
        }],
        specialists,
        dismissal_reasons: vec![
            reason(1, "Own wish", "Resignation at own request"),
            reason(2, "Agreement", "Termination by mutual agreement"),
            reason(3, "Other", "Other reason"),
        ],
        dismissal_orders: vec![
            order(1, date(2014, 6, 30), 10, 1, ""),
            order(2, date(2017, 1, 9), 11, 1, ""),
            order(3, date(2017, 3, 15), 12, 1, ""),
            order(4, date(2018, 4, 2), 13, 3, "Long commute"),
            order(5, date(2019, 9, 9), 14, 3, "Low salary"),
            order(6, date(2020, 2, 28), 15, 2, ""),
            order(7, date(2021, 11, 1), 16, 3, "Long commute"),
            order(8, date(2022, 7, 19), 17, 1, ""),
        ],
        ..Dataset::default()
    }
}

fn sqlite_store() -> HrStore {
    let store = HrStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    fixture().import_into(&store).expect("import fixture");
    store
}

fn summary(entries: &[ParetoEntry]) -> Vec<(&str, u64, f64, f64)> {
    entries
        .iter()
        .map(|e| (e.label.as_str(), e.count, e.percentage, e.cumulative_percentage))
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn pareto_ranks_causes_with_pinned_percentages() {
    let store = sqlite_store();
    let entries = attrition_pareto(&store, 2015, &ReportConfig::default_test()).unwrap();
    assert_eq!(
        summary(&entries),
        vec![
            ("Resignation at own request", 3, 42.86, 42.86),
            ("Long commute", 2, 28.57, 71.43),
            ("Low salary", 1, 14.29, 85.71),
            ("Termination by mutual agreement", 1, 14.29, 100.0),
        ]
    );
}

#[test]
fn equal_counts_are_ordered_by_label() {
    let store = sqlite_store();
    let entries = attrition_pareto(&store, 2019, &ReportConfig::default_test()).unwrap();
    assert_eq!(
        summary(&entries),
        vec![
            ("Long commute", 1, 25.0, 25.0),
            ("Low salary", 1, 25.0, 50.0),
            ("Resignation at own request", 1, 25.0, 75.0),
            ("Termination by mutual agreement", 1, 25.0, 100.0),
        ]
    );
}

#[test]
fn year_filter_uses_specialist_end_date_not_order_date() {
    let store = sqlite_store();
    let orders = store.list_dismissal_orders(2017).unwrap();
    let ids: Vec<_> = orders.iter().map(|r| r.specialist_id).collect();
    assert_eq!(ids, vec![12, 13, 14, 15, 16, 17], "specialist 11 ended in 2016");

    let entries = attrition_pareto(&store, 2017, &ReportConfig::default_test()).unwrap();
    let total: u64 = entries.iter().map(|e| e.count).sum();
    assert_eq!(total, 6);
    assert_eq!(entries[0].label, "Long commute", "2-2 tie broken by label");
    assert_eq!(entries[1].label, "Resignation at own request");
}

#[test]
fn reserved_reason_never_merges_distinct_true_reasons() {
    let store = sqlite_store();
    let entries = attrition_pareto(&store, 2015, &ReportConfig::default_test()).unwrap();
    assert!(entries.iter().all(|e| e.label != "Other reason"));
    assert!(entries.iter().any(|e| e.label == "Long commute"));
    assert!(entries.iter().any(|e| e.label == "Low salary"));
}

#[test]
fn reserved_code_is_configurable() {
    let store = sqlite_store();
    let config = ReportConfig {
        reserved_reason_code: 99,
        ..ReportConfig::default_test()
    };
    let entries = attrition_pareto(&store, 2015, &config).unwrap();
    let other = entries.iter().find(|e| e.label == "Other reason").unwrap();
    assert_eq!(other.count, 3);
}

#[test]
fn cumulative_is_monotonic_and_ends_at_100() {
    let store = sqlite_store();
    for min_year in 2014..=2022 {
        let entries = attrition_pareto(&store, min_year, &ReportConfig::default_test()).unwrap();
        for pair in entries.windows(2) {
            assert!(pair[0].cumulative_percentage <= pair[1].cumulative_percentage);
            assert!(pair[0].count >= pair[1].count);
        }
        assert_eq!(entries.last().unwrap().cumulative_percentage, 100.0);
    }
}

#[test]
fn no_qualifying_orders_is_an_empty_dataset() {
    let store = sqlite_store();
    assert!(matches!(
        attrition_pareto(&store, 2030, &ReportConfig::default_test()),
        Err(AnalyticsError::EmptyDataset { .. })
    ));
}

#[test]
fn rounding_mode_only_changes_exact_ties() {
    // 1 of 32 = 3.125% and 31 of 32 = 96.875%: both land exactly on a tie.
    let mut data = fixture();
    data.specialists = (1..=32).map(|id| specialist(id, Some(date(2024, 1, 10)))).collect();
    data.dismissal_orders = (1..=32)
        .map(|id| order(id, date(2024, 1, 10), id, if id == 1 { 2 } else { 1 }, ""))
        .collect();
    let store = MemoryStore::from(data);

    let half_up = attrition_pareto(&store, 2024, &ReportConfig::default_test()).unwrap();
    assert_eq!(
        summary(&half_up),
        vec![
            ("Resignation at own request", 31, 96.88, 96.88),
            ("Termination by mutual agreement", 1, 3.13, 100.0),
        ]
    );

    let half_even = ReportConfig {
        rounding: RoundingMode::HalfEven,
        ..ReportConfig::default_test()
    };
    let banker = attrition_pareto(&store, 2024, &half_even).unwrap();
    assert_eq!(
        summary(&banker),
        vec![
            ("Resignation at own request", 31, 96.88, 96.88),
            ("Termination by mutual agreement", 1, 3.12, 100.0),
        ]
    );
}

#[test]
fn dangling_reason_is_a_data_error() {
    let mut data = fixture();
    data.dismissal_orders.push(order(9, date(2022, 1, 1), 17, 42, ""));
    let store = MemoryStore::from(data);
    assert!(matches!(
        attrition_pareto(&store, 2015, &ReportConfig::default_test()),
        Err(AnalyticsError::DataIntegrity { .. })
    ));
}

#[test]
fn dangling_specialist_is_a_data_error() {
    let mut data = fixture();
    data.dismissal_orders.push(order(9, date(2022, 1, 1), 404, 1, ""));
    let store = MemoryStore::from(data);
    assert!(matches!(
        store.list_dismissal_records(),
        Err(AnalyticsError::DataIntegrity { .. })
    ));
}

#[test]
fn dismissing_a_specialist_sets_end_date_and_files_order() {
    let store = sqlite_store();
    store
        .dismiss_specialist(&order(20, date(2023, 5, 2), 18, 3, "Relocation"))
        .unwrap();

    let s = store
        .list_specialists()
        .unwrap()
        .into_iter()
        .find(|s| s.specialist_id == 18)
        .unwrap();
    assert_eq!(s.end_date, Some(date(2023, 5, 2)));
    assert_eq!(store.dismissal_order_count().unwrap(), 9);

    let entries = attrition_pareto(&store, 2023, &ReportConfig::default_test()).unwrap();
    assert_eq!(summary(&entries), vec![("Relocation", 1, 100.0, 100.0)]);
}

#[test]
fn dismissing_unknown_specialist_fails_cleanly() {
    let store = sqlite_store();
    let err = store
        .dismiss_specialist(&order(21, date(2023, 5, 2), 999, 1, ""))
        .unwrap_err();
    assert!(matches!(err, AnalyticsError::DataIntegrity { .. }));
    assert_eq!(store.dismissal_order_count().unwrap(), 8);
}
