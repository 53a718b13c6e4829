//! Attrition Pareto analysis: ranked dismissal causes with cumulative share.
//!
//! 1. Resolve each order's effective cause (free-text true reason for the
//!    reserved "other" code, catalog text otherwise).
//! 2. Count orders per cause.
//! 3. Rank by count descending, ties by label ascending.
//! 4. Percentage and running cumulative percentage, 2 decimals.
//!
//! Percentages are computed in exact integer hundredths so the last
//! cumulative figure is always exactly 100.00.

use crate::{
    config::{ReportConfig, RoundingMode},
    error::{AnalyticsError, AnalyticsResult},
    model::DismissalRecord,
    store::EntityStore,
    types::{FiscalYear, ReasonCode},
};
use serde::Serialize;
use std::collections::HashMap;

pub const REPORT_NAME: &str = "attrition_pareto";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoEntry {
    pub label: String,
    pub count: u64,
    pub percentage: f64,
    pub cumulative_percentage: f64,
}

/// The semantic cause of one dismissal.
pub fn effective_cause(record: &DismissalRecord, reserved_code: ReasonCode) -> AnalyticsResult<&str> {
    if record.reason_id != reserved_code {
        return Ok(record.full_text.as_str());
    }
    if record.true_reason.trim().is_empty() {
        return Err(AnalyticsError::integrity(format!(
            "dismissal order {} uses reason {reserved_code} but records no true reason",
            record.order_id
        )));
    }
    Ok(record.true_reason.as_str())
}

/// `part / total × 100`, rounded to 2 decimals.
pub fn round_percent(part: u64, total: u64, mode: RoundingMode) -> f64 {
    debug_assert!(total > 0);
    let scaled = u128::from(part) * 10_000;
    let total = u128::from(total);
    let (quot, rem) = (scaled / total, scaled % total);
    let twice = rem * 2;
    let bump = match mode {
        RoundingMode::HalfUp => twice >= total,
        RoundingMode::HalfEven => twice > total || (twice == total && quot % 2 == 1),
    };
    let hundredths = quot + u128::from(bump);
    hundredths as f64 / 100.0
}

pub fn pareto_breakdown(
    records: &[DismissalRecord],
    reserved_code: ReasonCode,
    mode: RoundingMode,
) -> AnalyticsResult<Vec<ParetoEntry>> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *counts.entry(effective_cause(record, reserved_code)?).or_insert(0) += 1;
    }

    let total: u64 = counts.values().sum();
    if total == 0 {
        return Err(AnalyticsError::EmptyDataset {
            report: REPORT_NAME.into(),
        });
    }

    let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut running = 0u64;
    let entries = ranked
        .into_iter()
        .map(|(label, count)| {
            running += count;
            ParetoEntry {
                label: label.to_string(),
                count,
                percentage: round_percent(count, total, mode),
                cumulative_percentage: round_percent(running, total, mode),
            }
        })
        .collect();
    Ok(entries)
}

/// Pareto breakdown of every dismissal whose specialist left in a year
/// `>= min_year`.
pub fn attrition_pareto<S: EntityStore + ?Sized>(
    store: &S,
    min_year: FiscalYear,
    config: &ReportConfig,
) -> AnalyticsResult<Vec<ParetoEntry>> {
    let records = store.list_dismissal_orders(min_year)?;
    let entries = pareto_breakdown(&records, config.reserved_reason_code, config.rounding)?;
    if let Some(top) = entries.first() {
        log::info!(
            "min_year={min_year}: {} dismissals, {} causes, top cause '{}' ({:.2}%)",
            records.len(),
            entries.len(),
            top.label,
            top.percentage
        );
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const OTHER: ReasonCode = 3;

    fn record(order_id: i64, reason_id: ReasonCode, full_text: &str, true_reason: &str) -> DismissalRecord {
        let d = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        DismissalRecord {
            order_id,
            order_date: d,
            specialist_id: order_id,
            specialist_name: format!("S{order_id}"),
            function_id: 1,
            end_date: Some(d),
            reason_id,
            short_label: format!("r{reason_id}"),
            full_text: full_text.into(),
            true_reason: true_reason.into(),
        }
    }

    #[test]
    fn half_up_and_half_even_differ_only_on_ties() {
        // 1/8 is exact; 1/32 = 3.125% and 3/32 = 9.375% are ties.
        assert_eq!(round_percent(1, 8, RoundingMode::HalfUp), 12.5);
        assert_eq!(round_percent(1, 32, RoundingMode::HalfUp), 3.13);
        assert_eq!(round_percent(1, 32, RoundingMode::HalfEven), 3.12);
        assert_eq!(round_percent(3, 32, RoundingMode::HalfUp), 9.38);
        assert_eq!(round_percent(3, 32, RoundingMode::HalfEven), 9.38);
        assert_eq!(round_percent(1, 3, RoundingMode::HalfUp), 33.33);
        assert_eq!(round_percent(2, 3, RoundingMode::HalfEven), 66.67);
    }

    #[test]
    fn ranks_by_count_then_label() {
        let records = vec![
            record(1, 1, "Salary", ""),
            record(2, 2, "Relocation", ""),
            record(3, 1, "Salary", ""),
            record(4, 4, "Health", ""),
        ];
        let entries = pareto_breakdown(&records, OTHER, RoundingMode::HalfUp).unwrap();
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Salary", "Health", "Relocation"]);
        assert_eq!(entries[0].percentage, 50.0);
        assert_eq!(entries[1].cumulative_percentage, 75.0);
        assert_eq!(entries[2].cumulative_percentage, 100.0);
    }

    #[test]
    fn reserved_reason_groups_by_true_reason() {
        let records = vec![
            record(1, OTHER, "Other", "Conflict with manager"),
            record(2, OTHER, "Other", "Long commute"),
            record(3, OTHER, "Other", "Conflict with manager"),
        ];
        let entries = pareto_breakdown(&records, OTHER, RoundingMode::HalfUp).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Conflict with manager");
        assert_eq!(entries[0].count, 2);
        assert!(entries.iter().all(|e| e.label != "Other"));
    }

    #[test]
    fn true_reasons_are_grouped_verbatim() {
        let records = vec![
            record(1, OTHER, "Other", "Long commute"),
            record(2, OTHER, "Other", " Long commute "),
        ];
        let entries = pareto_breakdown(&records, OTHER, RoundingMode::HalfUp).unwrap();
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec![" Long commute ", "Long commute"]);
    }

    #[test]
    fn cumulative_ends_at_exactly_one_hundred() {
        let records: Vec<_> = (0..7)
            .map(|i| record(i, 10 + i % 3, &format!("cause {}", i % 3), ""))
            .collect();
        let entries = pareto_breakdown(&records, OTHER, RoundingMode::HalfUp).unwrap();
        for pair in entries.windows(2) {
            assert!(pair[0].cumulative_percentage <= pair[1].cumulative_percentage);
        }
        assert_eq!(entries.last().unwrap().cumulative_percentage, 100.0);
    }

    #[test]
    fn no_orders_is_an_empty_dataset() {
        assert!(matches!(
            pareto_breakdown(&[], OTHER, RoundingMode::HalfUp),
            Err(AnalyticsError::EmptyDataset { .. })
        ));
    }

    #[test]
    fn reserved_reason_without_text_is_a_data_error() {
        assert!(matches!(
            pareto_breakdown(&[record(1, OTHER, "Other", "  ")], OTHER, RoundingMode::HalfUp),
            Err(AnalyticsError::DataIntegrity { .. })
        ));
    }
}
