//! Staffing requirement: person-hours → whole headcount for a fiscal year.
//!
//! Always rounds UP: any fractional surplus of hours needs one more person.

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    model::WorkTimeInfo,
    store::EntityStore,
    types::{EntityId, FiscalYear},
    workload_aggregator::{person_hours_from, PersonHours},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Decimal places the hours/annual-hours ratio is settled to before the
/// ceiling, so float noise (2.0000000000004) does not add a person.
const RATIO_SCALE: f64 = 1e9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingRequirement {
    pub function_id: EntityId,
    pub person_hours: f64,
    pub required_headcount: u32,
}

/// `ceil(person_hours / annual_work_hours)`.
pub fn required_headcount(person_hours: f64, annual_work_hours: f64) -> AnalyticsResult<u32> {
    if !(annual_work_hours > 0.0) || !annual_work_hours.is_finite() {
        return Err(AnalyticsError::integrity(format!(
            "annual work hours must be positive, got {annual_work_hours}"
        )));
    }
    if !(person_hours >= 0.0) || !person_hours.is_finite() {
        return Err(AnalyticsError::integrity(format!(
            "required person-hours must be non-negative, got {person_hours}"
        )));
    }
    let ratio = ((person_hours / annual_work_hours) * RATIO_SCALE).round() / RATIO_SCALE;
    let headcount = ratio.ceil();
    if headcount > f64::from(u32::MAX) {
        return Err(AnalyticsError::integrity(format!(
            "required headcount {headcount} is out of range"
        )));
    }
    Ok(headcount as u32)
}

/// The year's constants, or `MissingYearConstant`. Never defaulted.
pub fn require_work_time<S: EntityStore + ?Sized>(
    store: &S,
    year: FiscalYear,
) -> AnalyticsResult<WorkTimeInfo> {
    store
        .get_work_time_info(year)?
        .ok_or(AnalyticsError::MissingYearConstant { year })
}

pub fn staffing_requirements(
    hours: &PersonHours,
    work_time: &WorkTimeInfo,
) -> AnalyticsResult<BTreeMap<EntityId, StaffingRequirement>> {
    hours
        .iter()
        .map(|(&function_id, &person_hours)| {
            let required_headcount =
                required_headcount(person_hours, work_time.annual_work_hours)?;
            Ok((
                function_id,
                StaffingRequirement {
                    function_id,
                    person_hours,
                    required_headcount,
                },
            ))
        })
        .collect()
}

/// Workload aggregation followed by headcount conversion for `year`.
pub fn requirements_for_year<S: EntityStore + ?Sized>(
    store: &S,
    year: FiscalYear,
) -> AnalyticsResult<BTreeMap<EntityId, StaffingRequirement>> {
    let work_time = require_work_time(store, year)?;
    let hours = person_hours_from(store)?;
    let requirements = staffing_requirements(&hours, &work_time)?;
    log::debug!(
        "year={year}: {} functions need staff ({} annual hours per person)",
        requirements.len(),
        work_time.annual_work_hours
    );
    Ok(requirements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_any_fraction() {
        assert_eq!(required_headcount(108.0, 1800.0).unwrap(), 1);
        assert_eq!(required_headcount(2000.0, 1800.0).unwrap(), 2);
        assert_eq!(required_headcount(1800.0, 1800.0).unwrap(), 1);
        assert_eq!(required_headcount(1800.5, 1800.0).unwrap(), 2);
    }

    #[test]
    fn zero_hours_need_nobody() {
        assert_eq!(required_headcount(0.0, 1973.0).unwrap(), 0);
    }

    #[test]
    fn float_noise_does_not_add_a_person() {
        // 0.1 * 3.0 * 12000.0 is not exactly 3600 in binary floating point.
        let hours = 0.1 * 3.0 * 12000.0;
        assert_eq!(required_headcount(hours, 1800.0).unwrap(), 2);
    }

    #[test]
    fn non_positive_annual_hours_is_a_data_error() {
        assert!(matches!(
            required_headcount(10.0, 0.0),
            Err(AnalyticsError::DataIntegrity { .. })
        ));
        assert!(matches!(
            required_headcount(10.0, -5.0),
            Err(AnalyticsError::DataIntegrity { .. })
        ));
    }

    #[test]
    fn requirements_keep_function_order_and_hours() {
        let hours = PersonHours::from([(2, 3700.0), (1, 100.0)]);
        let wt = WorkTimeInfo {
            year: 2025,
            annual_work_hours: 1800.0,
            daily_work_hours: 8.0,
            annual_work_days: 225,
        };
        let reqs = staffing_requirements(&hours, &wt).unwrap();
        let heads: Vec<_> = reqs.values().map(|r| (r.function_id, r.required_headcount)).collect();
        assert_eq!(heads, vec![(1, 1), (2, 3)]);
        assert_eq!(reqs[&2].person_hours, 3700.0);
    }
}
