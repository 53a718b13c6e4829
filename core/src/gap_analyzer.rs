//! Gap analysis: required vs. active headcount per function.
//!
//! Full outer join on function; a missing side counts as zero.
//! `deviation = required − active`: positive means understaffed.

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    headcount_counter::headcount_from,
    model::Function,
    staffing_calculator::requirements_for_year,
    store::EntityStore,
    types::{EntityId, FiscalYear},
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    Understaffed,
    Balanced,
    Overstaffed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingGap {
    pub function_id: EntityId,
    pub function_name: String,
    pub department: String,
    pub required_headcount: u32,
    pub active_headcount: u32,
    pub deviation: i64,
}

impl StaffingGap {
    pub fn status(&self) -> GapStatus {
        match self.deviation {
            d if d > 0 => GapStatus::Understaffed,
            0 => GapStatus::Balanced,
            _ => GapStatus::Overstaffed,
        }
    }
}

/// Join required and active headcount, ordered by function name
/// (then id, for equal names).
pub fn staffing_gaps(
    functions: &[Function],
    required: &BTreeMap<EntityId, u32>,
    active: &BTreeMap<EntityId, u32>,
) -> AnalyticsResult<Vec<StaffingGap>> {
    let by_id: HashMap<EntityId, &Function> =
        functions.iter().map(|f| (f.function_id, f)).collect();

    let ids: BTreeSet<EntityId> = required.keys().chain(active.keys()).copied().collect();

    let mut gaps = ids
        .into_iter()
        .map(|function_id| {
            let function = by_id.get(&function_id).ok_or_else(|| {
                AnalyticsError::integrity(format!(
                    "headcount recorded for unknown function {function_id}"
                ))
            })?;
            let required_headcount = required.get(&function_id).copied().unwrap_or(0);
            let active_headcount = active.get(&function_id).copied().unwrap_or(0);
            Ok(StaffingGap {
                function_id,
                function_name: function.name.clone(),
                department: function.department.clone(),
                required_headcount,
                active_headcount,
                deviation: i64::from(required_headcount) - i64::from(active_headcount),
            })
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    gaps.sort_by(|a, b| {
        a.function_name
            .cmp(&b.function_name)
            .then(a.function_id.cmp(&b.function_id))
    });
    Ok(gaps)
}

/// The "missing personnel" report for `year`.
pub fn missing_personnel<S: EntityStore + ?Sized>(
    store: &S,
    year: FiscalYear,
) -> AnalyticsResult<Vec<StaffingGap>> {
    let required: BTreeMap<EntityId, u32> = requirements_for_year(store, year)?
        .into_iter()
        .map(|(id, r)| (id, r.required_headcount))
        .collect();
    let active = headcount_from(store)?;
    let gaps = staffing_gaps(&store.list_functions()?, &required, &active)?;

    let short: i64 = gaps.iter().map(|g| g.deviation.max(0)).sum();
    log::info!(
        "year={year}: {} functions analysed, {short} positions unfilled",
        gaps.len()
    );
    Ok(gaps)
}
