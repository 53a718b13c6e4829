//! Report trait and the tabular reports built on the analyzers.
//!
//! RULE: Every report implements HrReport.
//! A report reads what it needs from the injected `EntityStore`, derives
//! from scratch, and returns a `ReportTable`. Nothing is cached or persisted.

mod attrition;
mod catalog;
mod staffing;

pub use attrition::{AttritionPareto, DismissalOrders, DismissalReasons, Questionnaire};
pub use catalog::{DepartmentDocuments, SalaryInfo, TimeNorms};
pub use staffing::{ActiveHeadcount, MissingPersonnel, PersonHoursReport, StaffList, WorkTimeReport};

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    model::Function,
    store::EntityStore,
    table::ReportTable,
    types::{EntityId, FiscalYear},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-supplied parameters. The core never picks a default year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParams {
    #[serde(default)]
    pub year: Option<FiscalYear>,
}

impl ReportParams {
    pub fn for_year(year: FiscalYear) -> Self {
        Self { year: Some(year) }
    }

    pub fn require_year(&self, report: &str) -> AnalyticsResult<FiscalYear> {
        self.year.ok_or_else(|| AnalyticsError::YearRequired {
            report: report.to_string(),
        })
    }
}

/// The contract every report must fulfill.
pub trait HrReport: Send + Sync {
    /// Unique stable name, used for dispatch.
    fn name(&self) -> &'static str;

    /// Human-readable title printed above the table.
    fn title(&self) -> &'static str;

    /// Whether `build` needs `params.year`.
    fn needs_year(&self) -> bool {
        false
    }

    fn build(&self, store: &dyn EntityStore, params: &ReportParams) -> AnalyticsResult<ReportTable>;
}

/// Function id → function, for joining derived rows back to names.
struct FunctionIndex(HashMap<EntityId, Function>);

impl FunctionIndex {
    fn load(store: &dyn EntityStore) -> AnalyticsResult<Self> {
        Ok(Self(
            store
                .list_functions()?
                .into_iter()
                .map(|f| (f.function_id, f))
                .collect(),
        ))
    }

    fn get(&self, function_id: EntityId) -> AnalyticsResult<&Function> {
        self.0.get(&function_id).ok_or_else(|| {
            AnalyticsError::integrity(format!("reference to unknown function {function_id}"))
        })
    }

    /// Resolve ids and sort by function name, then id.
    fn ordered<T>(&self, rows: impl IntoIterator<Item = (EntityId, T)>) -> AnalyticsResult<Vec<(&Function, T)>> {
        let mut joined = rows
            .into_iter()
            .map(|(id, v)| Ok((self.get(id)?, v)))
            .collect::<AnalyticsResult<Vec<_>>>()?;
        joined.sort_by(|a, b| {
            a.0.name
                .cmp(&b.0.name)
                .then(a.0.function_id.cmp(&b.0.function_id))
        });
        Ok(joined)
    }
}
