//! In-memory entity store over injected data.
//!
//! Holds a plain owned snapshot of every entity list, so it is `Send + Sync`
//! and can be shared between independent report computations.

use crate::{
    dataset::Dataset,
    error::{AnalyticsError, AnalyticsResult},
    model::{DismissalReason, DismissalRecord, Function, Specialist, WorkTimeInfo, WorkloadItem},
    types::FiscalYear,
};
use std::collections::HashMap;

use super::EntityStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Dataset,
}

impl MemoryStore {
    pub fn new(data: Dataset) -> Self {
        Self { data }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }
}

impl From<Dataset> for MemoryStore {
    fn from(data: Dataset) -> Self {
        Self::new(data)
    }
}

impl EntityStore for MemoryStore {
    fn list_functions(&self) -> AnalyticsResult<Vec<Function>> {
        Ok(self.data.functions.clone())
    }

    fn list_workload_items(&self) -> AnalyticsResult<Vec<WorkloadItem>> {
        Ok(self.data.workload_items.clone())
    }

    fn list_specialists(&self) -> AnalyticsResult<Vec<Specialist>> {
        Ok(self.data.specialists.clone())
    }

    fn get_work_time_info(&self, year: FiscalYear) -> AnalyticsResult<Option<WorkTimeInfo>> {
        // Last entry wins, as with repeated upserts into `HrStore`.
        Ok(self.data.work_time.iter().rfind(|w| w.year == year).cloned())
    }

    fn list_dismissal_reasons(&self) -> AnalyticsResult<Vec<DismissalReason>> {
        Ok(self.data.dismissal_reasons.clone())
    }

    fn list_dismissal_records(&self) -> AnalyticsResult<Vec<DismissalRecord>> {
        let specialists: HashMap<_, _> = self
            .data
            .specialists
            .iter()
            .map(|s| (s.specialist_id, s))
            .collect();
        let reasons: HashMap<_, _> = self
            .data
            .dismissal_reasons
            .iter()
            .map(|r| (r.reason_id, r))
            .collect();

        let mut records = self
            .data
            .dismissal_orders
            .iter()
            .map(|o| {
                let sp = specialists.get(&o.specialist_id).ok_or_else(|| {
                    AnalyticsError::integrity(format!(
                        "dismissal order {} references missing specialist {}",
                        o.order_id, o.specialist_id
                    ))
                })?;
                let reason = reasons.get(&o.reason_id).ok_or_else(|| {
                    AnalyticsError::integrity(format!(
                        "dismissal order {} references missing reason {}",
                        o.order_id, o.reason_id
                    ))
                })?;
                Ok(DismissalRecord {
                    order_id: o.order_id,
                    order_date: o.order_date,
                    specialist_id: sp.specialist_id,
                    specialist_name: sp.name.clone(),
                    function_id: sp.function_id,
                    end_date: sp.end_date,
                    reason_id: reason.reason_id,
                    short_label: reason.short_label.clone(),
                    full_text: reason.full_text.clone(),
                    true_reason: o.true_reason.clone(),
                })
            })
            .collect::<AnalyticsResult<Vec<_>>>()?;
        records.sort_by_key(|r| (r.order_date, r.order_id));
        Ok(records)
    }
}
