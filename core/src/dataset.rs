//! Whole-dataset JSON documents.
//!
//! A `Dataset` carries every entity list at once. It is what the runner
//! imports from disk, what the demo generator produces, and what backs a
//! `MemoryStore`.

use crate::{
    error::AnalyticsResult,
    model::{DismissalOrder, DismissalReason, Function, Specialist, WorkTimeInfo, WorkloadItem},
    store::HrStore,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub workload_items: Vec<WorkloadItem>,
    #[serde(default)]
    pub specialists: Vec<Specialist>,
    #[serde(default)]
    pub work_time: Vec<WorkTimeInfo>,
    #[serde(default)]
    pub dismissal_reasons: Vec<DismissalReason>,
    #[serde(default)]
    pub dismissal_orders: Vec<DismissalOrder>,
}

/// Row counts written by [`Dataset::import_into`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub functions: usize,
    pub workload_items: usize,
    pub specialists: usize,
    pub work_time: usize,
    pub dismissal_reasons: usize,
    pub dismissal_orders: usize,
}

impl Dataset {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        Ok(dataset)
    }

    pub fn from_json(json: &str) -> AnalyticsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> AnalyticsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write every entity into `store`, parents before children.
    ///
    /// Orders are filed as-is; specialist end dates come from the dataset.
    /// The import is all-or-nothing: any failing row rolls back every row.
    pub fn import_into(&self, store: &HrStore) -> AnalyticsResult<ImportSummary> {
        store.in_transaction(|store| {
            for f in &self.functions {
                store.insert_function(f)?;
            }
            for item in &self.workload_items {
                store.insert_workload_item(item)?;
            }
            for s in &self.specialists {
                store.insert_specialist(s)?;
            }
            for w in &self.work_time {
                store.upsert_work_time_info(w)?;
            }
            for r in &self.dismissal_reasons {
                store.insert_dismissal_reason(r)?;
            }
            for o in &self.dismissal_orders {
                store.insert_dismissal_order(o)?;
            }
            Ok(())
        })?;

        let summary = ImportSummary {
            functions: self.functions.len(),
            workload_items: self.workload_items.len(),
            specialists: self.specialists.len(),
            work_time: self.work_time.len(),
            dismissal_reasons: self.dismissal_reasons.len(),
            dismissal_orders: self.dismissal_orders.len(),
        };
        log::info!("imported dataset: {summary:?}");
        Ok(summary)
    }
}
