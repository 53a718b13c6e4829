//! Normalized HR entities as read from the entity store.
//!
//! These are plain records. The analytics core never mutates them; every
//! report reads a fresh set and derives from scratch.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    types::{EntityId, FiscalYear, ReasonCode},
};

/// A job role / position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub function_id: EntityId,
    pub name: String,
    pub department: String,
    pub salary: f64,
}

/// A recurring document or task a function has to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadItem {
    pub item_id: EntityId,
    pub name: String,
    pub function_id: EntityId,
    pub time_cost_hours: f64,
    pub quantity: f64,
    /// Occurrences per year.
    pub period: f64,
}

impl WorkloadItem {
    /// Person-hours per year this item costs its function.
    ///
    /// Negative (or NaN) inputs are reported, never clamped.
    pub fn annual_hours(&self) -> AnalyticsResult<f64> {
        for (field, value) in [
            ("time cost", self.time_cost_hours),
            ("quantity", self.quantity),
            ("period", self.period),
        ] {
            if !(value >= 0.0) {
                return Err(AnalyticsError::integrity(format!(
                    "workload item {} has invalid {field}: {value}",
                    self.item_id
                )));
            }
        }
        Ok(self.quantity * self.period * self.time_cost_hours)
    }
}

/// An employee holding one function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    pub specialist_id: EntityId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub function_id: EntityId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Specialist {
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn termination_year(&self) -> Option<FiscalYear> {
        self.end_date.map(|d| d.year())
    }

    /// Check `start_date <= end_date`.
    pub fn validate(&self) -> AnalyticsResult<()> {
        match self.end_date {
            Some(end) if end < self.start_date => Err(AnalyticsError::integrity(format!(
                "specialist {} ends on {end} before starting on {}",
                self.specialist_id, self.start_date
            ))),
            _ => Ok(()),
        }
    }
}

/// Work-time constants for one fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkTimeInfo {
    pub year: FiscalYear,
    pub annual_work_hours: f64,
    pub daily_work_hours: f64,
    pub annual_work_days: i64,
}

/// Catalog entry explaining why a specialist left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DismissalReason {
    pub reason_id: ReasonCode,
    pub short_label: String,
    pub full_text: String,
}

/// A dismissal order as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DismissalOrder {
    pub order_id: EntityId,
    pub order_date: NaiveDate,
    pub specialist_id: EntityId,
    pub reason_id: ReasonCode,
    /// Free text; only meaningful when the reason is the reserved code.
    #[serde(default)]
    pub true_reason: String,
}

/// A dismissal order joined with its specialist and reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DismissalRecord {
    pub order_id: EntityId,
    pub order_date: NaiveDate,
    pub specialist_id: EntityId,
    pub specialist_name: String,
    pub function_id: EntityId,
    pub end_date: Option<NaiveDate>,
    pub reason_id: ReasonCode,
    pub short_label: String,
    pub full_text: String,
    pub true_reason: String,
}

impl DismissalRecord {
    /// Year of the specialist's end date, if terminated.
    pub fn termination_year(&self) -> Option<FiscalYear> {
        self.end_date.map(|d| d.year())
    }

    pub fn terminated_since(&self, min_year: FiscalYear) -> bool {
        self.termination_year().is_some_and(|y| y >= min_year)
    }
}
