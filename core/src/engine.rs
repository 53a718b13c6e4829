//! The report engine: a fixed registry of reports dispatched by name.
//!
//! REGISTRATION ORDER (fixed, documented; also the listing order):
//!   1. Reference listings   (department_documents, time_norms, salary_info)
//!   2. Staffing             (work_time_info, person_hours, staff_list,
//!                            active_headcount, missing_personnel)
//!   3. Attrition            (dismissal_reasons, dismissal_orders,
//!                            questionnaire, attrition_pareto)
//!
//! RULES:
//!   - Every run reads a fresh snapshot from the store and derives from scratch.
//!   - A failing report fails alone; `run_all` keeps going.
//!   - The engine holds no connection and no derived state.

use crate::{
    config::ReportConfig,
    error::{AnalyticsError, AnalyticsResult},
    reports::{
        ActiveHeadcount, AttritionPareto, DepartmentDocuments, DismissalOrders, DismissalReasons,
        HrReport, MissingPersonnel, PersonHoursReport, Questionnaire, ReportParams, SalaryInfo,
        StaffList, TimeNorms, WorkTimeReport,
    },
    store::EntityStore,
    table::ReportTable,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub needs_year: bool,
}

pub struct ReportEngine {
    reports: Vec<Box<dyn HrReport>>,
}

impl ReportEngine {
    /// An engine with nothing registered.
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    /// Build a fully wired engine with all reports registered.
    /// Call this instead of new() + manual register() calls.
    pub fn build(config: &ReportConfig) -> Self {
        let mut engine = Self::new();

        engine.register(Box::new(DepartmentDocuments));
        engine.register(Box::new(TimeNorms));
        engine.register(Box::new(SalaryInfo));

        engine.register(Box::new(WorkTimeReport));
        engine.register(Box::new(PersonHoursReport));
        engine.register(Box::new(StaffList));
        engine.register(Box::new(ActiveHeadcount));
        engine.register(Box::new(MissingPersonnel));

        engine.register(Box::new(DismissalReasons));
        engine.register(Box::new(DismissalOrders));
        engine.register(Box::new(Questionnaire));
        engine.register(Box::new(AttritionPareto::new(config.clone())));

        engine
    }

    /// Register a report. Names must be unique.
    pub fn register(&mut self, report: Box<dyn HrReport>) {
        assert!(
            self.find(report.name()).is_none(),
            "report '{}' registered twice",
            report.name()
        );
        self.reports.push(report);
    }

    pub fn find(&self, name: &str) -> Option<&dyn HrReport> {
        self.reports
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
    }

    pub fn catalog(&self) -> Vec<ReportInfo> {
        self.reports
            .iter()
            .map(|r| ReportInfo {
                name: r.name(),
                title: r.title(),
                needs_year: r.needs_year(),
            })
            .collect()
    }

    pub fn run(
        &self,
        name: &str,
        store: &dyn EntityStore,
        params: &ReportParams,
    ) -> AnalyticsResult<ReportTable> {
        let report = self.find(name).ok_or_else(|| AnalyticsError::ReportNotFound {
            name: name.to_string(),
        })?;
        log::info!("running report '{name}' (year={:?})", params.year);
        let table = report.build(store, params)?;
        log::debug!("report '{name}' produced {} rows", table.len());
        Ok(table)
    }

    /// Run every registered report in order. Each result stands alone.
    pub fn run_all(
        &self,
        store: &dyn EntityStore,
        params: &ReportParams,
    ) -> Vec<(&'static str, AnalyticsResult<ReportTable>)> {
        self.reports
            .iter()
            .map(|r| {
                let result = r.build(store, params);
                if let Err(e) = &result {
                    log::warn!("report '{}' failed: {e}", r.name());
                }
                (r.name(), result)
            })
            .collect()
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::build(&ReportConfig::default())
    }
}
