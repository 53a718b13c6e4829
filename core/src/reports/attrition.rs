//! Attrition reports: Pareto breakdown, order register, reason catalog,
//! exit questionnaire.

use super::{FunctionIndex, HrReport, ReportParams};
use crate::{
    attrition_pareto::{attrition_pareto, REPORT_NAME},
    config::ReportConfig,
    error::AnalyticsResult,
    store::EntityStore,
    table::ReportTable,
};
use chrono::Datelike;

pub struct AttritionPareto {
    config: ReportConfig,
}

impl AttritionPareto {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }
}

impl HrReport for AttritionPareto {
    fn name(&self) -> &'static str {
        REPORT_NAME
    }

    fn title(&self) -> &'static str {
        "Dismissal causes (Pareto)"
    }

    fn needs_year(&self) -> bool {
        true
    }

    fn build(&self, store: &dyn EntityStore, params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let min_year = params.require_year(self.name())?;
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Cause", "Count", "Percentage", "Cumulative percentage"],
        );
        for entry in attrition_pareto(store, min_year, &self.config)? {
            table.push_row(vec![
                entry.label.into(),
                entry.count.into(),
                entry.percentage.into(),
                entry.cumulative_percentage.into(),
            ]);
        }
        Ok(table)
    }
}

/// Register of every dismissal order, by date.
pub struct DismissalOrders;

impl HrReport for DismissalOrders {
    fn name(&self) -> &'static str {
        "dismissal_orders"
    }

    fn title(&self) -> &'static str {
        "Dismissal orders"
    }

    fn build(&self, store: &dyn EntityStore, _params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Order", "Date", "Specialist", "Reason"],
        );
        for r in store.list_dismissal_records()? {
            table.push_row(vec![
                r.order_id.into(),
                r.order_date.into(),
                r.specialist_name.into(),
                r.short_label.into(),
            ]);
        }
        Ok(table)
    }
}

pub struct DismissalReasons;

impl HrReport for DismissalReasons {
    fn name(&self) -> &'static str {
        "dismissal_reasons"
    }

    fn title(&self) -> &'static str {
        "Dismissal reason catalog"
    }

    fn build(&self, store: &dyn EntityStore, _params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let mut reasons = store.list_dismissal_reasons()?;
        reasons.sort_by_key(|r| r.reason_id);
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Code", "Reason", "Description"],
        );
        for r in reasons {
            table.push_row(vec![r.reason_id.into(), r.short_label.into(), r.full_text.into()]);
        }
        Ok(table)
    }
}

/// Free-text exit reasons of orders filed in or after the given year.
pub struct Questionnaire;

impl HrReport for Questionnaire {
    fn name(&self) -> &'static str {
        "questionnaire"
    }

    fn title(&self) -> &'static str {
        "Exit questionnaire"
    }

    fn needs_year(&self) -> bool {
        true
    }

    fn build(&self, store: &dyn EntityStore, params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let min_year = params.require_year(self.name())?;
        let index = FunctionIndex::load(store)?;
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Department", "Function", "Specialist", "True reason"],
        );
        for r in store.list_dismissal_records()? {
            if r.true_reason.trim().is_empty() || r.order_date.year() < min_year {
                continue;
            }
            let f = index.get(r.function_id)?;
            table.push_row(vec![
                f.department.as_str().into(),
                f.name.as_str().into(),
                r.specialist_name.as_str().into(),
                r.true_reason.as_str().into(),
            ]);
        }
        Ok(table)
    }
}
