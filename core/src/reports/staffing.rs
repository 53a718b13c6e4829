//! Staffing reports: person-hours, staff list, active headcount, gaps.

use super::{FunctionIndex, HrReport, ReportParams};
use crate::{
    error::AnalyticsResult,
    gap_analyzer::missing_personnel,
    headcount_counter::headcount_from,
    staffing_calculator::{require_work_time, requirements_for_year},
    store::EntityStore,
    table::ReportTable,
    workload_aggregator::person_hours_from,
};

pub struct PersonHoursReport;

impl HrReport for PersonHoursReport {
    fn name(&self) -> &'static str {
        "person_hours"
    }

    fn title(&self) -> &'static str {
        "Required person-hours per function"
    }

    fn build(&self, store: &dyn EntityStore, _params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let index = FunctionIndex::load(store)?;
        let hours = person_hours_from(store)?;
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Department", "Function", "Required person-hours"],
        );
        for (f, h) in index.ordered(hours)? {
            table.push_row(vec![f.department.as_str().into(), f.name.as_str().into(), h.into()]);
        }
        Ok(table)
    }
}

/// Required headcount per function for a fiscal year.
pub struct StaffList;

impl HrReport for StaffList {
    fn name(&self) -> &'static str {
        "staff_list"
    }

    fn title(&self) -> &'static str {
        "Staff list"
    }

    fn needs_year(&self) -> bool {
        true
    }

    fn build(&self, store: &dyn EntityStore, params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let year = params.require_year(self.name())?;
        let requirements = requirements_for_year(store, year)?;
        let index = FunctionIndex::load(store)?;
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Department", "Function", "Required headcount", "Salary rate"],
        );
        for (f, r) in index.ordered(requirements)? {
            table.push_row(vec![
                f.department.as_str().into(),
                f.name.as_str().into(),
                r.required_headcount.into(),
                f.salary.into(),
            ]);
        }
        Ok(table)
    }
}

pub struct ActiveHeadcount;

impl HrReport for ActiveHeadcount {
    fn name(&self) -> &'static str {
        "active_headcount"
    }

    fn title(&self) -> &'static str {
        "Active specialists"
    }

    fn build(&self, store: &dyn EntityStore, _params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let counts = headcount_from(store)?;
        let index = FunctionIndex::load(store)?;
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Department", "Function", "Active headcount"],
        );
        for (f, n) in index.ordered(counts)? {
            table.push_row(vec![f.department.as_str().into(), f.name.as_str().into(), n.into()]);
        }
        Ok(table)
    }
}

/// Required vs. active headcount: the missing personnel report.
pub struct MissingPersonnel;

impl HrReport for MissingPersonnel {
    fn name(&self) -> &'static str {
        "missing_personnel"
    }

    fn title(&self) -> &'static str {
        "Missing personnel"
    }

    fn needs_year(&self) -> bool {
        true
    }

    fn build(&self, store: &dyn EntityStore, params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let year = params.require_year(self.name())?;
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Department", "Function", "Required headcount", "Active headcount", "Deviation"],
        );
        for gap in missing_personnel(store, year)? {
            table.push_row(vec![
                gap.department.into(),
                gap.function_name.into(),
                gap.required_headcount.into(),
                gap.active_headcount.into(),
                gap.deviation.into(),
            ]);
        }
        Ok(table)
    }
}

pub struct WorkTimeReport;

impl HrReport for WorkTimeReport {
    fn name(&self) -> &'static str {
        "work_time_info"
    }

    fn title(&self) -> &'static str {
        "Work time"
    }

    fn needs_year(&self) -> bool {
        true
    }

    fn build(&self, store: &dyn EntityStore, params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let year = params.require_year(self.name())?;
        let info = require_work_time(store, year)?;
        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Year", "Annual work hours", "Daily work hours", "Annual work days"],
        );
        table.push_row(vec![
            i64::from(info.year).into(),
            info.annual_work_hours.into(),
            info.daily_work_hours.into(),
            info.annual_work_days.into(),
        ]);
        Ok(table)
    }
}
