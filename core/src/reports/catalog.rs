//! Reference listings over functions and workload items.

use super::{FunctionIndex, HrReport, ReportParams};
use crate::{error::AnalyticsResult, store::EntityStore, table::ReportTable};

/// Documents each department produces, per function.
pub struct DepartmentDocuments;

impl HrReport for DepartmentDocuments {
    fn name(&self) -> &'static str {
        "department_documents"
    }

    fn title(&self) -> &'static str {
        "Documents by department"
    }

    fn build(&self, store: &dyn EntityStore, _params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let index = FunctionIndex::load(store)?;
        let mut rows = store
            .list_workload_items()?
            .into_iter()
            .map(|item| Ok((index.get(item.function_id)?, item)))
            .collect::<AnalyticsResult<Vec<_>>>()?;
        rows.sort_by(|(fa, a), (fb, b)| {
            (&fa.department, &fa.name, a.item_id).cmp(&(&fb.department, &fb.name, b.item_id))
        });

        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Department", "Function", "Document", "Period", "Quantity"],
        );
        for (f, item) in rows {
            table.push_row(vec![
                f.department.as_str().into(),
                f.name.as_str().into(),
                item.name.into(),
                item.period.into(),
                item.quantity.into(),
            ]);
        }
        Ok(table)
    }
}

/// Time norm of one document, in hours.
pub struct TimeNorms;

impl HrReport for TimeNorms {
    fn name(&self) -> &'static str {
        "time_norms"
    }

    fn title(&self) -> &'static str {
        "Document time norms"
    }

    fn build(&self, store: &dyn EntityStore, _params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let index = FunctionIndex::load(store)?;
        let mut items = store.list_workload_items()?;
        items.sort_by(|a, b| a.name.cmp(&b.name).then(a.item_id.cmp(&b.item_id)));

        let mut table = ReportTable::new(
            self.name(),
            self.title(),
            &["Document", "Department", "Function", "Unit", "Time, h"],
        );
        for item in items {
            let f = index.get(item.function_id)?;
            table.push_row(vec![
                item.name.into(),
                f.department.as_str().into(),
                f.name.as_str().into(),
                "1 document".into(),
                item.time_cost_hours.into(),
            ]);
        }
        Ok(table)
    }
}

pub struct SalaryInfo;

impl HrReport for SalaryInfo {
    fn name(&self) -> &'static str {
        "salary_info"
    }

    fn title(&self) -> &'static str {
        "Salary rates"
    }

    fn build(&self, store: &dyn EntityStore, _params: &ReportParams) -> AnalyticsResult<ReportTable> {
        let mut functions = store.list_functions()?;
        functions.sort_by_key(|f| f.function_id);
        let mut table = ReportTable::new(self.name(), self.title(), &["Function", "Salary rate"]);
        for f in functions {
            table.push_row(vec![f.name.into(), f.salary.into()]);
        }
        Ok(table)
    }
}
