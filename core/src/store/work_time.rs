//! Store methods for per-year work-time constants.

use crate::{error::AnalyticsResult, model::WorkTimeInfo, types::FiscalYear};
use rusqlite::{params, OptionalExtension};

use super::HrStore;

impl HrStore {
    /// Insert or replace the constants for `info.year`.
    pub fn upsert_work_time_info(&self, info: &WorkTimeInfo) -> AnalyticsResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO work_time_info (
                year, annual_work_hours, daily_work_hours, annual_work_days
            ) VALUES (?1, ?2, ?3, ?4)",
            params![
                info.year,
                info.annual_work_hours,
                info.daily_work_hours,
                info.annual_work_days,
            ],
        )?;
        Ok(())
    }

    pub fn work_time_info(&self, year: FiscalYear) -> AnalyticsResult<Option<WorkTimeInfo>> {
        let info = self
            .conn
            .query_row(
                "SELECT year, annual_work_hours, daily_work_hours, annual_work_days
                 FROM work_time_info WHERE year = ?1",
                params![year],
                |row| {
                    Ok(WorkTimeInfo {
                        year: row.get(0)?,
                        annual_work_hours: row.get(1)?,
                        daily_work_hours: row.get(2)?,
                        annual_work_days: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(info)
    }

    pub fn delete_work_time_info(&self, year: FiscalYear) -> AnalyticsResult<()> {
        self.conn.execute(
            "DELETE FROM work_time_info WHERE year = ?1",
            params![year],
        )?;
        Ok(())
    }
}
