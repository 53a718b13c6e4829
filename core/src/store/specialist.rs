//! Store methods for specialists (employees).

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    model::Specialist,
    types::EntityId,
};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::HrStore;

impl HrStore {
    pub fn insert_specialist(&self, s: &Specialist) -> AnalyticsResult<()> {
        s.validate()?;
        self.conn.execute(
            "INSERT INTO specialist (
                specialist_id, name, birth_date, function_id, start_date, end_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                s.specialist_id,
                &s.name,
                s.birth_date,
                s.function_id,
                s.start_date,
                s.end_date,
            ],
        )?;
        Ok(())
    }

    /// Set (or clear, with `None`) the specialist's end date.
    pub fn update_specialist_end_date(
        &self,
        specialist_id: EntityId,
        end_date: Option<NaiveDate>,
    ) -> AnalyticsResult<()> {
        let start_date = self
            .specialist_start_date(specialist_id)?
            .ok_or_else(|| AnalyticsError::integrity(format!("unknown specialist {specialist_id}")))?;
        if let Some(end) = end_date {
            check_end_date(specialist_id, start_date, end)?;
        }
        self.conn.execute(
            "UPDATE specialist SET end_date = ?2 WHERE specialist_id = ?1",
            params![specialist_id, end_date],
        )?;
        Ok(())
    }

    pub(super) fn specialist_start_date(
        &self,
        specialist_id: EntityId,
    ) -> AnalyticsResult<Option<NaiveDate>> {
        let start_date = self
            .conn
            .query_row(
                "SELECT start_date FROM specialist WHERE specialist_id = ?1",
                params![specialist_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(start_date)
    }

    pub fn all_specialists(&self) -> AnalyticsResult<Vec<Specialist>> {
        let mut stmt = self.conn.prepare(
            "SELECT specialist_id, name, birth_date, function_id, start_date, end_date
             FROM specialist ORDER BY start_date, specialist_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Specialist {
                specialist_id: row.get(0)?,
                name: row.get(1)?,
                birth_date: row.get(2)?,
                function_id: row.get(3)?,
                start_date: row.get(4)?,
                end_date: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ── Test / summary helpers ────────────────────────────────────────

    pub fn active_specialist_count(&self) -> AnalyticsResult<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM specialist WHERE end_date IS NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

pub(super) fn check_end_date(
    specialist_id: EntityId,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AnalyticsResult<()> {
    if end_date < start_date {
        return Err(AnalyticsError::integrity(format!(
            "specialist {specialist_id} cannot end on {end_date} before starting on {start_date}"
        )));
    }
    Ok(())
}
