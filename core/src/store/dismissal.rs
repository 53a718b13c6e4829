//! Store methods for the dismissal reason catalog and dismissal orders.

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    model::{DismissalOrder, DismissalReason, DismissalRecord},
    types::{EntityId, FiscalYear, ReasonCode},
};
use chrono::NaiveDate;
use rusqlite::params;

use super::{specialist::check_end_date, HrStore};

/// Order row with both sides of the join still optional.
struct JoinedOrderRow {
    order_id: EntityId,
    order_date: NaiveDate,
    specialist_id: EntityId,
    specialist_name: Option<String>,
    function_id: Option<EntityId>,
    end_date: Option<NaiveDate>,
    reason_id: ReasonCode,
    short_label: Option<String>,
    full_text: Option<String>,
    true_reason: String,
}

impl JoinedOrderRow {
    fn into_record(self) -> AnalyticsResult<DismissalRecord> {
        let (Some(specialist_name), Some(function_id)) = (self.specialist_name, self.function_id)
        else {
            return Err(AnalyticsError::integrity(format!(
                "dismissal order {} references missing specialist {}",
                self.order_id, self.specialist_id
            )));
        };
        let (Some(short_label), Some(full_text)) = (self.short_label, self.full_text) else {
            return Err(AnalyticsError::integrity(format!(
                "dismissal order {} references missing reason {}",
                self.order_id, self.reason_id
            )));
        };
        Ok(DismissalRecord {
            order_id: self.order_id,
            order_date: self.order_date,
            specialist_id: self.specialist_id,
            specialist_name,
            function_id,
            end_date: self.end_date,
            reason_id: self.reason_id,
            short_label,
            full_text,
            true_reason: self.true_reason,
        })
    }
}

impl HrStore {
    // ── Reason catalog ─────────────────────────────────────────────

    pub fn insert_dismissal_reason(&self, r: &DismissalReason) -> AnalyticsResult<()> {
        self.conn.execute(
            "INSERT INTO dismissal_reason (reason_id, short_label, full_text)
             VALUES (?1, ?2, ?3)",
            params![r.reason_id, &r.short_label, &r.full_text],
        )?;
        Ok(())
    }

    pub fn all_dismissal_reasons(&self) -> AnalyticsResult<Vec<DismissalReason>> {
        let mut stmt = self.conn.prepare(
            "SELECT reason_id, short_label, full_text
             FROM dismissal_reason ORDER BY reason_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(DismissalReason {
                reason_id: row.get(0)?,
                short_label: row.get(1)?,
                full_text: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ── Orders ─────────────────────────────────────────────────────

    pub fn insert_dismissal_order(&self, o: &DismissalOrder) -> AnalyticsResult<()> {
        self.conn.execute(
            "INSERT INTO dismissal_order (order_id, order_date, specialist_id, reason_id, true_reason)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                o.order_id,
                o.order_date,
                o.specialist_id,
                o.reason_id,
                &o.true_reason,
            ],
        )?;
        Ok(())
    }

    /// Record a dismissal: end the specialist on the order date (unless an
    /// end date is already set) and file the order, atomically.
    pub fn dismiss_specialist(&self, o: &DismissalOrder) -> AnalyticsResult<()> {
        let start_date = self.specialist_start_date(o.specialist_id)?.ok_or_else(|| {
            AnalyticsError::integrity(format!(
                "cannot dismiss unknown specialist {}",
                o.specialist_id
            ))
        })?;
        check_end_date(o.specialist_id, start_date, o.order_date)?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "UPDATE specialist SET end_date = COALESCE(end_date, ?2)
             WHERE specialist_id = ?1",
            params![o.specialist_id, o.order_date],
        )?;
        tx.execute(
            "INSERT INTO dismissal_order (order_id, order_date, specialist_id, reason_id, true_reason)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                o.order_id,
                o.order_date,
                o.specialist_id,
                o.reason_id,
                &o.true_reason,
            ],
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn delete_dismissal_order(&self, order_id: EntityId) -> AnalyticsResult<()> {
        self.conn.execute(
            "DELETE FROM dismissal_order WHERE order_id = ?1",
            params![order_id],
        )?;
        Ok(())
    }

    /// Orders joined with specialist and reason, ordered by order date.
    ///
    /// With `min_year`, only orders whose specialist ended in a year
    /// `>= min_year` are returned. Rows with a dangling reference are always
    /// fetched so they surface as integrity errors instead of vanishing.
    pub fn dismissal_records(
        &self,
        min_year: Option<FiscalYear>,
    ) -> AnalyticsResult<Vec<DismissalRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT o.order_id, o.order_date, o.specialist_id, sp.name, sp.function_id,
                    sp.end_date, o.reason_id, r.short_label, r.full_text, o.true_reason
             FROM dismissal_order AS o
             LEFT JOIN specialist AS sp ON sp.specialist_id = o.specialist_id
             LEFT JOIN dismissal_reason AS r ON r.reason_id = o.reason_id
             WHERE ?1 IS NULL
                OR sp.specialist_id IS NULL
                OR r.reason_id IS NULL
                OR CAST(substr(sp.end_date, 1, 4) AS INTEGER) >= ?1
             ORDER BY o.order_date, o.order_id",
        )?;
        let rows = stmt
            .query_map(params![min_year], |row| {
                Ok(JoinedOrderRow {
                    order_id: row.get(0)?,
                    order_date: row.get(1)?,
                    specialist_id: row.get(2)?,
                    specialist_name: row.get(3)?,
                    function_id: row.get(4)?,
                    end_date: row.get(5)?,
                    reason_id: row.get(6)?,
                    short_label: row.get(7)?,
                    full_text: row.get(8)?,
                    true_reason: row.get(9)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        let records = rows
            .into_iter()
            .map(JoinedOrderRow::into_record)
            .collect::<AnalyticsResult<Vec<_>>>()?;
        log::debug!(
            "read {} dismissal records (min_year={min_year:?})",
            records.len()
        );
        Ok(records)
    }

    pub fn dismissal_order_count(&self) -> AnalyticsResult<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM dismissal_order",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
