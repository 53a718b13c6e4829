//! Store methods for workload items.

use crate::{error::AnalyticsResult, model::WorkloadItem, types::EntityId};
use rusqlite::params;

use super::HrStore;

impl HrStore {
    pub fn insert_workload_item(&self, item: &WorkloadItem) -> AnalyticsResult<()> {
        self.conn.execute(
            "INSERT INTO workload_item (
                item_id, name, function_id, time_cost_hours, quantity, period
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                item.item_id,
                &item.name,
                item.function_id,
                item.time_cost_hours,
                item.quantity,
                item.period,
            ],
        )?;
        Ok(())
    }

    pub fn delete_workload_item(&self, item_id: EntityId) -> AnalyticsResult<()> {
        self.conn.execute(
            "DELETE FROM workload_item WHERE item_id = ?1",
            params![item_id],
        )?;
        Ok(())
    }

    pub fn all_workload_items(&self) -> AnalyticsResult<Vec<WorkloadItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT item_id, name, function_id, time_cost_hours, quantity, period
             FROM workload_item ORDER BY item_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(WorkloadItem {
                item_id: row.get(0)?,
                name: row.get(1)?,
                function_id: row.get(2)?,
                time_cost_hours: row.get(3)?,
                quantity: row.get(4)?,
                period: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
