//! Store methods for functions (job roles).

use crate::{error::AnalyticsResult, model::Function, types::EntityId};
use rusqlite::params;

use super::HrStore;

impl HrStore {
    pub fn insert_function(&self, f: &Function) -> AnalyticsResult<()> {
        self.conn.execute(
            "INSERT INTO function (function_id, name, department, salary)
             VALUES (?1, ?2, ?3, ?4)",
            params![f.function_id, &f.name, &f.department, f.salary],
        )?;
        Ok(())
    }

    pub fn update_function(&self, f: &Function) -> AnalyticsResult<()> {
        self.conn.execute(
            "UPDATE function SET name = ?2, department = ?3, salary = ?4
             WHERE function_id = ?1",
            params![f.function_id, &f.name, &f.department, f.salary],
        )?;
        Ok(())
    }

    /// Workload items of the function are removed with it.
    pub fn delete_function(&self, function_id: EntityId) -> AnalyticsResult<()> {
        self.conn.execute(
            "DELETE FROM function WHERE function_id = ?1",
            params![function_id],
        )?;
        Ok(())
    }

    pub fn all_functions(&self) -> AnalyticsResult<Vec<Function>> {
        let mut stmt = self.conn.prepare(
            "SELECT function_id, name, department, salary
             FROM function ORDER BY function_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Function {
                function_id: row.get(0)?,
                name: row.get(1)?,
                department: row.get(2)?,
                salary: row.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
