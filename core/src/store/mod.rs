//! Entity store: read access to normalized HR records.
//!
//! RULE: Only the store talks to the database.
//! Analyzers receive entity lists (or an `EntityStore` handle) and never
//! execute SQL directly. The write side (`insert_*`, `delete_*`) belongs to
//! the data-access collaborator; the analytics core never calls it.

mod dismissal;
mod function;
mod memory;
mod specialist;
mod work_time;
mod workload;

pub use memory::MemoryStore;

use crate::{
    error::AnalyticsResult,
    model::{DismissalReason, DismissalRecord, Function, Specialist, WorkTimeInfo, WorkloadItem},
    types::FiscalYear,
};
use rusqlite::Connection;

/// Read interface every analyzer and report consumes.
pub trait EntityStore {
    fn list_functions(&self) -> AnalyticsResult<Vec<Function>>;

    fn list_workload_items(&self) -> AnalyticsResult<Vec<WorkloadItem>>;

    fn list_specialists(&self) -> AnalyticsResult<Vec<Specialist>>;

    /// `None` when no constants were recorded for `year`.
    fn get_work_time_info(&self, year: FiscalYear) -> AnalyticsResult<Option<WorkTimeInfo>>;

    fn list_dismissal_reasons(&self) -> AnalyticsResult<Vec<DismissalReason>>;

    /// Every dismissal order joined with its specialist and reason,
    /// ordered by order date.
    fn list_dismissal_records(&self) -> AnalyticsResult<Vec<DismissalRecord>>;

    /// Orders whose specialist's end date falls in a year `>= min_year`.
    fn list_dismissal_orders(&self, min_year: FiscalYear) -> AnalyticsResult<Vec<DismissalRecord>> {
        Ok(self
            .list_dismissal_records()?
            .into_iter()
            .filter(|r| r.terminated_since(min_year))
            .collect())
    }
}

pub struct HrStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl HrStore {
    pub fn open(path: &str) -> AnalyticsResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> AnalyticsResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn, path: None })
    }

    /// Reopen a new connection to the same database.
    /// For in-memory databases, this returns a new in-memory database (isolated).
    /// For file-based databases, this opens the same file.
    pub fn reopen(&self) -> AnalyticsResult<Self> {
        match &self.path {
            Some(p) => Self::open(p),
            None => Self::in_memory(),
        }
    }

    /// Run `f` inside one transaction: committed only if `f` succeeds,
    /// rolled back otherwise. Must not be nested.
    pub fn in_transaction<T>(
        &self,
        f: impl FnOnce(&Self) -> AnalyticsResult<T>,
    ) -> AnalyticsResult<T> {
        let tx = self.conn.unchecked_transaction()?;
        let out = f(self)?;
        tx.commit()?;
        Ok(out)
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> AnalyticsResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_schema.sql"))?;
        Ok(())
    }
}

impl EntityStore for HrStore {
    fn list_functions(&self) -> AnalyticsResult<Vec<Function>> {
        self.all_functions()
    }

    fn list_workload_items(&self) -> AnalyticsResult<Vec<WorkloadItem>> {
        self.all_workload_items()
    }

    fn list_specialists(&self) -> AnalyticsResult<Vec<Specialist>> {
        self.all_specialists()
    }

    fn get_work_time_info(&self, year: FiscalYear) -> AnalyticsResult<Option<WorkTimeInfo>> {
        self.work_time_info(year)
    }

    fn list_dismissal_reasons(&self) -> AnalyticsResult<Vec<DismissalReason>> {
        self.all_dismissal_reasons()
    }

    fn list_dismissal_records(&self) -> AnalyticsResult<Vec<DismissalRecord>> {
        self.dismissal_records(None)
    }

    fn list_dismissal_orders(&self, min_year: FiscalYear) -> AnalyticsResult<Vec<DismissalRecord>> {
        self.dismissal_records(Some(min_year))
    }
}
