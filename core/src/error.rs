use thiserror::Error;

use crate::types::FiscalYear;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No work time constants recorded for fiscal year {year}")]
    MissingYearConstant { year: FiscalYear },

    #[error("Report '{report}' has no qualifying rows")]
    EmptyDataset { report: String },

    #[error("Data integrity error: {detail}")]
    DataIntegrity { detail: String },

    #[error("Report '{report}' requires an explicit fiscal year")]
    YearRequired { report: String },

    #[error("Report '{name}' not found")]
    ReportNotFound { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnalyticsError {
    pub fn integrity(detail: impl Into<String>) -> Self {
        Self::DataIntegrity {
            detail: detail.into(),
        }
    }
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
