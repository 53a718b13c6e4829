use crate::types::{FiscalYear, ReasonCode};
use serde::{Deserialize, Serialize};

/// How percentage figures are rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go away from zero: 12.345 -> 12.35.
    #[default]
    HalfUp,
    /// Ties go to the even neighbour: 12.345 -> 12.34.
    HalfEven,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Reason code meaning "other": the order's free-text true reason is
    /// the real cause, not the catalog text.
    #[serde(default = "default_reserved_reason_code")]
    pub reserved_reason_code: ReasonCode,
    /// Caller-side default minimum year for attrition reports.
    #[serde(default = "default_attrition_cutoff_year")]
    pub attrition_cutoff_year: FiscalYear,
    #[serde(default)]
    pub rounding: RoundingMode,
}

fn default_reserved_reason_code() -> ReasonCode {
    3
}

fn default_attrition_cutoff_year() -> FiscalYear {
    2015
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reserved_reason_code: default_reserved_reason_code(),
            attrition_cutoff_year: default_attrition_cutoff_year(),
            rounding: RoundingMode::default(),
        }
    }
}

impl ReportConfig {
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/report_config.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        log::debug!("loaded report config from {path}: {config:?}");
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ReportConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.reserved_reason_code, 3);
        assert_eq!(config.rounding, RoundingMode::HalfUp);
    }

    #[test]
    fn rounding_mode_is_snake_case() {
        let config: ReportConfig =
            serde_json::from_str(r#"{"rounding": "half_even", "attrition_cutoff_year": 2020}"#)
                .unwrap();
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert_eq!(config.attrition_cutoff_year, 2020);
    }
}
