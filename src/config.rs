//! Run configuration for the award report pipeline.
//!
//! Every knob the pipeline has lives in [`ReportConfig`]: which agency and
//! fiscal years to query, which organization states to accept, which
//! legislators to exclude from the join, and where the roster and report
//! files live. All fields have defaults matching the original northeastern
//! NIH FY2019 run, and any subset can be overridden from a TOML file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Funding agency code filter.
    #[serde(default = "default_agency")]
    pub agency: String,

    /// Organization state codes to accept (2-letter).
    #[serde(default = "default_org_states")]
    pub org_states: Vec<String>,

    /// Fiscal years to accept.
    #[serde(default = "default_fiscal_years")]
    pub fiscal_years: Vec<u16>,

    /// Legislator names removed from the roster before the join. Models
    /// members who resigned or died between the roster snapshot and the
    /// award fiscal year.
    #[serde(default = "default_excluded_legislators")]
    pub excluded_legislators: Vec<String>,

    /// States with a single at-large congressional district. The agency
    /// encodes their district arbitrarily, so the award side is pinned to
    /// "01" before joining.
    #[serde(default = "default_at_large_states")]
    pub at_large_states: Vec<String>,

    /// Award search endpoint.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Records requested per API page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Legislator roster CSV (columns: legislator_name, state,
    /// congressional_district).
    #[serde(default = "default_roster_path")]
    pub roster_path: PathBuf,

    /// Output CSV path for the joined report.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            agency: default_agency(),
            org_states: default_org_states(),
            fiscal_years: default_fiscal_years(),
            excluded_legislators: default_excluded_legislators(),
            at_large_states: default_at_large_states(),
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            roster_path: default_roster_path(),
            output_path: default_output_path(),
        }
    }
}

/// Load configuration from a TOML file. Missing fields fall back to the
/// defaults.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

fn default_agency() -> String {
    "NIH".to_string()
}

fn default_org_states() -> Vec<String> {
    strings(&[
        "NY", "DE", "MD", "NJ", "PA", "CT", "RI", "MA", "VT", "NH", "ME",
    ])
}

fn default_fiscal_years() -> Vec<u16> {
    vec![2019]
}

fn default_excluded_legislators() -> Vec<String> {
    strings(&["Elijah Cummings", "Chris Collins", "Tom Marino"])
}

fn default_at_large_states() -> Vec<String> {
    strings(&["DE", "VT"])
}

fn default_api_base_url() -> String {
    "https://api.federalreporter.nih.gov/v1/projects/search".to_string()
}

fn default_page_size() -> usize {
    50
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("legislators.csv")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("legislators_awards.csv")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let config = ReportConfig::default();
        assert_eq!(config.agency, "NIH");
        assert_eq!(config.fiscal_years, vec![2019]);
        assert_eq!(config.org_states.len(), 11);
        assert_eq!(config.at_large_states, vec!["DE", "VT"]);
        assert_eq!(config.page_size, 50);
        assert!(config
            .excluded_legislators
            .contains(&"Tom Marino".to_string()));
    }

    #[test]
    fn partial_toml_keeps_defaults_for_omitted_fields() {
        let config: ReportConfig = toml::from_str(
            r#"
            agency = "NSF"
            fiscal_years = [2020, 2021]
            "#,
        )
        .unwrap();
        assert_eq!(config.agency, "NSF");
        assert_eq!(config.fiscal_years, vec![2020, 2021]);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.at_large_states, vec!["DE", "VT"]);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert_eq!(config.roster_path, PathBuf::from("legislators.csv"));
        assert_eq!(config.output_path, PathBuf::from("legislators_awards.csv"));
    }
}
