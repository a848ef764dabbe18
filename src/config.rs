//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.vcplot.toml` files.

use crate::models::Series;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".vcplot.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Output table settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Where the gnuplot tables live and what they are called.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory holding the tables.
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default = "default_cnf_sat_time")]
    pub cnf_sat_time: String,

    #[serde(default = "default_approx_1_time")]
    pub approx_1_time: String,

    #[serde(default = "default_approx_2_time")]
    pub approx_2_time: String,

    #[serde(default = "default_approx_1_ratio")]
    pub approx_1_ratio: String,

    #[serde(default = "default_approx_2_ratio")]
    pub approx_2_ratio: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            cnf_sat_time: default_cnf_sat_time(),
            approx_1_time: default_approx_1_time(),
            approx_2_time: default_approx_2_time(),
            approx_1_ratio: default_approx_1_ratio(),
            approx_2_ratio: default_approx_2_ratio(),
        }
    }
}

impl OutputConfig {
    /// Table file name for a series.
    pub fn table_name(&self, series: Series) -> &str {
        match series {
            Series::CnfSatTime => &self.cnf_sat_time,
            Series::Approx1Time => &self.approx_1_time,
            Series::Approx2Time => &self.approx_2_time,
            Series::Approx1Ratio => &self.approx_1_ratio,
            Series::Approx2Ratio => &self.approx_2_ratio,
        }
    }
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_cnf_sat_time() -> String {
    Series::CnfSatTime.default_table().to_string()
}

fn default_approx_1_time() -> String {
    Series::Approx1Time.default_table().to_string()
}

fn default_approx_2_time() -> String {
    Series::Approx2Time.default_table().to_string()
}

fn default_approx_1_ratio() -> String {
    Series::Approx1Ratio.default_table().to_string()
}

fn default_approx_2_ratio() -> String {
    Series::Approx2Ratio.default_table().to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref dir) = args.output_dir {
            self.output.directory = dir.to_string_lossy().into_owned();
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> Result<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::make_args;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.directory, ".");
        assert_eq!(
            config.output.table_name(Series::Approx2Time),
            "gnuplot_time_approx_2.dat"
        );
        assert!(!config.general.verbose);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[output]
directory = "plots"
cnf_sat_time = "exact.dat"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.output.directory, "plots");
        assert_eq!(config.output.table_name(Series::CnfSatTime), "exact.dat");
        assert_eq!(
            config.output.table_name(Series::Approx1Ratio),
            "gnuplot_ratio_approx_1.dat"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[output]\ndirectory = \"out\"\n").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.output.directory, "out");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[output\n").unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let mut args = make_args();
        config.merge_with_args(&args);
        assert_eq!(config.output.directory, ".");

        args.output_dir = Some(PathBuf::from("results"));
        args.verbose = true;
        config.merge_with_args(&args);
        assert_eq!(config.output.directory, "results");
        assert!(config.general.verbose);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml().unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("gnuplot_time_cnf_sat.dat"));
    }
}
