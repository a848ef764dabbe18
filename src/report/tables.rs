//! Gnuplot table output.
//!
//! One append-only `.dat` file per series. Each run adds exactly one line
//! to each table; existing content is never rewritten.

use crate::config::OutputConfig;
use crate::error::AggregateError;
use crate::models::{AggregateRecord, Series};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolved locations of the five tables.
#[derive(Debug, Clone)]
pub struct OutputTables {
    paths: [PathBuf; 5],
}

impl OutputTables {
    /// Resolve every table name against the output directory.
    pub fn from_config(config: &OutputConfig) -> Self {
        let dir = Path::new(&config.directory);
        let paths = Series::ALL.map(|series| dir.join(config.table_name(series)));
        Self { paths }
    }

    pub fn path(&self, series: Series) -> &Path {
        &self.paths[series.index()]
    }

    /// Append one record to its table, creating the file if needed.
    pub fn append(&self, record: &AggregateRecord) -> Result<(), AggregateError> {
        let path = self.path(record.series);
        debug!("Appending to {}", path.display());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| AggregateError::io("failed to open", path, e))?;

        file.write_all(record.table_line().as_bytes())
            .map_err(|e| AggregateError::io("failed to write", path, e))?;

        Ok(())
    }

    /// Append every record in order.
    ///
    /// Stops at the first failure; tables already appended to keep their
    /// new line.
    pub fn append_all(&self, records: &[AggregateRecord]) -> Result<(), AggregateError> {
        for record in records {
            self.append(record)?;
            info!(
                "{}: {}",
                record.series,
                self.path(record.series).display()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> OutputConfig {
        OutputConfig {
            directory: dir.to_string_lossy().into_owned(),
            ..OutputConfig::default()
        }
    }

    fn record(series: Series, size: u64) -> AggregateRecord {
        AggregateRecord {
            series,
            problem_size: size,
            samples: 2,
            mean: 150.0,
            std_dev: 70.7107,
        }
    }

    #[test]
    fn test_default_paths() {
        let tables = OutputTables::from_config(&OutputConfig::default());
        assert_eq!(
            tables.path(Series::CnfSatTime),
            Path::new("./gnuplot_time_cnf_sat.dat")
        );
        assert_eq!(
            tables.path(Series::Approx2Ratio),
            Path::new("./gnuplot_ratio_approx_2.dat")
        );
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let tables = OutputTables::from_config(&config_in(dir.path()));

        tables.append(&record(Series::CnfSatTime, 5)).unwrap();

        let content = std::fs::read_to_string(tables.path(Series::CnfSatTime)).unwrap();
        assert_eq!(content, "5 150.00 70.71\n");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let tables = OutputTables::from_config(&config_in(dir.path()));
        let path = tables.path(Series::Approx1Ratio).to_path_buf();
        std::fs::write(&path, "4 1.00 0.00\n").unwrap();

        tables.append(&record(Series::Approx1Ratio, 5)).unwrap();
        tables.append(&record(Series::Approx1Ratio, 5)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "4 1.00 0.00\n5 150.00 70.71\n5 150.00 70.71\n");
    }

    #[test]
    fn test_append_all_partial_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.approx_1_time = "missing/dir/table.dat".to_string();
        let tables = OutputTables::from_config(&config);

        let records: Vec<_> = Series::ALL.iter().map(|&s| record(s, 6)).collect();
        let err = tables.append_all(&records).unwrap_err();

        assert!(matches!(err, AggregateError::Io { .. }));
        assert!(tables.path(Series::CnfSatTime).exists());
        assert!(!tables.path(Series::Approx2Time).exists());
    }
}
