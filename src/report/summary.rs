//! Run summary printed to stdout.

use crate::models::AggregateRecord;
use anyhow::Result;

/// Summary format for stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SummaryFormat {
    /// Aligned text table (default)
    #[default]
    Text,
    /// JSON array of records
    Json,
}

/// Render the records for humans.
pub fn generate_text_summary(records: &[AggregateRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16} {:>8} {:>7} {:>14} {:>14}\n",
        "Series", "Size", "Samples", "Mean", "Std Dev"
    ));
    for record in records {
        output.push_str(&format!(
            "{:<16} {:>8} {:>7} {:>14.2} {:>14.2}\n",
            record.series.to_string(),
            record.problem_size,
            record.samples,
            record.mean,
            record.std_dev
        ));
    }

    output
}

/// Render the records as pretty JSON.
pub fn generate_json_summary(records: &[AggregateRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(Into::into)
}

pub fn generate_summary(records: &[AggregateRecord], format: SummaryFormat) -> Result<String> {
    match format {
        SummaryFormat::Text => Ok(generate_text_summary(records)),
        SummaryFormat::Json => generate_json_summary(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Series;

    fn records() -> Vec<AggregateRecord> {
        vec![
            AggregateRecord {
                series: Series::CnfSatTime,
                problem_size: 5,
                samples: 2,
                mean: 150.0,
                std_dev: 70.7107,
            },
            AggregateRecord {
                series: Series::Approx1Ratio,
                problem_size: 5,
                samples: 2,
                mean: 1.2,
                std_dev: 0.1414,
            },
        ]
    }

    #[test]
    fn test_text_summary() {
        let text = generate_text_summary(&records());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Series"));
        assert!(lines[1].starts_with("CNF-SAT time"));
        assert!(lines[1].ends_with("70.71"));
        assert!(lines[2].contains("1.20"));
    }

    #[test]
    fn test_json_summary() {
        let json = generate_summary(&records(), SummaryFormat::Json).unwrap();
        let parsed: Vec<AggregateRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].series, Series::CnfSatTime);
        assert!(json.contains("\"approx1_ratio\""));
    }
}
