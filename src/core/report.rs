use crate::domain::model::{RankingEntry, RankingGroup, RankingReport};
use crate::utils::error::{RankingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(RankingError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: table, json, csv".to_string(),
            }),
        }
    }
}

pub fn render(report: &RankingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Table => Ok(render_table(report)),
    }
}

/// 1-based hole numbers, space separated.
fn excluded_holes(entry: &RankingEntry) -> String {
    entry
        .exclusion_mask
        .excluded_indices()
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_csv(report: &RankingReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["group", "rank", "name", "differential", "confirmed", "excluded_holes"])?;

    for group in RankingGroup::ALL {
        for entry in report.group(group) {
            writer.write_record([
                group.label().to_string(),
                entry.rank.to_string(),
                entry.name.clone(),
                format!("{:.1}", entry.differential),
                format!("{:.1}", entry.confirmed),
                excluded_holes(entry),
            ])?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| RankingError::RenderError {
        message: e.to_string(),
    })
}

fn render_table(report: &RankingReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total par: {}", report.total_par);

    for group in RankingGroup::ALL {
        let entries = report.group(group);
        let _ = writeln!(out);
        let _ = writeln!(out, "Group {} ({} players)", group, entries.len());

        if entries.is_empty() {
            let _ = writeln!(out, "  (no players)");
            continue;
        }

        let _ = writeln!(
            out,
            "  {:>4}  {:<24} {:>8} {:>9}  {}",
            "Rank", "Name", "Diff", "Handicap", "Excluded"
        );
        for entry in entries {
            let _ = writeln!(
                out,
                "  {:>4}  {:<24} {:>8.1} {:>9.1}  {}",
                entry.rank,
                entry.name,
                entry.differential,
                entry.confirmed,
                excluded_holes(entry)
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ExclusionMask, RankingGroups};

    fn sample_report() -> RankingReport {
        let mut mask = ExclusionMask::from_pars(&[4; 18]);
        mask.exclude(0);
        mask.exclude(9);

        RankingReport {
            groups: RankingGroups {
                group_a: vec![RankingEntry {
                    name: "Somchai".to_string(),
                    differential: 3.2,
                    confirmed: 3.2,
                    rank: 1,
                    exclusion_mask: mask,
                    masked_scores: [4; 18],
                }],
                group_b: vec![],
                group_c: vec![],
            },
            total_par: 72,
        }
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totalPar"], 72);
        assert_eq!(value["groupA"][0]["name"], "Somchai");
        assert_eq!(value["groupA"][0]["exclusionMask"][0], 0);
        assert_eq!(value["groupA"][0]["maskedScores"].as_array().unwrap().len(), 18);
        assert!(value["groupB"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&sample_report(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "group,rank,name,differential,confirmed,excluded_holes");
        assert_eq!(lines[1], "A,1,Somchai,3.2,3.2,1 10");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_table() {
        let table = render(&sample_report(), OutputFormat::Table).unwrap();
        assert!(table.starts_with("Total par: 72"));
        assert!(table.contains("Group A (1 players)"));
        assert!(table.contains("Somchai"));
        assert!(table.contains("Group C (0 players)"));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
