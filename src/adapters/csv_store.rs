use crate::domain::model::{same_location, CourseParProfile, PlayerRound, ScoreSubmission, HOLES};
use crate::domain::ports::RoundStore;
use crate::utils::error::{RankingError, Result};
use crate::utils::validation;
use async_trait::async_trait;
use regex::Regex;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Par used when a course cell is missing, blank, zero or not a number.
pub const DEFAULT_PAR: i64 = 4;
/// Score used when a score cell is missing or not a number.
pub const DEFAULT_SCORE: i64 = 0;

const UNKNOWN_PLAYER: &str = "Unknown";
const ANONYMOUS_EMAIL: &str = "anonymous@example.com";

// 欄位配置與原本的試算表分頁相同
const COURSE_NAME_COLUMN: usize = 0;
const COURSE_LOCATION_COLUMN: usize = 1;
const COURSE_PARS_START: usize = 2;

const SCORE_PLAYER_COLUMN: usize = 2;
const SCORE_HOLES_START: usize = 3;
const SCORE_LOCATION_COLUMN: usize = SCORE_HOLES_START + HOLES;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("static regex"));

/// Reads the leading integer of a cell, like a lenient spreadsheet export.
pub fn parse_cell(cell: Option<&str>) -> Option<i64> {
    let caps = LEADING_INTEGER.captures(cell?)?;
    caps[1].parse().ok()
}

fn course_header() -> Vec<String> {
    let mut header = vec!["course_name".to_string(), "location".to_string()];
    header.extend((1..=HOLES).map(|h| format!("par_{}", h)));
    header
}

fn score_header() -> Vec<String> {
    let mut header = vec![
        "timestamp".to_string(),
        "email".to_string(),
        "player_name".to_string(),
    ];
    header.extend((1..=HOLES).map(|h| format!("score_{}", h)));
    header.push("location".to_string());
    header
}

/// Course and score rows kept in two CSV files, laid out like the
/// `Name_stadium` and `Form_Res` spreadsheet tabs.
#[derive(Debug, Clone)]
pub struct CsvRoundStore {
    courses_path: PathBuf,
    scores_path: PathBuf,
}

impl CsvRoundStore {
    pub fn new(courses_path: impl Into<PathBuf>, scores_path: impl Into<PathBuf>) -> Self {
        Self {
            courses_path: courses_path.into(),
            scores_path: scores_path.into(),
        }
    }

    /// A missing file reads as an empty sheet.
    fn read_rows(path: &Path) -> Result<Vec<csv::StringRecord>> {
        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
        {
            Ok(reader) => reader,
            Err(e) => {
                if let csv::ErrorKind::Io(io) = e.kind() {
                    if io.kind() == ErrorKind::NotFound {
                        tracing::debug!("{} does not exist yet, treating as empty", path.display());
                        return Ok(Vec::new());
                    }
                }
                return Err(e.into());
            }
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            rows.push(record);
        }
        Ok(rows)
    }

    fn append_row(path: &Path, header: Vec<String>, row: Vec<String>) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

        if needs_header {
            writer.write_record(&header)?;
        }
        writer.write_record(&row)?;
        writer.flush()?;
        Ok(())
    }

    fn course_from_row(row: &csv::StringRecord) -> Result<CourseParProfile> {
        let name = row.get(COURSE_NAME_COLUMN).unwrap_or("").trim();
        let location = row.get(COURSE_LOCATION_COLUMN).unwrap_or("").trim();
        let pars: Vec<i64> = (COURSE_PARS_START..COURSE_PARS_START + HOLES)
            .map(|col| {
                parse_cell(row.get(col))
                    .filter(|&par| par != 0)
                    .unwrap_or(DEFAULT_PAR)
            })
            .collect();

        CourseParProfile::new(name, location, &pars).map_err(|e| {
            RankingError::storage(format!("invalid course row for '{}': {}", location, e))
        })
    }

    fn round_from_row(row: &csv::StringRecord) -> Result<PlayerRound> {
        let name = match row.get(SCORE_PLAYER_COLUMN).map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_PLAYER,
        };
        let scores: Vec<i64> = (SCORE_HOLES_START..SCORE_HOLES_START + HOLES)
            .map(|col| parse_cell(row.get(col)).unwrap_or(DEFAULT_SCORE))
            .collect();

        PlayerRound::new(name, &scores)
    }
}

#[async_trait]
impl RoundStore for CsvRoundStore {
    async fn find_course(&self, location: &str) -> Result<Option<CourseParProfile>> {
        let rows = Self::read_rows(&self.courses_path)?;
        rows.iter()
            .find(|row| same_location(row.get(COURSE_LOCATION_COLUMN).unwrap_or(""), location))
            .map(Self::course_from_row)
            .transpose()
    }

    async fn list_courses(&self) -> Result<Vec<CourseParProfile>> {
        let rows = Self::read_rows(&self.courses_path)?;
        let mut courses = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            match Self::course_from_row(row) {
                Ok(course) => courses.push(course),
                Err(e) => tracing::warn!("Skipping course row {}: {}", index + 2, e),
            }
        }
        Ok(courses)
    }

    async fn rounds_for(&self, location: &str) -> Result<Vec<PlayerRound>> {
        let rows = Self::read_rows(&self.scores_path)?;
        rows.iter()
            .filter(|row| same_location(row.get(SCORE_LOCATION_COLUMN).unwrap_or(""), location))
            .map(Self::round_from_row)
            .collect()
    }

    async fn append_round(&self, submission: &ScoreSubmission) -> Result<()> {
        validation::validate_hole_count("scores", submission.scores.len())?;

        let timestamp = chrono::Local::now().format("%-m/%-d/%Y %H:%M:%S").to_string();
        let email = submission
            .email
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_EMAIL.to_string());

        let mut row = vec![timestamp, email, submission.player_name.clone()];
        row.extend(submission.scores.iter().map(|s| s.to_string()));
        row.push(submission.location.clone());

        Self::append_row(&self.scores_path, score_header(), row)
    }

    async fn append_course(&self, course: &CourseParProfile) -> Result<()> {
        let mut row = vec![course.name.clone(), course.location.clone()];
        row.extend(course.pars().iter().map(|p| p.to_string()));

        Self::append_row(&self.courses_path, course_header(), row)
    }
}
