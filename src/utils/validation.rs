use crate::utils::error::{RankingError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const HOLES_PER_ROUND: usize = 18;
pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 20;
pub const MIN_PAR: i64 = 3;
pub const MAX_PAR: i64 = 6;
pub const MAX_PLAYER_NAME_LENGTH: usize = 100;
pub const MAX_COURSE_NAME_LENGTH: usize = 200;
pub const MAX_LOCATION_LENGTH: usize = 100;

static UNSAFE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[<>]|javascript:|on\w+=").expect("static regex"));

static PLAYER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}\s.\-]+$").expect("static regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 移除可能造成 HTML 注入的字元並去除前後空白
pub fn sanitize_string(input: &str) -> String {
    UNSAFE_MARKUP.replace_all(input, "").trim().to_string()
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RankingError::validation(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    if value.chars().count() > max_chars {
        return Err(RankingError::validation(format!(
            "{} must be at most {} characters",
            field_name, max_chars
        )));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RankingError::validation(format!(
            "{} must be between {} and {}, got {}",
            field_name, min, max, value
        )));
    }
    Ok(())
}

pub fn validate_hole_count(field_name: &str, actual: usize) -> Result<()> {
    if actual != HOLES_PER_ROUND {
        return Err(RankingError::InvalidShape {
            field: field_name.to_string(),
            expected: HOLES_PER_ROUND,
            actual,
        });
    }
    Ok(())
}

pub fn validate_player_name(name: &str) -> Result<()> {
    let sanitized = sanitize_string(name);
    validate_non_empty_string("player name", &sanitized)?;
    validate_max_length("player name", &sanitized, MAX_PLAYER_NAME_LENGTH)?;

    if !PLAYER_NAME.is_match(&sanitized) {
        return Err(RankingError::validation(
            "player name contains invalid characters",
        ));
    }
    Ok(())
}

pub fn validate_location(location: &str) -> Result<()> {
    let sanitized = sanitize_string(location);
    validate_non_empty_string("location", &sanitized)?;
    validate_max_length("location", &sanitized, MAX_LOCATION_LENGTH)
}

pub fn validate_course_name(name: &str) -> Result<()> {
    let sanitized = sanitize_string(name);
    validate_non_empty_string("course name", &sanitized)?;
    validate_max_length("course name", &sanitized, MAX_COURSE_NAME_LENGTH)
}

pub fn validate_scores(scores: &[i64]) -> Result<()> {
    validate_hole_count("scores", scores.len())?;
    for (hole, &score) in scores.iter().enumerate() {
        validate_range(&format!("score for hole {}", hole + 1), score, MIN_SCORE, MAX_SCORE)?;
    }
    Ok(())
}

pub fn validate_pars(pars: &[i64]) -> Result<()> {
    validate_hole_count("pars", pars.len())?;
    for (hole, &par) in pars.iter().enumerate() {
        validate_range(&format!("par for hole {}", hole + 1), par, MIN_PAR, MAX_PAR)?;
    }
    Ok(())
}
