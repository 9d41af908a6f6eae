use crate::utils::error::{RankingError, Result};
use crate::utils::validation::{self, HOLES_PER_ROUND};
use serde::{Deserialize, Serialize};
use std::ops::Range;

pub const HOLES: usize = HOLES_PER_ROUND;
pub const FRONT_NINE: Range<usize> = 0..9;
pub const BACK_NINE: Range<usize> = 9..18;
/// Largest stroke count a stored score cell may hold; anything above is
/// treated as a corrupt cell.
pub const MAX_STROKES_PER_HOLE: u32 = 99;

/// 一座球場 18 洞的標準桿
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseParProfile {
    pub name: String,
    pub location: String,
    pars: [u8; HOLES],
}

impl CourseParProfile {
    pub fn new(name: impl Into<String>, location: impl Into<String>, pars: &[i64]) -> Result<Self> {
        validation::validate_pars(pars)?;

        let mut fixed = [0u8; HOLES];
        for (slot, &par) in fixed.iter_mut().zip(pars) {
            *slot = par as u8;
        }

        Ok(Self {
            name: name.into(),
            location: location.into(),
            pars: fixed,
        })
    }

    pub fn pars(&self) -> &[u8; HOLES] {
        &self.pars
    }

    /// Always the sum of the unmodified profile.
    pub fn total_par(&self) -> u32 {
        self.pars.iter().map(|&p| u32::from(p)).sum()
    }

    pub fn front_nine(&self) -> &[u8] {
        &self.pars[FRONT_NINE]
    }

    pub fn back_nine(&self) -> &[u8] {
        &self.pars[BACK_NINE]
    }

    pub fn matches_location(&self, location: &str) -> bool {
        same_location(&self.location, location)
    }
}

/// 一位球員一輪 18 洞的桿數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRound {
    pub name: String,
    scores: [u32; HOLES],
}

impl PlayerRound {
    /// Negative strokes and strokes above [`MAX_STROKES_PER_HOLE`] are coerced
    /// to 0; the length must be exactly 18.
    pub fn new(name: impl Into<String>, scores: &[i64]) -> Result<Self> {
        let name = name.into();
        validation::validate_non_empty_string("player name", &name)?;
        validation::validate_hole_count("scores", scores.len())?;

        let mut fixed = [0u32; HOLES];
        for (slot, &score) in fixed.iter_mut().zip(scores) {
            *slot = u32::try_from(score)
                .ok()
                .filter(|&s| s <= MAX_STROKES_PER_HOLE)
                .unwrap_or(0);
        }

        Ok(Self {
            name,
            scores: fixed,
        })
    }

    pub fn scores(&self) -> &[u32; HOLES] {
        &self.scores
    }
}

/// A score row as entered by a player, before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub player_name: String,
    pub location: String,
    pub scores: Vec<i64>,
    pub email: Option<String>,
}

/// Per-player record of which holes are dropped. Entries are either the
/// original par or 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionMask([u8; HOLES]);

impl ExclusionMask {
    pub fn from_pars(pars: &[u8; HOLES]) -> Self {
        Self(*pars)
    }

    pub fn exclude(&mut self, index: usize) {
        self.0[index] = 0;
    }

    pub fn is_excluded(&self, index: usize) -> bool {
        self.0[index] == 0
    }

    pub fn values(&self) -> &[u8; HOLES] {
        &self.0
    }

    pub fn excluded_indices(&self) -> Vec<usize> {
        (0..HOLES).filter(|&i| self.is_excluded(i)).collect()
    }

    pub fn zeros_in(&self, range: Range<usize>) -> usize {
        self.0[range].iter().filter(|&&v| v == 0).count()
    }
}

/// 排名計算前的單一球員結果
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRound {
    pub name: String,
    pub differential: f64,
    pub confirmed: f64,
    pub exclusion_mask: ExclusionMask,
    pub masked_scores: [u32; HOLES],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub name: String,
    /// Rounded to one decimal for display.
    pub differential: f64,
    pub confirmed: f64,
    pub rank: usize,
    pub exclusion_mask: ExclusionMask,
    pub masked_scores: [u32; HOLES],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingGroup {
    A,
    B,
    C,
}

impl RankingGroup {
    pub const ALL: [RankingGroup; 3] = [RankingGroup::A, RankingGroup::B, RankingGroup::C];

    /// A: h <= 12, B: 12 < h <= 24, C: 24 < h (h never exceeds 36 once confirmed).
    pub fn for_handicap(confirmed: f64) -> Self {
        if confirmed <= 12.0 {
            RankingGroup::A
        } else if confirmed <= 24.0 {
            RankingGroup::B
        } else {
            RankingGroup::C
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankingGroup::A => "A",
            RankingGroup::B => "B",
            RankingGroup::C => "C",
        }
    }
}

impl std::fmt::Display for RankingGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RankingGroup {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(RankingGroup::A),
            "B" => Ok(RankingGroup::B),
            "C" => Ok(RankingGroup::C),
            other => Err(RankingError::validation(format!(
                "unknown ranking group: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingGroups {
    pub group_a: Vec<RankingEntry>,
    pub group_b: Vec<RankingEntry>,
    pub group_c: Vec<RankingEntry>,
}

impl RankingGroups {
    pub fn group(&self, group: RankingGroup) -> &[RankingEntry] {
        match group {
            RankingGroup::A => &self.group_a,
            RankingGroup::B => &self.group_b,
            RankingGroup::C => &self.group_c,
        }
    }

    pub fn len(&self) -> usize {
        self.group_a.len() + self.group_b.len() + self.group_c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    #[serde(flatten)]
    pub groups: RankingGroups,
    pub total_par: u32,
}

impl RankingReport {
    pub fn empty(total_par: u32) -> Self {
        Self {
            groups: RankingGroups::default(),
            total_par,
        }
    }

    pub fn group(&self, group: RankingGroup) -> &[RankingEntry] {
        self.groups.group(group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// 地點比對不分大小寫並忽略前後空白
pub fn same_location(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
