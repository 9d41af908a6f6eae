use crate::domain::model::{same_location, CourseParProfile, PlayerRound, ScoreSubmission};
use crate::domain::ports::RoundStore;
use crate::utils::error::{RankingError, Result};
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

/// In-process store, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryRoundStore {
    courses: RwLock<Vec<CourseParProfile>>,
    rounds: RwLock<Vec<(String, PlayerRound)>>,
}

fn poisoned<T>(_: T) -> RankingError {
    RankingError::storage("in-memory store lock poisoned")
}

impl MemoryRoundStore {
    pub fn new() -> Self {
        Self::default()
    }

    // 建構時獨佔 self，鎖即使被標記為 poisoned 也直接取回資料
    pub fn with_course(mut self, course: CourseParProfile) -> Self {
        self.courses
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .push(course);
        self
    }

    pub fn with_round(mut self, location: impl Into<String>, round: PlayerRound) -> Self {
        self.rounds
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .push((location.into(), round));
        self
    }
}

#[async_trait]
impl RoundStore for MemoryRoundStore {
    async fn find_course(&self, location: &str) -> Result<Option<CourseParProfile>> {
        let courses = self.courses.read().map_err(poisoned)?;
        Ok(courses.iter().find(|c| c.matches_location(location)).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<CourseParProfile>> {
        Ok(self.courses.read().map_err(poisoned)?.clone())
    }

    async fn rounds_for(&self, location: &str) -> Result<Vec<PlayerRound>> {
        let rounds = self.rounds.read().map_err(poisoned)?;
        Ok(rounds
            .iter()
            .filter(|(loc, _)| same_location(loc, location))
            .map(|(_, round)| round.clone())
            .collect())
    }

    async fn append_round(&self, submission: &ScoreSubmission) -> Result<()> {
        let round = PlayerRound::new(submission.player_name.clone(), &submission.scores)?;
        self.rounds
            .write()
            .map_err(poisoned)?
            .push((submission.location.clone(), round));
        Ok(())
    }

    async fn append_course(&self, course: &CourseParProfile) -> Result<()> {
        self.courses.write().map_err(poisoned)?.push(course.clone());
        Ok(())
    }
}
