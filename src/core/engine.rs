use crate::core::calculator::compute_rankings;
use crate::core::RoundStore;
use crate::domain::model::{CourseParProfile, RankingReport, ScoreSubmission};
use crate::utils::error::{RankingError, Result};
use crate::utils::validation::{self, sanitize_string};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fetches course and score rows from the store and runs the ranking.
pub struct RankingEngine<S: RoundStore> {
    store: S,
    seed: Option<u64>,
}

impl<S: RoundStore> RankingEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store, seed: None }
    }

    /// 固定亂數種子，讓排除洞的結果可重現
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// An unknown course or a course without rounds yields empty groups.
    pub async fn rank(&self, location: &str) -> Result<RankingReport> {
        validation::validate_non_empty_string("location", location)?;

        tracing::info!("Calculating ranking for location: {}", location.trim());

        let Some(course) = self.store.find_course(location).await? else {
            tracing::warn!("No course registered for location '{}'", location.trim());
            return Ok(RankingReport::empty(0));
        };

        let rounds = self.store.rounds_for(location).await?;
        tracing::info!(
            "Loaded course '{}' (total par {}) with {} rounds",
            course.name,
            course.total_par(),
            rounds.len()
        );

        if rounds.is_empty() {
            return Ok(RankingReport::empty(course.total_par()));
        }

        let mut rng = self.rng();
        let report = compute_rankings(&course, &rounds, &mut rng)?;

        tracing::info!(
            "Ranked {} players: A={}, B={}, C={}",
            report.len(),
            report.groups.group_a.len(),
            report.groups.group_b.len(),
            report.groups.group_c.len()
        );

        Ok(report)
    }

    pub async fn submit(&self, submission: ScoreSubmission) -> Result<()> {
        validation::validate_player_name(&submission.player_name)?;
        validation::validate_location(&submission.location)?;
        validation::validate_scores(&submission.scores)?;

        let sanitized = ScoreSubmission {
            player_name: sanitize_string(&submission.player_name),
            location: sanitize_string(&submission.location),
            scores: submission.scores,
            email: submission.email.as_deref().map(sanitize_string),
        };

        if self.store.find_course(&sanitized.location).await?.is_none() {
            return Err(RankingError::validation(format!(
                "no course registered for location '{}'",
                sanitized.location
            )));
        }

        self.store.append_round(&sanitized).await?;
        tracing::info!(
            "Recorded round for {} at {} (total {})",
            sanitized.player_name,
            sanitized.location,
            sanitized.scores.iter().sum::<i64>()
        );
        Ok(())
    }

    pub async fn register_course(
        &self,
        name: &str,
        location: &str,
        pars: &[i64],
    ) -> Result<CourseParProfile> {
        validation::validate_course_name(name)?;
        validation::validate_location(location)?;

        let course = CourseParProfile::new(sanitize_string(name), sanitize_string(location), pars)?;

        if self.store.find_course(&course.location).await?.is_some() {
            return Err(RankingError::validation(format!(
                "a course is already registered for location '{}'",
                course.location
            )));
        }

        self.store.append_course(&course).await?;
        tracing::info!(
            "Registered course '{}' at {} (total par {})",
            course.name,
            course.location,
            course.total_par()
        );
        Ok(course)
    }

    pub async fn courses(&self) -> Result<Vec<CourseParProfile>> {
        self.store.list_courses().await
    }
}
