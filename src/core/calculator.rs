use crate::core::differential::{compute_differential, mask_scores};
use crate::core::handicap::confirm_handicap;
use crate::core::randomizer::select_exclusions;
use crate::core::ranking::rank_players;
use crate::domain::model::{CourseParProfile, PlayerRound, RankingReport, ScoredRound};
use crate::utils::error::Result;
use rand::Rng;

/// Scores a single round with a freshly drawn exclusion mask.
pub fn score_round<R: Rng + ?Sized>(
    course: &CourseParProfile,
    round: &PlayerRound,
    rng: &mut R,
) -> Result<ScoredRound> {
    let total_par = course.total_par();
    let exclusion_mask = select_exclusions(course.pars(), rng);
    let differential = compute_differential(round.scores(), &exclusion_mask, total_par);
    let confirmed = confirm_handicap(differential)?;

    tracing::debug!(
        "Scored {}: differential={:.2}, confirmed={}, excluded holes={:?}",
        round.name,
        differential,
        confirmed,
        exclusion_mask.excluded_indices()
    );

    Ok(ScoredRound {
        name: round.name.clone(),
        differential,
        confirmed,
        exclusion_mask,
        masked_scores: mask_scores(round.scores(), &exclusion_mask),
    })
}

/// Runs the full ranking for one course. Every player gets an independent
/// mask, drawn from `rng` in input order.
pub fn compute_rankings<R: Rng + ?Sized>(
    course: &CourseParProfile,
    rounds: &[PlayerRound],
    rng: &mut R,
) -> Result<RankingReport> {
    let scored = rounds
        .iter()
        .map(|round| score_round(course, round, rng))
        .collect::<Result<Vec<_>>>()?;

    Ok(RankingReport {
        groups: rank_players(scored),
        total_par: course.total_par(),
    })
}
