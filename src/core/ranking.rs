use crate::core::handicap::round_to_tenth;
use crate::domain::model::{RankingEntry, RankingGroup, RankingGroups, ScoredRound};

/// Buckets rounds into groups A/B/C by confirmed handicap, sorts each group by
/// ascending (display-rounded) differential and assigns ranks 1..=n.
///
/// Equal differentials keep their input order, so ties resolve by fetch order.
pub fn rank_players(rounds: Vec<ScoredRound>) -> RankingGroups {
    let mut groups = RankingGroups::default();

    for round in rounds {
        let group = RankingGroup::for_handicap(round.confirmed);
        let entry = RankingEntry {
            name: round.name,
            differential: round_to_tenth(round.differential),
            confirmed: round.confirmed,
            rank: 0,
            exclusion_mask: round.exclusion_mask,
            masked_scores: round.masked_scores,
        };

        match group {
            RankingGroup::A => groups.group_a.push(entry),
            RankingGroup::B => groups.group_b.push(entry),
            RankingGroup::C => groups.group_c.push(entry),
        }
    }

    for entries in [&mut groups.group_a, &mut groups.group_b, &mut groups.group_c] {
        assign_ranks(entries);
    }

    groups
}

fn assign_ranks(entries: &mut [RankingEntry]) {
    // sort_by 是穩定排序
    entries.sort_by(|a, b| a.differential.total_cmp(&b.differential));
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position + 1;
    }
}
