use crate::domain::model::{ExclusionMask, BACK_NINE, FRONT_NINE, HOLES};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::ops::Range;

/// Par values that lose one hole per nine, processed in this order.
pub const EXCLUDED_PAR_VALUES: [u8; 3] = [5, 4, 3];

/// Picks one hole per par-5, par-4 and par-3 bin in each nine, uniformly at
/// random among that bin's holes. Empty bins are skipped.
///
/// Call once per player: masks must never be shared between players.
pub fn select_exclusions<R: Rng + ?Sized>(pars: &[u8; HOLES], rng: &mut R) -> ExclusionMask {
    let mut mask = ExclusionMask::from_pars(pars);

    for half in [FRONT_NINE, BACK_NINE] {
        exclude_one_per_bin(pars, half, rng, &mut mask);
    }

    mask
}

fn exclude_one_per_bin<R: Rng + ?Sized>(
    pars: &[u8; HOLES],
    half: Range<usize>,
    rng: &mut R,
    mask: &mut ExclusionMask,
) {
    for par_value in EXCLUDED_PAR_VALUES {
        let candidates: Vec<usize> = half.clone().filter(|&i| pars[i] == par_value).collect();

        if let Some(&index) = candidates.choose(rng) {
            mask.exclude(index);
        }
    }
}
