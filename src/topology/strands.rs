// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::debug;

use crate::Pretzel;

/// The number of strands the pretzel spans: one more than the largest left
/// strand of any twist, so that every `strand + 1` is in range.
///
/// The empty pretzel references no strands and spans zero of them.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::{Pretzel, number_of_strands};
///
/// let pretzel = Pretzel::from_pairs([(1, 3), (4, -1)]).unwrap();
/// assert_eq!(number_of_strands(&pretzel), 5);
/// assert_eq!(number_of_strands(&Pretzel::default()), 0);
/// ```
pub fn number_of_strands(pretzel: &Pretzel) -> usize {
    pretzel
        .iter()
        .map(|twist| twist.right_strand())
        .max()
        .unwrap_or(0)
}

/// The strands in `1..=number_of_strands(pretzel)` that no twist touches, in
/// ascending order.
///
/// A twist touches both of its strands even when it has no crossings. The
/// last strand is always touched, so every missing strand is strictly less
/// than the strand count. A non-empty result means the closure is a split
/// link; an empty result says nothing about the number of components.
pub fn missing_strands(pretzel: &Pretzel) -> Vec<usize> {
    let n = number_of_strands(pretzel);
    let mut touched = vec![false; n + 1];
    for twist in pretzel {
        touched[twist.strand()] = true;
        touched[twist.right_strand()] = true;
    }

    (1..=n).filter(|&strand| !touched[strand]).collect()
}

/// Stably regroup the twists so that no run of consecutive twists straddles a
/// missing strand.
///
/// Twists left of the first missing strand come first, then those between the
/// first and second missing strand, and so on. Within each group the original
/// relative order is kept, so applying this twice with a recomputed `missing`
/// set changes nothing. A `missing` set that does not belong to `pretzel`
/// gives some permutation of the twists, never a panic.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::{Pretzel, missing_strands, partition_twists};
///
/// let mut split = Pretzel::from_pairs([(4, 1), (1, 3), (4, 1), (1, -1)]).unwrap();
/// let missing = missing_strands(&split);
/// assert_eq!(missing, vec![3]);
///
/// partition_twists(&missing, &mut split);
/// assert_eq!(split, Pretzel::from_pairs([(1, 3), (1, -1), (4, 1), (4, 1)]).unwrap());
/// ```
pub fn partition_twists(missing: &[usize], pretzel: &mut Pretzel) {
    if missing.is_empty() {
        return;
    }
    debug!(
        "Partitioning {} twists around missing strands {missing:?}",
        pretzel.len()
    );

    pretzel
        .twists_mut()
        .sort_by_key(|twist| missing.iter().filter(|&&m| m < twist.strand()).count());
}
