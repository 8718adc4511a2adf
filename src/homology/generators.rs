// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::{HashMap, HashSet};

use crate::{Pretzel, number_of_strands};

/// Pair each crossing with the crossing that closes a homology generator of the
/// Seifert surface with it.
///
/// Crossings are indexed in unrolled order: twist `(s, c)` contributes `|c|`
/// consecutive crossings on strand `s`. The surface has one disk per strand
/// and one band per crossing, so two consecutive crossings between the same
/// pair of disks bound a loop. Entry `k` of the result is `j + 1`, where `j` is
/// the next crossing after `k` on the same strand pair, or `0` if crossing `k`
/// is the last one there. A pair of disks joined by `m` crossings thus yields
/// `m - 1` generators.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::{Pretzel, compute_homology};
///
/// let trefoil = Pretzel::from_pairs([(1, 3)]).unwrap();
/// assert_eq!(compute_homology(&trefoil), vec![2, 3, 0]);
///
/// let figure_eight = Pretzel::from_pairs([(1, 1), (2, -1), (1, 1), (2, -1)]).unwrap();
/// assert_eq!(compute_homology(&figure_eight), vec![3, 4, 0, 0]);
/// ```
pub fn compute_homology(pretzel: &Pretzel) -> Vec<usize> {
    let crossings: Vec<_> = pretzel.crossings().collect();
    let mut homology = vec![0; crossings.len()];

    let mut next_on_strand = HashMap::new();
    for (k, crossing) in crossings.iter().enumerate().rev() {
        if let Some(next) = next_on_strand.insert(crossing.strand(), k) {
            homology[k] = next + 1;
        }
    }
    homology
}

/// The number of connected pieces of the Seifert surface.
///
/// Every strand contributes a disk, and a disk is glued to its right neighbour
/// exactly when the left one carries a crossing. Each strand without a
/// crossing on it therefore ends a piece.
///
/// ```rust
/// use pretzelrs::{Pretzel, surface_pieces};
///
/// assert_eq!(surface_pieces(&Pretzel::from_pairs([(1, 3), (2, 1)]).unwrap()), 1);
/// assert_eq!(surface_pieces(&Pretzel::from_pairs([(1, 3), (3, 1)]).unwrap()), 2);
/// assert_eq!(surface_pieces(&Pretzel::from_pairs([(1, 3), (2, 0)]).unwrap()), 2);
/// ```
pub fn surface_pieces(pretzel: &Pretzel) -> usize {
    let bridged: HashSet<_> = pretzel
        .iter()
        .filter(|twist| twist.crossing_count() > 0)
        .map(|twist| twist.strand())
        .collect();
    number_of_strands(pretzel) - bridged.len()
}
