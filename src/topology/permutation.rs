// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::strands::number_of_strands;
use crate::Pretzel;

/// The permutation of strands induced by passing through every twist in
/// order.
///
/// Entry `i` of the result is the 1-based position at which the strand
/// entering at position `i + 1` leaves the diagram. A twist with an odd number
/// of crossings exchanges the strands currently at its two positions; an even
/// number leaves them in place. The sign of a twist never matters here.
///
/// The result is always a bijection on `1..=number_of_strands(pretzel)`.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::{Pretzel, strand_permutations};
///
/// let trefoil = Pretzel::from_pairs([(1, 3)]).unwrap();
/// assert_eq!(strand_permutations(&trefoil), vec![2, 1]);
///
/// let braid = Pretzel::from_pairs([(1, 1), (2, 1)]).unwrap();
/// assert_eq!(strand_permutations(&braid), vec![3, 1, 2]);
/// ```
pub fn strand_permutations(pretzel: &Pretzel) -> Vec<usize> {
    let n = number_of_strands(pretzel);

    // occupants[p] is the incoming strand currently at position p + 1
    let mut occupants: Vec<usize> = (1..=n).collect();
    for twist in pretzel.iter().filter(|twist| twist.swaps_strands()) {
        occupants.swap(twist.strand() - 1, twist.strand());
    }

    let mut exits = vec![0; n];
    for (position, &strand) in occupants.iter().enumerate() {
        exits[strand - 1] = position + 1;
    }
    exits
}

/// Decompose a 1-based permutation into its cycles.
///
/// Each cycle starts at its smallest element and follows the permutation from
/// there; cycles are ordered by their smallest element. Fixed points appear as
/// cycles of length one.
///
/// # Panics
/// If `permutation` is not a bijection on `1..=permutation.len()`.
pub fn permutation_cycles(permutation: &[usize]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; permutation.len()];
    let mut cycles = Vec::new();
    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            cycle.push(current + 1);
            current = permutation[current] - 1;
        }
        assert_eq!(
            current, start,
            "{permutation:?} is not a permutation of 1..={}",
            permutation.len()
        );
        cycles.push(cycle);
    }
    cycles
}

/// The cycles of [`strand_permutations`]. Each cycle is the set of strands
/// that close up into one component of the link.
pub fn strand_cycles(pretzel: &Pretzel) -> Vec<Vec<usize>> {
    permutation_cycles(&strand_permutations(pretzel))
}

/// The number of components of the link obtained by closing the pretzel.
///
/// ```rust
/// use pretzelrs::{Pretzel, component_count};
///
/// assert_eq!(component_count(&Pretzel::from_pairs([(1, 3)]).unwrap()), 1);
/// assert_eq!(component_count(&Pretzel::from_pairs([(1, 2)]).unwrap()), 2);
/// ```
pub fn component_count(pretzel: &Pretzel) -> usize {
    strand_cycles(pretzel).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pretzel(pairs: &[(usize, i32)]) -> Pretzel {
        Pretzel::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_even_twists_fix_strands() {
        assert_eq!(strand_permutations(&pretzel(&[(1, 2)])), vec![1, 2]);
        assert_eq!(strand_permutations(&pretzel(&[(1, -4), (2, 0)])), vec![1, 2, 3]);
    }

    #[test]
    fn test_sign_is_ignored() {
        assert_eq!(
            strand_permutations(&pretzel(&[(1, 1), (2, -1), (1, 1), (2, -1)])),
            strand_permutations(&pretzel(&[(1, -1), (2, 1), (1, -3), (2, 1)]))
        );
    }

    #[test]
    fn test_figure_eight_permutation() {
        let figure_eight = pretzel(&[(1, 1), (2, -1), (1, 1), (2, -1)]);
        assert_eq!(strand_permutations(&figure_eight), vec![2, 3, 1]);
        assert_eq!(strand_cycles(&figure_eight), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_split_cycles() {
        let split = pretzel(&[(1, 3), (3, -2)]);
        assert_eq!(strand_permutations(&split), vec![2, 1, 3, 4]);
        assert_eq!(strand_cycles(&split), vec![vec![1, 2], vec![3], vec![4]]);
        assert_eq!(component_count(&split), 3);
    }

    #[test]
    fn test_empty_pretzel() {
        assert!(strand_permutations(&Pretzel::default()).is_empty());
        assert_eq!(component_count(&Pretzel::default()), 0);
    }

    #[test]
    fn test_permutation_cycles() {
        assert_eq!(
            permutation_cycles(&[3, 1, 2, 5, 4, 6]),
            vec![vec![1, 3, 2], vec![4, 5], vec![6]]
        );
    }

    #[test]
    #[should_panic]
    fn test_permutation_cycles_rejects_repeats() {
        permutation_cycles(&[2, 2, 1]);
    }
}
