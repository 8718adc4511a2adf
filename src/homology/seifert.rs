// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use tracing::trace;

use crate::{Crossing, Pretzel, SquareMatrix};

/// A homology generator: the loop through the bands of crossings `start` and
/// `end` (0-based, `start < end`) between the same pair of disks.
#[derive(Clone, Copy, Debug)]
struct Generator {
    start: usize,
    end: usize,
}

/// Build the Seifert matrix of the pretzel on the generators of `homology`.
///
/// `homology` must be the pairing produced by
/// [`compute_homology`](crate::compute_homology) for `pretzel` (or one with
/// the same shape). Only the non-zero entries become generators, kept in
/// their original order, so the result has one row and column per generator
/// and no pruning pass is needed.
///
/// Entry `(a, b)` is the linking number of generator `a` with the push-off of
/// generator `b`. A generator spanning two positive crossings has self-linking
/// `-1`, one spanning two negative crossings `+1`, and one of mixed sign `0`.
/// Off the diagonal, only generators that share a crossing or interleave on
/// adjacent strand pairs link.
///
/// Neither argument is modified.
///
/// # Panics
/// If `homology` does not have one entry per crossing of `pretzel`, or if a
/// non-zero entry does not point to a later crossing.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::{Matrix, Pretzel, SquareMatrix, compute_homology, compute_seifert_matrix};
///
/// let trefoil = Pretzel::from_pairs([(1, 3)]).unwrap();
/// let seifert = compute_seifert_matrix(&trefoil, &compute_homology(&trefoil));
///
/// let expected = Matrix::from_rows(vec![vec![-1, 0], vec![1, -1]]).unwrap();
/// assert_eq!(seifert, SquareMatrix::try_from(expected).unwrap());
/// ```
pub fn compute_seifert_matrix(pretzel: &Pretzel, homology: &[usize]) -> SquareMatrix<i32> {
    let crossings: Vec<Crossing> = pretzel.crossings().collect();
    assert_eq!(
        homology.len(),
        crossings.len(),
        "homology pairing has {} entries but the pretzel has {} crossings",
        homology.len(),
        crossings.len()
    );

    let generators: Vec<Generator> = homology
        .iter()
        .enumerate()
        .filter(|&(_, &partner)| partner != 0)
        .map(|(start, &partner)| {
            assert!(
                start + 1 < partner && partner <= crossings.len(),
                "homology entry {partner} at crossing {} does not name a later crossing",
                start + 1
            );
            Generator {
                start,
                end: partner - 1,
            }
        })
        .collect();
    trace!(
        "Building Seifert matrix on {} generators from {} crossings",
        generators.len(),
        crossings.len()
    );

    let mut seifert = SquareMatrix::new(generators.len());
    for (a, first) in generators.iter().enumerate() {
        let sign_sum = crossings[first.start].sign() + crossings[first.end].sign();
        seifert[(a, a)] = -sign_sum.signum();

        for (b, second) in generators.iter().enumerate().skip(a + 1) {
            // disjoint or nested loops do not link
            if first.end < second.start || first.end > second.end {
                continue;
            }

            if first.end == second.start {
                if crossings[second.start].is_positive() {
                    seifert[(b, a)] = 1;
                } else {
                    seifert[(a, b)] = -1;
                }
                continue;
            }

            let first_strand = crossings[first.start].strand();
            let second_strand = crossings[second.start].strand();
            if second_strand == first_strand + 1 {
                seifert[(a, b)] = 1;
            } else if first_strand == second_strand + 1 {
                seifert[(b, a)] = -1;
            }
        }
    }
    seifert
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, compute_homology};

    fn pretzel(pairs: &[(usize, i32)]) -> Pretzel {
        Pretzel::from_pairs(pairs.iter().copied()).unwrap()
    }

    fn seifert(pairs: &[(usize, i32)]) -> SquareMatrix<i32> {
        let pretzel = pretzel(pairs);
        compute_seifert_matrix(&pretzel, &compute_homology(&pretzel))
    }

    fn square(rows: Vec<Vec<i32>>) -> SquareMatrix<i32> {
        SquareMatrix::try_from(Matrix::from_rows(rows).unwrap()).unwrap()
    }

    #[test]
    fn test_trefoil() {
        assert_eq!(seifert(&[(1, 3)]), square(vec![vec![-1, 0], vec![1, -1]]));
        assert_eq!(seifert(&[(1, -3)]), square(vec![vec![1, -1], vec![0, 1]]));
    }

    #[test]
    fn test_figure_eight() {
        assert_eq!(
            seifert(&[(1, 1), (2, -1), (1, 1), (2, -1)]),
            square(vec![vec![-1, 1], vec![0, 1]])
        );
    }

    #[test]
    fn test_hopf_link() {
        assert_eq!(seifert(&[(1, 2)]), square(vec![vec![-1]]));
    }

    #[test]
    fn test_split_link_is_block_diagonal() {
        assert_eq!(
            seifert(&[(1, 3), (3, -2)]),
            square(vec![vec![-1, 0, 0], vec![1, -1, 0], vec![0, 0, 1]])
        );
    }

    #[test]
    fn test_nested_generators_do_not_link() {
        assert_eq!(
            seifert(&[(1, 1), (2, 2), (1, 1)]),
            square(vec![vec![-1, 0], vec![0, -1]])
        );
    }

    #[test]
    fn test_mixed_sign_generator() {
        let seifert = seifert(&[(1, 1), (1, -1)]);
        assert_eq!(seifert, square(vec![vec![0]]));
        assert!(seifert.is_zero_row(0));
    }

    #[test]
    fn test_no_generators() {
        assert_eq!(seifert(&[(1, 1), (2, -1)]).size(), 0);
        assert_eq!(seifert(&[]).size(), 0);
    }

    #[test]
    fn test_inputs_untouched() {
        let twists = pretzel(&[(1, 3), (2, -2)]);
        let homology = compute_homology(&twists);
        let (before_twists, before_homology) = (twists.clone(), homology.clone());
        compute_seifert_matrix(&twists, &homology);
        assert_eq!(twists, before_twists);
        assert_eq!(homology, before_homology);
    }

    #[test]
    #[should_panic(expected = "homology pairing has 2 entries")]
    fn test_length_mismatch() {
        compute_seifert_matrix(&pretzel(&[(1, 3)]), &[2, 0]);
    }

    #[test]
    #[should_panic(expected = "does not name a later crossing")]
    fn test_backward_pairing() {
        compute_seifert_matrix(&pretzel(&[(1, 3)]), &[0, 1, 0]);
    }
}
