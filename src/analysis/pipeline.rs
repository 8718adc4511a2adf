// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::AnalysisConfig;
use crate::{
    Pretzel, SquareMatrix, compute_homology, compute_seifert_matrix, missing_strands,
    number_of_strands, partition_twists, permutation_cycles, strand_permutations, surface_pieces,
};

/// Every invariant this crate derives from one pretzel, computed in a single
/// pass.
///
/// The stored pretzel is the one the homology was computed on, so after
/// partitioning it may differ in order from the input. All crossing indices
/// in [`homology`](Self::homology) refer to it.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::{AnalysisConfig, Pretzel, PretzelAnalysis};
///
/// let trefoil = Pretzel::from_pairs([(1, 3)]).unwrap();
/// let analysis = PretzelAnalysis::compute(trefoil, &AnalysisConfig::default());
///
/// assert_eq!(analysis.strand_count(), 2);
/// assert_eq!(analysis.component_count(), 1);
/// assert_eq!(analysis.generator_count(), 2);
/// assert_eq!(analysis.surface_genus(), Some(1));
/// assert!(!analysis.is_split());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PretzelAnalysis {
    pretzel: Pretzel,
    strand_count: usize,
    missing_strands: Vec<usize>,
    permutation: Vec<usize>,
    cycles: Vec<Vec<usize>>,
    homology: Vec<usize>,
    surface_pieces: usize,
    seifert_matrix: Option<SquareMatrix<i32>>,
}

impl PretzelAnalysis {
    /// Run the analysis on `pretzel` under `config`.
    pub fn compute(mut pretzel: Pretzel, config: &AnalysisConfig) -> Self {
        info!(
            "Analyzing pretzel with {} twists and {} crossings",
            pretzel.len(),
            pretzel.crossing_count()
        );

        let strand_count = number_of_strands(&pretzel);
        let missing_strands = missing_strands(&pretzel);
        debug!("Pretzel spans {strand_count} strands; missing strands {missing_strands:?}");
        if config.partition_twists {
            partition_twists(&missing_strands, &mut pretzel);
        }

        let permutation = strand_permutations(&pretzel);
        let cycles = permutation_cycles(&permutation);
        debug!(
            "Strand permutation {permutation:?} closes into {} components",
            cycles.len()
        );

        let homology = compute_homology(&pretzel);
        let surface_pieces = surface_pieces(&pretzel);
        let seifert_matrix = config
            .compute_seifert
            .then(|| compute_seifert_matrix(&pretzel, &homology));
        if let Some(seifert) = &seifert_matrix {
            debug!("Seifert matrix of size {}:\n{seifert}", seifert.size());
        }

        info!("Pretzel analysis complete.");
        Self {
            pretzel,
            strand_count,
            missing_strands,
            permutation,
            cycles,
            homology,
            surface_pieces,
            seifert_matrix,
        }
    }

    /// The pretzel the analysis ran on, after any partitioning.
    pub fn pretzel(&self) -> &Pretzel {
        &self.pretzel
    }

    /// See [`number_of_strands`].
    pub fn strand_count(&self) -> usize {
        self.strand_count
    }

    /// See [`missing_strands`].
    pub fn missing_strands(&self) -> &[usize] {
        &self.missing_strands
    }

    /// See [`strand_permutations`].
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// The strands making up each link component.
    pub fn cycles(&self) -> &[Vec<usize>] {
        &self.cycles
    }

    /// The number of link components.
    pub fn component_count(&self) -> usize {
        self.cycles.len()
    }

    /// See [`compute_homology`].
    pub fn homology(&self) -> &[usize] {
        &self.homology
    }

    /// The number of homology generators, which is the size of the Seifert
    /// matrix.
    pub fn generator_count(&self) -> usize {
        self.homology.iter().filter(|&&partner| partner != 0).count()
    }

    /// See [`surface_pieces`].
    pub fn surface_pieces(&self) -> usize {
        self.surface_pieces
    }

    /// The Seifert matrix, or `None` if it was not requested.
    pub fn seifert_matrix(&self) -> Option<&SquareMatrix<i32>> {
        self.seifert_matrix.as_ref()
    }

    /// Check if some strand is untouched, in which case the link splits.
    pub fn is_split(&self) -> bool {
        !self.missing_strands.is_empty()
    }

    /// The total genus of the Seifert surface, or `None` if the Seifert matrix
    /// was not requested.
    ///
    /// The surface has first Betti number `2g + μ - p` for `μ` link
    /// components and `p` pieces, and the Seifert matrix has one row per
    /// generator of its first homology.
    pub fn surface_genus(&self) -> Option<usize> {
        let seifert = self.seifert_matrix.as_ref()?;
        (seifert.size() + self.surface_pieces)
            .checked_sub(self.component_count())
            .map(|twice_genus| twice_genus / 2)
    }
}
