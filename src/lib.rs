// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `pretzelrs` crate computes classical invariants of pretzel links given
//! as a sequence of twist regions between adjacent strands: strand counts and
//! missing strands, the induced strand permutation and its components, a
//! homology basis of the Seifert surface, and the Seifert matrix on that basis.
//! Generic dense matrices with exact integer determinants back the linear
//! algebra.

#![warn(missing_docs)]

pub use crate::algebra::{
    Additive, AlgebraicBase, DEFAULT_MAX_ULPS, FieldLike, Multiplicative, RingLike, UlpEq,
    float_eq, ulp_distance,
};
pub use crate::analysis::{AnalysisConfig, AnalysisConfigBuilder, PretzelAnalysis};
pub use crate::homology::{compute_homology, compute_seifert_matrix, surface_pieces};
pub use crate::matrix::{Matrix, MatrixError, SquareMatrix, vandermonde};
pub use crate::pretzel::{Crossing, Pretzel, Twist, TwistError};
pub use crate::topology::{
    component_count, missing_strands, number_of_strands, partition_twists, permutation_cycles,
    strand_cycles, strand_permutations,
};

mod algebra;
mod analysis;
mod homology;
mod matrix;
mod pretzel;
mod topology;
