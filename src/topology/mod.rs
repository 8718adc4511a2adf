// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use permutation::{component_count, permutation_cycles, strand_cycles, strand_permutations};
pub use strands::{missing_strands, number_of_strands, partition_twists};

mod permutation;
mod strands;
