// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use traits::{Additive, AlgebraicBase, FieldLike, Multiplicative, RingLike};
pub use ulp::{DEFAULT_MAX_ULPS, UlpEq, float_eq, ulp_distance};

mod traits;
mod ulp;
