// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use generators::{compute_homology, surface_pieces};
pub use seifert::compute_seifert_matrix;

mod generators;
mod seifert;
