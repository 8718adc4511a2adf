// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error type for matrix constructions whose shape cannot be honored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// A row passed to [`crate::Matrix::from_rows`] did not have the same
    /// length as the first row.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A square matrix was requested from a matrix whose row and column
    /// counts differ.
    NotSquare {
        /// Row count of the rejected matrix.
        rows: usize,
        /// Column count of the rejected matrix.
        cols: usize,
    },

    /// The flat entry buffer does not hold exactly `rows * cols` entries.
    DataLength {
        /// The product of the requested row and column counts.
        expected: usize,
        /// The number of entries supplied.
        found: usize,
    },
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} entries but the first row has {expected}; matrix rows \
                    must all have the same length."
                )
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "A {rows}x{cols} matrix is not square.")
            }
            Self::DataLength { expected, found } => {
                write!(
                    f,
                    "Expected {expected} matrix entries from the requested shape but found {found}."
                )
            }
        }
    }
}

impl Error for MatrixError {}
