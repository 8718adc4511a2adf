// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use serde::de::Error as DeserializeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use super::error::MatrixError;
use crate::{FieldLike, RingLike};

/// A dense rectangular matrix stored in row-major order.
///
/// The shape is fixed at construction and every entry starts at the additive
/// identity of the entry type. Entries are accessed by `(row, column)` pairs
/// through [`Index`] and [`IndexMut`]; an index outside the shape panics. For
/// checked access use [`Matrix::get`] and [`Matrix::get_mut`].
///
/// # Examples
///
/// ```rust
/// use pretzelrs::Matrix;
///
/// let mut m = Matrix::<i32>::new(2, 3);
/// m[(0, 2)] = 5;
///
/// let mt = m.transpose();
/// assert_eq!((mt.rows(), mt.cols()), (3, 2));
/// assert_eq!(mt[(2, 0)], 5);
/// assert_eq!(mt.transpose(), m);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Create a matrix of the given shape from its entries in row-major order.
    /// Returns [`MatrixError::DataLength`] unless `data` has exactly
    /// `rows * cols` entries.
    pub fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a vector of rows. Every row must have the same
    /// length, else [`MatrixError::RaggedRows`] names the first offending row.
    /// An empty vector of rows gives the 0x0 matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self {
            rows: row_count,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if the row and column counts agree.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Return a reference to the entry at `(row, col)`, or `None` if it lies
    /// outside the shape of the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Return a mutable reference to the entry at `(row, col)`, or `None` if
    /// it lies outside the shape of the matrix.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            Some(&mut self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// The entries of `row` as a slice. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "row {row} out of range for a matrix with {} rows",
            self.rows
        );
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over the rows of the matrix as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        // `chunks_exact` rejects a chunk size of zero.
        (0..self.rows).map(|row| self.row(row))
    }

    /// Swap rows `first` and `second` in place.
    pub fn swap_rows(&mut self, first: usize, second: usize) {
        assert!(
            first < self.rows && second < self.rows,
            "cannot swap rows {first} and {second} of a matrix with {} rows",
            self.rows
        );
        if first == second {
            return;
        }
        for col in 0..self.cols {
            self.data
                .swap(first * self.cols + col, second * self.cols + col);
        }
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for a {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T: RingLike> Matrix<T> {
    /// Create a `rows` by `cols` matrix with every entry zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create the `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut identity = Self::new(n, n);
        for i in 0..n {
            identity[(i, i)] = T::one();
        }
        identity
    }

    /// Return the `cols` by `rows` transpose; `self` is left untouched.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                transposed[(col, row)] = self[(row, col)].clone();
            }
        }
        transposed
    }

    /// Check if every entry of `row` is zero.
    pub fn is_zero_row(&self, row: usize) -> bool {
        self.row(row).iter().all(RingLike::is_zero)
    }

    /// Check if every entry of `col` is zero. Panics if `col` is out of range.
    pub fn is_zero_col(&self, col: usize) -> bool {
        (0..self.rows).all(|row| self[(row, col)].is_zero())
    }
}

impl<T: FieldLike> Matrix<T> {
    /// Reduce the augmented system `[A | b]` held by `self` to reduced row
    /// echelon form and return the result.
    ///
    /// `self` must have `n` rows and `n + 1` columns: `n` coefficient columns
    /// followed by the right-hand side. When the coefficient block is
    /// non-singular the last column of the result holds the unique solution.
    /// Pivots are chosen by largest magnitude within the column (partial
    /// pivoting). Singular systems are not an error; the result expresses the
    /// row-reduced dependent system, with zero rows collected at the bottom.
    ///
    /// # Panics
    /// Panics if the shape is not `n x (n + 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretzelrs::{DEFAULT_MAX_ULPS, Matrix, float_eq};
    ///
    /// // x + y = 3, x - y = 1
    /// let system = Matrix::from_rows(vec![vec![1.0, 1.0, 3.0], vec![1.0, -1.0, 1.0]]).unwrap();
    /// let reduced = system.gauss_jordan();
    /// assert!(float_eq(reduced[(0, 2)], 2.0, DEFAULT_MAX_ULPS));
    /// assert!(float_eq(reduced[(1, 2)], 1.0, DEFAULT_MAX_ULPS));
    /// ```
    pub fn gauss_jordan(&self) -> Self {
        assert_eq!(
            self.cols,
            self.rows + 1,
            "Gauss-Jordan elimination expects an augmented n x (n + 1) system"
        );

        let mut reduced = self.clone();
        let mut pivot_row = 0;
        for col in 0..reduced.cols {
            if pivot_row == reduced.rows {
                break;
            }

            let mut best = pivot_row;
            for row in pivot_row + 1..reduced.rows {
                if reduced[(row, col)].magnitude() > reduced[(best, col)].magnitude() {
                    best = row;
                }
            }
            if reduced[(best, col)].is_zero() {
                continue;
            }
            reduced.swap_rows(pivot_row, best);

            let pivot = reduced[(pivot_row, col)].clone();
            for k in col..reduced.cols {
                reduced[(pivot_row, k)] /= pivot.clone();
            }
            reduced[(pivot_row, col)] = T::one();

            for row in 0..reduced.rows {
                if row == pivot_row {
                    continue;
                }
                let factor = reduced[(row, col)].clone();
                if factor.is_zero() {
                    continue;
                }
                for k in col..reduced.cols {
                    let delta = factor.clone() * reduced[(pivot_row, k)].clone();
                    reduced[(row, k)] -= delta;
                }
                reduced[(row, col)] = T::zero();
            }

            pivot_row += 1;
        }

        trace!(
            "Gauss-Jordan elimination of a {}x{} system found {pivot_row} pivots",
            self.rows, self.cols
        );
        reduced
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl<T: RingLike> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(
            (self.rows, self.cols),
            (rhs.rows, rhs.cols),
            "matrix shape mismatch"
        );
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        }
    }
}

impl<T: RingLike> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(
            (self.rows, self.cols),
            (rhs.rows, rhs.cols),
            "matrix shape mismatch"
        );
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        }
    }
}

impl<T: RingLike> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(
            self.cols, rhs.rows,
            "matrix product requires the left column count to match the right row count"
        );
        let mut product = Matrix::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum += self[(i, k)].clone() * rhs[(k, j)].clone();
                }
                product[(i, j)] = sum;
            }
        }
        product
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for row in 0..self.rows {
            if row != 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for col in 0..self.cols {
                if col != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[row * self.cols + col])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.rows, self.cols, &self.data).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (rows, cols, data) = <(usize, usize, Vec<T>)>::deserialize(deserializer)?;
        Matrix::from_parts(rows, cols, data).map_err(D::Error::custom)
    }
}
