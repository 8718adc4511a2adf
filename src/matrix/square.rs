// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, Deref, Index, IndexMut, Mul, Sub};

use serde::de::Error as DeserializeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dense::Matrix;
use super::error::MatrixError;
use crate::RingLike;

/// A [`Matrix`] whose row and column counts are guaranteed equal.
///
/// Read-only matrix methods are available through [`Deref`]; operations that
/// preserve squareness (transpose, arithmetic) return a `SquareMatrix` again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    matrix: Matrix<T>,
}

impl<T> SquareMatrix<T> {
    /// The number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.matrix.rows()
    }

    /// Borrow the underlying rectangular matrix.
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    /// Consume `self` and return the underlying rectangular matrix.
    pub fn into_matrix(self) -> Matrix<T> {
        self.matrix
    }

    /// Swap rows `first` and `second` in place.
    pub fn swap_rows(&mut self, first: usize, second: usize) {
        self.matrix.swap_rows(first, second);
    }
}

impl<T: RingLike> SquareMatrix<T> {
    /// Create an `n` by `n` matrix with every entry zero.
    pub fn new(n: usize) -> Self {
        Self {
            matrix: Matrix::new(n, n),
        }
    }

    /// Create the `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            matrix: Matrix::identity(n),
        }
    }

    /// Build the Vandermonde matrix of `values`: entry `(i, j)` is
    /// `values[i]` raised to the power `j`, with the zeroth power equal to one
    /// even when `values[i]` is zero.
    pub fn vandermonde(values: &[T]) -> Self {
        let n = values.len();
        let mut vandermonde = Self::new(n);
        for (row, value) in values.iter().enumerate() {
            let mut power = T::one();
            for col in 0..n {
                vandermonde[(row, col)] = power.clone();
                power *= value.clone();
            }
        }
        vandermonde
    }

    /// Return the transpose; `self` is left untouched.
    pub fn transpose(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Compute the determinant by fraction-free (Bareiss) elimination.
    ///
    /// Every intermediate value is itself a minor of the original matrix, so
    /// each division is exact and the result is exact for integer entry
    /// types. Zero pivots are handled by row exchange; if no exchange is
    /// possible the determinant is zero. The determinant of the 0x0 matrix is
    /// one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretzelrs::SquareMatrix;
    ///
    /// let mut m = SquareMatrix::<i32>::new(2);
    /// m[(0, 0)] = 2;
    /// m[(0, 1)] = 7;
    /// m[(1, 0)] = -3;
    /// m[(1, 1)] = -1;
    /// assert_eq!(m.determinant(), 19);
    /// ```
    pub fn determinant(&self) -> T {
        let n = self.size();
        if n == 0 {
            return T::one();
        }

        let mut work = self.matrix.clone();
        let mut negate = false;
        let mut previous_pivot = T::one();
        for k in 0..n - 1 {
            if work[(k, k)].is_zero() {
                match (k + 1..n).find(|&row| !work[(row, k)].is_zero()) {
                    Some(row) => {
                        work.swap_rows(k, row);
                        negate = !negate;
                    }
                    None => return T::zero(),
                }
            }

            for i in k + 1..n {
                for j in k + 1..n {
                    let minor = work[(k, k)].clone() * work[(i, j)].clone()
                        - work[(i, k)].clone() * work[(k, j)].clone();
                    work[(i, j)] = minor.exact_div(&previous_pivot);
                }
            }
            previous_pivot = work[(k, k)].clone();
        }

        let determinant = work[(n - 1, n - 1)].clone();
        if negate { -determinant } else { determinant }
    }
}

/// Build the `n` by `n` Vandermonde matrix of `values`; see
/// [`SquareMatrix::vandermonde`].
///
/// ```rust
/// use pretzelrs::vandermonde;
///
/// let m = vandermonde(&[2, 3, 5]);
/// assert_eq!(m[(1, 0)], 1);
/// assert_eq!(m[(1, 1)], 3);
/// assert_eq!(m[(1, 2)], 9);
/// ```
pub fn vandermonde<T: RingLike>(values: &[T]) -> SquareMatrix<T> {
    SquareMatrix::vandermonde(values)
}

impl<T> Deref for SquareMatrix<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Self::Target {
        &self.matrix
    }
}

impl<T> TryFrom<Matrix<T>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(matrix: Matrix<T>) -> Result<Self, Self::Error> {
        if matrix.is_square() {
            Ok(Self { matrix })
        } else {
            Err(MatrixError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            })
        }
    }
}

impl<T> From<SquareMatrix<T>> for Matrix<T> {
    fn from(square: SquareMatrix<T>) -> Self {
        square.matrix
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.matrix[index]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.matrix[index]
    }
}

impl<T: RingLike> Add for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn add(self, rhs: Self) -> Self::Output {
        SquareMatrix {
            matrix: &self.matrix + &rhs.matrix,
        }
    }
}

impl<T: RingLike> Sub for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        SquareMatrix {
            matrix: &self.matrix - &rhs.matrix,
        }
    }
}

impl<T: RingLike> Mul for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        SquareMatrix {
            matrix: &self.matrix * &rhs.matrix,
        }
    }
}

impl<T: Display> Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.matrix, f)
    }
}

impl<T: Serialize> Serialize for SquareMatrix<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.matrix.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SquareMatrix<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let matrix = Matrix::<T>::deserialize(deserializer)?;
        SquareMatrix::try_from(matrix).map_err(D::Error::custom)
    }
}
