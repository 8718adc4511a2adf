// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::iter::{RepeatN, repeat_n};

use serde::{Deserialize, Serialize};

/// Error type for twists that cannot be placed in a diagram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TwistError {
    /// Strands are numbered from 1; a twist on strand 0 has no left strand.
    ZeroStrand,
}

impl Display for TwistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStrand => {
                write!(
                    f,
                    "Twists are placed between strands s and s + 1 for s >= 1; strand 0 does not \
                    exist."
                )
            }
        }
    }
}

impl Error for TwistError {}

/// A twist region between the adjacent strands `strand` and `strand + 1`.
///
/// The magnitude of `count` is the number of crossings in the region and its
/// sign is their handedness. A twist with zero crossings is allowed; it still
/// references both of its strands.
///
/// Twists serialize as `(strand, count)` pairs and reject strand 0 when
/// deserialized, exactly as [`Twist::new`] does.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::{Twist, TwistError};
///
/// let twist = Twist::new(2, -3).unwrap();
/// assert_eq!(twist.right_strand(), 3);
/// assert_eq!(twist.crossing_count(), 3);
/// assert!(!twist.is_positive());
///
/// assert_eq!(Twist::new(0, 1), Err(TwistError::ZeroStrand));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, i32)", into = "(usize, i32)")]
pub struct Twist {
    strand: usize,
    count: i32,
}

impl Twist {
    /// Create a twist of `count` signed crossings between `strand` and
    /// `strand + 1`. Returns [`TwistError::ZeroStrand`] if `strand` is 0.
    pub fn new(strand: usize, count: i32) -> Result<Self, TwistError> {
        if strand == 0 {
            return Err(TwistError::ZeroStrand);
        }
        Ok(Self { strand, count })
    }

    /// The left strand of the twisted pair (1-based).
    pub fn strand(&self) -> usize {
        self.strand
    }

    /// The right strand of the twisted pair, `strand + 1`.
    pub fn right_strand(&self) -> usize {
        self.strand + 1
    }

    /// The signed crossing count.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// The number of crossings in the twist region.
    pub fn crossing_count(&self) -> usize {
        self.count.unsigned_abs() as usize
    }

    /// Check if the crossings of the twist are positive.
    pub fn is_positive(&self) -> bool {
        self.count > 0
    }

    /// Check if the twist has an odd number of crossings and hence exchanges
    /// the positions of its two strands.
    pub fn swaps_strands(&self) -> bool {
        self.count % 2 != 0
    }

    /// Check if `strand` is one of the two strands of the twist.
    pub fn touches(&self, strand: usize) -> bool {
        strand == self.strand || strand == self.strand + 1
    }

    /// Iterate over the individual crossings of the twist.
    pub fn crossings(&self) -> RepeatN<Crossing> {
        repeat_n(
            Crossing::new(self.strand, self.is_positive()),
            self.crossing_count(),
        )
    }
}

impl TryFrom<(usize, i32)> for Twist {
    type Error = TwistError;

    fn try_from((strand, count): (usize, i32)) -> Result<Self, Self::Error> {
        Self::new(strand, count)
    }
}

impl From<Twist> for (usize, i32) {
    fn from(twist: Twist) -> Self {
        (twist.strand, twist.count)
    }
}

impl Display for Twist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.strand, self.count)
    }
}

/// A single crossing between `strand` and `strand + 1`, obtained by unrolling
/// a [`Twist`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crossing {
    strand: usize,
    positive: bool,
}

impl Crossing {
    /// Create a crossing between `strand` and `strand + 1` of the given
    /// handedness.
    pub fn new(strand: usize, positive: bool) -> Self {
        Self { strand, positive }
    }

    /// The left strand of the crossing (1-based).
    pub fn strand(&self) -> usize {
        self.strand
    }

    /// Check if the crossing is positive.
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// The crossing sign as `+1` or `-1`.
    pub fn sign(&self) -> i32 {
        if self.positive { 1 } else { -1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let twist = Twist::new(1, 3).unwrap();
        assert_eq!(twist.strand(), 1);
        assert_eq!(twist.right_strand(), 2);
        assert_eq!(twist.count(), 3);
        assert_eq!(Twist::try_from((4, -2)), Twist::new(4, -2));
        assert_eq!(Twist::try_from((0, 5)), Err(TwistError::ZeroStrand));
    }

    #[test]
    fn test_touches() {
        let twist = Twist::new(2, 1).unwrap();
        assert!(!twist.touches(1));
        assert!(twist.touches(2));
        assert!(twist.touches(3));
        assert!(!twist.touches(4));
    }

    #[test]
    fn test_parity() {
        assert!(Twist::new(1, 3).unwrap().swaps_strands());
        assert!(Twist::new(1, -1).unwrap().swaps_strands());
        assert!(!Twist::new(1, -2).unwrap().swaps_strands());
        assert!(!Twist::new(1, 0).unwrap().swaps_strands());
    }

    #[test]
    fn test_unroll_crossings() {
        let crossings: Vec<_> = Twist::new(3, -2).unwrap().crossings().collect();
        assert_eq!(crossings, vec![Crossing::new(3, false); 2]);
        assert_eq!(crossings[0].sign(), -1);

        assert_eq!(Twist::new(1, 0).unwrap().crossings().count(), 0);
        assert_eq!(Twist::new(1, 4).unwrap().crossings().next().unwrap().sign(), 1);
    }

    #[test]
    fn test_serde_pairs() {
        let twist = Twist::new(2, -5).unwrap();
        assert_eq!(serde_json::to_string(&twist).unwrap(), "[2,-5]");
        assert_eq!(serde_json::from_str::<Twist>("[2,-5]").unwrap(), twist);

        let error = serde_json::from_str::<Twist>("[0,1]").unwrap_err();
        assert!(error.to_string().contains("strand 0 does not exist"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Twist::new(1, -3).unwrap().to_string(), "(1, -3)");
    }
}
