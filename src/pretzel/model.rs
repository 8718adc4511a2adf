// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::twist::{Crossing, Twist, TwistError};

/// An ordered sequence of twists read as a braid word.
///
/// Order matters: twists are applied top to bottom, and every analysis in
/// this crate indexes crossings by their position in the unrolled word. The
/// empty pretzel is valid and has no strands.
///
/// Serializes transparently as a list of `(strand, count)` pairs.
///
/// # Examples
///
/// ```rust
/// use pretzelrs::Pretzel;
///
/// let figure_eight = Pretzel::from_pairs([(1, 1), (2, -1), (1, 1), (2, -1)]).unwrap();
/// assert_eq!(figure_eight.len(), 4);
/// assert_eq!(figure_eight.crossing_count(), 4);
/// assert_eq!(figure_eight.to_string(), "[(1, 1), (2, -1), (1, 1), (2, -1)]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pretzel {
    twists: Vec<Twist>,
}

impl Pretzel {
    /// Create a pretzel from already validated twists.
    pub fn new(twists: Vec<Twist>) -> Self {
        Self { twists }
    }

    /// Create a pretzel from `(strand, count)` pairs, failing on the first
    /// pair placed on strand 0.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TwistError>
    where
        I: IntoIterator<Item = (usize, i32)>,
    {
        pairs
            .into_iter()
            .map(Twist::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// The twists in braid order.
    pub fn twists(&self) -> &[Twist] {
        &self.twists
    }

    pub(crate) fn twists_mut(&mut self) -> &mut Vec<Twist> {
        &mut self.twists
    }

    /// The number of twists (not crossings).
    pub fn len(&self) -> usize {
        self.twists.len()
    }

    /// Check if the pretzel has no twists.
    pub fn is_empty(&self) -> bool {
        self.twists.is_empty()
    }

    /// Iterate over the twists in braid order.
    pub fn iter(&self) -> std::slice::Iter<'_, Twist> {
        self.twists.iter()
    }

    /// Append a twist below the existing ones.
    pub fn push(&mut self, twist: Twist) {
        self.twists.push(twist);
    }

    /// Iterate over the unrolled crossings: each twist contributes
    /// `|count|` consecutive crossings of its sign on its strand.
    pub fn crossings(&self) -> impl Iterator<Item = Crossing> + '_ {
        self.twists.iter().flat_map(Twist::crossings)
    }

    /// Total number of crossings, the sum of `|count|` over all twists.
    pub fn crossing_count(&self) -> usize {
        self.twists.iter().map(Twist::crossing_count).sum()
    }
}

impl Index<usize> for Pretzel {
    type Output = Twist;

    fn index(&self, index: usize) -> &Self::Output {
        &self.twists[index]
    }
}

impl From<Vec<Twist>> for Pretzel {
    fn from(twists: Vec<Twist>) -> Self {
        Self::new(twists)
    }
}

impl FromIterator<Twist> for Pretzel {
    fn from_iter<I: IntoIterator<Item = Twist>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Pretzel {
    type Item = &'a Twist;
    type IntoIter = std::slice::Iter<'a, Twist>;

    fn into_iter(self) -> Self::IntoIter {
        self.twists.iter()
    }
}

impl Display for Pretzel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, twist) in self.twists.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{twist}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let pretzel = Pretzel::from_pairs([(1, 3), (2, -1)]).unwrap();
        assert_eq!(pretzel.len(), 2);
        assert_eq!(pretzel[1], Twist::new(2, -1).unwrap());
        assert_eq!(
            Pretzel::from_pairs([(1, 3), (0, -1)]),
            Err(TwistError::ZeroStrand)
        );
    }

    #[test]
    fn test_empty() {
        let pretzel = Pretzel::default();
        assert!(pretzel.is_empty());
        assert_eq!(pretzel.crossing_count(), 0);
        assert_eq!(pretzel.crossings().count(), 0);
        assert_eq!(pretzel.to_string(), "[]");
    }

    #[test]
    fn test_unrolled_crossings() {
        let pretzel = Pretzel::from_pairs([(1, 2), (2, 0), (3, -1)]).unwrap();
        let crossings: Vec<_> = pretzel.crossings().collect();
        assert_eq!(
            crossings,
            vec![
                Crossing::new(1, true),
                Crossing::new(1, true),
                Crossing::new(3, false),
            ]
        );
        assert_eq!(pretzel.crossing_count(), 3);
    }

    #[test]
    fn test_collect_and_push() {
        let mut pretzel: Pretzel = [(1, 1), (2, 1)]
            .into_iter()
            .map(|pair| Twist::try_from(pair).unwrap())
            .collect();
        pretzel.push(Twist::new(1, -1).unwrap());
        assert_eq!(pretzel.twists().len(), 3);
        assert_eq!((&pretzel).into_iter().filter(|t| t.is_positive()).count(), 2);
    }

    #[test]
    fn test_serde_transparent() {
        let pretzel = Pretzel::from_pairs([(1, 3), (2, -2)]).unwrap();
        let json = serde_json::to_string(&pretzel).unwrap();
        assert_eq!(json, "[[1,3],[2,-2]]");
        assert_eq!(serde_json::from_str::<Pretzel>(&json).unwrap(), pretzel);
        assert!(serde_json::from_str::<Pretzel>("[[1,3],[0,2]]").is_err());
    }
}
