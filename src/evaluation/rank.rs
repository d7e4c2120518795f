use crate::cards::Strength;
use std::cmp::Reverse;

/// An opaque showdown rank where smaller is stronger.
///
/// Callers only compare HandRanks; equality means an exact tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandRank(Reverse<Strength>);

impl From<Strength> for HandRank {
    fn from(strength: Strength) -> Self {
        Self(Reverse(strength))
    }
}

impl std::fmt::Display for HandRank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.0)
    }
}
