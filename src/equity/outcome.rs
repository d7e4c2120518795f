use crate::evaluation::HandRank;
use std::cmp::Ordering;

/// Where our hand stands against one opponent hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ahead = 0,
    Tied = 1,
    Behind = 2,
}

impl Outcome {
    pub const fn all() -> [Self; 3] {
        [Self::Ahead, Self::Tied, Self::Behind]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// (ours, theirs). Smaller ranks are stronger; only exact equality ties.
impl From<(HandRank, HandRank)> for Outcome {
    fn from((ours, theirs): (HandRank, HandRank)) -> Self {
        match ours.cmp(&theirs) {
            Ordering::Less => Self::Ahead,
            Ordering::Equal => Self::Tied,
            Ordering::Greater => Self::Behind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::evaluation::Bitwise;
    use crate::evaluation::Evaluate;

    fn rank(s: &str) -> HandRank {
        Bitwise.evaluate(Hand::try_from(s).unwrap())
    }

    #[test]
    fn compares_ranks() {
        let quads = rank("As Ah Ad Ac Kh");
        let trips = rank("Ks Kh Kd 2c 3h");
        assert_eq!(Outcome::from((quads, trips)), Outcome::Ahead);
        assert_eq!(Outcome::from((trips, quads)), Outcome::Behind);
        assert_eq!(Outcome::from((trips, trips)), Outcome::Tied);
    }
}
