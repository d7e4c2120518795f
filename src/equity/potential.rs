use super::outcome::Outcome;
use crate::EPSILON;
use crate::Probability;
use std::ops::Add;

/// Transition counts between where we stand now and after the next card.
///
/// `matrix[now][later]` counts (opponent pocket, next card) pairs, and
/// `totals[now]` is always the sum of row `now`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Potential {
    matrix: [[u64; 3]; 3],
    totals: [u64; 3],
}

impl Potential {
    pub fn observe(&mut self, now: Outcome, later: Outcome) {
        self.matrix[now.index()][later.index()] += 1;
        self.totals[now.index()] += 1;
    }
    pub fn count(&self, now: Outcome, later: Outcome) -> u64 {
        self.matrix[now.index()][later.index()]
    }
    pub fn total(&self, now: Outcome) -> u64 {
        self.totals[now.index()]
    }
    /// Every pair observed.
    pub fn size(&self) -> u64 {
        self.totals.iter().sum()
    }

    /// Chance of improving from behind (or tied) to ahead.
    pub fn positive(&self) -> Probability {
        use crate::equity::Outcome::*;
        let numer = self.m(Behind, Ahead)
            + self.m(Behind, Tied) / 2.
            + self.m(Tied, Ahead) / 2.;
        let denom = self.t(Behind) + self.t(Tied) / 2.;
        numer / Self::nonzero(denom)
    }
    /// Chance of falling from ahead (or tied) to behind.
    pub fn negative(&self) -> Probability {
        use crate::equity::Outcome::*;
        let numer = self.m(Ahead, Behind)
            + self.m(Tied, Behind) / 2.
            + self.m(Ahead, Tied) / 2.;
        let denom = self.t(Ahead) + self.t(Tied) / 2.;
        numer / Self::nonzero(denom)
    }

    fn m(&self, now: Outcome, later: Outcome) -> Probability {
        self.count(now, later) as Probability
    }
    fn t(&self, now: Outcome) -> Probability {
        self.total(now) as Probability
    }
    fn nonzero(x: Probability) -> Probability {
        if x == 0. { EPSILON } else { x }
    }
}

impl Add for Potential {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut sum = self;
        for i in 0..3 {
            for j in 0..3 {
                sum.matrix[i][j] += rhs.matrix[i][j];
            }
            sum.totals[i] += rhs.totals[i];
        }
        sum
    }
}
