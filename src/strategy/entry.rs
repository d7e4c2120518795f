use super::snapshot::Kind;
use super::snapshot::Snapshot;
use crate::Error;

/// Where in the betting round our turn falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// We open the action: nothing to respond to.
    First,
    FacingBet,
    FacingCheck,
    FacingRaise,
}

impl Entry {
    /// Read our position off the history.
    ///
    /// A fresh deal, or a post before the flop, means we act first,
    /// unless the host wants a call and offers no check. Otherwise we
    /// respond to the opponent's latest move, where posting a blind reads
    /// as a bet and calling reads as a check.
    pub fn classify(snapshot: &Snapshot, name: &str) -> Result<Self, Error> {
        let last = snapshot.history.last().ok_or(Error::HistoryRead)?;
        match last.kind {
            Kind::Deal => return Ok(Self::opening(snapshot)),
            Kind::Post if snapshot.board.is_empty() => return Ok(Self::opening(snapshot)),
            _ => {}
        }
        let theirs = snapshot
            .history
            .iter()
            .rev()
            .find(|r| r.actor.as_deref().is_some_and(|actor| actor != name))
            .ok_or(Error::HistoryRead)?;
        match theirs.kind {
            Kind::Bet | Kind::Post => Ok(Self::FacingBet),
            Kind::Raise => Ok(Self::FacingRaise),
            Kind::Check | Kind::Call => Ok(Self::FacingCheck),
            Kind::Deal | Kind::Fold => Err(Error::HistoryRead),
        }
    }

    /// First to act, but still owing chips (the small blind preflop).
    fn opening(snapshot: &Snapshot) -> Self {
        if snapshot.is_legal(Kind::Call) && !snapshot.is_legal(Kind::Check) {
            Self::FacingBet
        } else {
            Self::First
        }
    }
}
