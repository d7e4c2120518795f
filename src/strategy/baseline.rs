use super::decision::Strategy;
use super::decision::View;
use super::intent::Intent;
use super::memory::Memory;
use super::snapshot::Kind;
use crate::Error;
use rand::Rng;

/// Checks when it can, calls when it must, folds otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passive;

impl Strategy for Passive {
    fn decide<R: Rng>(&self, view: &View, _: &Memory, _: &mut R) -> Result<Intent, Error> {
        let snapshot = view.snapshot;
        if snapshot.is_legal(Kind::Check) {
            Ok(Intent::Check)
        } else if let Some(call) = snapshot.bounds(Kind::Call) {
            Ok(Intent::Call {
                amount: call.amount(),
            })
        } else {
            Ok(Intent::Fold)
        }
    }
}

/// Bets the minimum when it can, calls when it must, checks otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eager;

impl Strategy for Eager {
    fn decide<R: Rng>(&self, view: &View, _: &Memory, _: &mut R) -> Result<Intent, Error> {
        let snapshot = view.snapshot;
        if let Some(bet) = snapshot.bounds(Kind::Bet) {
            Ok(Intent::Bet {
                amount: bet.min(),
                min: bet.min(),
                max: match bet.max {
                    Some(max) => max,
                    None => snapshot.stack(view.name)?,
                },
            })
        } else if let Some(call) = snapshot.bounds(Kind::Call) {
            Ok(Intent::Call {
                amount: call.amount(),
            })
        } else {
            Ok(Intent::Check)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::cards::Hole;
    use crate::strategy::Bounds;
    use crate::strategy::Seat;
    use crate::strategy::Snapshot;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn snapshot(legal: &[(Kind, Bounds)]) -> Snapshot {
        Snapshot {
            pot: 20,
            board: Board::empty(),
            players: vec![
                Seat { name: "hero".into(), stack: 500 },
                Seat { name: "villain".into(), stack: 500 },
            ],
            history: vec![],
            legal_actions: legal.iter().copied().collect(),
        }
    }

    fn decide<S: Strategy>(strategy: S, snapshot: &Snapshot) -> Intent {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let view = View {
            snapshot,
            name: "hero",
            pocket: Hole::try_from("7c 2d").unwrap(),
        };
        strategy.decide(&view, &Memory::from(1.), rng).unwrap()
    }

    fn call(amount: u32) -> (Kind, Bounds) {
        (Kind::Call, Bounds { amount: Some(amount), ..Default::default() })
    }
    fn bet(min: u32) -> (Kind, Bounds) {
        (Kind::Bet, Bounds { min: Some(min), ..Default::default() })
    }
    fn check() -> (Kind, Bounds) {
        (Kind::Check, Bounds::default())
    }
    fn fold() -> (Kind, Bounds) {
        (Kind::Fold, Bounds::default())
    }

    #[test]
    fn passive_prefers_check_then_call() {
        assert_eq!(decide(Passive, &snapshot(&[check(), bet(10)])), Intent::Check);
        assert_eq!(decide(Passive, &snapshot(&[call(10), fold()])), Intent::Call { amount: 10 });
        assert_eq!(decide(Passive, &snapshot(&[fold()])), Intent::Fold);
    }

    #[test]
    fn eager_prefers_min_bet_then_call() {
        assert_eq!(
            decide(Eager, &snapshot(&[check(), bet(10)])),
            Intent::Bet { amount: 10, min: 10, max: 500 }
        );
        assert_eq!(decide(Eager, &snapshot(&[call(30), fold()])), Intent::Call { amount: 30 });
        assert_eq!(decide(Eager, &snapshot(&[check()])), Intent::Check);
    }
}
