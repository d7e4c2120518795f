use super::decision::Strategy;
use super::decision::View;
use super::entry::Entry;
use super::intent::Intent;
use super::memory::Memory;
use super::snapshot::Kind;
use super::snapshot::Snapshot;
use crate::Chips;
use crate::Config;
use crate::EPSILON;
use crate::Error;
use crate::LARGE_BET_STRENGTH;
use crate::Probability;
use crate::cards::Hand;
use crate::cards::Street;
use crate::equity::Estimator;
use crate::evaluation::Bitwise;
use crate::evaluation::Evaluate;
use crate::metrics::risk;
use crate::preflop;
use rand::Rng;

/// The heads-up hand-strength strategy.
///
/// Every turn reduces to one strength signal `s` in [0, 1] and a street
/// weight `p`. Each branch then compares fresh uniform draws against `s`,
/// pot risk, and the agent's aggression to pick and size an action.
#[derive(Debug, Default, Clone)]
pub struct HeadsUp<E: Evaluate = Bitwise> {
    estimator: Estimator<E>,
    config: Config,
}

impl<E: Evaluate> HeadsUp<E> {
    pub fn new(evaluator: E, config: Config) -> Self {
        Self {
            estimator: Estimator::new(evaluator),
            config,
        }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Strength and street weight for our pocket on this board.
    fn signal<R: Rng>(&self, view: &View, rng: &mut R) -> Result<(Probability, Probability), Error> {
        let board = &view.snapshot.board;
        let pocket = view.pocket;
        let street = board.street()?;
        let strength = match street {
            Street::Pref => {
                let score = preflop::score(pocket);
                let odds = preflop::simulate(
                    self.estimator.evaluator(),
                    pocket,
                    Hand::empty(),
                    board,
                    self.config.simulations,
                    rng,
                )?;
                (score + odds) / 2.
            }
            Street::Flop | Street::Turn => {
                let strength = self.estimator.strength(board, pocket)?;
                let (pos, neg) = self.estimator.potential(board, pocket)?;
                Estimator::<E>::effective(strength, pos, neg, self.config.aggressive)
            }
            Street::Rive => self.estimator.strength(board, pocket)?,
        };
        Ok((strength, street.progress()))
    }
}

impl<E: Evaluate> Strategy for HeadsUp<E> {
    fn decide<R: Rng>(&self, view: &View, memory: &Memory, rng: &mut R) -> Result<Intent, Error> {
        let snapshot = view.snapshot;
        let stack = snapshot.stack(view.name)?;
        let opponent = snapshot.opponent_stack(view.name)?;
        let entry = Entry::classify(snapshot, view.name)?;
        if stack == 0 {
            log::debug!("{:<32}{}", "all in", Intent::Check);
            return Ok(Intent::Check);
        }
        let (strength, progress) = self.signal(view, rng)?;
        let turn = Turn {
            snapshot,
            name: view.name,
            stack,
            opponent,
            strength,
            progress,
            aggression: memory.aggression(),
            factor: memory.factor(),
        };
        let intent = turn.respond(entry, rng)?;
        log::debug!(
            "{:<32}{}",
            format!("{:?} s={:.3} p={:.1}", entry, strength, progress),
            intent
        );
        Ok(intent)
    }
}

/// Everything one decision needs, computed once.
struct Turn<'a> {
    snapshot: &'a Snapshot,
    name: &'a str,
    stack: Chips,
    opponent: Chips,
    strength: Probability,
    progress: Probability,
    aggression: f64,
    factor: f64,
}

impl Turn<'_> {
    fn respond<R: Rng>(&self, entry: Entry, rng: &mut R) -> Result<Intent, Error> {
        let s = self.strength;
        match entry {
            Entry::First => Ok(self.bet(rng).unwrap_or(Intent::Check)),
            Entry::FacingCheck => {
                if rng.random::<f64>() <= s && self.timid() {
                    Ok(self.bet_sized(self.banded()).unwrap_or(Intent::Check))
                } else {
                    Ok(Intent::Check)
                }
            }
            Entry::FacingBet => {
                let to_call = self.to_call()?;
                if to_call >= self.stack {
                    self.call_or_fold(rng)
                } else if rng.random::<f64>() <= s
                    || rng.random::<f64>() / 2. <= 1. - self.risk(to_call)
                {
                    match self.raise(false, rng) {
                        Some(intent) => Ok(intent),
                        None => self.call_or_fold(rng),
                    }
                } else {
                    Ok(Intent::Fold)
                }
            }
            Entry::FacingRaise => {
                let to_call = self.to_call()?;
                if to_call >= self.stack {
                    self.call_or_fold(rng)
                } else if rng.random::<f64>() <= s {
                    match self.raise(false, rng) {
                        Some(intent) => Ok(intent),
                        None => self.call_or_fold(rng),
                    }
                } else if self.bluff(rng) {
                    Ok(self.raise(true, rng).unwrap_or(Intent::Fold))
                } else {
                    Ok(Intent::Fold)
                }
            }
        }
    }

    /// Open the betting, sized large, medium, or small.
    fn bet<R: Rng>(&self, rng: &mut R) -> Option<Intent> {
        let s = self.strength;
        let min = self.snapshot.bounds(Kind::Bet)?.min();
        if rng.random::<f64>() <= s * self.progress {
            self.bet_sized(self.banded())
        } else if rng.random::<f64>() <= 1. - self.risk(min) && self.timid() {
            if self.stack < self.opponent {
                self.bet_sized(min as f64)
            } else {
                self.bet_sized(min as f64 * (1. + s))
            }
        } else {
            None
        }
    }

    /// Large when strong and not yet overly aggressive, medium otherwise.
    fn banded(&self) -> f64 {
        let s = self.strength;
        let stack = self.stack as f64;
        if self.timid() && s >= LARGE_BET_STRENGTH {
            stack * s * self.progress
        } else {
            stack / 2. * (1. - s) * self.progress
        }
    }

    fn bet_sized(&self, amount: f64) -> Option<Intent> {
        let min = self.snapshot.bounds(Kind::Bet)?.min();
        match self.clamp(amount, min) {
            0 => None,
            amount => Some(Intent::Bet {
                amount,
                min,
                max: self.stack,
            }),
        }
    }

    fn call_or_fold<R: Rng>(&self, rng: &mut R) -> Result<Intent, Error> {
        Ok(self.call(rng)?.unwrap_or(Intent::Fold))
    }

    fn call<R: Rng>(&self, rng: &mut R) -> Result<Option<Intent>, Error> {
        let s = self.strength;
        let to_call = self.to_call()?;
        let call = if to_call >= self.stack {
            rng.random::<f64>() / 3. * self.progress <= s
        } else if rng.random::<f64>() <= s {
            rng.random::<f64>() <= 1. - self.risk(to_call)
                || (self.river() && rng.random::<f64>() <= self.stake())
        } else {
            false
        };
        Ok(call.then_some(Intent::Call { amount: to_call }))
    }

    fn raise<R: Rng>(&self, all_in: bool, rng: &mut R) -> Option<Intent> {
        let s = self.strength;
        let min = self.snapshot.bounds(Kind::Raise)?.min();
        let stack = self.stack as f64;
        let amount = if all_in {
            stack
        } else if rng.random::<f64>() <= s {
            if self.timid() {
                if self.bluff(rng) {
                    stack
                } else {
                    stack / 2. * s * self.progress
                }
            } else if self.stack > self.opponent {
                stack * (1. - s) * self.progress
            } else {
                min as f64 * (1. + s)
            }
        } else {
            return None;
        };
        match self.clamp(amount, min) {
            0 => None,
            amount => Some(Intent::Raise {
                amount,
                min,
                max: self.stack,
            }),
        }
    }

    /// U <= U' * s / 2
    fn bluff<R: Rng>(&self, rng: &mut R) -> bool {
        let u = rng.random::<f64>();
        let v = rng.random::<f64>() * self.strength / 2.;
        u <= v
    }

    fn to_call(&self) -> Result<Chips, Error> {
        self.snapshot
            .bounds(Kind::Call)
            .map(|bounds| bounds.amount())
            .ok_or(Error::MissingLegalAction(Kind::Call))
    }

    /// Share of the pot that is ours since our last post.
    fn stake(&self) -> Probability {
        let pot = self.snapshot.pot as f64;
        self.snapshot.committed(self.name) as f64 / if pot == 0. { EPSILON } else { pot }
    }

    fn risk(&self, bet: Chips) -> Probability {
        risk(self.snapshot.pot, bet, self.stack, self.opponent)
    }

    fn river(&self) -> bool {
        self.snapshot.board.len() == 5
    }

    /// Still below our own aggression ceiling.
    fn timid(&self) -> bool {
        self.aggression < self.factor
    }

    fn clamp(&self, amount: f64, min: Chips) -> Chips {
        (amount.round() as Chips).max(min).min(self.stack)
    }
}
