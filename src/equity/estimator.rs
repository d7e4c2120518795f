use super::enumerate::possible_next_boards;
use super::enumerate::possible_opponent_hands;
use super::outcome::Outcome;
use super::potential::Potential;
use crate::Error;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::evaluation::Bitwise;
use crate::evaluation::Evaluate;
use crate::evaluation::HandRank;
use rayon::prelude::*;

/// Enumerative hand strength and potential against a uniformly random
/// opponent pocket.
///
/// Every opponent pocket consistent with the visible cards is weighed
/// equally. Potential looks exactly one card ahead.
#[derive(Debug, Default, Clone, Copy)]
pub struct Estimator<E: Evaluate = Bitwise> {
    evaluator: E,
}

impl<E: Evaluate> Estimator<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Share of opponent pockets we currently beat, ties counted half.
    pub fn strength(&self, board: &Board, pocket: Hole) -> Result<Probability, Error> {
        if !(3..=5).contains(&board.len()) {
            return Err(Error::InvalidBoardLength(board.len()));
        }
        let known = Self::known(board, pocket)?;
        let ours = self.rank(pocket, board);
        let mut counts = [0usize; 3];
        for hole in possible_opponent_hands(known) {
            let outcome = Outcome::from((ours, self.rank(hole, board)));
            counts[outcome.index()] += 1;
        }
        let [ahead, tied, behind] = counts.map(|n| n as Probability);
        let strength = (ahead + tied / 2.) / (ahead + tied + behind);
        log::debug!("{:<32}{:.4}", format!("strength {} {}", pocket, board), strength);
        Ok(strength)
    }

    /// (positive, negative) potential over the next card.
    pub fn potential(&self, board: &Board, pocket: Hole) -> Result<(Probability, Probability), Error> {
        let potential = self.transitions(board, pocket)?;
        let pos = potential.positive();
        let neg = potential.negative();
        log::debug!("{:<32}{:.4} {:.4}", format!("potential {} {}", pocket, board), pos, neg);
        Ok((pos, neg))
    }

    /// The full transition matrix behind [`Self::potential`].
    ///
    /// Opponent pockets are spread across rayon workers, each filling its
    /// own matrix before they are summed.
    pub fn transitions(&self, board: &Board, pocket: Hole) -> Result<Potential, Error> {
        if !(3..=4).contains(&board.len()) {
            return Err(Error::InvalidBoardLength(board.len()));
        }
        let known = Self::known(board, pocket)?;
        let ours = self.rank(pocket, board);
        possible_opponent_hands(known)
            .collect::<Vec<Hole>>()
            .into_par_iter()
            .map(|hole| -> Result<Potential, Error> {
                let now = Outcome::from((ours, self.rank(hole, board)));
                let seen = Hand::add(Hand::from(pocket), Hand::from(hole));
                let mut potential = Potential::default();
                for next in possible_next_boards(board, seen)? {
                    let later = (self.rank(pocket, &next), self.rank(hole, &next));
                    potential.observe(now, Outcome::from(later));
                }
                Ok(potential)
            })
            .try_reduce(Potential::default, |a, b| Ok(a + b))
    }

    /// Strength adjusted by how it may move on later streets.
    ///
    /// The aggressive blend ignores the chance of being outdrawn.
    pub fn effective(
        strength: Probability,
        pos: Probability,
        neg: Probability,
        aggressive: bool,
    ) -> Probability {
        if aggressive {
            strength + (1. - strength) * pos
        } else {
            strength * (1. - neg) + (1. - strength) * pos
        }
    }

    fn rank(&self, hole: Hole, board: &Board) -> HandRank {
        self.evaluator
            .evaluate(Hand::add(Hand::from(hole), Hand::from(board)))
    }

    /// Pocket and board as one Hand, rejecting any repeated card.
    fn known(board: &Board, pocket: Hole) -> Result<Hand, Error> {
        let pocket = Hand::from(pocket);
        match board.cards().iter().find(|c| pocket.contains(c)) {
            Some(card) => Err(Error::DuplicateCard(*card)),
            None => Ok(Hand::add(pocket, Hand::from(board))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::equity::Outcome::*;

    fn board(s: &str) -> Board {
        Board::try_from(s).unwrap()
    }
    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }

    #[test]
    fn nut_strength_is_one() {
        let estimator = Estimator::<Bitwise>::default();
        let s = estimator
            .strength(&board("Ts Js Qs 2d 3c"), hole("Ks As"))
            .unwrap();
        assert_eq!(s, 1.);
    }

    #[test]
    fn board_plays_for_everyone() {
        let estimator = Estimator::<Bitwise>::default();
        let s = estimator
            .strength(&board("Ts Js Qs Ks As"), hole("2d 3c"))
            .unwrap();
        assert_eq!(s, 0.5);
    }

    #[test]
    fn strength_in_unit_interval() {
        let estimator = Estimator::<Bitwise>::default();
        for (b, h) in [
            ("Ah 7c 2d", "Kd Qd"),
            ("Ah 7c 2d 9s", "7h 7d"),
            ("2h 5c 9d Js Kh", "3c 4d"),
        ] {
            let s = estimator.strength(&board(b), hole(h)).unwrap();
            assert!((0. ..=1.).contains(&s));
        }
    }

    #[test]
    fn strength_rejects_bad_boards() {
        let estimator = Estimator::<Bitwise>::default();
        let six = Board::try_from(Card::parse("Ah 7c 2d 9s Ts 3h").unwrap()).unwrap();
        assert_eq!(
            estimator.strength(&six, hole("Kd Qd")),
            Err(Error::InvalidBoardLength(6))
        );
        assert_eq!(
            estimator.strength(&board("Ah 7c"), hole("Kd Qd")),
            Err(Error::InvalidBoardLength(2))
        );
    }

    #[test]
    fn strength_rejects_shared_cards() {
        let estimator = Estimator::<Bitwise>::default();
        let ah = Card::try_from("Ah").unwrap();
        assert_eq!(
            estimator.strength(&board("Ah 7c 2d"), hole("Ah Qd")),
            Err(Error::DuplicateCard(ah))
        );
    }

    #[test]
    fn potential_totals_cover_every_pair() {
        let estimator = Estimator::<Bitwise>::default();
        let matrix = estimator
            .transitions(&board("Ah 7c 2d 9s"), hole("Kd Qd"))
            .unwrap();
        assert_eq!(matrix.size(), (46 * 45 / 2) * 44);
        for now in Outcome::all() {
            let row = Outcome::all().into_iter().map(|l| matrix.count(now, l)).sum::<u64>();
            assert_eq!(row, matrix.total(now));
        }
    }

    #[test]
    fn potential_in_unit_interval() {
        let estimator = Estimator::<Bitwise>::default();
        let (pos, neg) = estimator
            .potential(&board("Ah 7c 2d 9s"), hole("8d Td"))
            .unwrap();
        assert!((0. ..=1.).contains(&pos));
        assert!((0. ..=1.).contains(&neg));
        assert!(pos > 0.);
    }

    #[test]
    fn locked_hand_cannot_fall_behind() {
        let estimator = Estimator::<Bitwise>::default();
        let matrix = estimator
            .transitions(&board("Ts Js Qs 2d"), hole("Ks As"))
            .unwrap();
        assert_eq!(matrix.total(Behind), 0);
        assert_eq!(matrix.count(Ahead, Behind), 0);
        assert_eq!(matrix.count(Ahead, Tied), 0);
    }

    #[test]
    fn potential_needs_a_next_street() {
        let estimator = Estimator::<Bitwise>::default();
        assert_eq!(
            estimator.potential(&board("Ah 7c 2d 9s 3h"), hole("Kd Qd")),
            Err(Error::InvalidBoardLength(5))
        );
    }

    #[test]
    fn effective_blends() {
        type E = Estimator<Bitwise>;
        assert!((E::effective(0.5, 0.2, 0.4, true) - 0.6).abs() < 1e-12);
        assert!((E::effective(0.5, 0.2, 0.4, false) - 0.4).abs() < 1e-12);
        assert_eq!(E::effective(1., 0.9, 0., false), 1.);
    }
}
