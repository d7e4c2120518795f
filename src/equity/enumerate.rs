use crate::Error;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::HandIterator;
use crate::cards::Hole;

/// Every pocket the opponent could hold given the cards we can see.
///
/// Streams all C(52 - |known|, 2) pairs of the residual deck in a fixed
/// order without materializing them.
pub fn possible_opponent_hands(known: Hand) -> impl Iterator<Item = Hole> {
    HandIterator::from((2, known)).map(Hole::from)
}

/// Every board one card further along than `board`.
///
/// Only flop and turn boards have a next street to look at. The appended
/// card avoids both `known` and the board itself.
pub fn possible_next_boards(
    board: &Board,
    known: Hand,
) -> Result<impl Iterator<Item = Board> + use<>, Error> {
    match board.len() {
        3 | 4 => {
            let seen = u64::from(known) | u64::from(Hand::from(board));
            let board = board.clone();
            Ok(Hand::residual(Hand::from(seen)).map(move |card| board.extend(card)))
        }
        n => Err(Error::InvalidBoardLength(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_hands_avoid_known() {
        let known = Hand::try_from("As Ah Kd Qc 2s").unwrap();
        let holes = possible_opponent_hands(known).collect::<Vec<_>>();
        assert_eq!(holes.len(), 47 * 46 / 2);
        assert!(holes.iter().all(|h| !Hand::from(*h).overlaps(&known)));
        let distinct = holes.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), holes.len());
    }

    #[test]
    fn opponent_hands_are_deterministic() {
        let known = Hand::try_from("7c 8c").unwrap();
        assert!(possible_opponent_hands(known).eq(possible_opponent_hands(known)));
    }

    #[test]
    fn next_boards_from_flop() {
        let board = Board::try_from("Ah 7c 2d").unwrap();
        let known = Hand::try_from("Ks Kd 9h 9s").unwrap();
        let boards = possible_next_boards(&board, known).unwrap().collect::<Vec<_>>();
        assert_eq!(boards.len(), 52 - 7);
        assert!(boards.iter().all(|b| b.len() == 4));
        assert!(boards.iter().all(|b| b.cards()[..3] == board.cards()[..]));
        assert!(boards.iter().all(|b| !known.contains(&b.cards()[3])));
    }

    #[test]
    fn next_boards_from_turn() {
        let board = Board::try_from("Ah 7c 2d Ts").unwrap();
        let boards = possible_next_boards(&board, Hand::empty()).unwrap();
        assert_eq!(boards.count(), 48);
    }

    #[test]
    fn next_boards_reject_river_and_preflop() {
        let river = Board::try_from("Ah 7c 2d Ts 3h").unwrap();
        assert_eq!(
            possible_next_boards(&river, Hand::empty()).err(),
            Some(Error::InvalidBoardLength(5))
        );
        assert_eq!(
            possible_next_boards(&Board::empty(), Hand::empty()).err(),
            Some(Error::InvalidBoardLength(0))
        );
    }
}
