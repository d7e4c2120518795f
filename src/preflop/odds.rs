use crate::Error;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::equity::Outcome;
use crate::evaluation::Evaluate;
use rand::Rng;

/// Monte Carlo preflop win rate of `pocket` against one random pocket.
///
/// Each trial deals an opponent pocket and a full board from the deck
/// minus `pocket` and `excluded`. Wins count 1 and ties count half.
pub fn simulate<E, R>(
    evaluator: &E,
    pocket: Hole,
    excluded: Hand,
    board: &Board,
    iterations: usize,
    rng: &mut R,
) -> Result<Probability, Error>
where
    E: Evaluate,
    R: Rng,
{
    if !board.is_empty() {
        return Err(Error::NotImplemented("odds simulation with community cards"));
    }
    if iterations == 0 {
        return Err(Error::NoIterations);
    }
    let ours = Hand::from(pocket);
    let excluded = Hand::from(u64::from(ours) | u64::from(excluded));
    let remaining = Deck::residual(excluded).size();
    if remaining < 7 {
        return Err(Error::ShortDeck(remaining));
    }
    let mut wins = 0usize;
    let mut ties = 0usize;
    for _ in 0..iterations {
        let mut deck = Deck::residual(excluded);
        let theirs = Hand::from(deck.hole(rng));
        let runout = deck.deal(5, rng);
        let mine = evaluator.evaluate(Hand::add(ours, runout));
        let them = evaluator.evaluate(Hand::add(theirs, runout));
        match Outcome::from((mine, them)) {
            Outcome::Ahead => wins += 1,
            Outcome::Tied => ties += 1,
            Outcome::Behind => {}
        }
    }
    let odds = (wins as Probability + ties as Probability / 2.) / iterations as Probability;
    log::debug!("{:<32}{:.4}", format!("odds {} x{}", pocket, iterations), odds);
    Ok(odds)
}
