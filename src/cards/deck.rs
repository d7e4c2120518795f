use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::Rng;

/// The cards still undealt, with uniform random draws.
///
/// Drawing a uniformly random remaining card each time is the same
/// distribution as shuffling the residual deck and dealing off the top,
/// without ever materializing the shuffled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::full())
    }
    /// The 52-card deck minus every card in `excluded`.
    pub fn residual(excluded: Hand) -> Self {
        Self(Hand::residual(excluded))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.0.size() > 0, "draw from empty deck");
        let i = rng.random_range(0..self.0.size());
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Draws `n` cards into an unordered Hand.
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Hand {
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Draws two cards as a player's hole cards.
    pub fn hole<R: Rng>(&mut self, rng: &mut R) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new();
        let dealt = deck.deal(52, rng);
        assert_eq!(dealt, Hand::full());
        assert_eq!(deck.size(), 0);
    }

    #[test]
    fn residual_never_yields_excluded() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let excluded = Hand::try_from("As Ah Kd Kc").unwrap();
        for _ in 0..64 {
            let mut deck = Deck::residual(excluded);
            let hole = deck.hole(rng);
            assert!(!Hand::from(hole).overlaps(&excluded));
            assert_eq!(deck.size(), 46);
        }
    }

    #[test]
    fn every_card_reachable() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut seen = Hand::empty();
        for _ in 0..4096 {
            let card = Deck::new().draw(rng);
            if !seen.contains(&card) {
                seen = Hand::add(seen, Hand::from(card));
            }
        }
        assert_eq!(seen, Hand::full());
    }
}
