use super::card::Card;
use super::hand::Hand;

/// A player's two private cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two distinct cards
/// are present. Card order is forgotten, so `{As, Kd}` and `{Kd, As}` are
/// the same pocket.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// The higher card first. Equal ranks fall back to suit order.
    pub fn cards(&self) -> (Card, Card) {
        let mut hand = self.0;
        let lo = hand.next().expect("two cards in hole");
        let hi = hand.next().expect("two cards in hole");
        (hi, lo)
    }
    pub fn suited(&self) -> bool {
        let (hi, lo) = self.cards();
        hi.suit() == lo.suit()
    }
    pub fn paired(&self) -> bool {
        let (hi, lo) = self.cards();
        hi.rank() == lo.rank()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hand> for Hole {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() == 2);
        Self(hand)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err(anyhow::anyhow!("hole must contain exactly two cards")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn order_forgotten() {
        let a = Hole::try_from("As Kd").unwrap();
        let b = Hole::try_from("Kd As").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cards().0.rank(), Rank::Ace);
        assert_eq!(a.cards().1.rank(), Rank::King);
    }

    #[test]
    fn suited_and_paired() {
        assert!(Hole::try_from("9h 8h").unwrap().suited());
        assert!(!Hole::try_from("9h 8d").unwrap().suited());
        assert!(Hole::try_from("Qc Qd").unwrap().paired());
    }

    #[test]
    fn wrong_size_rejected() {
        assert!(Hole::try_from("As").is_err());
        assert!(Hole::try_from("As Ks Qs").is_err());
        assert!(Hole::try_from("As As").is_err());
    }
}
