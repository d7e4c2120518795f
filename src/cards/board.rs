use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::Error;

/// The community cards, in the order they were revealed.
///
/// A board never holds the same card twice. Its length is not checked at
/// construction: a snapshot with an impossible board still deserializes,
/// and the estimators reject it with [`Error::InvalidBoardLength`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn street(&self) -> Result<Street, Error> {
        Street::try_from(self.len())
    }
    /// A new board with one more card revealed.
    pub fn extend(&self, card: Card) -> Self {
        debug_assert!(!self.0.contains(&card));
        let mut cards = Vec::with_capacity(self.len() + 1);
        cards.extend_from_slice(&self.0);
        cards.push(card);
        Self(cards)
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.0.as_slice())
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let mut seen = Hand::empty();
        for card in cards.iter() {
            if seen.contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
            seen = Hand::add(seen, Hand::from(*card));
        }
        Ok(Self(cards))
    }
}
impl From<Board> for Vec<Card> {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::try_from(Card::parse(s)?)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
