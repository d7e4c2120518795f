use crate::cards::Card;
use crate::strategy::Kind;

/// Failures of a single decision or estimate.
///
/// Every variant is fatal to the turn that raised it. Arithmetic edge
/// cases never land here; they substitute [`crate::EPSILON`] instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("board has {0} cards, expected 0, 3, 4 or 5")]
    InvalidBoardLength(usize),
    #[error("history does not identify the decision point")]
    HistoryRead,
    #[error("player not found at table: {0}")]
    PlayerNotFound(String),
    #[error("card dealt twice: {0}")]
    DuplicateCard(Card),
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("simulation needs at least one iteration")]
    NoIterations,
    #[error("deck has {0} cards left, a trial deals 7")]
    ShortDeck(usize),
    #[error("host did not offer legal action {0:?}")]
    MissingLegalAction(Kind),
    #[error("agent has not been dealt a pocket")]
    NoPocket,
}
