use crate::Chips;
use crate::Error;
use crate::cards::Board;
use std::collections::BTreeMap;

/// Event types the host writes into history and legal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    Deal,
    Post,
    Check,
    Bet,
    Call,
    Raise,
    Fold,
}

/// Limits the host attaches to one legal action.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub min: Option<Chips>,
    pub max: Option<Chips>,
    pub amount: Option<Chips>,
}

impl Bounds {
    pub fn min(&self) -> Chips {
        self.min.unwrap_or_default()
    }
    pub fn amount(&self) -> Chips {
        self.amount.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Seat {
    pub name: String,
    pub stack: Chips,
}

/// One history entry. Dealer events carry no actor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub actor: Option<String>,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub amount: Option<Chips>,
}

impl Record {
    pub fn by(&self, name: &str) -> bool {
        self.actor.as_deref() == Some(name)
    }
}

/// Everything the host tells us when it is our turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub pot: Chips,
    pub board: Board,
    pub players: Vec<Seat>,
    pub history: Vec<Record>,
    pub legal_actions: BTreeMap<Kind, Bounds>,
}

impl Snapshot {
    /// Stack of the seat named `name`.
    pub fn stack(&self, name: &str) -> Result<Chips, Error> {
        self.players
            .iter()
            .find(|seat| seat.name == name)
            .map(|seat| seat.stack)
            .ok_or_else(|| Error::PlayerNotFound(name.to_string()))
    }
    /// Stack of the first seat not named `name`.
    pub fn opponent_stack(&self, name: &str) -> Result<Chips, Error> {
        self.players
            .iter()
            .find(|seat| seat.name != name)
            .map(|seat| seat.stack)
            .ok_or_else(|| Error::PlayerNotFound(format!("opponent of {}", name)))
    }
    pub fn bounds(&self, kind: Kind) -> Option<&Bounds> {
        self.legal_actions.get(&kind)
    }
    pub fn is_legal(&self, kind: Kind) -> bool {
        self.legal_actions.contains_key(&kind)
    }
    /// Chips `name` has put in since (and including) its last post.
    pub fn committed(&self, name: &str) -> Chips {
        let mut total = 0;
        for record in self.history.iter().rev().filter(|r| r.by(name)) {
            match record.kind {
                Kind::Post => {
                    total += record.amount.unwrap_or_default();
                    break;
                }
                Kind::Call | Kind::Bet | Kind::Raise => {
                    total += record.amount.unwrap_or_default();
                }
                _ => {}
            }
        }
        total
    }
}
