use super::snapshot::Kind;
use crate::Chips;

/// The single action chosen for a turn, as sent back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Intent {
    Fold,
    Check,
    Call { amount: Chips },
    Bet { amount: Chips, min: Chips, max: Chips },
    Raise { amount: Chips, min: Chips, max: Chips },
}

impl Intent {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Fold => Kind::Fold,
            Self::Check => Kind::Check,
            Self::Call { .. } => Kind::Call,
            Self::Bet { .. } => Kind::Bet,
            Self::Raise { .. } => Kind::Raise,
        }
    }
    /// Chips this intent moves into the pot.
    pub fn amount(&self) -> Chips {
        match self {
            Self::Fold | Self::Check => 0,
            Self::Call { amount } | Self::Bet { amount, .. } | Self::Raise { amount, .. } => *amount,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Check => write!(f, "CHECK"),
            Self::Call { amount } => write!(f, "CALL  {}", amount),
            Self::Bet { amount, min, max } => write!(f, "BET   {} [{}, {}]", amount, min, max),
            Self::Raise { amount, min, max } => write!(f, "RAISE {} [{}, {}]", amount, min, max),
        }
    }
}
