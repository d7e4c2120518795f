use super::rank::HandRank;
use crate::cards::Hand;
use crate::cards::Strength;

/// Ranks a 5 to 7 card hand for showdown.
///
/// Implementors must be deterministic. Smaller ranks are stronger, and
/// two hands tie exactly when their ranks are equal.
pub trait Evaluate: Sync {
    fn evaluate(&self, hand: Hand) -> HandRank;
}

/// Bitwise ranking via [`crate::cards::Evaluator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Bitwise;

impl Evaluate for Bitwise {
    fn evaluate(&self, hand: Hand) -> HandRank {
        HandRank::from(Strength::from(hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(s: &str) -> HandRank {
        Bitwise.evaluate(Hand::try_from(s).unwrap())
    }

    #[test]
    fn smaller_is_stronger() {
        assert!(rank("As Ks Qs Js Ts") < rank("Ah Ad Ac Kh Kd"));
        assert!(rank("2c 2d 3h 4s 6c") < rank("Ac Kd Qh Js 9c"));
    }

    #[test]
    fn ties_are_equal() {
        assert_eq!(rank("Ac Kd Qh Js 9c 2d 3d"), rank("Ad Kh Qc Js 9s 2c 3h"));
    }

    #[test]
    fn deterministic() {
        let hand = "7h 8h 9c Td Js 2s 2h";
        assert_eq!(rank(hand), rank(hand));
    }
}
