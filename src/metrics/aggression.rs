use crate::EPSILON;

/// Bets plus raises per check. With no checks yet the quotient uses
/// [`EPSILON`], so any raise reads as extremely aggressive.
pub fn aggression(bets: u32, raises: u32, checks: u32) -> f64 {
    bets as f64 + raises as f64 / (checks as f64).max(EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_checks_explodes() {
        let a = aggression(2, 1, 0);
        assert!((a - 100_002.).abs() < 1e-6);
    }

    #[test]
    fn passive_is_zero() {
        assert_eq!(aggression(0, 0, 0), 0.);
        assert_eq!(aggression(0, 0, 5), 0.);
    }

    #[test]
    fn raises_per_check() {
        assert_eq!(aggression(1, 4, 2), 3.);
    }
}
