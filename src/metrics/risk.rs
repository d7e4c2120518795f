use crate::Chips;
use crate::EPSILON;
use crate::Probability;

/// How much of the reachable pot a bet puts on the line.
///
/// Zero for a zero bet and growing with the bet. It is deliberately left
/// unbounded: values above 1 read as very high risk.
pub fn risk(pot: Chips, bet: Chips, stack: Chips, opponent: Chips) -> Probability {
    let pot = pot as Probability;
    let bet = bet as Probability;
    let max_pot = pot + stack as Probability + opponent as Probability;
    let numer = bet * (2. * bet + pot);
    let denom = nonzero(max_pot) * nonzero(bet + pot);
    (4. / 3. * numer / denom).sqrt()
}

fn nonzero(x: Probability) -> Probability {
    if x == 0. { EPSILON } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_check_is_riskless() {
        assert_eq!(risk(100, 0, 900, 900), 0.);
    }

    #[test]
    fn increasing_in_bet() {
        let risks = [10, 50, 100, 400, 900]
            .map(|bet| risk(100, bet, 900, 900));
        assert!(risks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_table_is_finite() {
        assert_eq!(risk(0, 0, 0, 0), 0.);
        assert!(risk(0, 10, 0, 0).is_finite());
    }

    #[test]
    fn pot_sized_shove() {
        let r = risk(100, 100, 100, 100);
        let expected = (4. / 3. * 100. * 300. / (300. * 200.) as f64).sqrt();
        assert!((r - expected).abs() < 1e-12);
    }
}
