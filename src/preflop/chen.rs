use crate::Probability;
use crate::cards::Hole;
use crate::cards::Rank;

/// Chen's heuristic value of a pocket, scaled so that aces score 1.
///
/// Pairs are worth double their high card with a floor of 5, unpaired
/// pockets lose points as the rank gap widens, and suited pockets gain 2.
pub fn score(pocket: Hole) -> Probability {
    let (hi, lo) = pocket.cards();
    let (hi, lo) = (hi.rank(), lo.rank());
    let mut points = if hi == lo {
        (2. * skew(hi)).max(5.)
    } else {
        let gap = u8::from(hi).abs_diff(u8::from(lo));
        let high = skew(hi.max(lo));
        match gap {
            1 => high + 1.,
            2 => high - (gap as Probability - 1.),
            3 => high - (gap as Probability + 1.),
            _ => high - 5.,
        }
    };
    if pocket.suited() {
        points += 2.;
    }
    points / 20.
}

/// Chen points for a single high card.
pub fn skew(rank: Rank) -> Probability {
    match rank {
        Rank::Ace => 10.,
        Rank::King => 8.,
        Rank::Queen => 7.,
        Rank::Jack => 6.,
        r => (u8::from(r) as Probability + 2.) / 2.,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chen(s: &str) -> Probability {
        score(Hole::try_from(s).unwrap())
    }

    #[test]
    fn aces_score_one() {
        assert_eq!(chen("As Ah"), 1.);
    }

    #[test]
    fn skew_table() {
        assert_eq!(skew(Rank::Two), 1.);
        assert_eq!(skew(Rank::Nine), 4.5);
        assert_eq!(skew(Rank::Ten), 5.);
        assert_eq!(skew(Rank::Jack), 6.);
        assert_eq!(skew(Rank::Ace), 10.);
    }

    #[test]
    fn small_pairs_have_a_floor() {
        assert_eq!(chen("2s 2h"), 5. / 20.);
        assert_eq!(chen("Ts Th"), 10. / 20.);
    }

    #[test]
    fn gaps_and_suits() {
        assert_eq!(chen("As Kh"), 11. / 20.);
        assert_eq!(chen("As Ks"), 13. / 20.);
        assert_eq!(chen("As Qh"), 9. / 20.);
        assert_eq!(chen("As Jh"), 6. / 20.);
        assert_eq!(chen("As Th"), 5. / 20.);
    }

    #[test]
    fn symmetric_in_card_order() {
        assert_eq!(chen("Kd 9c"), chen("9c Kd"));
        assert_eq!(chen("7h 8h"), chen("8h 7h"));
    }

    #[test]
    fn monotone_in_low_card() {
        let lows = ["2c", "3c", "4c", "5c", "6c", "7c", "8c", "9c", "Tc", "Jc", "Qc", "Kc"];
        let scores = lows
            .iter()
            .map(|lo| chen(&format!("Ad {}", lo)))
            .collect::<Vec<_>>();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }
}
