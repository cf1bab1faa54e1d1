use super::Rank;

const BASE_WIN_RATE: f64 = 0.485;
const MIN_WIN_RATE: f64 = 0.35;
const MAX_WIN_RATE: f64 = 0.65;

/// Per-upcard sensitivity of the win rate to the true count. Low dealer
/// upcards respond more strongly to a high count than ten-value upcards.
fn count_effect(upcard: Rank) -> f64 {
    match upcard {
        Rank::Two => 0.015,
        Rank::Three => 0.018,
        Rank::Four => 0.020,
        Rank::Five => 0.023,
        Rank::Six => 0.025,
        Rank::Seven => 0.015,
        Rank::Eight => 0.012,
        Rank::Nine => 0.010,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 0.008,
        Rank::Ace => 0.012,
    }
}

/// Adjusted probability of winning one hand given the true count and the
/// dealer upcard. Linear in the count around a sub-50% base rate, clamped so
/// extreme counts cannot push the model into degenerate territory.
pub fn win_probability(true_count: f64, upcard: Rank) -> f64 {
    let rate = BASE_WIN_RATE + true_count * count_effect(upcard);
    rate.clamp(MIN_WIN_RATE, MAX_WIN_RATE)
}

/// Bet for the coming hand. At a true count of 1 or below the wager stays at
/// the base unit. Above that the unit is multiplied by the floored count,
/// capped by the session's fixed bet ceiling and by the current bankroll.
/// Flooring (rather than rounding) keeps the sizing conservative between
/// integer counts.
pub fn bet_size(true_count: f64, base_unit: f64, max_bet: f64, bankroll: f64) -> f64 {
    if true_count <= 1.0 {
        return base_unit;
    }
    let bet = base_unit * true_count.floor();
    bet.min(max_bet).min(bankroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn win_probability_at_zero_count_is_the_base_rate() {
        for upcard in Rank::iter() {
            assert_eq!(win_probability(0.0, upcard), BASE_WIN_RATE);
        }
    }

    #[test]
    fn win_probability_stays_clamped() {
        for upcard in Rank::iter() {
            for count in [-100.0, -8.5, -3.0, 0.0, 2.7, 8.5, 100.0] {
                let rate = win_probability(count, upcard);
                assert!(rate >= MIN_WIN_RATE && rate <= MAX_WIN_RATE);
            }
        }
        assert_eq!(win_probability(1000.0, Rank::Six), MAX_WIN_RATE);
        assert_eq!(win_probability(-1000.0, Rank::Six), MIN_WIN_RATE);
    }

    #[test]
    fn low_upcards_respond_more_to_the_count() {
        assert!(win_probability(3.0, Rank::Six) > win_probability(3.0, Rank::Ten));
        assert_eq!(win_probability(2.0, Rank::Five), 0.485 + 2.0 * 0.023);
    }

    #[test]
    fn bet_stays_at_base_unit_up_to_count_one() {
        for count in [-5.0, -0.3, 0.0, 0.99, 1.0] {
            assert_eq!(bet_size(count, 25.0, 500.0, 10000.0), 25.0);
        }
    }

    #[test]
    fn bet_scales_with_the_floored_count() {
        assert_eq!(bet_size(1.01, 25.0, 500.0, 10000.0), 25.0);
        assert_eq!(bet_size(2.0, 25.0, 500.0, 10000.0), 50.0);
        assert_eq!(bet_size(2.99, 25.0, 500.0, 10000.0), 50.0);
        assert_eq!(bet_size(3.0, 25.0, 500.0, 10000.0), 75.0);
    }

    #[test]
    fn bet_is_capped_by_ceiling_and_bankroll() {
        assert_eq!(bet_size(10.0, 100.0, 500.0, 10000.0), 500.0);
        assert_eq!(bet_size(10.0, 100.0, 5000.0, 300.0), 300.0);
    }
}
