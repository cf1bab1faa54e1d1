use std::collections::HashMap;

use crate::simulation::HandRecord;

/// Aggregates over one session's full hand history. Always recomputed from
/// the history, never cached, so it cannot drift from the records.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatistics {
    pub total_hands: usize,
    pub winning_hands: usize,
    pub total_profit: f64,
    pub avg_true_count: f64,
    pub max_bet: f64,
    /// Win percentage (one decimal) per floored-true-count bucket. Only
    /// buckets that occurred are present; iterate sorted if order matters.
    pub win_rate_by_count: HashMap<i32, f64>,
    pub hands_by_count: HashMap<i32, usize>,
}

impl SessionStatistics {
    pub fn from_history(history: &[HandRecord]) -> SessionStatistics {
        let total_hands = history.len();
        let winning_hands = history.iter().filter(|hand| hand.win).count();
        let total_profit = history.iter().map(|hand| hand.amount).sum();
        let avg_true_count = if total_hands == 0 {
            0.0
        } else {
            history.iter().map(|hand| hand.true_count).sum::<f64>() / total_hands as f64
        };
        let max_bet = history.iter().map(|hand| hand.bet).fold(0.0, f64::max);

        let mut buckets: HashMap<i32, (usize, usize)> = HashMap::new();
        for hand in history {
            let bucket = hand.true_count.floor() as i32;
            let (wins, total) = buckets.entry(bucket).or_insert((0, 0));
            *total += 1;
            if hand.win {
                *wins += 1;
            }
        }

        let mut win_rate_by_count = HashMap::with_capacity(buckets.len());
        let mut hands_by_count = HashMap::with_capacity(buckets.len());
        for (bucket, (wins, total)) in buckets {
            let rate = wins as f64 / total as f64 * 100.0;
            win_rate_by_count.insert(bucket, (rate * 10.0).round() / 10.0);
            hands_by_count.insert(bucket, total);
        }

        SessionStatistics {
            total_hands,
            winning_hands,
            total_profit,
            avg_true_count,
            max_bet,
            win_rate_by_count,
            hands_by_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Rank;

    fn record(true_count: f64, bet: f64, win: bool, bankroll: f64) -> HandRecord {
        HandRecord {
            true_count,
            bet,
            win,
            amount: if win { bet } else { -bet },
            bankroll,
            dealer_upcard: Rank::Ten,
            player_cards: [Rank::Ace, Rank::Six],
            remaining_cards: 40,
        }
    }

    #[test]
    fn empty_history_yields_zeroed_statistics() {
        let stats = SessionStatistics::from_history(&[]);
        assert_eq!(stats.total_hands, 0);
        assert_eq!(stats.winning_hands, 0);
        assert_eq!(stats.total_profit, 0.0);
        assert_eq!(stats.avg_true_count, 0.0);
        assert_eq!(stats.max_bet, 0.0);
        assert!(stats.win_rate_by_count.is_empty());
        assert!(stats.hands_by_count.is_empty());
    }

    #[test]
    fn aggregates_over_a_small_history() {
        let history = vec![
            record(0.0, 25.0, true, 1025.0),
            record(2.5, 50.0, false, 975.0),
            record(2.1, 50.0, true, 1025.0),
            record(-1.4, 25.0, false, 1000.0),
        ];
        let stats = SessionStatistics::from_history(&history);
        assert_eq!(stats.total_hands, 4);
        assert_eq!(stats.winning_hands, 2);
        assert_eq!(stats.total_profit, 0.0);
        assert_eq!(stats.avg_true_count, (0.0 + 2.5 + 2.1 - 1.4) / 4.0);
        assert_eq!(stats.max_bet, 50.0);
    }

    #[test]
    fn buckets_key_by_floored_true_count() {
        let history = vec![
            record(2.5, 50.0, false, 950.0),
            record(2.1, 50.0, true, 1000.0),
            record(-1.4, 25.0, false, 975.0),
            record(0.9, 25.0, true, 1000.0),
        ];
        let stats = SessionStatistics::from_history(&history);
        assert_eq!(stats.hands_by_count.get(&2), Some(&2));
        assert_eq!(stats.hands_by_count.get(&-2), Some(&1));
        assert_eq!(stats.hands_by_count.get(&0), Some(&1));
        assert_eq!(stats.win_rate_by_count.get(&2), Some(&50.0));
        assert_eq!(stats.win_rate_by_count.get(&-2), Some(&0.0));
        assert_eq!(stats.win_rate_by_count.get(&0), Some(&100.0));
    }

    #[test]
    fn bucket_totals_sum_to_total_hands() {
        let history: Vec<HandRecord> = (0..97)
            .map(|i| record(i as f64 / 7.0 - 5.0, 25.0, i % 3 == 0, 1000.0))
            .collect();
        let stats = SessionStatistics::from_history(&history);
        let bucketed: usize = stats.hands_by_count.values().sum();
        assert_eq!(bucketed, stats.total_hands);
    }

    #[test]
    fn win_rates_round_to_one_decimal() {
        // 1 win out of 3 hands is 33.333..%, reported as 33.3.
        let history = vec![
            record(1.2, 25.0, true, 1025.0),
            record(1.5, 25.0, false, 1000.0),
            record(1.9, 25.0, false, 975.0),
        ];
        let stats = SessionStatistics::from_history(&history);
        assert_eq!(stats.win_rate_by_count.get(&1), Some(&33.3));
    }

    #[test]
    fn recomputing_is_idempotent() {
        let history = vec![
            record(0.5, 25.0, true, 1025.0),
            record(3.3, 75.0, false, 950.0),
        ];
        let first = SessionStatistics::from_history(&history);
        let second = SessionStatistics::from_history(&history);
        assert_eq!(first, second);
    }
}
