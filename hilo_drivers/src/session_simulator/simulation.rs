use std::collections::BTreeMap;

use hilo::{Session, SessionConfig, SessionStatistics};
use hilo_drivers::ConfigSessionSimulator;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Runs the configured number of independent sessions and prints an
/// aggregate report. Sessions share nothing, so they run in parallel; hands
/// inside one session stay sequential because each hand depends on the shoe
/// state left by the previous one.
pub fn simulate_batch(
    session_config: SessionConfig,
    simulator_config: &ConfigSessionSimulator,
) -> Result<(), String> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(simulator_config.number_of_threads)
        .build()
        .map_err(|error| error.to_string())?;

    let bar = ProgressBar::new(simulator_config.number_of_sessions);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} sessions ({eta})")
            .expect("Invalid progress bar template"),
    );

    let results: Result<Vec<SessionStatistics>, hilo::Error> = pool.install(|| {
        (0..simulator_config.number_of_sessions)
            .into_par_iter()
            .map(|session_index| {
                let mut session = match simulator_config.seed {
                    Some(seed) => Session::with_rng(
                        session_config,
                        StdRng::seed_from_u64(seed.wrapping_add(session_index)),
                    ),
                    None => Session::new(session_config),
                };
                let statistics = session.run_session(simulator_config.hands_per_session);
                bar.inc(1);
                statistics
            })
            .collect()
    });
    bar.finish();

    let results = results.map_err(|error| error.to_string())?;
    print_batch_summary(session_config, &results);
    Ok(())
}

fn print_batch_summary(session_config: SessionConfig, results: &[SessionStatistics]) {
    let number_of_sessions = results.len();
    let total_hands: usize = results.iter().map(|stats| stats.total_hands).sum();
    let winning_hands: usize = results.iter().map(|stats| stats.winning_hands).sum();
    let total_profit: f64 = results.iter().map(|stats| stats.total_profit).sum();
    let best_session = results
        .iter()
        .map(|stats| stats.total_profit)
        .fold(f64::NEG_INFINITY, f64::max);
    let worst_session = results
        .iter()
        .map(|stats| stats.total_profit)
        .fold(f64::INFINITY, f64::min);
    let max_bet = results
        .iter()
        .map(|stats| stats.max_bet)
        .fold(0.0, f64::max);

    // Merge the sparse per-session histograms. BTreeMap keeps the count
    // buckets sorted for the report.
    let mut hands_by_count: BTreeMap<i32, usize> = BTreeMap::new();
    let mut weighted_win_rate_by_count: BTreeMap<i32, f64> = BTreeMap::new();
    for stats in results {
        for (bucket, hands) in &stats.hands_by_count {
            *hands_by_count.entry(*bucket).or_insert(0) += hands;
            let rate = stats.win_rate_by_count[bucket];
            *weighted_win_rate_by_count.entry(*bucket).or_insert(0.0) += rate * *hands as f64;
        }
    }

    println!("----------------------------------------------------");
    println!(
        "Sessions: {}. Hands: {}. Decks: {}. Base unit: {}.",
        number_of_sessions,
        total_hands,
        session_config.number_of_decks(),
        session_config.base_unit(),
    );
    println!(
        "Win rate: {:.2}%. Total profit: {:.2}. Profit per session: {:.2}.",
        winning_hands as f64 / total_hands as f64 * 100.0,
        total_profit,
        total_profit / number_of_sessions as f64,
    );
    println!(
        "Best session: {:+.2}. Worst session: {:+.2}. Max bet: {:.2}.",
        best_session, worst_session, max_bet,
    );
    println!();
    println!("True count   Hands   Win rate");
    for (bucket, hands) in &hands_by_count {
        let rate = weighted_win_rate_by_count[bucket] / *hands as f64;
        println!("{:>10}   {:>5}   {:>7.1}%", bucket, hands, rate);
    }
    println!("----------------------------------------------------");
}
