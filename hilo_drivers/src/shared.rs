use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub session: ConfigSession,
    pub session_simulator: ConfigSessionSimulator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSession {
    pub number_of_decks: u8,
    pub bankroll: f64,
    pub base_unit: f64,
    pub max_bet_percent: f64,
    pub penetration: f64,
}

impl TryInto<hilo::SessionConfig> for ConfigSession {
    type Error = hilo::Error;

    fn try_into(self) -> Result<hilo::SessionConfig, Self::Error> {
        hilo::SessionConfig::new(
            self.number_of_decks,
            self.bankroll,
            self.base_unit,
            self.max_bet_percent,
            self.penetration,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSessionSimulator {
    pub number_of_threads: usize,
    pub number_of_sessions: u64,
    pub hands_per_session: usize,
    /// When set, session i runs with the deterministic seed `seed + i`.
    pub seed: Option<u64>,
}

/// Reads the content of a given config file and parses it to a Config.
///
/// Panics if any error occurs.
pub fn parse_config_from_file(filename: &str) -> Config {
    let file_content = fs::read_to_string(filename).unwrap();
    serde_yaml::from_str(&file_content).unwrap()
}
