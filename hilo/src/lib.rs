pub mod simulation;
pub mod statistics;

use thiserror::Error;

pub use simulation::{Card, HandRecord, Rank, Session, Suit};
pub use statistics::SessionStatistics;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("number of decks must be between 1 and 8, got {0}")]
    InvalidNumberOfDecks(u8),
    #[error("bankroll must be at least 1000, got {0}")]
    InvalidBankroll(f64),
    #[error("base unit must be at least 25, got {0}")]
    InvalidBaseUnit(f64),
    #[error("max bet percent must be between 1 and 10, got {0}")]
    InvalidMaxBetPercent(f64),
    #[error("penetration must be between 50 and 95, got {0}")]
    InvalidPenetration(f64),
    #[error("tried to draw a card from an empty shoe")]
    ExhaustedShoe,
}

/// Validated parameters of one simulated session. Construction fails if any
/// parameter is out of range, so a `SessionConfig` is always usable as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    number_of_decks: u8,
    bankroll: f64,
    base_unit: f64,
    max_bet_percent: f64,
    penetration: f64,
}

impl SessionConfig {
    pub fn new(
        number_of_decks: u8,
        bankroll: f64,
        base_unit: f64,
        max_bet_percent: f64,
        penetration: f64,
    ) -> Result<SessionConfig, Error> {
        if number_of_decks < 1 || number_of_decks > 8 {
            return Err(Error::InvalidNumberOfDecks(number_of_decks));
        }
        if bankroll < 1000.0 {
            return Err(Error::InvalidBankroll(bankroll));
        }
        if base_unit < 25.0 {
            return Err(Error::InvalidBaseUnit(base_unit));
        }
        if max_bet_percent < 1.0 || max_bet_percent > 10.0 {
            return Err(Error::InvalidMaxBetPercent(max_bet_percent));
        }
        if penetration < 50.0 || penetration > 95.0 {
            return Err(Error::InvalidPenetration(penetration));
        }
        Ok(SessionConfig {
            number_of_decks,
            bankroll,
            base_unit,
            max_bet_percent,
            penetration,
        })
    }

    pub fn number_of_decks(&self) -> u8 {
        self.number_of_decks
    }

    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }

    pub fn base_unit(&self) -> f64 {
        self.base_unit
    }

    /// The bet ceiling, fixed at session start. It is not recomputed as the
    /// bankroll changes during the session.
    pub fn max_bet(&self) -> f64 {
        self.bankroll * self.max_bet_percent / 100.0
    }

    /// Number of remaining cards below which the shoe gets reshuffled.
    pub fn penetration_threshold(&self) -> f64 {
        (100.0 - self.penetration) / 100.0 * self.number_of_decks as f64 * 52.0
    }
}
