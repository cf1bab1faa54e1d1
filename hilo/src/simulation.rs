pub mod shoe;
pub mod strategy;

use crate::{Error, SessionConfig, SessionStatistics};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum_macros::EnumIter;

use self::shoe::Shoe;
use self::strategy::{bet_size, win_probability};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Suit {
    Diamond = 0,
    Club,
    Heart,
    Spade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Blackjack point value: ace counts 11, face cards count 10.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    /// Hi-Lo count weight: +1 for 2 through 6, -1 for tens and aces, 0 otherwise.
    pub fn hi_lo(&self) -> i32 {
        match self {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{}", rank)
    }
}

/// Represents a card in the real world with a suit and a rank. The suit has
/// no effect on value or count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn hi_lo(&self) -> i32 {
        self.rank.hi_lo()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suit = match self.suit {
            Suit::Diamond => 'D',
            Suit::Club => 'C',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        };
        write!(f, "{}{}", suit, self.rank)
    }
}

/// Outcome of one simulated hand. Records are append-only; the session never
/// reorders or rewrites them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandRecord {
    /// True count read from the shoe before any card of this hand was dealt.
    pub true_count: f64,
    pub bet: f64,
    pub win: bool,
    /// Signed profit of this hand: +bet on a win, -bet on a loss.
    pub amount: f64,
    /// Bankroll after this hand settled.
    pub bankroll: f64,
    pub dealer_upcard: Rank,
    pub player_cards: [Rank; 2],
    /// Cards left in the shoe after the deal, before any reshuffle.
    pub remaining_cards: usize,
}

/// Simulates one betting session: a single shoe, a single bankroll and an
/// append-only hand history. Hands are resolved probabilistically from the
/// true count and the dealer upcard rather than played out card by card.
pub struct Session<R: Rng> {
    config: SessionConfig,
    max_bet: f64,
    penetration_threshold: f64,
    shoe: Shoe,
    bankroll: f64,
    history: Vec<HandRecord>,
    rng: R,
}

impl Session<StdRng> {
    /// Creates a session with an entropy-seeded random source.
    pub fn new(config: SessionConfig) -> Session<StdRng> {
        Session::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session with the given random source. Pass a seeded rng for
    /// reproducible runs.
    pub fn with_rng(config: SessionConfig, mut rng: R) -> Session<R> {
        let shoe = Shoe::new(config.number_of_decks(), &mut rng);
        Session {
            config,
            max_bet: config.max_bet(),
            penetration_threshold: config.penetration_threshold(),
            shoe,
            bankroll: config.bankroll(),
            history: Vec::new(),
            rng,
        }
    }

    /// Simulates one hand: sizes the bet from the current true count, deals
    /// two player cards and the dealer upcard, samples the outcome, settles
    /// the bankroll and appends the record. Reshuffles afterwards if the
    /// shoe fell below the penetration threshold.
    pub fn run_hand(&mut self) -> Result<HandRecord, Error> {
        let true_count = self.shoe.true_count();
        let bet = bet_size(
            true_count,
            self.config.base_unit(),
            self.max_bet,
            self.bankroll,
        );

        let player_cards = [self.draw()?, self.draw()?];
        let dealer_upcard = self.draw()?;

        // The win probability uses the pre-deal true count, not the count
        // after these three cards left the shoe.
        let win_rate = win_probability(true_count, dealer_upcard.rank);
        let win = self.rng.gen::<f64>() < win_rate;
        let amount = if win { bet } else { -bet };
        self.bankroll += amount;

        let record = HandRecord {
            true_count,
            bet,
            win,
            amount,
            bankroll: self.bankroll,
            dealer_upcard: dealer_upcard.rank,
            player_cards: [player_cards[0].rank, player_cards[1].rank],
            remaining_cards: self.shoe.remaining(),
        };
        self.history.push(record);

        if (self.shoe.remaining() as f64) < self.penetration_threshold {
            self.shoe.reset(&mut self.rng);
        }

        Ok(record)
    }

    /// Simulates the given number of hands sequentially and returns the
    /// statistics over the whole history. The hand count is the only
    /// termination condition; a busted bankroll does not stop the session.
    pub fn run_session(&mut self, num_hands: usize) -> Result<SessionStatistics, Error> {
        for _ in 0..num_hands {
            self.run_hand()?;
        }
        Ok(self.statistics())
    }

    pub fn history(&self) -> &[HandRecord] {
        &self.history
    }

    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }

    pub fn running_count(&self) -> i32 {
        self.shoe.running_count()
    }

    pub fn true_count(&self) -> f64 {
        self.shoe.true_count()
    }

    /// Recomputes the statistics from the full history. Calling this twice
    /// without running further hands yields identical results.
    pub fn statistics(&self) -> SessionStatistics {
        SessionStatistics::from_history(&self.history)
    }

    fn draw(&mut self) -> Result<Card, Error> {
        self.shoe.draw().ok_or(Error::ExhaustedShoe)
    }
}
