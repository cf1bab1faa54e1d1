use super::{Card, Rank, Suit};

use strum::IntoEnumIterator;

use rand::seq::SliceRandom;
use rand::Rng;

/// Represents a shoe in the real world: a multi-deck pile of shuffled cards.
/// The top of the pile is the end of the vector.
#[derive(Debug, Clone)]
pub struct Shoe {
    number_of_decks: u8,
    cards: Vec<Card>,
    running_count: i32,
}

impl Shoe {
    /// Creates a new shuffled shoe with the given number of decks.
    pub fn new<R: Rng>(number_of_decks: u8, rng: &mut R) -> Shoe {
        let mut shoe = Shoe {
            number_of_decks,
            cards: Vec::with_capacity(number_of_decks as usize * 52),
            running_count: 0,
        };
        shoe.reset(rng);
        shoe
    }

    /// Returns the dealt cards back into the shoe and shuffles. The rebuilt
    /// pile always holds exactly `number_of_decks * 52` cards and its running
    /// count is 0.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.cards.clear();
        for _ in 0..self.number_of_decks {
            for suit in Suit::iter() {
                for rank in Rank::iter() {
                    self.cards.push(Card { rank, suit });
                }
            }
        }
        self.cards.shuffle(rng);
        self.running_count = 0;
    }

    /// Deals the top card if the shoe is not empty. Returns None if empty.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.running_count -= card.hi_lo();
        Some(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Sum of Hi-Lo weights over the cards still in the shoe. A full shoe
    /// counts to 0.
    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Running count normalized by remaining decks. The deck estimate is
    /// floored at 1 so the count cannot blow up as the shoe empties; late in
    /// the shoe this trades accuracy for stability.
    pub fn true_count(&self) -> f64 {
        let remaining_decks = (self.remaining() as f64 / 52.0).max(1.0);
        self.running_count as f64 / remaining_decks
    }
}
