//! Deterministic deck handling: building, shuffling, dealing, revealing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_types::{MAX_RANK, MIN_RANK, SPECIAL_COPIES};
use crate::domain::rules::DECK_SIZE;
use crate::domain::state::Player;
use crate::domain::{Card, Color, Suit};
use crate::errors::domain::{ConfigKind, DomainError};

/// Generate the full 60-card deck in canonical order: colors red, green,
/// blue, yellow with ranks 1..=13, then the Jesters, then the Wizards.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for rank in MIN_RANK..=MAX_RANK {
            deck.push(Card::new_unchecked(color.into(), rank));
        }
    }
    for suit in [Suit::Jester, Suit::Wizard] {
        for copy in 0..SPECIAL_COPIES {
            deck.push(Card::new_unchecked(suit, copy));
        }
    }
    deck
}

/// Fisher-Yates shuffle drawing from the given RNG stream.
pub fn shuffle_with_rng<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Owns the deck for one match and the RNG stream that shuffles it.
#[derive(Debug, Clone)]
pub struct Dealer {
    deck: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Dealer {
    /// A dealer holding an unshuffled full deck.
    pub fn new(dealing_seed: u64) -> Self {
        Self {
            deck: full_deck(),
            rng: ChaCha8Rng::seed_from_u64(dealing_seed),
        }
    }

    pub fn shuffle(&mut self) {
        shuffle_with_rng(&mut self.deck, &mut self.rng);
    }

    /// Deal `count` cards to every player in seat order, popping from the
    /// deck tail.
    pub fn deal(&mut self, players: &mut [Player], count: u8) -> Result<(), DomainError> {
        let needed = players.len() * count as usize;
        if needed > self.deck.len() {
            return Err(DomainError::config(
                ConfigKind::TricksToPlay,
                format!(
                    "Dealing {count} cards to {} players needs {needed} cards, {} left",
                    players.len(),
                    self.deck.len()
                ),
            ));
        }
        for player in players.iter_mut() {
            for _ in 0..count {
                if let Some(card) = self.deck.pop() {
                    player.hand.push(card);
                }
            }
        }
        Ok(())
    }

    /// Pop the card that determines trump, or `None` when the deal used the
    /// whole deck.
    pub fn reveal_top(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    pub fn remaining(&self) -> usize {
        self.deck.len()
    }
}
