//! Trump determination from the card revealed after dealing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{Card, Color, Suit};

/// Whether a match is played with a trump color.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrumpPresence {
    Trump,
    NoTrump,
}

/// Revealed card and the trump color it implies; fixed for a whole match.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct TrumpContext {
    pub top_card: Option<Card>,
    pub trump_suit: Option<Color>,
}

impl TrumpContext {
    /// Derive trump from the revealed card.
    ///
    /// A Wizard picks one of the four colors uniformly from `rng`; a Jester or
    /// an empty deck means no trump; any other card makes its own color trump.
    pub fn from_top_card<R: Rng + ?Sized>(top_card: Option<Card>, rng: &mut R) -> Self {
        let trump_suit = match top_card.map(|c| c.suit()) {
            None | Some(Suit::Jester) => None,
            Some(Suit::Wizard) => Some(Color::ALL[rng.random_range(0..Color::ALL.len())]),
            Some(suit) => suit.color(),
        };
        Self {
            top_card,
            trump_suit,
        }
    }

    pub fn no_trump() -> Self {
        Self {
            top_card: None,
            trump_suit: None,
        }
    }

    pub fn presence(&self) -> TrumpPresence {
        match self.trump_suit {
            Some(_) => TrumpPresence::Trump,
            None => TrumpPresence::NoTrump,
        }
    }

    pub fn is_trump(&self, card: Card) -> bool {
        self.trump_suit.is_some() && card.color() == self.trump_suit
    }
}
