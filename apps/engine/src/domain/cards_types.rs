//! Core card-related types: Card, Suit, Color

use crate::errors::domain::{ConfigKind, DomainError};

/// Lowest rank of a colored card.
pub const MIN_RANK: u8 = 1;
/// Highest rank of a colored card.
pub const MAX_RANK: u8 = 13;
/// Number of identical Jesters and Wizards in the deck.
pub const SPECIAL_COPIES: u8 = 4;

/// The four colored suits. Only these can be led or be trump.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
}

/// Every suit a card can carry, including the two special kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Red,
    Green,
    Blue,
    Yellow,
    Jester,
    Wizard,
}

impl Suit {
    /// The color of a colored suit; `None` for Jester and Wizard.
    pub fn color(self) -> Option<Color> {
        match self {
            Suit::Red => Some(Color::Red),
            Suit::Green => Some(Color::Green),
            Suit::Blue => Some(Color::Blue),
            Suit::Yellow => Some(Color::Yellow),
            Suit::Jester | Suit::Wizard => None,
        }
    }

    pub fn is_special(self) -> bool {
        matches!(self, Suit::Jester | Suit::Wizard)
    }
}

impl From<Color> for Suit {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => Suit::Red,
            Color::Green => Suit::Green,
            Color::Blue => Suit::Blue,
            Color::Yellow => Suit::Yellow,
        }
    }
}

/// One physical card.
///
/// Colored cards carry a rank in `1..=13`. Jesters and Wizards carry a copy
/// index in `0..4` that only keeps the four copies distinguishable; it never
/// takes part in comparisons.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    suit: Suit,
    face: u8,
}

impl Card {
    pub fn colored(color: Color, rank: u8) -> Result<Self, DomainError> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(DomainError::config(
                ConfigKind::InvalidCard,
                format!("rank {rank} outside {MIN_RANK}..={MAX_RANK} for {color:?}"),
            ));
        }
        Ok(Self {
            suit: color.into(),
            face: rank,
        })
    }

    pub fn jester(copy: u8) -> Result<Self, DomainError> {
        Self::special(Suit::Jester, copy)
    }

    pub fn wizard(copy: u8) -> Result<Self, DomainError> {
        Self::special(Suit::Wizard, copy)
    }

    fn special(suit: Suit, copy: u8) -> Result<Self, DomainError> {
        if copy >= SPECIAL_COPIES {
            return Err(DomainError::config(
                ConfigKind::InvalidCard,
                format!("{suit:?} copy {copy} outside 0..{SPECIAL_COPIES}"),
            ));
        }
        Ok(Self { suit, face: copy })
    }

    /// Builds a card whose fields are known to be in range (deck construction).
    pub(crate) const fn new_unchecked(suit: Suit, face: u8) -> Self {
        Self { suit, face }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn color(&self) -> Option<Color> {
        self.suit.color()
    }

    /// Rank of a colored card; `None` for specials.
    pub fn rank(&self) -> Option<u8> {
        if self.suit.is_special() {
            None
        } else {
            Some(self.face)
        }
    }

    /// Copy index of a Jester or Wizard; `None` for colored cards.
    pub fn copy_index(&self) -> Option<u8> {
        if self.suit.is_special() {
            Some(self.face)
        } else {
            None
        }
    }

    pub fn is_jester(&self) -> bool {
        self.suit == Suit::Jester
    }

    pub fn is_wizard(&self) -> bool {
        self.suit == Suit::Wizard
    }

    pub fn is_special(&self) -> bool {
        self.suit.is_special()
    }

    pub(crate) fn face(&self) -> u8 {
        self.face
    }
}

// Note: Ord on Card is only for stable sorting (Jesters, then colored cards by
// rank and color, then Wizards). Trick resolution uses `cards_logic::card_beats`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        fn class(card: &Card) -> u8 {
            match card.suit {
                Suit::Jester => 0,
                Suit::Wizard => 2,
                _ => 1,
            }
        }
        class(self)
            .cmp(&class(other))
            .then_with(|| match (self.is_special(), other.is_special()) {
                (false, false) => self
                    .face
                    .cmp(&other.face)
                    .then_with(|| self.suit.cmp(&other.suit)),
                _ => self.face.cmp(&other.face),
            })
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
