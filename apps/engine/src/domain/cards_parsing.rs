//! Card parsing from identifier strings (e.g., "7-r", "0-n", "3-w")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Color, Suit};
use crate::errors::domain::{ActionKind, DomainError};

impl Suit {
    /// Single-letter code used in card identifiers.
    pub fn code(self) -> char {
        match self {
            Suit::Red => 'r',
            Suit::Green => 'g',
            Suit::Blue => 'b',
            Suit::Yellow => 'y',
            Suit::Jester => 'n',
            Suit::Wizard => 'w',
        }
    }

    pub fn from_code(code: char) -> Option<Suit> {
        match code {
            'r' => Some(Suit::Red),
            'g' => Some(Suit::Green),
            'b' => Some(Suit::Blue),
            'y' => Some(Suit::Yellow),
            'n' => Some(Suit::Jester),
            'w' => Some(Suit::Wizard),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.face(), self.suit().code())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed =
            || DomainError::invalid_action(ActionKind::ParseCard, format!("Parse card: {s}"));

        let (rank_str, suit_str) = s.split_once('-').ok_or_else(malformed)?;
        let mut suit_chars = suit_str.chars();
        let suit = match (suit_chars.next(), suit_chars.next()) {
            (Some(ch), None) => Suit::from_code(ch).ok_or_else(malformed)?,
            _ => return Err(malformed()),
        };
        // Reject signs and leading zeros so every card has exactly one identifier.
        if rank_str.is_empty()
            || !rank_str.bytes().all(|b| b.is_ascii_digit())
            || (rank_str.len() > 1 && rank_str.starts_with('0'))
        {
            return Err(malformed());
        }
        let face: u8 = rank_str.parse().map_err(|_| malformed())?;

        let card = match suit.color() {
            Some(color) => Card::colored(color, face),
            None if suit == Suit::Jester => Card::jester(face),
            None => Card::wizard(face),
        };
        card.map_err(|_| malformed())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Suit::from_code), chars.next()) {
            (Some(suit), None) => suit.color().ok_or_else(|| {
                DomainError::invalid_action(ActionKind::ParseCard, format!("Not a color: {s}"))
            }),
            _ => Err(DomainError::invalid_action(
                ActionKind::ParseCard,
                format!("Not a color: {s}"),
            )),
        }
    }
}

/// Non-panicking helper to parse card identifiers into Card instances.
/// Returns an error if any identifier is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Render cards as their identifiers, preserving order.
pub fn cards_to_ids(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}
