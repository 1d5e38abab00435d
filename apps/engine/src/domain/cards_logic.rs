//! Card game logic: checking suits in hands, comparing card strength

use std::cmp::Ordering;

use super::cards_types::{Card, Color, Suit};

/// Value assigned to a Wizard by `card_value`.
pub const WIZARD_VALUE: u8 = 14;

pub fn hand_has_color(hand: &[Card], color: Color) -> bool {
    hand.iter().any(|c| c.color() == Some(color))
}

/// Context-free ordering used for sorting and table lookups, never for tricks.
///
/// Jesters rank lowest and Wizards highest; copies of the same special card
/// compare equal. Colored cards compare by rank, then by color so the order
/// stays total.
pub fn compare_rank(a: Card, b: Card) -> Ordering {
    match (a.suit(), b.suit()) {
        (Suit::Jester, Suit::Jester) | (Suit::Wizard, Suit::Wizard) => Ordering::Equal,
        (Suit::Jester, _) | (_, Suit::Wizard) => Ordering::Less,
        (_, Suit::Jester) | (Suit::Wizard, _) => Ordering::Greater,
        _ => a.face().cmp(&b.face()).then_with(|| a.suit().cmp(&b.suit())),
    }
}

/// Rank-derived weight: Jester 0, Wizard 14, colored cards their rank.
pub fn card_value(card: Card) -> u8 {
    match card.suit() {
        Suit::Jester => 0,
        Suit::Wizard => WIZARD_VALUE,
        _ => card.face(),
    }
}

/// Whether `challenger` takes the trick from the card currently winning it.
///
/// `best` was played earlier than `challenger`, so every tie (two Wizards,
/// two Jesters, two off-suit cards) keeps the earlier card.
pub fn card_beats(
    challenger: Card,
    best: Card,
    led: Option<Color>,
    trump: Option<Color>,
) -> bool {
    match (best.suit(), challenger.suit()) {
        (Suit::Wizard, _) => false,
        (_, Suit::Wizard) => true,
        (_, Suit::Jester) => false,
        (Suit::Jester, _) => true,
        _ => {
            let (Some(c), Some(b)) = (challenger.color(), best.color()) else {
                return false;
            };
            let c_trump = trump == Some(c);
            let b_trump = trump == Some(b);
            if c_trump != b_trump {
                return c_trump;
            }
            if c_trump && b_trump {
                return challenger.face() > best.face();
            }
            // Neither is trump: compare only if following lead
            let c_follows = led == Some(c);
            let b_follows = led == Some(b);
            if c_follows != b_follows {
                return c_follows;
            }
            c_follows && b_follows && challenger.face() > best.face()
        }
    }
}
