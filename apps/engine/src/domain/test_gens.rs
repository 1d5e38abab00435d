// Proptest generators for domain types.
// Cards are drawn from a shuffled deck so every generated trick or hand
// holds distinct cards.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::state::Seat;
use crate::domain::{Card, Color};

pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Green),
        Just(Color::Blue),
        Just(Color::Yellow),
    ]
}

/// Trump color, or no trump.
pub fn trump() -> impl Strategy<Value = Option<Color>> {
    prop_oneof![Just(None), color().prop_map(Some)]
}

pub fn num_players() -> impl Strategy<Value = u8> {
    MIN_PLAYERS..=MAX_PLAYERS
}

pub fn card() -> impl Strategy<Value = Card> {
    prop::sample::select(full_deck())
}

/// `n` distinct cards.
pub fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck())
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(n).collect())
}

/// A full trick: player count, leader and one distinct card per seat in
/// play order.
pub fn complete_trick() -> impl Strategy<Value = (u8, Seat, Vec<Card>)> {
    num_players().prop_flat_map(|n| (Just(n), 0..n, distinct_cards(n as usize)))
}

/// Like `complete_trick` but with at least one Wizard among the cards.
pub fn trick_with_wizard() -> impl Strategy<Value = (u8, Seat, Vec<Card>)> {
    complete_trick().prop_flat_map(|(n, leader, cards)| {
        let wizards: Vec<Card> = full_deck().into_iter().filter(|c| c.is_wizard()).collect();
        let len = cards.len();
        (
            Just(n),
            Just(leader),
            Just(cards),
            prop::sample::select(wizards),
            0..len,
        )
            .prop_map(|(n, leader, mut cards, wizard, slot)| {
                if !cards.contains(&wizard) {
                    cards[slot] = wizard;
                }
                (n, leader, cards)
            })
    })
}
