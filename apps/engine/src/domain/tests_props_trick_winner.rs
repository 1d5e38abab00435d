use proptest::prelude::*;

use crate::domain::state::{expected_actor, Player, Seat};
use crate::domain::tricks::{legal_moves, resolve_trick, Trick};
use crate::domain::{test_gens, test_prelude, Card, Color};

/// Play `cards` in order starting at `leader`, one card per seat.
fn play_out(n: u8, leader: Seat, cards: &[Card], trump: Option<Color>) -> (Trick, Vec<Player>) {
    let mut players: Vec<Player> = (0..n).map(Player::new).collect();
    for (i, &card) in cards.iter().enumerate() {
        players[expected_actor(leader, i as u8, n) as usize].hand.push(card);
    }
    let mut trick = Trick::new(leader, n);
    for (i, &card) in cards.iter().enumerate() {
        let seat = expected_actor(leader, i as u8, n);
        trick
            .play(&mut players, seat, card, trump)
            .expect("seat holds its card and plays in turn");
    }
    (trick, players)
}

/// Straightforward winner rule, written independently of `card_beats`.
fn oracle_winner(cards: &[Card], trump: Option<Color>) -> usize {
    if let Some(i) = cards.iter().position(|c| c.is_wizard()) {
        return i;
    }
    let Some(led) = cards.iter().find_map(|c| c.color()) else {
        return 0;
    };
    let best_of = |color: Color| {
        cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.color() == Some(color))
            .max_by_key(|(_, c)| c.rank())
            .map(|(i, _)| i)
    };
    trump
        .and_then(best_of)
        .or_else(|| best_of(led))
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The incremental winner matches the oracle and the batch resolver.
    #[test]
    fn prop_winner_matches_oracle(
        (n, leader, cards) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let (trick, _) = play_out(n, leader, &cards, trump);
        let idx = oracle_winner(&cards, trump);
        let expected_seat = expected_actor(leader, idx as u8, n);

        prop_assert!(trick.is_complete());
        prop_assert_eq!(trick.winning_seat(), Some(expected_seat));
        prop_assert_eq!(trick.winning_card(), Some(cards[idx]));
        prop_assert_eq!(
            resolve_trick(trick.plays(), trump),
            Some((expected_seat, cards[idx]))
        );
    }

    /// Exactly one seat is credited, and it played the winning card.
    #[test]
    fn prop_single_winner_credited(
        (n, leader, cards) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let (trick, players) = play_out(n, leader, &cards, trump);
        let credited: Vec<Seat> = players
            .iter()
            .filter(|p| p.tricks_won == 1)
            .map(|p| p.seat)
            .collect();
        let total: u32 = players.iter().map(|p| u32::from(p.tricks_won)).sum();
        prop_assert_eq!(total, 1);
        prop_assert_eq!(credited.len(), 1);
        let winner = credited[0];
        prop_assert_eq!(trick.winning_seat(), Some(winner));
        let play = trick.plays().iter().find(|p| p.seat == winner).expect("winner played");
        prop_assert_eq!(Some(play.card), trick.winning_card());
    }

    /// Any Wizard in the trick means the first-played Wizard wins.
    #[test]
    fn prop_first_wizard_wins(
        (n, leader, cards) in test_gens::trick_with_wizard(),
        trump in test_gens::trump(),
    ) {
        let (trick, _) = play_out(n, leader, &cards, trump);
        let first = cards.iter().copied().find(|c| c.is_wizard()).expect("has wizard");
        prop_assert_eq!(trick.winning_card(), Some(first));
    }

    /// A Jester only wins a trick made entirely of Jesters.
    #[test]
    fn prop_jester_never_beats_other_cards(
        (n, leader, cards) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let (trick, _) = play_out(n, leader, &cards, trump);
        let all_jesters = cards.iter().all(|c| c.is_jester());
        let winner = trick.winning_card().expect("complete trick has a winner");
        prop_assert_eq!(winner.is_jester(), all_jesters);
    }

    /// Holding the led color restricts play to it plus specials.
    #[test]
    fn prop_legal_moves_follow_led_color(
        hand in test_gens::distinct_cards(8),
        led in test_gens::color(),
    ) {
        let legal = legal_moves(&hand, Some(led));
        let holds_led = hand.iter().any(|c| c.color() == Some(led));
        for c in &hand {
            let expected = !holds_led || c.is_special() || c.color() == Some(led);
            prop_assert_eq!(legal.contains(c), expected, "card {}", c);
        }
        prop_assert!(legal.iter().all(|c| hand.contains(c)));
    }
}
