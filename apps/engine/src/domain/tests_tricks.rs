use crate::domain::state::Player;
use crate::domain::tricks::{legal_moves, resolve_trick, Trick};
use crate::domain::{Card, Color};
use crate::errors::domain::{ActionKind, DomainError};

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

fn table(hands: &[&[&str]]) -> Vec<Player> {
    hands
        .iter()
        .enumerate()
        .map(|(seat, ids)| {
            let mut p = Player::new(seat as u8);
            p.hand = parse_cards(ids);
            p
        })
        .collect()
}

#[test]
fn jester_lead_leaves_led_suit_unset_until_colored_card() {
    let mut players = table(&[&["0-n", "5-b"], &["7-r", "9-y"], &["7-g", "3-r"]]);
    let mut trick = Trick::new(0, 3);

    trick.play(&mut players, 0, card("0-n"), None).unwrap();
    assert_eq!(trick.led_suit(), None);

    trick.play(&mut players, 1, card("7-r"), None).unwrap();
    assert_eq!(trick.led_suit(), Some(Color::Red));

    assert_eq!(trick.legal_moves(&players[2].hand), vec![card("3-r")]);
}

#[test]
fn specials_stay_legal_when_following_suit() {
    let hand = parse_cards(&["2-w", "4-b", "11-g", "1-n", "9-b"]);
    let legal = legal_moves(&hand, Some(Color::Blue));
    assert_eq!(legal, parse_cards(&["1-n", "4-b", "9-b", "2-w"]));
}

#[test]
fn void_hand_may_play_anything() {
    let hand = parse_cards(&["4-g", "11-y", "0-n"]);
    assert_eq!(legal_moves(&hand, Some(Color::Red)).len(), 3);
    assert_eq!(legal_moves(&hand, None).len(), 3);
    assert!(legal_moves(&[], Some(Color::Red)).is_empty());
}

#[test]
fn turn_order_and_ownership_enforced() {
    let mut players = table(&[&["5-r"], &["6-r"], &["7-r"]]);
    let mut trick = Trick::new(1, 3);

    let err = trick.play(&mut players, 0, card("5-r"), None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidAction(ActionKind::OutOfTurn, _)
    ));

    let err = trick.play(&mut players, 1, card("5-r"), None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidAction(ActionKind::CardNotInHand, _)
    ));
    assert!(trick.plays().is_empty());
    assert_eq!(players[1].hand.len(), 1);
}

#[test]
fn completion_credits_winner_and_rejects_further_plays() {
    let mut players = table(&[&["5-r", "1-g"], &["12-r"], &["3-b"]]);
    let mut trick = Trick::new(0, 3);

    let r0 = trick.play(&mut players, 0, card("5-r"), None).unwrap();
    assert!(!r0.trick_completed);
    assert_eq!(r0.next_seat, 1);
    trick.play(&mut players, 1, card("12-r"), None).unwrap();
    let r2 = trick.play(&mut players, 2, card("3-b"), None).unwrap();

    assert!(r2.trick_completed);
    assert_eq!(r2.trick_winner, Some(1));
    assert!(trick.is_complete());
    assert_eq!(trick.winning_card(), Some(card("12-r")));
    assert_eq!(players[1].tricks_won, 1);
    assert_eq!(players[0].tricks_won + players[2].tricks_won, 0);

    let err = trick.play(&mut players, 0, card("1-g"), None).unwrap_err();
    assert!(matches!(err, DomainError::State(_)));

    let summary = trick.summarize(4).unwrap();
    assert_eq!(summary.trick_no, 4);
    assert_eq!(summary.card_ids(), vec!["5-r", "12-r", "3-b"]);
}

#[test]
fn low_trump_beats_high_led_card() {
    let mut players = table(&[&["13-r"], &["2-g"], &["10-r"], &["1-g"]]);
    let mut trick = Trick::new(0, 4);
    for (seat, id) in [(0, "13-r"), (1, "2-g"), (2, "10-r"), (3, "1-g")] {
        trick.play(&mut players, seat, card(id), Some(Color::Green)).unwrap();
    }
    assert_eq!(trick.winning_seat(), Some(1));
}

#[test]
fn first_wizard_wins_over_later_wizards() {
    let mut players = table(&[&["9-y"], &["0-w"], &["3-w"]]);
    let mut trick = Trick::new(0, 3);
    for (seat, id) in [(0, "9-y"), (1, "0-w"), (2, "3-w")] {
        trick.play(&mut players, seat, card(id), Some(Color::Yellow)).unwrap();
    }
    assert_eq!(trick.winning_seat(), Some(1));
    assert_eq!(trick.winning_card(), Some(card("0-w")));
}

#[test]
fn all_jesters_first_one_wins() {
    let mut players = table(&[&["2-n"], &["0-n"], &["3-n"]]);
    let mut trick = Trick::new(2, 3);
    for (seat, id) in [(2, "3-n"), (0, "2-n"), (1, "0-n")] {
        trick.play(&mut players, seat, card(id), None).unwrap();
    }
    assert_eq!(trick.winning_seat(), Some(2));
    assert_eq!(trick.led_suit(), None);
    assert_eq!(players[2].tricks_won, 1);
}

#[test]
fn off_suit_high_card_never_wins() {
    let mut players = table(&[&["2-b"], &["13-y"], &["0-n"]]);
    let mut trick = Trick::new(0, 3);
    for (seat, id) in [(0, "2-b"), (1, "13-y"), (2, "0-n")] {
        trick.play(&mut players, seat, card(id), None).unwrap();
    }
    assert_eq!(trick.winning_seat(), Some(0));
    assert_eq!(
        resolve_trick(trick.plays(), None).map(|(seat, _)| seat),
        Some(0)
    );
}
