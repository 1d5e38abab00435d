use crate::config::GameConfig;
use crate::domain::game::Game;
use crate::errors::domain::DomainError;

fn game_with_step_back(players: u8, tricks: u8, seed: u64) -> Game {
    let config = GameConfig {
        num_players: players,
        tricks_to_play: tricks,
        seed: Some(seed),
        ..GameConfig::default()
    }
    .with_step_back(true);
    Game::with_baseline(config).expect("valid config")
}

fn step_last_legal(game: &mut Game) {
    let seat = game.current_seat();
    let legal = game.legal_actions(seat);
    let card = *legal.last().expect("legal card available");
    game.step_card(card).expect("legal card");
}

#[test]
fn undo_single_play_restores_state() {
    let mut g = game_with_step_back(3, 4, 7);
    g.init().unwrap();
    let before = g.perfect_information();

    step_last_legal(&mut g);
    assert_ne!(g.perfect_information(), before);

    assert!(g.step_back().unwrap());
    assert_eq!(g.perfect_information(), before);
    assert!(!g.step_back().unwrap());
}

#[test]
fn undo_across_trick_boundary_uncredits_winner() {
    let mut g = game_with_step_back(4, 5, 31);
    g.init().unwrap();
    for _ in 0..3 {
        step_last_legal(&mut g);
    }
    let mid_trick = g.perfect_information();

    step_last_legal(&mut g);
    assert_eq!(g.tricks_completed(), 1);
    let winner = g.last_trick_winner().unwrap();
    assert_eq!(g.players()[winner as usize].tricks_won, 1);

    assert!(g.step_back().unwrap());
    assert_eq!(g.tricks_completed(), 0);
    assert!(g.trick_history().is_empty());
    assert_eq!(g.players()[winner as usize].tricks_won, 0);
    assert_eq!(g.perfect_information(), mid_trick);
}

#[test]
fn undo_whole_match_returns_to_deal() {
    let mut g = game_with_step_back(3, 6, 404);
    let (initial, _) = g.init().unwrap();
    let dealt = g.perfect_information();

    let mut steps = 0;
    while !g.is_over() {
        step_last_legal(&mut g);
        steps += 1;
    }
    assert_eq!(steps, 18);

    let mut undone = 0;
    while g.step_back().unwrap() {
        undone += 1;
    }
    assert_eq!(undone, steps);
    assert!(!g.is_over());
    assert_eq!(g.perfect_information(), dealt);
    assert_eq!(g.observe(initial.seat), initial);
}

#[test]
fn replay_after_undo_matches_original_line() {
    let mut g = game_with_step_back(5, 4, 12);
    g.init().unwrap();
    for _ in 0..7 {
        step_last_legal(&mut g);
    }
    let reached = g.perfect_information();
    for _ in 0..2 {
        assert!(g.step_back().unwrap());
    }
    for _ in 0..2 {
        step_last_legal(&mut g);
    }
    assert_eq!(g.perfect_information(), reached);
}

#[test]
fn disabled_step_back_is_a_state_error() {
    let config = GameConfig::for_players(4).with_seed(1);
    let mut g = Game::with_baseline(config).unwrap();
    g.init().unwrap();
    step_last_legal(&mut g);
    assert!(matches!(g.step_back(), Err(DomainError::State(_))));
}
