use std::ops::RangeInclusive;

use crate::errors::domain::{ConfigKind, DomainError};

/// 13 ranks x 4 colors + 4 Jesters + 4 Wizards.
pub const DECK_SIZE: usize = 60;
pub const MIN_PLAYERS: u8 = 3;
pub const MAX_PLAYERS: u8 = 6;

/// Most tricks a match can have with `num_players` seats: every player is
/// dealt one card per trick from a single deck.
pub fn max_tricks(num_players: u8) -> u8 {
    if num_players == 0 {
        return 0;
    }
    (DECK_SIZE / num_players as usize) as u8
}

pub fn valid_tricks_range(num_players: u8) -> RangeInclusive<u8> {
    1..=max_tricks(num_players)
}

pub fn require_player_count(num_players: u8) -> Result<u8, DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        return Err(DomainError::config(
            ConfigKind::PlayerCount,
            format!("Player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {num_players}"),
        ));
    }
    Ok(num_players)
}

pub fn require_tricks_to_play(num_players: u8, tricks_to_play: u8) -> Result<u8, DomainError> {
    let range = valid_tricks_range(num_players);
    if !range.contains(&tricks_to_play) {
        return Err(DomainError::config(
            ConfigKind::TricksToPlay,
            format!(
                "Tricks to play must be {}..={} for {num_players} players, got {tricks_to_play}",
                range.start(),
                range.end()
            ),
        ));
    }
    Ok(tricks_to_play)
}
