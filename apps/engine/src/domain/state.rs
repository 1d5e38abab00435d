use serde::Serialize;

use crate::domain::Card;

pub type Seat = u8;

/// Match progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(tag = "phase")]
pub enum Phase {
    /// Configured but not dealt.
    Init,
    /// Hands dealt, forecasts being computed.
    Bidding,
    /// Playing tricks; `trick_no` is 1-based.
    Playing { trick_no: u8 },
    /// All tricks played; payoffs are final.
    Scored,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub seat: Seat,
    /// Cards still held, kept in deal order.
    pub hand: Vec<Card>,
    /// Expected tricks, set once after dealing.
    pub forecast: Option<u8>,
    /// Tricks won so far in this match.
    pub tricks_won: u8,
}

impl Player {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Vec::new(),
            forecast: None,
            tricks_won: 0,
        }
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}

/// Seat / turn math helpers for a table of `num_players` seats.
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i16, num_players: u8) -> Seat {
    let n = num_players.max(1) as i16;
    ((seat as i16 + delta).rem_euclid(n)) as Seat
}

/// Returns the next seat clockwise.
#[inline]
pub fn next_seat(seat: Seat, num_players: u8) -> Seat {
    seat_offset(seat, 1, num_players)
}

/// Position of `seat` counted clockwise from `start` (0 = `start` itself).
#[inline]
pub fn relative_position(seat: Seat, start: Seat, num_players: u8) -> u8 {
    seat_offset(seat, -(start as i16), num_players)
}

/// Expected actor during a trick led by `leader` after `play_count` plays.
#[inline]
pub fn expected_actor(leader: Seat, play_count: u8, num_players: u8) -> Seat {
    seat_offset(leader, play_count as i16, num_players)
}
