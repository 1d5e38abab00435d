//! Full-table view for analysis and perfect-information agents.

use serde::Serialize;

use crate::domain::game::Game;
use crate::domain::state::{Phase, Seat};
use crate::domain::tricks::{CompletedTrick, PlayedCard};
use crate::domain::{Card, Color};

/// Public information about one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub forecast: Option<u8>,
    pub tricks_won: u8,
    pub cards_left: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfectInformation {
    pub phase: Phase,
    pub num_players: u8,
    pub trick_no: u8,
    pub tricks_to_play: u8,
    pub seats: Vec<SeatPublic>,
    /// Every hand, in seat order.
    pub hands: Vec<Vec<Card>>,
    pub top_card: Option<Card>,
    pub trump_suit: Option<Color>,
    pub starting_seat: Seat,
    pub current_seat: Seat,
    pub current_trick: Vec<PlayedCard>,
    pub led_suit: Option<Color>,
    pub winning_seat: Option<Seat>,
    pub winning_card: Option<Card>,
    /// Legal cards of the seat due to act.
    pub legal_actions: Vec<Card>,
    pub trick_history: Vec<CompletedTrick>,
}

impl PerfectInformation {
    pub fn from_game(game: &Game) -> Self {
        let trick = game.current_trick();
        let current_seat = game.current_seat();
        Self {
            phase: game.phase(),
            num_players: game.num_players(),
            trick_no: game.trick_no(),
            tricks_to_play: game.tricks_to_play(),
            seats: game
                .players()
                .iter()
                .map(|p| SeatPublic {
                    seat: p.seat,
                    forecast: p.forecast,
                    tricks_won: p.tricks_won,
                    cards_left: p.hand.len() as u8,
                })
                .collect(),
            hands: game.players().iter().map(|p| p.hand.clone()).collect(),
            top_card: game.trump().top_card,
            trump_suit: game.trump().trump_suit,
            starting_seat: trick.starting_seat(),
            current_seat,
            current_trick: trick.plays().to_vec(),
            led_suit: trick.led_suit(),
            winning_seat: trick.winning_seat(),
            winning_card: trick.winning_card(),
            legal_actions: game.legal_actions(current_seat),
            trick_history: game.trick_history().to_vec(),
        }
    }

    /// Cards still held across the table.
    pub fn cards_in_hands(&self) -> usize {
        self.hands.iter().map(Vec::len).sum()
    }
}
