//! What one seat can see at a decision point.
//!
//! `ObservableState` is the structured observation handed to agents and
//! encoders. Other seats' hands are never included; forecasts and trick
//! counts are public.

use serde::Serialize;

use crate::domain::cards_parsing::cards_to_ids;
use crate::domain::game::Game;
use crate::domain::state::{Phase, Seat};
use crate::domain::tricks::{CompletedTrick, PlayedCard};
use crate::domain::{Card, Color};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservableState {
    /// Seat this observation belongs to.
    pub seat: Seat,
    pub num_players: u8,
    pub phase: Phase,
    pub hand: Vec<Card>,
    pub forecast: Option<u8>,
    pub tricks_won: u8,
    /// Every seat's forecast, in seat order.
    pub forecasts: Vec<Option<u8>>,
    /// Every seat's tricks won so far, in seat order.
    pub tricks_won_by_seat: Vec<u8>,
    pub current_trick: Vec<PlayedCard>,
    pub led_suit: Option<Color>,
    /// Provisional winner of the current trick.
    pub winning_seat: Option<Seat>,
    pub winning_card: Option<Card>,
    pub top_card: Option<Card>,
    pub trump_suit: Option<Color>,
    /// Seat that led the current trick.
    pub starting_seat: Seat,
    pub current_seat: Seat,
    pub trick_no: u8,
    pub tricks_to_play: u8,
    pub trick_history: Vec<CompletedTrick>,
    pub last_trick_winner: Option<Seat>,
    /// Legal cards for `seat` against the current trick.
    pub legal_actions: Vec<Card>,
}

impl ObservableState {
    pub fn from_game(game: &Game, seat: Seat) -> Self {
        let player = game.players().get(seat as usize);
        let trick = game.current_trick();
        Self {
            seat,
            num_players: game.num_players(),
            phase: game.phase(),
            hand: player.map(|p| p.hand.clone()).unwrap_or_default(),
            forecast: player.and_then(|p| p.forecast),
            tricks_won: player.map(|p| p.tricks_won).unwrap_or_default(),
            forecasts: game.players().iter().map(|p| p.forecast).collect(),
            tricks_won_by_seat: game.players().iter().map(|p| p.tricks_won).collect(),
            current_trick: trick.plays().to_vec(),
            led_suit: trick.led_suit(),
            winning_seat: trick.winning_seat(),
            winning_card: trick.winning_card(),
            top_card: game.trump().top_card,
            trump_suit: game.trump().trump_suit,
            starting_seat: trick.starting_seat(),
            current_seat: game.current_seat(),
            trick_no: game.trick_no(),
            tricks_to_play: game.tricks_to_play(),
            trick_history: game.trick_history().to_vec(),
            last_trick_winner: game.last_trick_winner(),
            legal_actions: game.legal_actions(seat),
        }
    }

    pub fn is_my_turn(&self) -> bool {
        matches!(self.phase, Phase::Playing { .. }) && self.current_seat == self.seat
    }

    pub fn hand_ids(&self) -> Vec<String> {
        cards_to_ids(&self.hand)
    }

    pub fn legal_action_ids(&self) -> Vec<String> {
        cards_to_ids(&self.legal_actions)
    }

    /// Completed tricks as identifier lists, oldest first.
    pub fn history_ids(&self) -> Vec<Vec<String>> {
        self.trick_history.iter().map(CompletedTrick::card_ids).collect()
    }
}
