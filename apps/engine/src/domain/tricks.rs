use serde::Serialize;

use crate::domain::state::{next_seat, Player, Seat};
use crate::domain::{card_beats, hand_has_color, Card, Color};
use crate::errors::domain::{ActionKind, DomainError};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play was the last one of the trick.
    pub trick_completed: bool,
    /// Winner of the trick, set once it completed.
    pub trick_winner: Option<Seat>,
    /// Seat due to play next within this trick.
    pub next_seat: Seat,
}

/// A card played into a trick by a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedCard {
    pub seat: Seat,
    pub card: Card,
}

/// Summary of a finished trick kept in the match history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTrick {
    /// 1-based trick number within the match.
    pub trick_no: u8,
    pub starting_seat: Seat,
    pub plays: Vec<PlayedCard>,
    pub winning_seat: Seat,
    pub winning_card: Card,
}

impl CompletedTrick {
    /// Card identifiers in play order.
    pub fn card_ids(&self) -> Vec<String> {
        self.plays.iter().map(|p| p.card.to_string()).collect()
    }
}

/// One trick: every seat plays exactly one card, starting at `starting_seat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trick {
    starting_seat: Seat,
    current_seat: Seat,
    num_players: u8,
    plays: Vec<PlayedCard>,
    /// Set by the first colored card; Jesters and Wizards never set it.
    led_suit: Option<Color>,
    /// Running winner (seat, card).
    winner: Option<(Seat, Card)>,
}

impl Trick {
    pub fn new(starting_seat: Seat, num_players: u8) -> Self {
        Self {
            starting_seat,
            current_seat: starting_seat,
            num_players,
            plays: Vec::with_capacity(num_players as usize),
            led_suit: None,
            winner: None,
        }
    }

    pub fn starting_seat(&self) -> Seat {
        self.starting_seat
    }

    pub fn current_seat(&self) -> Seat {
        self.current_seat
    }

    pub fn plays(&self) -> &[PlayedCard] {
        &self.plays
    }

    pub fn led_suit(&self) -> Option<Color> {
        self.led_suit
    }

    /// Provisional winner while open, final winner once complete.
    pub fn winning_seat(&self) -> Option<Seat> {
        self.winner.map(|(seat, _)| seat)
    }

    pub fn winning_card(&self) -> Option<Card> {
        self.winner.map(|(_, card)| card)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.num_players as usize
    }

    /// Summarise a complete trick; `None` while still open.
    pub fn summarize(&self, trick_no: u8) -> Option<CompletedTrick> {
        if !self.is_complete() {
            return None;
        }
        let (winning_seat, winning_card) = self.winner?;
        Some(CompletedTrick {
            trick_no,
            starting_seat: self.starting_seat,
            plays: self.plays.clone(),
            winning_seat,
            winning_card,
        })
    }

    /// Legal cards for `hand` given this trick's led suit.
    pub fn legal_moves(&self, hand: &[Card]) -> Vec<Card> {
        legal_moves(hand, self.led_suit)
    }

    /// Play a card into the trick, enforcing turn order and ownership.
    ///
    /// Suit-following is the caller's responsibility (see `legal_moves`).
    /// Completing the trick credits the winner's `tricks_won`.
    pub fn play(
        &mut self,
        players: &mut [Player],
        seat: Seat,
        card: Card,
        trump: Option<Color>,
    ) -> Result<PlayCardResult, DomainError> {
        if self.is_complete() {
            return Err(DomainError::state("Trick is already complete"));
        }
        if seat != self.current_seat {
            return Err(DomainError::invalid_action(
                ActionKind::OutOfTurn,
                format!("Seat {seat} played but seat {} is due", self.current_seat),
            ));
        }
        let Some(player) = players.get_mut(seat as usize) else {
            return Err(DomainError::invalid_action(
                ActionKind::OutOfTurn,
                format!("Seat {seat} is not at the table"),
            ));
        };
        let Some(pos) = player.hand.iter().position(|&c| c == card) else {
            return Err(DomainError::invalid_action(
                ActionKind::CardNotInHand,
                format!("Card {card} not in hand of seat {seat}"),
            ));
        };
        let card = player.hand.remove(pos);

        if self.led_suit.is_none() {
            self.led_suit = card.color();
        }

        let takes_lead = match self.winner {
            None => true,
            Some((_, best)) => card_beats(card, best, self.led_suit, trump),
        };
        if takes_lead {
            self.winner = Some((seat, card));
        }

        self.plays.push(PlayedCard { seat, card });
        self.current_seat = next_seat(seat, self.num_players);

        let mut result = PlayCardResult {
            trick_completed: false,
            trick_winner: None,
            next_seat: self.current_seat,
        };
        if !self.is_complete() {
            return Ok(result);
        }

        if let Some((winner, _)) = self.winner {
            if let Some(p) = players.get_mut(winner as usize) {
                p.tricks_won += 1;
            }
            result.trick_completed = true;
            result.trick_winner = Some(winner);
        }
        Ok(result)
    }
}

/// Compute legal cards for a hand, independent of turn enforcement.
///
/// With no led suit every card is legal. Holding the led suit restricts the
/// choice to that suit plus any Jester or Wizard; a void hand may play anything.
pub fn legal_moves(hand: &[Card], led: Option<Color>) -> Vec<Card> {
    if let Some(led) = led {
        if hand_has_color(hand, led) {
            let mut v: Vec<Card> = hand
                .iter()
                .copied()
                .filter(|c| c.color() == Some(led) || c.is_special())
                .collect();
            v.sort();
            return v;
        }
    }

    let mut any = hand.to_vec();
    any.sort();
    any
}

/// Resolve the winner of a sequence of plays, in play order.
pub fn resolve_trick(plays: &[PlayedCard], trump: Option<Color>) -> Option<(Seat, Card)> {
    let led = plays.iter().find_map(|p| p.card.color());
    let mut best: Option<(Seat, Card)> = None;
    for &PlayedCard { seat, card } in plays {
        best = match best {
            Some((_, b)) if !card_beats(card, b, led, trump) => best,
            _ => Some((seat, card)),
        };
    }
    best
}
