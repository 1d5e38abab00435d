//! Bid forecasting from static per-card win-probability tables.
//!
//! Tables are keyed by player count, then by seat class (first to act or
//! not) and trump presence. Cards of the trump color use a dedicated
//! per-rank table instead.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::MAX_RANK;
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::trump::{TrumpContext, TrumpPresence};
use crate::domain::{Card, Suit};
use crate::errors::domain::{ConfigKind, DomainError};

const RANKS: usize = MAX_RANK as usize;

/// Whether a seat acts first in the match or later.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatClass {
    First,
    Other,
}

impl SeatClass {
    pub fn from_relative_position(position: u8) -> Self {
        if position == 0 {
            SeatClass::First
        } else {
            SeatClass::Other
        }
    }
}

/// Win probability per card kind; `colored[r - 1]` is rank `r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardWinTable {
    pub colored: [f64; RANKS],
    pub jester: f64,
    pub wizard: f64,
}

impl CardWinTable {
    pub fn lookup(&self, card: Card) -> f64 {
        match card.suit() {
            Suit::Jester => self.jester,
            Suit::Wizard => self.wizard,
            _ => card
                .rank()
                .map(|r| self.colored[(r - 1) as usize])
                .unwrap_or_default(),
        }
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.colored
            .iter()
            .copied()
            .chain([self.jester, self.wizard])
    }
}

/// The two trump-presence variants of one seat class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceTables {
    pub trump: CardWinTable,
    pub no_trump: CardWinTable,
}

impl PresenceTables {
    pub fn get(&self, presence: TrumpPresence) -> &CardWinTable {
        match presence {
            TrumpPresence::Trump => &self.trump,
            TrumpPresence::NoTrump => &self.no_trump,
        }
    }
}

/// Every table needed for one player count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCountTables {
    pub first: PresenceTables,
    pub other: PresenceTables,
    /// Win probability of a trump-colored card by rank.
    pub trump_suit: [f64; RANKS],
}

impl PlayerCountTables {
    pub fn seat_table(&self, class: SeatClass, presence: TrumpPresence) -> &CardWinTable {
        match class {
            SeatClass::First => self.first.get(presence),
            SeatClass::Other => self.other.get(presence),
        }
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        [
            &self.first.trump,
            &self.first.no_trump,
            &self.other.trump,
            &self.other.no_trump,
        ]
        .into_iter()
        .flat_map(CardWinTable::values)
        .chain(self.trump_suit.iter().copied())
    }
}

/// Validated forecast tables for every supported player count.
///
/// JSON layout: `{"<players>": {"first": {"trump": .., "no_trump": ..},
/// "other": {..}, "trump_suit": [13 values]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastTables {
    by_players: BTreeMap<u8, PlayerCountTables>,
}

impl ForecastTables {
    pub fn new(by_players: BTreeMap<u8, PlayerCountTables>) -> Result<Self, DomainError> {
        let tables = Self { by_players };
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let tables: Self = serde_json::from_str(json).map_err(|e| {
            DomainError::config(
                ConfigKind::InvalidForecastTable,
                format!("Malformed forecast tables: {e}"),
            )
        })?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::config(
                ConfigKind::InvalidForecastTable,
                format!("Read forecast tables {}: {e}", path.display()),
            )
        })?;
        Self::from_json_str(&json)
    }

    /// Analytic tables for 3 to 6 players.
    ///
    /// A colored card of rank `r` wins roughly when every other seat holds
    /// something lower, giving `((r - 1) / 12)^(P - 1)` for the first seat;
    /// later seats and matches with a trump color are discounted.
    pub fn baseline() -> Self {
        let by_players = (MIN_PLAYERS..=MAX_PLAYERS)
            .map(|n| (n, baseline_for(n)))
            .collect();
        Self { by_players }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.by_players.is_empty() {
            return Err(DomainError::config(
                ConfigKind::InvalidForecastTable,
                "Forecast tables are empty",
            ));
        }
        for (&n, tables) in &self.by_players {
            if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
                return Err(DomainError::config(
                    ConfigKind::InvalidForecastTable,
                    format!("Forecast tables for unsupported player count {n}"),
                ));
            }
            if let Some(bad) = tables
                .values()
                .find(|v| !v.is_finite() || !(0.0..=1.0).contains(v))
            {
                return Err(DomainError::config(
                    ConfigKind::InvalidForecastTable,
                    format!("Probability {bad} out of range for {n} players"),
                ));
            }
        }
        Ok(())
    }

    pub fn player_counts(&self) -> impl Iterator<Item = u8> + '_ {
        self.by_players.keys().copied()
    }

    pub fn for_players(&self, num_players: u8) -> Result<&PlayerCountTables, DomainError> {
        self.by_players.get(&num_players).ok_or_else(|| {
            DomainError::config(
                ConfigKind::MissingForecastTable,
                format!("No forecast tables for {num_players} players"),
            )
        })
    }

    /// Expected number of tricks won by `hand`.
    ///
    /// Seat class comes from `relative_position` (0 is the match's first
    /// seat). With fewer than two tricks the seat-class table is used as is;
    /// otherwise first and other tables are blended with weights
    /// `aggressiveness` and `(P - 1) / P`.
    pub fn estimate(
        &self,
        hand: &[Card],
        relative_position: u8,
        trump: &TrumpContext,
        num_players: u8,
        tricks_to_play: u8,
        aggressiveness: f64,
    ) -> Result<f64, DomainError> {
        let tables = self.for_players(num_players)?;
        let class = SeatClass::from_relative_position(relative_position);
        let presence = trump.presence();
        let first = tables.seat_table(SeatClass::First, presence);
        let other = tables.seat_table(SeatClass::Other, presence);
        let other_weight = f64::from(num_players - 1) / f64::from(num_players);
        let total_weight = aggressiveness + other_weight;

        let expected: f64 = hand
            .iter()
            .map(|&card| {
                if trump.is_trump(card) {
                    return card
                        .rank()
                        .map(|r| tables.trump_suit[(r - 1) as usize])
                        .unwrap_or_default();
                }
                if tricks_to_play < 2 {
                    return tables.seat_table(class, presence).lookup(card);
                }
                (aggressiveness * first.lookup(card) + other_weight * other.lookup(card))
                    / total_weight
            })
            .sum();
        Ok(expected)
    }

    /// The rounded bid for `hand`, capped at `tricks_to_play`.
    pub fn forecast(
        &self,
        hand: &[Card],
        relative_position: u8,
        trump: &TrumpContext,
        num_players: u8,
        tricks_to_play: u8,
        aggressiveness: f64,
    ) -> Result<u8, DomainError> {
        let expected = self.estimate(
            hand,
            relative_position,
            trump,
            num_players,
            tricks_to_play,
            aggressiveness,
        )?;
        Ok((expected.round().max(0.0) as u8).min(tricks_to_play))
    }
}

impl Default for ForecastTables {
    fn default() -> Self {
        Self::baseline()
    }
}

fn baseline_for(num_players: u8) -> PlayerCountTables {
    let top = f64::from(MAX_RANK - 1);
    let beat_all = |rank: usize, opponents: u8| (rank as f64 / top).powi(i32::from(opponents));
    let seat = |factor: f64, wizard: f64| CardWinTable {
        colored: std::array::from_fn(|i| beat_all(i, num_players - 1) * factor),
        jester: 0.0,
        wizard,
    };
    PlayerCountTables {
        first: PresenceTables {
            trump: seat(0.7, 1.0),
            no_trump: seat(1.0, 1.0),
        },
        other: PresenceTables {
            trump: seat(0.85 * 0.7, 0.9),
            no_trump: seat(0.85, 0.9),
        },
        trump_suit: std::array::from_fn(|i| 0.5 + 0.5 * beat_all(i, num_players - 2)),
    }
}
