//! Per-match metrics for JSON and CSV output.

use serde::Serialize;
use wizard_engine::{Color, CompletedTrick, Seat};

use crate::simulator::MatchResult;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: MatchResultMetrics,
    pub trump: TrumpMetrics,
    pub players: Vec<PlayerMetrics>,
    pub tricks: Vec<CompletedTrick>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub num_players: u8,
    pub tricks_to_play: u8,
    pub aggressiveness: f64,
    pub agents: Vec<String>,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub payoffs: Vec<i32>,
    /// Highest payoff; ties go to the lowest seat.
    pub best_seat: Seat,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrumpMetrics {
    pub top_card: Option<String>,
    pub trump_suit: Option<Color>,
    pub starting_seat: Seat,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: Seat,
    pub agent: String,
    pub forecast: u8,
    pub tricks_won: u8,
    pub payoff: i32,
    pub exact: bool,
    /// Tricks beyond the forecast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underbid: Option<u8>,
    /// Tricks short of the forecast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overbid: Option<u8>,
}

pub fn build_match_metrics(
    match_id: u32,
    config: RunConfig,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let players = result
        .forecasts
        .iter()
        .zip(&result.tricks_won)
        .zip(&result.payoffs)
        .enumerate()
        .map(|(seat, ((&forecast, &tricks), &payoff))| PlayerMetrics {
            seat: seat as Seat,
            agent: config.agents.get(seat).cloned().unwrap_or_default(),
            forecast,
            tricks_won: tricks,
            payoff,
            exact: forecast == tricks,
            underbid: (tricks > forecast).then(|| tricks - forecast),
            overbid: (tricks < forecast).then(|| forecast - tricks),
        })
        .collect();

    MatchMetrics {
        match_id,
        seed: result.seed,
        timestamp,
        result: MatchResultMetrics {
            payoffs: result.payoffs.clone(),
            best_seat: best_seat(&result.payoffs),
            duration_ms,
        },
        trump: TrumpMetrics {
            top_card: result.top_card.map(|c| c.to_string()),
            trump_suit: result.trump_suit,
            starting_seat: result.starting_seat,
        },
        players,
        tricks: result.tricks.clone(),
        config,
    }
}

fn best_seat(payoffs: &[i32]) -> Seat {
    let mut best = 0usize;
    for (seat, &p) in payoffs.iter().enumerate() {
        if p > payoffs[best] {
            best = seat;
        }
    }
    best as Seat
}

/// CSV summary row for quick analysis; per-seat lists are `;`-joined.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub num_players: u8,
    pub tricks_to_play: u8,
    pub trump_suit: String,
    pub best_seat: Seat,
    pub forecasts: String,
    pub tricks_won: String,
    pub payoffs: String,
    pub agents: String,
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        CsvSummaryRow {
            match_id: metrics.match_id,
            seed: metrics.seed,
            num_players: metrics.config.num_players,
            tricks_to_play: metrics.config.tricks_to_play,
            trump_suit: metrics
                .trump
                .trump_suit
                .map(|c| format!("{c:?}"))
                .unwrap_or_else(|| "none".to_string()),
            best_seat: metrics.result.best_seat,
            forecasts: join(metrics.players.iter().map(|p| p.forecast)),
            tricks_won: join(metrics.players.iter().map(|p| p.tricks_won)),
            payoffs: join(metrics.players.iter().map(|p| p.payoff)),
            agents: join(metrics.players.iter().map(|p| p.agent.as_str())),
        }
    }
}
