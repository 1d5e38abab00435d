//! In-memory match runner: drives `Game` with one agent per seat.

use std::sync::Arc;

use tracing::trace;
use wizard_engine::domain::derive_match_seed;
use wizard_engine::{Card, Color, CompletedTrick, ForecastTables, Game, GameConfig, Seat};

use crate::agents::Agent;
use crate::error::SimulatorError;

/// Result of simulating one match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub seed: u64,
    pub starting_seat: Seat,
    pub top_card: Option<Card>,
    pub trump_suit: Option<Color>,
    pub forecasts: Vec<u8>,
    pub tricks_won: Vec<u8>,
    pub payoffs: Vec<i32>,
    pub tricks: Vec<CompletedTrick>,
}

/// Plays matches sharing one configuration and one set of forecast tables.
pub struct Simulator {
    config: GameConfig,
    tables: Arc<ForecastTables>,
}

impl Simulator {
    pub fn new(config: GameConfig, tables: Arc<ForecastTables>) -> Result<Self, SimulatorError> {
        config.validate()?;
        tables.for_players(config.num_players)?;
        Ok(Self { config, tables })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed for match `match_no`: derived from the run seed when one is
    /// configured, fresh entropy otherwise.
    pub fn match_seed(&self, match_no: u32) -> u64 {
        match self.config.seed {
            Some(run_seed) => derive_match_seed(run_seed, match_no),
            None => rand::random(),
        }
    }

    pub fn simulate_match(
        &self,
        match_no: u32,
        agents: &[Box<dyn Agent>],
    ) -> Result<MatchResult, SimulatorError> {
        let n = usize::from(self.config.num_players);
        if agents.len() != n {
            return Err(SimulatorError::InvalidArgs(format!(
                "{} agents for {n} seats",
                agents.len()
            )));
        }

        let seed = self.match_seed(match_no);
        let config = GameConfig {
            seed: Some(seed),
            ..self.config.clone()
        };
        let mut game = Game::new(config, Arc::clone(&self.tables))?;
        let (mut state, mut seat) = game.init()?;

        while !game.is_over() {
            let agent = &agents[usize::from(seat)];
            let card = agent
                .choose_card(&state)
                .map_err(|e| SimulatorError::Agent(seat, e))?;
            trace!(match_no, seat, agent = agent.name(), card = %card, "Agent played");
            (state, seat) = game.step_card(card)?;
        }

        Ok(MatchResult {
            seed,
            starting_seat: game.starting_seat(),
            top_card: game.trump().top_card,
            trump_suit: game.trump().trump_suit,
            forecasts: game
                .players()
                .iter()
                .map(|p| p.forecast.unwrap_or_default())
                .collect(),
            tricks_won: game.players().iter().map(|p| p.tricks_won).collect(),
            payoffs: game.get_payoffs(),
            tricks: game.trick_history().to_vec(),
        })
    }
}
