//! Card-choosing policies that drive a match from the outside.
//!
//! Agents only ever see an [`ObservableState`] and must answer with one of
//! its `legal_actions`.

use std::sync::Mutex;

use rand::prelude::*;
use thiserror::Error;
use wizard_engine::domain::compare_rank;
use wizard_engine::{Card, ObservableState};

use crate::types::AgentType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("no legal actions available")]
    NoLegalActions,
    #[error("agent internal error: {0}")]
    Internal(String),
}

pub trait Agent: Send + Sync {
    fn name(&self) -> &'static str;

    /// Pick a card from `state.legal_actions`.
    fn choose_card(&self, state: &ObservableState) -> Result<Card, AgentError>;
}

/// Uniform choice over legal cards.
pub struct RandomAgent {
    rng: Mutex<StdRng>,
}

impl RandomAgent {
    pub const NAME: &'static str = "RandomAgent";

    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_card(&self, state: &ObservableState) -> Result<Card, AgentError> {
        if state.legal_actions.is_empty() {
            return Err(AgentError::NoLegalActions);
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AgentError::Internal(format!("RNG lock poisoned: {e}")))?;
        state
            .legal_actions
            .choose(&mut *rng)
            .copied()
            .ok_or(AgentError::NoLegalActions)
    }
}

/// Plays its strongest legal card while short of its forecast, its weakest
/// once the forecast is met.
pub struct GreedyAgent;

impl GreedyAgent {
    pub const NAME: &'static str = "GreedyAgent";
}

impl Agent for GreedyAgent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_card(&self, state: &ObservableState) -> Result<Card, AgentError> {
        let legal = state.legal_actions.iter().copied();
        let wants_tricks = state.tricks_won < state.forecast.unwrap_or(0);
        let pick = if wants_tricks {
            legal.max_by(|a, b| compare_rank(*a, *b))
        } else {
            legal.min_by(|a, b| compare_rank(*a, *b))
        };
        pick.ok_or(AgentError::NoLegalActions)
    }
}

/// Build one agent per seat; seeded agents get distinct seeds per seat.
pub fn create_agents(types: &[AgentType], seed: Option<u64>) -> Vec<Box<dyn Agent>> {
    types
        .iter()
        .enumerate()
        .map(|(seat, kind)| -> Box<dyn Agent> {
            match kind {
                AgentType::Random => {
                    Box::new(RandomAgent::new(seed.map(|s| s.wrapping_add(seat as u64))))
                }
                AgentType::Greedy => Box::new(GreedyAgent),
            }
        })
        .collect()
}
