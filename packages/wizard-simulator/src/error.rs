use thiserror::Error;
use wizard_engine::{DomainError, Seat};

use crate::agents::AgentError;

/// Errors that can occur during simulation.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("agent error (seat {0}): {1}")]
    Agent(Seat, AgentError),
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
