//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per match, appended as it finishes.
    Jsonl,
    /// A single JSON array written when the run ends.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentType {
    Random,
    Greedy,
}

impl AgentType {
    pub fn name(&self) -> &'static str {
        match self {
            AgentType::Random => "RandomAgent",
            AgentType::Greedy => "GreedyAgent",
        }
    }
}
