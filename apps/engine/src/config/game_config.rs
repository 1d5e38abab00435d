//! Match configuration consumed by `Game::init`.
//!
//! Values come from code, JSON, or the `WIZARD_*` environment variables.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{max_tricks, require_player_count, require_tricks_to_play};
use crate::errors::domain::{ConfigKind, DomainError};

pub const ENV_NUM_PLAYERS: &str = "WIZARD_NUM_PLAYERS";
pub const ENV_TRICKS: &str = "WIZARD_TRICKS";
pub const ENV_AGGRESSIVENESS: &str = "WIZARD_AGGRESSIVENESS";
pub const ENV_SEED: &str = "WIZARD_SEED";
pub const ENV_STEP_BACK: &str = "WIZARD_STEP_BACK";

const DEFAULT_PLAYERS: u8 = 4;
const DEFAULT_AGGRESSIVENESS: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub num_players: u8,
    /// Tricks per match; also the hand size.
    pub tricks_to_play: u8,
    /// Weight of the first-seat table when blending forecasts, in [0, 1].
    pub aggressiveness: f64,
    /// Match seed. `None` draws one from process entropy.
    pub seed: Option<u64>,
    /// Record reversible deltas so `Game::step_back` can undo plays.
    pub allow_step_back: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: DEFAULT_PLAYERS,
            tricks_to_play: max_tricks(DEFAULT_PLAYERS),
            aggressiveness: DEFAULT_AGGRESSIVENESS,
            seed: None,
            allow_step_back: false,
        }
    }
}

impl GameConfig {
    /// Config for `num_players` playing the largest possible match.
    pub fn for_players(num_players: u8) -> Self {
        Self {
            num_players,
            tricks_to_play: max_tricks(num_players),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_step_back(mut self, allow: bool) -> Self {
        self.allow_step_back = allow;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_player_count(self.num_players)?;
        require_tricks_to_play(self.num_players, self.tricks_to_play)?;
        if !self.aggressiveness.is_finite() || !(0.0..=1.0).contains(&self.aggressiveness) {
            return Err(DomainError::config(
                ConfigKind::Aggressiveness,
                format!("Aggressiveness {} outside [0, 1]", self.aggressiveness),
            ));
        }
        Ok(())
    }

    /// Read the `WIZARD_*` variables over the defaults and validate.
    ///
    /// When only the player count is given, tricks default to the maximum
    /// for that count.
    pub fn from_env() -> Result<Self, DomainError> {
        let mut config = Self::default();
        if let Some(n) = env_var::<u8>(ENV_NUM_PLAYERS)? {
            config.num_players = n;
            config.tricks_to_play = max_tricks(n);
        }
        if let Some(r) = env_var::<u8>(ENV_TRICKS)? {
            config.tricks_to_play = r;
        }
        if let Some(a) = env_var::<f64>(ENV_AGGRESSIVENESS)? {
            config.aggressiveness = a;
        }
        config.seed = env_var::<u64>(ENV_SEED)?;
        if let Some(flag) = env_var::<String>(ENV_STEP_BACK)? {
            config.allow_step_back = parse_flag(ENV_STEP_BACK, &flag)?;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parse an optional variable; absent or blank means `None`.
fn env_var<T: FromStr>(name: &str) -> Result<Option<T>, DomainError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<T>().map(Some).map_err(|_| {
        DomainError::config(
            ConfigKind::Environment,
            format!("Invalid value for {name}: '{trimmed}'"),
        )
    })
}

fn parse_flag(name: &str, value: &str) -> Result<bool, DomainError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DomainError::config(
            ConfigKind::Environment,
            format!("Invalid value for {name}: '{value}'"),
        )),
    }
}
