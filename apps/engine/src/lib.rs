#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{
    ActionSpace, Card, Color, CompletedTrick, ForecastTables, Game, ObservableState,
    PerfectInformation, Phase, PlayedCard, Seat, Suit, TrumpContext,
};
pub use errors::{ActionKind, ConfigKind, DomainError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
