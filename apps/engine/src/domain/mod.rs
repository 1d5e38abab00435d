//! Domain layer: pure game logic types and helpers.

pub mod action_space;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod forecast;
pub mod game;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_step_back;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use action_space::ActionSpace;
pub use cards_logic::{card_beats, card_value, compare_rank, hand_has_color};
pub use cards_parsing::{cards_to_ids, try_parse_cards};
pub use cards_types::{Card, Color, Suit};
pub use dealing::{full_deck, Dealer};
pub use forecast::{ForecastTables, SeatClass};
pub use game::Game;
pub use player_view::ObservableState;
pub use rules::{max_tricks, valid_tricks_range, DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS};
pub use scoring::{accumulate, judge_payoffs, score};
pub use seed_derivation::{derive_dealing_seed, derive_match_seed, derive_table_seed};
pub use snapshot::PerfectInformation;
pub use state::{Phase, Player, Seat};
pub use tricks::{legal_moves, resolve_trick, CompletedTrick, PlayedCard, Trick};
pub use trump::{TrumpContext, TrumpPresence};
