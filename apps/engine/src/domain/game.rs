//! Match orchestration: deal, bid, play every trick, score.
//!
//! `Game` owns the dealer, the players and the active trick. External
//! callers drive it one card at a time through `step`.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::domain::cards_parsing::cards_to_ids;
use crate::domain::dealing::Dealer;
use crate::domain::forecast::ForecastTables;
use crate::domain::player_view::ObservableState;
use crate::domain::scoring::judge_payoffs;
use crate::domain::snapshot::PerfectInformation;
use crate::domain::state::{relative_position, Phase, Player, Seat};
use crate::domain::tricks::{CompletedTrick, Trick};
use crate::domain::trump::TrumpContext;
use crate::domain::{derive_dealing_seed, derive_table_seed, Card};
use crate::errors::domain::{ActionKind, DomainError};

/// Enough to undo one `step`: the card goes back to its hand slot and the
/// trick is restored; a completed trick also uncredits its winner.
#[derive(Debug, Clone)]
struct StepRecord {
    seat: Seat,
    card: Card,
    hand_pos: usize,
    trick_before: Trick,
    phase_before: Phase,
    credited: Option<Seat>,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    tables: Arc<ForecastTables>,
    seed: u64,
    phase: Phase,
    dealer: Dealer,
    players: Vec<Player>,
    trump: TrumpContext,
    /// Seat that led the first trick.
    starting_seat: Seat,
    current_trick: Trick,
    tricks_completed: u8,
    trick_history: Vec<CompletedTrick>,
    undo_log: Vec<StepRecord>,
}

impl Game {
    /// Validate the configuration and bind forecast tables. No cards are
    /// dealt until `init`.
    pub fn new(config: GameConfig, tables: Arc<ForecastTables>) -> Result<Self, DomainError> {
        config.validate()?;
        tables.for_players(config.num_players)?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let n = config.num_players;
        Ok(Self {
            dealer: Dealer::new(derive_dealing_seed(seed)),
            players: (0..n).map(Player::new).collect(),
            trump: TrumpContext::no_trump(),
            starting_seat: 0,
            current_trick: Trick::new(0, n),
            tricks_completed: 0,
            trick_history: Vec::new(),
            undo_log: Vec::new(),
            phase: Phase::Init,
            config,
            tables,
            seed,
        })
    }

    /// `new` with the analytic baseline tables.
    pub fn with_baseline(config: GameConfig) -> Result<Self, DomainError> {
        Self::new(config, Arc::new(ForecastTables::baseline()))
    }

    /// Deal, reveal trump, pick the starting seat and compute forecasts.
    ///
    /// Calling it again restarts the same match from its seed.
    pub fn init(&mut self) -> Result<(ObservableState, Seat), DomainError> {
        let n = self.config.num_players;
        let r = self.config.tricks_to_play;

        let mut dealer = Dealer::new(derive_dealing_seed(self.seed));
        dealer.shuffle();
        let mut players: Vec<Player> = (0..n).map(Player::new).collect();
        dealer.deal(&mut players, r)?;

        let mut table_rng = ChaCha8Rng::seed_from_u64(derive_table_seed(self.seed));
        let trump = TrumpContext::from_top_card(dealer.reveal_top(), &mut table_rng);
        let starting_seat: Seat = table_rng.random_range(0..n);

        self.phase = Phase::Bidding;
        for player in &mut players {
            let position = relative_position(player.seat, starting_seat, n);
            let bid = self.tables.forecast(
                &player.hand,
                position,
                &trump,
                n,
                r,
                self.config.aggressiveness,
            )?;
            player.forecast = Some(bid);
        }

        debug!(
            seed = self.seed,
            players = n,
            tricks = r,
            top_card = ?trump.top_card.map(|c| c.to_string()),
            trump = ?trump.trump_suit,
            starting_seat,
            "Match initialised"
        );

        self.dealer = dealer;
        self.players = players;
        self.trump = trump;
        self.starting_seat = starting_seat;
        self.current_trick = Trick::new(starting_seat, n);
        self.tricks_completed = 0;
        self.trick_history.clear();
        self.undo_log.clear();
        self.phase = Phase::Playing { trick_no: 1 };

        Ok((self.observe(starting_seat), starting_seat))
    }

    /// Play the card named by `action` for the seat due to act.
    pub fn step(&mut self, action: &str) -> Result<(ObservableState, Seat), DomainError> {
        let card: Card = action.parse()?;
        self.step_card(card)
    }

    pub fn step_card(&mut self, card: Card) -> Result<(ObservableState, Seat), DomainError> {
        let trick_no = match self.phase {
            Phase::Playing { trick_no } => trick_no,
            Phase::Scored => return Err(DomainError::state("Match is over")),
            Phase::Init | Phase::Bidding => {
                return Err(DomainError::state("Match has not been initialised"))
            }
        };
        let seat = self.current_trick.current_seat();
        let Some(player) = self.players.get(seat as usize) else {
            return Err(DomainError::state(format!("Seat {seat} missing")));
        };
        let Some(hand_pos) = player.hand.iter().position(|&c| c == card) else {
            return Err(DomainError::invalid_action(
                ActionKind::CardNotInHand,
                format!("Card {card} not in hand of seat {seat}"),
            ));
        };
        if !self.current_trick.legal_moves(&player.hand).contains(&card) {
            return Err(DomainError::invalid_action(
                ActionKind::MustFollowSuit,
                format!("Seat {seat} must follow {:?}", self.current_trick.led_suit()),
            ));
        }

        let trick_before = self
            .config
            .allow_step_back
            .then(|| self.current_trick.clone());

        let outcome =
            self.current_trick
                .play(&mut self.players, seat, card, self.trump.trump_suit)?;
        trace!(seat, card = %card, trick_no, "Card played");

        if let Some(winner) = outcome.trick_winner {
            if let Some(summary) = self.current_trick.summarize(trick_no) {
                debug!(
                    trick_no,
                    winner,
                    winning_card = %summary.winning_card,
                    "Trick complete"
                );
                self.trick_history.push(summary);
            }
            self.tricks_completed += 1;
            self.current_trick = Trick::new(winner, self.config.num_players);
            if self.tricks_completed < self.config.tricks_to_play {
                self.phase = Phase::Playing {
                    trick_no: trick_no + 1,
                };
            } else {
                self.phase = Phase::Scored;
                debug!(payoffs = ?self.get_payoffs(), "Match over");
            }
        }

        if let Some(trick_before) = trick_before {
            self.undo_log.push(StepRecord {
                seat,
                card,
                hand_pos,
                trick_before,
                phase_before: Phase::Playing { trick_no },
                credited: outcome.trick_winner,
            });
        }

        let next = self.current_seat();
        Ok((self.observe(next), next))
    }

    /// Undo the most recent `step`. `Ok(false)` when nothing is left to undo.
    pub fn step_back(&mut self) -> Result<bool, DomainError> {
        if !self.config.allow_step_back {
            return Err(DomainError::state("Step-back is disabled for this match"));
        }
        let Some(record) = self.undo_log.pop() else {
            return Ok(false);
        };

        if let Some(winner) = record.credited {
            if let Some(p) = self.players.get_mut(winner as usize) {
                p.tricks_won = p.tricks_won.saturating_sub(1);
            }
            self.trick_history.pop();
            self.tricks_completed = self.tricks_completed.saturating_sub(1);
        }
        if let Some(p) = self.players.get_mut(record.seat as usize) {
            p.hand.insert(record.hand_pos, record.card);
        }
        self.current_trick = record.trick_before;
        self.phase = record.phase_before;

        debug!(seat = record.seat, card = %record.card, "Stepped back");
        Ok(true)
    }

    /// Legal cards for `seat` against the current trick; empty outside play.
    pub fn legal_actions(&self, seat: Seat) -> Vec<Card> {
        if !matches!(self.phase, Phase::Playing { .. }) {
            return Vec::new();
        }
        self.players
            .get(seat as usize)
            .map(|p| self.current_trick.legal_moves(&p.hand))
            .unwrap_or_default()
    }

    pub fn legal_action_ids(&self, seat: Seat) -> Vec<String> {
        cards_to_ids(&self.legal_actions(seat))
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Scored
    }

    /// Rewards in seat order. Provisional until `is_over()`.
    pub fn get_payoffs(&self) -> Vec<i32> {
        judge_payoffs(&self.players)
    }

    /// What `seat` can see. An unknown seat gets an empty hand.
    pub fn observe(&self, seat: Seat) -> ObservableState {
        ObservableState::from_game(self, seat)
    }

    pub fn perfect_information(&self) -> PerfectInformation {
        PerfectInformation::from_game(self)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The resolved match seed, drawn from entropy when none was configured.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn num_players(&self) -> u8 {
        self.config.num_players
    }

    pub fn tricks_to_play(&self) -> u8 {
        self.config.tricks_to_play
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn trump(&self) -> &TrumpContext {
        &self.trump
    }

    pub fn starting_seat(&self) -> Seat {
        self.starting_seat
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn current_seat(&self) -> Seat {
        self.current_trick.current_seat()
    }

    /// 1-based number of the trick in play; `tricks_to_play` once over.
    pub fn trick_no(&self) -> u8 {
        match self.phase {
            Phase::Playing { trick_no } => trick_no,
            Phase::Scored => self.config.tricks_to_play,
            Phase::Init | Phase::Bidding => 0,
        }
    }

    pub fn tricks_completed(&self) -> u8 {
        self.tricks_completed
    }

    pub fn trick_history(&self) -> &[CompletedTrick] {
        &self.trick_history
    }

    pub fn last_trick_winner(&self) -> Option<Seat> {
        self.trick_history.last().map(|t| t.winning_seat)
    }

    pub fn deck_remaining(&self) -> usize {
        self.dealer.remaining()
    }
}
