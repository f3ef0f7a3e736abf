//! The game engine: selection, matching, and completion.
//!
//! `GameEngine` owns a `GameState` and reacts synchronously to discrete
//! inputs:
//!
//! - `select_card` - the input adapter's click dispatch
//! - `resolve_due` - the one-shot delayed callback that closes a mismatch
//! - `scoreboard` - the periodic display tick (read-only)
//! - `restart` - replaces the state wholesale, cancelling anything pending
//!
//! Time enters as explicit `Timestamp` values; the engine never reads a
//! clock. The match/mismatch decision is made synchronously when the
//! second card of a pair opens - only the flip-back of a mismatch is
//! deferred, recorded as a deadline in the state rather than a live timer.
//!
//! ## Selection rules
//!
//! A selection is ignored when the game is complete, the index is out of
//! range, the card is already `Open` or `Matched`, or a mismatched pair is
//! still waiting on its deadline. The last rule means a third card cannot
//! be opened mid-resolution; once the deadline passes the pair closes
//! (either via the delayed callback or defensively at the next selection)
//! and play resumes.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{
    CardIndex, CardStatus, GameConfig, GameRng, GameState, OutcomeKind, SelectionRecord,
    SymbolRegistry, Timestamp,
};
use crate::deck::Deck;
use crate::scoring::{format_elapsed, star_rating, GameSummary, Scoreboard};

/// What a `select_card` call did.
///
/// The input adapter drives rendering off this - and, on `Mismatched`,
/// schedules the one-shot callback that will call `resolve_due` at
/// `resolve_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The selection was a no-op; state is unchanged.
    Ignored,

    /// The card opened as the first of a pair.
    Opened(CardIndex),

    /// The pair matched; both cards are now permanently revealed.
    Matched([CardIndex; 2]),

    /// The pair mismatched; both cards flip back at `resolve_at`.
    Mismatched {
        /// The two unresolved cards.
        pair: [CardIndex; 2],
        /// When `resolve_due` should run.
        resolve_at: Timestamp,
    },

    /// The pair matched and completed the game.
    Completed(GameSummary),
}

/// Engine for one memory-matching game.
///
/// ## Example
///
/// ```
/// use concentor::core::{CardIndex, GameConfig, Timestamp};
/// use concentor::engine::GameEngine;
///
/// let mut engine = GameEngine::with_seed(GameConfig::default(), 42);
/// let outcome = engine.select_card(CardIndex::new(0), Timestamp::new(0));
///
/// assert_eq!(outcome, concentor::engine::SelectOutcome::Opened(CardIndex::new(0)));
/// assert_eq!(engine.moves(), 0); // moves count pair evaluations, not clicks
/// ```
pub struct GameEngine {
    config: GameConfig,
    registry: SymbolRegistry,
    rng: GameRng,
    state: GameState,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameEngine {
    /// Create an engine with an entropy-seeded shuffle.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an engine with a fixed seed (reproducible deal).
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        let registry = config.build_registry();
        let deck = Deck::deal(&registry, &mut rng);
        debug_assert!(deck.pairing_holds());

        Self {
            config,
            registry,
            rng,
            state: GameState::new(deck),
        }
    }

    // === Accessors ===

    /// The game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The symbol registry.
    #[must_use]
    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The seed behind the current shuffle sequence.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Completed pair evaluations so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.state.moves()
    }

    /// Check if every pair has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Get a card's status.
    #[must_use]
    pub fn status(&self, index: CardIndex) -> Option<CardStatus> {
        self.state.status(index)
    }

    /// Get the symbol label a card shows when revealed.
    #[must_use]
    pub fn symbol_label(&self, index: CardIndex) -> Option<&str> {
        let symbol = self.state.deck().symbol(index)?;
        self.registry.label(symbol)
    }

    // === Operations ===

    /// Restart the game: reshuffle the deck, clear the open and matched
    /// sets, reset the move counter, and stop the clock.
    ///
    /// The old state is discarded wholesale, which also cancels any pending
    /// mismatch resolution - a delayed callback scheduled before the
    /// restart finds nothing to close.
    pub fn restart(&mut self) {
        let deck = Deck::deal(&self.registry, &mut self.rng);
        debug_assert!(deck.pairing_holds());
        self.state = GameState::new(deck);
        info!("game restarted ({} cards)", self.state.deck().len());
    }

    /// Select a card at `now`.
    ///
    /// No-op cases return `SelectOutcome::Ignored`: the game is complete,
    /// `index` is out of range, the card is already `Open` or `Matched`, or
    /// an unresolved mismatch is still waiting on its deadline. A pending
    /// mismatch whose deadline has already passed is closed first, so a
    /// late delayed callback cannot wedge the game.
    pub fn select_card(&mut self, index: CardIndex, now: Timestamp) -> SelectOutcome {
        self.resolve_due(now);

        if self.state.is_complete() {
            return SelectOutcome::Ignored;
        }
        if self.state.pending().is_some() {
            // Unresolved pair still on the table; the third card waits.
            return SelectOutcome::Ignored;
        }
        match self.state.status(index) {
            Some(CardStatus::Hidden) => {}
            _ => return SelectOutcome::Ignored,
        }

        self.state.begin_clock(now);
        self.state.mark_open(index);
        let symbol = self
            .state
            .deck()
            .symbol(index)
            .expect("opened card has a symbol");

        let open = self.state.open_indices();
        if open.len() < 2 {
            self.state.record(SelectionRecord {
                card: index,
                symbol,
                move_number: self.state.moves(),
                kind: OutcomeKind::Opened,
            });
            debug!("opened {}", index);
            return SelectOutcome::Opened(index);
        }

        // Second card of the pair: evaluate now.
        let pair = [open[0], open[1]];
        let moves = self.state.bump_moves();
        let first_symbol = self
            .state
            .deck()
            .symbol(pair[0])
            .expect("open card has a symbol");

        if first_symbol == symbol {
            let Some(pair) = self.state.resolve_match() else {
                return SelectOutcome::Ignored;
            };
            self.state.record(SelectionRecord {
                card: index,
                symbol,
                move_number: moves,
                kind: OutcomeKind::Matched,
            });
            debug!("matched {} and {} on move {}", pair[0], pair[1], moves);

            if self.state.is_complete() {
                self.state.stop_clock(now);
                let summary = self.summary().expect("game just completed");
                info!(
                    "game complete: {} moves, {} stars, {}",
                    summary.moves, summary.stars, summary.elapsed
                );
                return SelectOutcome::Completed(summary);
            }
            SelectOutcome::Matched(pair)
        } else {
            let deadline = now.offset(self.config.mismatch_delay_ms);
            let Some(pending) = self.state.defer_mismatch(deadline) else {
                return SelectOutcome::Ignored;
            };
            self.state.record(SelectionRecord {
                card: index,
                symbol,
                move_number: moves,
                kind: OutcomeKind::Mismatched,
            });
            debug!(
                "mismatched {} and {} on move {}",
                pending.pair[0], pending.pair[1], moves
            );
            SelectOutcome::Mismatched {
                pair: pending.pair,
                resolve_at: pending.deadline,
            }
        }
    }

    /// Close a pending mismatch whose deadline has passed.
    ///
    /// The target of the one-shot delayed callback. Returns `true` if a
    /// pair flipped back; `false` if nothing was pending or the deadline
    /// has not arrived.
    pub fn resolve_due(&mut self, now: Timestamp) -> bool {
        let Some(pending) = self.state.pending() else {
            return false;
        };
        if now < pending.deadline {
            return false;
        }

        let closed = self.state.close_pending().is_some();
        if closed {
            debug!("mismatch flipped back");
        }
        closed
    }

    /// Display snapshot for the score panel at `now`.
    ///
    /// Read-only: the periodic tick calls this without touching game-logic
    /// state. Once the game completes, the elapsed time freezes at the
    /// completion timestamp.
    #[must_use]
    pub fn scoreboard(&self, now: Timestamp) -> Scoreboard {
        let end = self.state.completed_at().unwrap_or(now);
        Scoreboard {
            moves: self.state.moves(),
            stars: star_rating(
                self.state.moves(),
                self.config.star_factor,
                self.config.star_slots,
            ),
            elapsed: format_elapsed(self.state.started_at(), end),
        }
    }

    /// End-of-game summary, once the game is complete.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        let completed_at = self.state.completed_at()?;
        Some(GameSummary {
            moves: self.state.moves(),
            stars: star_rating(
                self.state.moves(),
                self.config.star_factor,
                self.config.star_slots,
            ),
            elapsed: format_elapsed(self.state.started_at(), completed_at),
        })
    }
}
