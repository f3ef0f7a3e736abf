//! # concentor
//!
//! The state-machine core of a memory-matching ("concentor") card game:
//! a shuffled deck of symbol pairs is selected card by card; matching
//! pairs stay revealed, mismatched pairs flip back after a fixed delay,
//! and the game tracks moves, elapsed time, and a star rating until every
//! pair is matched.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: Everything lives in a `GameState` owned by a
//!    `GameEngine` instance, so independent games coexist and unit tests
//!    need no setup beyond a seed.
//!
//! 2. **Time is an input**: Every time-sensitive operation takes an
//!    explicit `Timestamp`. The mismatch flip-back is a deadline recorded
//!    in state, not a live timer, so transition logic is tested without
//!    simulating time.
//!
//! 3. **Rendering stays outside**: The crate exposes statuses, views, and
//!    pure scoring functions; mapping them to markup or styling is the
//!    embedding application's job.
//!
//! ## Modules
//!
//! - `core`: Cards, symbols, state, timestamps, RNG, configuration
//! - `deck`: The paired, shuffled deck
//! - `engine`: Selection, matching, and completion
//! - `scoring`: Star rating and elapsed-time formatting (pure)
//!
//! ## Example
//!
//! ```
//! use concentor::{CardIndex, GameConfig, GameEngine, SelectOutcome, Timestamp};
//!
//! let mut engine = GameEngine::with_seed(GameConfig::default(), 42);
//!
//! // The input adapter translates clicks into select_card calls.
//! let outcome = engine.select_card(CardIndex::new(0), Timestamp::new(0));
//! assert_eq!(outcome, SelectOutcome::Opened(CardIndex::new(0)));
//!
//! // The periodic tick renders the score panel from a snapshot.
//! let board = engine.scoreboard(Timestamp::new(1_000));
//! assert_eq!(board.moves, 0);
//! assert_eq!(board.elapsed, "0:01");
//! ```

pub mod core;
pub mod deck;
pub mod engine;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Card, CardIndex, CardStatus, GameConfig, GameRng, GameRngState, GameState, OutcomeKind,
    PendingResolution, SelectionRecord, SymbolId, SymbolRegistry, Timestamp, DEFAULT_MISMATCH_DELAY_MS,
    DEFAULT_STAR_FACTOR, DEFAULT_STAR_SLOTS, DEFAULT_SYMBOLS, DEFAULT_TICK_PERIOD_MS,
};

pub use crate::deck::Deck;

pub use crate::engine::{GameEngine, SelectOutcome};

pub use crate::scoring::{format_elapsed, star_rating, GameSummary, Scoreboard};
