//! Core engine types: cards, symbols, state, timing, RNG, configuration.
//!
//! This module contains the building blocks the engine is assembled from.
//! The surrounding application configures them via `GameConfig` rather
//! than modifying the core.

pub mod card;
pub mod clock;
pub mod config;
pub mod rng;
pub mod state;
pub mod symbol;

pub use card::{Card, CardIndex, CardStatus};
pub use clock::Timestamp;
pub use config::{
    GameConfig, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_STAR_FACTOR, DEFAULT_STAR_SLOTS,
    DEFAULT_TICK_PERIOD_MS,
};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, OutcomeKind, PendingResolution, SelectionRecord};
pub use symbol::{SymbolId, SymbolRegistry, DEFAULT_SYMBOLS};
