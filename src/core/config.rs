//! Game configuration.
//!
//! The surrounding application configures the engine at startup: the symbol
//! set, the star-rating thresholds, and the fixed delays the time-driven
//! callbacks run on. Everything has a default matching the classic 16-card
//! layout, so `GameConfig::default()` is a playable game.

use serde::{Deserialize, Serialize};

use super::symbol::{SymbolRegistry, DEFAULT_SYMBOLS};

/// Default threshold-per-star factor F.
pub const DEFAULT_STAR_FACTOR: u32 = 15;

/// Default number of star slots.
pub const DEFAULT_STAR_SLOTS: u32 = 3;

/// Default delay before a mismatched pair flips back, in milliseconds.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1_500;

/// Default period of the display-refresh tick, in milliseconds.
pub const DEFAULT_TICK_PERIOD_MS: u64 = 1_000;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use concentor::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_star_factor(10)
///     .with_mismatch_delay_ms(800);
///
/// assert_eq!(config.star_slots, 3);
/// assert_eq!(config.deck_size(), 16);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol labels; exactly two cards carry each symbol.
    pub symbols: Vec<String>,

    /// Threshold-per-star factor F: the i-th star (0-indexed from the best
    /// end) is lost once the move count exceeds `F * (star_slots - i)`.
    pub star_factor: u32,

    /// Total star slots.
    pub star_slots: u32,

    /// Delay before a mismatched pair flips back, in milliseconds.
    pub mismatch_delay_ms: u64,

    /// Period of the display-refresh tick, in milliseconds. The tick only
    /// recomputes display values; game-logic state never depends on it.
    pub tick_period_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            star_factor: DEFAULT_STAR_FACTOR,
            star_slots: DEFAULT_STAR_SLOTS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the symbol set.
    ///
    /// Labels must be distinct; the deck holds two cards per label.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the threshold-per-star factor F.
    #[must_use]
    pub fn with_star_factor(mut self, factor: u32) -> Self {
        self.star_factor = factor;
        self
    }

    /// Set the number of star slots.
    #[must_use]
    pub fn with_star_slots(mut self, slots: u32) -> Self {
        self.star_slots = slots;
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, millis: u64) -> Self {
        self.mismatch_delay_ms = millis;
        self
    }

    /// Set the display tick period.
    #[must_use]
    pub fn with_tick_period_ms(mut self, millis: u64) -> Self {
        self.tick_period_ms = millis;
        self
    }

    /// Number of cards a deck built from this configuration holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Build the symbol registry for this configuration.
    ///
    /// Panics if the symbol set is empty or contains duplicates - both are
    /// configuration mistakes, not runtime conditions.
    #[must_use]
    pub fn build_registry(&self) -> SymbolRegistry {
        assert!(!self.symbols.is_empty(), "Symbol set must not be empty");
        SymbolRegistry::from_labels(self.symbols.iter().cloned())
            .expect("Symbol labels must be distinct")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.symbols.len(), 8);
        assert_eq!(config.deck_size(), 16);
        assert_eq!(config.star_factor, 15);
        assert_eq!(config.star_slots, 3);
        assert_eq!(config.mismatch_delay_ms, 1_500);
        assert_eq!(config.tick_period_ms, 1_000);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_symbols(["sun", "moon"])
            .with_star_factor(5)
            .with_star_slots(4)
            .with_mismatch_delay_ms(250)
            .with_tick_period_ms(100);

        assert_eq!(config.deck_size(), 4);
        assert_eq!(config.star_factor, 5);
        assert_eq!(config.star_slots, 4);
        assert_eq!(config.mismatch_delay_ms, 250);
        assert_eq!(config.tick_period_ms, 100);
    }

    #[test]
    fn test_build_registry() {
        let registry = GameConfig::default().build_registry();

        assert_eq!(registry.len(), 8);
        assert!(registry.id_of("anchor").is_some());
    }

    #[test]
    #[should_panic(expected = "Symbol labels must be distinct")]
    fn test_build_registry_rejects_duplicates() {
        let config = GameConfig::new().with_symbols(["sun", "sun"]);
        let _ = config.build_registry();
    }

    #[test]
    #[should_panic(expected = "Symbol set must not be empty")]
    fn test_build_registry_rejects_empty() {
        let config = GameConfig::new().with_symbols(Vec::<String>::new());
        let _ = config.build_registry();
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.symbols, deserialized.symbols);
        assert_eq!(config.star_factor, deserialized.star_factor);
    }
}
