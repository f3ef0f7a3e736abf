//! The paired deck.
//!
//! A `Deck` is an ordered sequence of cards built from a symbol registry:
//! every registered symbol appears on exactly two cards, and the layout is
//! shuffled uniformly at deal time. The pairing invariant is the one thing
//! this module owes the rest of the crate - `pairing_holds` verifies it and
//! the engine debug-asserts it after every deal.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardIndex, CardStatus, GameRng, SymbolId, SymbolRegistry};

/// An ordered, shuffled sequence of paired cards.
///
/// ## Example
///
/// ```
/// use concentor::core::{GameRng, SymbolRegistry};
/// use concentor::deck::Deck;
///
/// let registry = SymbolRegistry::default_set();
/// let mut rng = GameRng::new(42);
/// let deck = Deck::deal(&registry, &mut rng);
///
/// assert_eq!(deck.len(), 16);
/// assert!(deck.pairing_holds());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a fresh face-down deck: two cards per registered symbol,
    /// shuffled uniformly.
    #[must_use]
    pub fn deal(registry: &SymbolRegistry, rng: &mut GameRng) -> Self {
        // Each symbol twice to make pairs, then shuffle the layout.
        let mut symbols: Vec<SymbolId> = Vec::with_capacity(registry.len() * 2);
        for id in registry.ids() {
            symbols.push(id);
            symbols.push(id);
        }
        rng.shuffle(&mut symbols);

        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardIndex::new(i as u8), symbol))
            .collect();

        Self { cards }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of symbol pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.index())
    }

    /// Get a mutable card by index.
    pub(crate) fn card_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        self.cards.get_mut(index.index())
    }

    /// Get a card's symbol.
    #[must_use]
    pub fn symbol(&self, index: CardIndex) -> Option<SymbolId> {
        self.card(index).map(|c| c.symbol)
    }

    /// Get a card's status.
    #[must_use]
    pub fn status(&self, index: CardIndex) -> Option<CardStatus> {
        self.card(index).map(|c| c.status)
    }

    /// Iterate over the cards in layout order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate over all card indices.
    pub fn indices(&self) -> impl Iterator<Item = CardIndex> {
        CardIndex::all(self.cards.len())
    }

    /// Check the pairing invariant: every symbol appears exactly twice.
    #[must_use]
    pub fn pairing_holds(&self) -> bool {
        let mut counts: FxHashMap<SymbolId, u32> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts.len() * 2 == self.cards.len() && counts.values().all(|&n| n == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_deck(seed: u64) -> Deck {
        let registry = SymbolRegistry::default_set();
        let mut rng = GameRng::new(seed);
        Deck::deal(&registry, &mut rng)
    }

    #[test]
    fn test_deal_sizes() {
        let deck = test_deck(42);

        assert_eq!(deck.len(), 16);
        assert_eq!(deck.pair_count(), 8);
        assert!(!deck.is_empty());
    }

    #[test]
    fn test_deal_is_face_down() {
        let deck = test_deck(42);
        assert!(deck.iter().all(Card::is_hidden));
    }

    #[test]
    fn test_pairing_invariant() {
        for seed in 0..20 {
            assert!(test_deck(seed).pairing_holds(), "seed {}", seed);
        }
    }

    #[test]
    fn test_deal_deterministic() {
        assert_eq!(test_deck(42), test_deck(42));
    }

    #[test]
    fn test_different_seeds_differ() {
        // Two seeds agreeing on all 16 positions would be a broken shuffle.
        assert_ne!(test_deck(1), test_deck(2));
    }

    #[test]
    fn test_card_lookup() {
        let deck = test_deck(42);

        let card = deck.card(CardIndex::new(0)).unwrap();
        assert_eq!(card.index, CardIndex::new(0));
        assert_eq!(deck.symbol(CardIndex::new(0)), Some(card.symbol));
        assert_eq!(deck.status(CardIndex::new(0)), Some(CardStatus::Hidden));

        assert!(deck.card(CardIndex::new(16)).is_none());
        assert!(deck.symbol(CardIndex::new(255)).is_none());
    }

    #[test]
    fn test_indices() {
        let deck = test_deck(42);
        let indices: Vec<_> = deck.indices().collect();

        assert_eq!(indices.len(), 16);
        assert_eq!(indices[0], CardIndex::new(0));
        assert_eq!(indices[15], CardIndex::new(15));
    }

    #[test]
    fn test_deck_serde() {
        let deck = test_deck(42);
        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: Deck = serde_json::from_str(&json).unwrap();

        assert_eq!(deck, deserialized);
    }
}
