//! Card identification and per-card status.
//!
//! Every card in the deck has a stable `CardIndex` (its position in the
//! dealt layout, 0-based) and a `CardStatus` tracking where it is in the
//! reveal lifecycle.
//!
//! ## Status lifecycle
//!
//! ```text
//! Hidden -> Open     (valid selection)
//! Open   -> Matched  (successful pair resolution, terminal until restart)
//! Open   -> Hidden   (failed pair resolution, after the mismatch delay)
//! ```

use serde::{Deserialize, Serialize};

use super::symbol::SymbolId;

/// Stable identifier for a card in the dealt layout.
///
/// Indices are 0-based positions in the deck and never change while a game
/// is running; a restart deals a fresh deck but keeps the same index range.
///
/// ```
/// use concentor::core::CardIndex;
///
/// let card = CardIndex::new(5);
/// assert_eq!(card.raw(), 5);
/// assert_eq!(card.index(), 5usize);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u8);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the index as a `usize` for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all card indices for a deck of `deck_size` cards.
    ///
    /// ```
    /// use concentor::core::CardIndex;
    ///
    /// let cards: Vec<_> = CardIndex::all(16).collect();
    /// assert_eq!(cards.len(), 16);
    /// assert_eq!(cards[0], CardIndex::new(0));
    /// assert_eq!(cards[15], CardIndex::new(15));
    /// ```
    pub fn all(deck_size: usize) -> impl Iterator<Item = CardIndex> {
        (0..deck_size as u8).map(CardIndex)
    }
}

impl From<u8> for CardIndex {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Reveal status of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face-down, selectable.
    #[default]
    Hidden,
    /// Face-up, awaiting pair resolution.
    Open,
    /// Permanently revealed after a successful match.
    Matched,
}

/// A card in a dealt deck: identity, symbol, and reveal status.
///
/// The symbol is assigned at deal time and never changes; only the status
/// moves through the reveal lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position in the dealt layout.
    pub index: CardIndex,

    /// The symbol this card shows when revealed.
    pub symbol: SymbolId,

    /// Current reveal status.
    pub status: CardStatus,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(index: CardIndex, symbol: SymbolId) -> Self {
        Self {
            index,
            symbol,
            status: CardStatus::Hidden,
        }
    }

    /// Check if the card is face-down.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    /// Check if the card is face-up awaiting resolution.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == CardStatus::Open
    }

    /// Check if the card has been matched.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index_basics() {
        let c = CardIndex::new(7);
        assert_eq!(c.raw(), 7);
        assert_eq!(c.index(), 7);
        assert_eq!(format!("{}", c), "Card(7)");
    }

    #[test]
    fn test_card_index_all() {
        let cards: Vec<_> = CardIndex::all(4).collect();
        assert_eq!(cards, vec![
            CardIndex::new(0),
            CardIndex::new(1),
            CardIndex::new(2),
            CardIndex::new(3),
        ]);
    }

    #[test]
    fn test_card_index_from_u8() {
        let c: CardIndex = 3u8.into();
        assert_eq!(c, CardIndex::new(3));
    }

    #[test]
    fn test_status_default_is_hidden() {
        assert_eq!(CardStatus::default(), CardStatus::Hidden);
    }

    #[test]
    fn test_card_new_is_hidden() {
        let card = Card::new(CardIndex::new(0), SymbolId::new(3));
        assert!(card.is_hidden());
        assert!(!card.is_open());
        assert!(!card.is_matched());
        assert_eq!(card.symbol, SymbolId::new(3));
    }

    #[test]
    fn test_card_status_predicates() {
        let mut card = Card::new(CardIndex::new(1), SymbolId::new(0));

        card.status = CardStatus::Open;
        assert!(card.is_open());
        assert!(!card.is_hidden());

        card.status = CardStatus::Matched;
        assert!(card.is_matched());
        assert!(!card.is_open());
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardIndex::new(2), SymbolId::new(5));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
