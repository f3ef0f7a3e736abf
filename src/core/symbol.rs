//! Symbol identifiers and the symbol registry.
//!
//! A deck is built from a set of distinct symbol labels, each appearing on
//! exactly two cards. The engine never interprets labels - matching is a
//! plain `SymbolId` equality check, independent of any rendering
//! representation. Labels exist so the render adapter can map a card to an
//! icon.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The default symbol labels, eight distinct icon names.
pub const DEFAULT_SYMBOLS: [&str; 8] = [
    "anchor",
    "bicycle",
    "bolt",
    "bomb",
    "cube",
    "diamond",
    "leaf",
    "paper-plane-o",
];

/// Identifier for a symbol in the registry.
///
/// Two cards match exactly when their `SymbolId`s are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Registry of symbol labels, assigning each a stable `SymbolId`.
///
/// IDs are allocated in registration order starting at 0. Duplicate labels
/// are rejected at registration - the pairing invariant of the deck depends
/// on every label being distinct.
///
/// ## Example
///
/// ```
/// use concentor::core::{SymbolId, SymbolRegistry};
///
/// let mut registry = SymbolRegistry::new();
/// let anchor = registry.register("anchor").unwrap();
/// let bolt = registry.register("bolt").unwrap();
///
/// assert_eq!(anchor, SymbolId::new(0));
/// assert_eq!(bolt, SymbolId::new(1));
/// assert_eq!(registry.label(anchor), Some("anchor"));
/// assert_eq!(registry.id_of("bolt"), Some(bolt));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolRegistry {
    /// Labels in registration order; index = SymbolId.
    labels: Vec<String>,

    /// Reverse lookup: label -> id.
    by_label: FxHashMap<String, SymbolId>,
}

impl SymbolRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the default eight symbols.
    #[must_use]
    pub fn default_set() -> Self {
        Self::from_labels(DEFAULT_SYMBOLS).expect("default symbols are distinct")
    }

    /// Build a registry from an ordered list of labels.
    ///
    /// Returns `None` if any label is duplicated.
    pub fn from_labels<I, S>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for label in labels {
            registry.register(label)?;
        }
        Some(registry)
    }

    /// Register a label, returning its assigned ID.
    ///
    /// Returns `None` if the label is already registered.
    pub fn register(&mut self, label: impl Into<String>) -> Option<SymbolId> {
        let label = label.into();
        if self.by_label.contains_key(&label) {
            return None;
        }

        let id = SymbolId::new(self.labels.len() as u8);
        self.by_label.insert(label.clone(), id);
        self.labels.push(label);
        Some(id)
    }

    /// Get the label for a symbol ID.
    #[must_use]
    pub fn label(&self, id: SymbolId) -> Option<&str> {
        self.labels.get(id.raw() as usize).map(String::as_str)
    }

    /// Look up the ID for a label.
    #[must_use]
    pub fn id_of(&self, label: &str) -> Option<SymbolId> {
        self.by_label.get(label).copied()
    }

    /// Number of registered symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over (id, label) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (SymbolId::new(i as u8), label.as_str()))
    }

    /// Iterate over all symbol IDs.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> {
        (0..self.labels.len() as u8).map(SymbolId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_id_basics() {
        let id = SymbolId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(format!("{}", id), "Symbol(3)");
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = SymbolRegistry::new();

        assert_eq!(registry.register("anchor"), Some(SymbolId::new(0)));
        assert_eq!(registry.register("bolt"), Some(SymbolId::new(1)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = SymbolRegistry::new();

        assert!(registry.register("anchor").is_some());
        assert_eq!(registry.register("anchor"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_label_and_id_of() {
        let registry = SymbolRegistry::from_labels(["leaf", "cube"]).unwrap();

        assert_eq!(registry.label(SymbolId::new(0)), Some("leaf"));
        assert_eq!(registry.label(SymbolId::new(1)), Some("cube"));
        assert_eq!(registry.label(SymbolId::new(2)), None);

        assert_eq!(registry.id_of("cube"), Some(SymbolId::new(1)));
        assert_eq!(registry.id_of("bomb"), None);
    }

    #[test]
    fn test_from_labels_rejects_duplicates() {
        assert!(SymbolRegistry::from_labels(["a", "b", "a"]).is_none());
    }

    #[test]
    fn test_default_set() {
        let registry = SymbolRegistry::default_set();

        assert_eq!(registry.len(), 8);
        assert_eq!(registry.label(SymbolId::new(0)), Some("anchor"));
        assert_eq!(registry.label(SymbolId::new(7)), Some("paper-plane-o"));
        assert_eq!(registry.id_of("diamond"), Some(SymbolId::new(5)));
    }

    #[test]
    fn test_iter() {
        let registry = SymbolRegistry::from_labels(["a", "b"]).unwrap();
        let pairs: Vec<_> = registry.iter().collect();

        assert_eq!(pairs, vec![
            (SymbolId::new(0), "a"),
            (SymbolId::new(1), "b"),
        ]);
    }
}
