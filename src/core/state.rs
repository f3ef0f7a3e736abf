//! Game state: the deck, the open and matched sets, scoring counters, and
//! timing.
//!
//! ## GameState
//!
//! One value owns everything a game needs:
//! - The dealt `Deck`
//! - The open set (0-2 face-up cards awaiting resolution)
//! - The matched set (grows monotonically until it covers the deck)
//! - Move counter and timing state
//! - The pending mismatch resolution, if one is waiting on its deadline
//! - Selection history for replay and debugging
//!
//! `GameState` is created at game start and replaced wholesale on restart.
//! Replacing it discards any pending resolution, so a stale delayed
//! callback can never mutate a freshly restarted deck.
//!
//! Mutators uphold the state invariants and treat contract breaches the
//! same way throughout: fatal in debug builds, logged and ignored in
//! release (the caller broke the contract; the game state stays sane).
//!
//! Uses `im` persistent data structures for the matched set and history,
//! giving O(1) clones of the state.

use im::{HashSet as ImHashSet, Vector};
use log::error;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardIndex, CardStatus};
use super::clock::Timestamp;
use super::symbol::SymbolId;
use crate::deck::Deck;

/// A mismatched pair waiting to flip back at its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    /// The two open, unresolved cards.
    pub pair: [CardIndex; 2],

    /// When the pair closes.
    pub deadline: Timestamp,
}

/// What a recorded selection did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// First card of a pair opened.
    Opened,
    /// Second card opened and the pair matched.
    Matched,
    /// Second card opened and the pair mismatched.
    Mismatched,
}

/// A recorded selection for history tracking.
///
/// Only accepted selections are recorded; ignored clicks leave no trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// The selected card.
    pub card: CardIndex,

    /// The symbol it revealed.
    pub symbol: SymbolId,

    /// Move count after this selection was evaluated.
    pub move_number: u32,

    /// What the selection did.
    pub kind: OutcomeKind,
}

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// The dealt deck.
    deck: Deck,

    /// Face-up cards awaiting resolution. Never exceeds two entries.
    open: SmallVec<[CardIndex; 2]>,

    /// Permanently revealed cards.
    matched: ImHashSet<CardIndex>,

    /// Completed pair evaluations.
    moves: u32,

    /// When the first card was selected; `None` until then.
    started_at: Option<Timestamp>,

    /// When the last pair matched; `None` while the game runs.
    completed_at: Option<Timestamp>,

    /// Mismatch waiting to flip back, if any.
    pending: Option<PendingResolution>,

    /// Accepted selections, oldest first.
    history: Vector<SelectionRecord>,
}

impl GameState {
    /// Create a fresh state around a dealt deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            open: SmallVec::new(),
            matched: ImHashSet::new(),
            moves: 0,
            started_at: None,
            completed_at: None,
            pending: None,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    /// The dealt deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.deck.card(index)
    }

    /// Get a card's status.
    #[must_use]
    pub fn status(&self, index: CardIndex) -> Option<CardStatus> {
        self.deck.status(index)
    }

    /// The currently open card indices, in selection order.
    #[must_use]
    pub fn open_indices(&self) -> &[CardIndex] {
        &self.open
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_len(&self) -> usize {
        self.matched.len()
    }

    /// Check if a card has been matched.
    #[must_use]
    pub fn is_matched(&self, index: CardIndex) -> bool {
        self.matched.contains(&index)
    }

    /// Completed pair evaluations so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// When the first card was selected, if the clock has started.
    #[must_use]
    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    /// When the game completed, if it has.
    #[must_use]
    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// Check if every card has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched.len() == self.deck.len()
    }

    /// The pending mismatch resolution, if one is waiting.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }

    /// Accepted selections, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<SelectionRecord> {
        &self.history
    }

    /// Check the structural invariants.
    ///
    /// Holds after every public engine operation; the property tests lean
    /// on this.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        self.open.len() <= 2
            && self.open.iter().all(|i| !self.matched.contains(i))
            && self.matched.len() <= self.deck.len()
            && self
                .open
                .iter()
                .all(|&i| self.deck.status(i) == Some(CardStatus::Open))
    }

    // === Mutators ===

    /// Start the elapsed-time clock, if not already running.
    pub fn begin_clock(&mut self, now: Timestamp) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stop the clock at game completion.
    pub fn stop_clock(&mut self, now: Timestamp) {
        if self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }

    /// Open a hidden card and add it to the open set.
    ///
    /// Contract: the card is `Hidden` and the open set holds fewer than two
    /// cards.
    pub fn mark_open(&mut self, index: CardIndex) {
        debug_assert!(self.open.len() < 2, "open set already holds a full pair");
        debug_assert_eq!(self.deck.status(index), Some(CardStatus::Hidden));

        if self.open.len() >= 2 {
            error!("mark_open called with a full open set; ignoring");
            return;
        }
        let Some(card) = self.deck.card_mut(index) else {
            error!("mark_open called with out-of-range {}; ignoring", index);
            return;
        };

        card.status = CardStatus::Open;
        self.open.push(index);
    }

    /// Increment the move counter for a completed pair evaluation.
    ///
    /// Returns the new count.
    pub fn bump_moves(&mut self) -> u32 {
        self.moves += 1;
        self.moves
    }

    /// Resolve the open pair as a match: both cards become `Matched` and
    /// leave the open set.
    ///
    /// Contract: the open set holds exactly two cards. Returns the matched
    /// pair, or `None` if the contract was breached.
    pub fn resolve_match(&mut self) -> Option<[CardIndex; 2]> {
        debug_assert_eq!(self.open.len(), 2, "resolving a match without a full pair");

        if self.open.len() != 2 {
            error!("resolve_match called without a full pair; ignoring");
            return None;
        }

        let pair = [self.open[0], self.open[1]];
        for index in pair {
            if let Some(card) = self.deck.card_mut(index) {
                card.status = CardStatus::Matched;
            }
            self.matched.insert(index);
        }
        self.open.clear();
        Some(pair)
    }

    /// Resolve the open pair as a mismatch: both cards stay `Open` until
    /// `deadline`, recorded as the pending resolution.
    ///
    /// Contract: the open set holds exactly two cards and no resolution is
    /// already pending. Returns the recorded resolution, or `None` if the
    /// contract was breached.
    pub fn defer_mismatch(&mut self, deadline: Timestamp) -> Option<PendingResolution> {
        debug_assert_eq!(self.open.len(), 2, "deferring a mismatch without a full pair");
        debug_assert!(self.pending.is_none(), "a resolution is already pending");

        if self.open.len() != 2 || self.pending.is_some() {
            error!("defer_mismatch called in an invalid state; ignoring");
            return None;
        }

        let pending = PendingResolution {
            pair: [self.open[0], self.open[1]],
            deadline,
        };
        self.pending = Some(pending);
        Some(pending)
    }

    /// Close the pending mismatch: both cards return to `Hidden` and the
    /// open set empties.
    ///
    /// Returns the closed pair, or `None` if nothing was pending.
    pub fn close_pending(&mut self) -> Option<[CardIndex; 2]> {
        let pending = self.pending.take()?;

        debug_assert_eq!(
            self.open.as_slice(),
            &pending.pair[..],
            "open set diverged from the pending pair"
        );

        for index in pending.pair {
            if let Some(card) = self.deck.card_mut(index) {
                card.status = CardStatus::Hidden;
            }
        }
        self.open.clear();
        Some(pending.pair)
    }

    /// Append a selection record to the history.
    pub fn record(&mut self, record: SelectionRecord) {
        self.history.push_back(record);
    }
}
