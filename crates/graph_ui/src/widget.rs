//! Widget identity and contiguous identifier ranges.
//!
//! Every interactive region of a window is addressed by a [`WidgetId`] that
//! is unique within that window's namespace. Statically sized widgets get
//! one id each; list-like widget groups reserve a [`WidgetRange`] whose
//! extent comes from a domain bound, so the ids stay contiguous without
//! being assigned by hand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single widget, unique within one window's namespace.
///
/// Ids from different windows are unrelated values; only the lookup helpers
/// of the owning window give them meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(u16);

impl WidgetId {
    /// First id of a window namespace.
    pub const ZERO: WidgetId = WidgetId(0);

    /// Create an id from its raw value.
    pub const fn new(raw: u16) -> Self {
        WidgetId(raw)
    }

    /// Raw value of this id.
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contiguous, non-empty block of widget ids.
///
/// The last id is always derived from the first id and the extent, never
/// written out at a declaration site, which keeps the contiguity invariant
/// in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetRange {
    first: WidgetId,
    last: WidgetId,
}

impl WidgetRange {
    /// Reserve `extent` ids starting at `first`.
    ///
    /// The extent must be at least one; a zero-width range would put `last`
    /// before `first`. Evaluated in const context, a zero extent fails the
    /// build.
    pub const fn new(first: WidgetId, extent: u16) -> Self {
        assert!(extent > 0, "widget range needs a positive extent");
        WidgetRange {
            first,
            last: WidgetId(first.0 + extent - 1),
        }
    }

    /// Reserve `extent` ids directly after this range.
    pub const fn followed_by(self, extent: u16) -> Self {
        WidgetRange::new(WidgetId(self.last.0 + 1), extent)
    }

    /// First id of the range.
    pub const fn first(self) -> WidgetId {
        self.first
    }

    /// Last id of the range.
    pub const fn last(self) -> WidgetId {
        self.last
    }

    /// Number of ids in the range.
    pub const fn extent(self) -> u16 {
        self.last.0 - self.first.0 + 1
    }

    /// Whether `id` falls inside the range.
    pub const fn contains(self, id: WidgetId) -> bool {
        self.first.0 <= id.0 && id.0 <= self.last.0
    }

    /// Id of the widget at `slot`.
    ///
    /// Panics when the slot lies outside the range, like slice indexing.
    pub const fn at(self, slot: u16) -> WidgetId {
        assert!(slot < self.extent(), "slot outside widget range");
        WidgetId(self.first.0 + slot)
    }

    /// Id of the widget at `slot`, or `None` outside the range.
    pub const fn get(self, slot: u16) -> Option<WidgetId> {
        if slot < self.extent() {
            Some(WidgetId(self.first.0 + slot))
        } else {
            None
        }
    }

    /// Slot of `id` within the range. Inverse of [`WidgetRange::at`].
    pub const fn slot_of(self, id: WidgetId) -> Option<u16> {
        if self.contains(id) {
            Some(id.0 - self.first.0)
        } else {
            None
        }
    }

    /// Whether the two ranges share no id.
    pub const fn is_disjoint(self, other: WidgetRange) -> bool {
        self.last.0 < other.first.0 || other.last.0 < self.first.0
    }

    /// Iterate over every id in the range.
    pub fn iter(self) -> impl Iterator<Item = WidgetId> {
        (self.first.0..=self.last.0).map(WidgetId)
    }
}
