//! Company slot identity and the build-time company limit.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Maximum number of companies a game can hold.
///
/// Interface code reserves one widget per potential company up front, so the
/// limit is fixed per build rather than per savegame.
pub const MAX_COMPANIES: u8 = 15;

/// Index of a company slot, in `0..MAX_COMPANIES`.
///
/// Slots are stable for the lifetime of a game: removing a company frees its
/// slot but never renumbers the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompanyId(u8);

impl CompanyId {
    /// Slot of the first company.
    pub const FIRST: CompanyId = CompanyId(0);

    /// Create a company id from a raw slot number.
    pub fn new(slot: u8) -> Result<Self, SlotOutOfRange> {
        if slot < MAX_COMPANIES {
            Ok(CompanyId(slot))
        } else {
            Err(SlotOutOfRange(slot))
        }
    }

    /// Raw slot number of this company.
    pub const fn slot(self) -> u8 {
        self.0
    }

    /// Iterate over every slot the build supports.
    pub fn iter() -> impl Iterator<Item = CompanyId> {
        (0..MAX_COMPANIES).map(CompanyId)
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "company {}", self.0)
    }
}

impl Serialize for CompanyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for CompanyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let slot = u8::deserialize(deserializer)?;
        CompanyId::new(slot).map_err(serde::de::Error::custom)
    }
}

/// A slot number at or beyond [`MAX_COMPANIES`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("company slot out of range: {0} (limit {MAX_COMPANIES})")]
pub struct SlotOutOfRange(pub u8);
