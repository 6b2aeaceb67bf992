//! Strongly-typed identifiers and pluggable identifier generation.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Opaque to callers: compare and display it, but do not depend on its
/// string encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(ItemId, "ItemId");

/// Length of the handle returned by [`ItemId::short`].
pub const SHORT_ID_LEN: usize = 8;

impl ItemId {
    /// Trailing hex digits of the id, for display in narrow columns.
    ///
    /// The tail is used rather than the head because UUIDv7 ids minted in the
    /// same millisecond share their leading timestamp bits.
    pub fn short(&self) -> String {
        let hex = self.0.simple().to_string();
        hex[hex.len() - SHORT_ID_LEN..].to_string()
    }

    /// Whether `handle` names this id: either the full id or a trailing run of
    /// its hex digits (hyphens and case ignored).
    pub fn matches_handle(&self, handle: &str) -> bool {
        let wanted: String = handle
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        !wanted.is_empty() && self.0.simple().to_string().ends_with(&wanted)
    }
}

/// Source of fresh item identifiers.
///
/// Generators only need to be collision-free in practice; the store still
/// re-draws if a generated id is already held.
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}

impl<G> IdGenerator for Box<G>
where
    G: IdGenerator + ?Sized,
{
    fn next_id(&mut self) -> ItemId {
        (**self).next_id()
    }
}

/// UUIDv7 (time-ordered, random tail) identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ItemId {
        ItemId(Uuid::now_v7())
    }
}

/// Monotonic counter identifiers.
///
/// Deterministic: prefer this in tests.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId(Uuid::from_u128(self.next));
        self.next = self.next.wrapping_add(1);
        id
    }
}
