//! The opaque value handle.
//!
//! A [`ValueRef`] stands in for a client-owned value. It is generation-
//! scoped: the `generation` field allows the owning store to reject
//! handles to slots that have since been freed and reused, in O(1) and
//! without a lookup table.

use std::fmt;

/// An opaque reference to a client-owned value.
///
/// Handles are plain data: `Copy`, cheap to store, and meaningless
/// without the store that minted them. The container (`skein-vec`)
/// stores and returns them without resolving them; only the minting
/// `ValueArena` can turn one back into a value, and only while the
/// slot's generation still matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ValueRef {
    /// Slot index within the minting store.
    slot: u32,
    /// Store generation of the slot when this handle was minted.
    generation: u32,
}

impl ValueRef {
    /// Create a handle for the given slot and generation.
    ///
    /// Only a value store should mint handles; a handle fabricated for
    /// a slot it does not own will be rejected at resolution time.
    pub fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// Slot index within the minting store.
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// The store generation this handle belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueRef(slot={}, gen={})", self.slot, self.generation)
    }
}
