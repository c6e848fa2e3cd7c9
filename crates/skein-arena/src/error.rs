//! Value-store error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while resolving or freeing a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A handle whose slot has been freed (and possibly reused) since
    /// the handle was minted.
    StaleRef {
        /// The generation encoded in the handle.
        ref_generation: u32,
        /// The slot's current generation.
        slot_generation: u32,
    },
    /// A handle naming a slot this store never allocated.
    UnknownSlot {
        /// The slot index from the handle.
        slot: u32,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleRef {
                ref_generation,
                slot_generation,
            } => {
                write!(
                    f,
                    "stale handle: generation {ref_generation}, slot is at generation {slot_generation}"
                )
            }
            Self::UnknownSlot { slot } => write!(f, "unknown slot: {slot}"),
        }
    }
}

impl Error for ArenaError {}
