//! Generational value store for Skein containers.
//!
//! A [`ValueArena`] owns the actual values that a `skein-vec` container
//! refers to. The split makes the container's ownership contract
//! concrete: the container holds [`ValueRef`](skein_core::ValueRef)
//! handles and never frees anything; the arena is the single owner of
//! every value and the only party that can resolve or reclaim one.
//!
//! Slots are recycled through a free list, and each slot carries a
//! generation counter that is bumped on free. A handle that outlives
//! its value fails resolution with [`ArenaError::StaleRef`] instead of
//! silently reading the slot's next tenant.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod slab;

pub use error::ArenaError;
pub use slab::ValueArena;
