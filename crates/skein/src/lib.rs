//! Skein: a growable, ordered container of opaque value references.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Skein sub-crates. For most users, adding `skein` as a
//! single dependency is sufficient.
//!
//! The design splits ownership in two: a [`RefVec`] keeps *handles* in
//! insertion order and never frees anything; a [`ValueArena`] owns the
//! actual values and is the only party that can resolve or reclaim
//! one. Dropping a container therefore releases its own backing
//! storage and nothing else.
//!
//! # Quick start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! let mut store = ValueArena::new();
//! let mut v = RefVec::new();
//!
//! v.push(store.insert("a".to_string()));
//! v.push(store.insert("b".to_string()));
//! v.push(store.insert("c".to_string()));
//!
//! // Remove the middle element; the container hands the handle back
//! // and the store reclaims the value.
//! let r = v.remove(1)?;
//! assert_eq!(store.free(r)?, "b");
//!
//! assert_eq!(v.len(), 2);
//! assert_eq!(store.get(v.get(1)?)?, "c");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`vec`] | `skein-vec` | [`RefVec`], [`VecError`] |
//! | [`arena`] | `skein-arena` | [`ValueArena`], [`ArenaError`] |
//! | [`types`] | `skein-core` | [`ValueRef`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The container: [`RefVec`] and its errors.
pub mod vec {
    pub use skein_vec::{RefVec, VecError};
}

/// The client-owned value store: [`ValueArena`] and its errors.
pub mod arena {
    pub use skein_arena::{ArenaError, ValueArena};
}

/// Core types shared across the workspace.
pub mod types {
    pub use skein_core::ValueRef;
}

pub use skein_arena::{ArenaError, ValueArena};
pub use skein_core::ValueRef;
pub use skein_vec::{RefVec, VecError};

/// Everything most users need, in one import.
pub mod prelude {
    pub use crate::{ArenaError, RefVec, ValueArena, ValueRef, VecError};
}
