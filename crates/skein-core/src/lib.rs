//! Core types for the Skein container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`ValueRef`], the opaque handle that the `skein-vec` container stores
//! and the `skein-arena` value store mints and resolves. Keeping the
//! handle here lets the container hold references to client values
//! without depending on — or being able to inspect — the store that
//! owns them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod handle;

pub use handle::ValueRef;
