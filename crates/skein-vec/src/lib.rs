//! Growable ordered container of opaque value references.
//!
//! [`RefVec`] keeps client-owned values in insertion order by storing
//! [`ValueRef`](skein_core::ValueRef) handles, never the values
//! themselves. It owns exactly one resource — its backing slot storage —
//! and releases it exactly once on drop. The values a `RefVec` refers
//! to are the client's to free; dropping the container leaves them
//! untouched.
//!
//! # Storage model
//!
//! ```text
//! RefVec
//! └── slots: Vec<Option<ValueRef>>   (length == capacity, zero-init None)
//!     ├── [0, len)        occupied, insertion order
//!     └── [len, capacity) vacant (None)
//! ```
//!
//! Capacity starts at 1 and doubles whenever a pending insertion would
//! outgrow it; it never shrinks. Insert and remove open and close gaps
//! by shifting the occupied run one slot at a time.
//!
//! All storage is zero-initialised safe Rust: slots are `Option`s and
//! move in and out via `Option::take`, so there is no `unsafe` and no
//! uninitialised memory anywhere in this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod refvec;

pub use error::VecError;
pub use refvec::RefVec;
