//! Shared helpers for the Skein benchmark suite.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use skein_core::ValueRef;
use skein_vec::RefVec;

/// Mint a distinct handle for benchmark element `i`.
///
/// Benchmarks exercise the container alone, so handles are fabricated
/// rather than drawn from a store; the container never resolves them.
pub fn bench_ref(i: u32) -> ValueRef {
    ValueRef::new(i, 0)
}

/// Build a container pre-filled with `n` elements.
pub fn filled(n: u32) -> RefVec {
    let mut v = RefVec::new();
    for i in 0..n {
        v.push(bench_ref(i));
    }
    v
}
