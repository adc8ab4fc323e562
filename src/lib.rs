//! chain-hashmap: a string-keyed map built from first principles on
//! separate chaining, with load-factor-driven doubling.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: implement the whole table engine — hashing, bucket chaining,
//!   growth — in plain safe Rust, in small layers that can be reasoned
//!   about independently.
//! - Layers:
//!   - hash: the polynomial rolling hash over a key's UTF-16 code units
//!     and the capacity-dependent slot-index computation.
//!   - ChainHashMap<V>: the engine. A fixed-length slot array where each
//!     slot is either unmaterialized or a vector of entries in insertion
//!     order; all CRUD and enumeration operations live here.
//!   - diag: renders the raw bucket layout for humans and emits it
//!     through the `tracing` facade. Observational only.
//!
//! Constraints
//! - Single-threaded, synchronous: every operation runs to completion on
//!   the caller's thread. Callers that share an instance across threads
//!   must bring their own locking; the map provides none.
//! - Keys are `String`; values are any `V`. One entry per unique key,
//!   table-wide.
//! - Slots materialize lazily: `None` until the first insert routed to
//!   them, and `Some(vec![])` after removals empty them. The two states
//!   are deliberately distinct.
//! - Growth only ever doubles capacity and always performs a full
//!   rehash; capacity never shrinks, not even on `clear`.
//! - `len()` is recomputed by summing bucket sizes. There is no running
//!   counter to drift out of sync with the buckets.
//!
//! Growth discipline
//! - `set` checks `len() >= round(capacity * load_factor)` before the key
//!   is hashed, so an update-only call can still double the table. The
//!   rehash loop re-places entries through logic that never re-checks the
//!   trigger, so growth cannot recurse.
//!
//! Notes and non-goals
//! - No persistence, no iteration-order guarantee beyond slot order then
//!   in-bucket insertion order, and no incremental resizing.
//! - Lookup misses are `None`/`false` results, never errors; the only
//!   fallible surface is constructor-option validation.
//! - Public API surface is `ChainHashMap`, its iterator, the option
//!   error, and the `diag` helpers; `hash` is an implementation detail.

mod chain_hash_map;
mod chain_hash_map_proptest;
pub mod diag;
mod hash;

// Public surface
pub use chain_hash_map::{
    ChainHashMap, Iter, OptionsError, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR,
};
