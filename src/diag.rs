//! Bucket-layout diagnostics: render the raw slot array for humans.
//!
//! Observational only; nothing here is part of the map's functional
//! contract beyond "every slot shows up".

use core::fmt::{Debug, Write};

use crate::ChainHashMap;

/// Renders one line per slot: the index, then `~` for a slot that has
/// never materialized, or the bucket's entries in stored order (an empty
/// materialized bucket prints as a bare index).
pub fn render_buckets<V: Debug>(map: &ChainHashMap<V>) -> String {
    let mut out = String::new();
    for (index, slot) in map.slot_entries().enumerate() {
        match slot {
            None => {
                let _ = writeln!(out, "{index:>4}: ~");
            }
            Some(entries) => {
                let _ = write!(out, "{index:>4}:");
                for (key, value) in entries {
                    let _ = write!(out, " {key:?}={value:?}");
                }
                let _ = writeln!(out);
            }
        }
    }
    out
}

/// Emits the same layout through the `tracing` facade: a summary event,
/// then one debug event per slot line.
pub fn log_buckets<V: Debug>(map: &ChainHashMap<V>) {
    tracing::debug!(
        target: "chain_hashmap::diag",
        capacity = map.capacity(),
        occupancy = map.len(),
        "bucket layout"
    );
    for line in render_buckets(map).lines() {
        tracing::debug!(target: "chain_hashmap::diag", "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the rendering lists every slot exactly once and marks
    /// unmaterialized slots with `~`.
    #[test]
    fn render_covers_every_slot() {
        let m: ChainHashMap<i32> = ChainHashMap::new();
        let dump = render_buckets(&m);
        assert_eq!(dump.lines().count(), m.capacity());
        assert!(dump.lines().all(|line| line.ends_with(": ~")));
    }

    /// Invariant: materialized slots print their entries in stored order;
    /// the three chained keys land in slot 1 at capacity 16.
    #[test]
    fn render_shows_chained_entries_in_order() {
        let mut m: ChainHashMap<i32> = ChainHashMap::new();
        m.set("a".to_string(), 1);
        m.set("q".to_string(), 2);

        let dump = render_buckets(&m);
        let slot_line = dump.lines().nth(1).expect("slot 1 line");
        assert_eq!(slot_line, r#"   1: "a"=1 "q"=2"#);
        assert_eq!(dump.lines().count(), m.capacity());
    }

    /// Invariant: a bucket emptied by removal still renders as
    /// materialized, distinct from `~`.
    #[test]
    fn render_distinguishes_empty_bucket_from_unmaterialized() {
        let mut m: ChainHashMap<i32> = ChainHashMap::new();
        m.set("a".to_string(), 1);
        m.remove("a");

        let dump = render_buckets(&m);
        let slot_line = dump.lines().nth(1).expect("slot 1 line");
        assert_eq!(slot_line, "   1:");
        assert!(dump.lines().next().expect("slot 0 line").ends_with(": ~"));
    }
}
