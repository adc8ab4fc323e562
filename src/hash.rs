//! Polynomial rolling hash and slot-index computation.

/// 31-based rolling hash over the key's UTF-16 code units.
///
/// Runs in wrapping 32-bit arithmetic so long keys overflow the same way
/// everywhere and the result is a deterministic function of the key alone.
pub(crate) fn poly31(key: &str) -> i32 {
    let mut h: i32 = 0;
    for unit in key.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    h
}

/// Maps a hash to a slot: signed remainder by `capacity`, then absolute
/// value. The index depends on `capacity`, so every entry's slot must be
/// recomputed when the table grows.
pub(crate) fn slot_index(hash: i32, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (i64::from(hash) % capacity as i64).unsigned_abs() as usize
}
