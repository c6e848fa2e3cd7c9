//! The [`ValueArena`] slab.

use skein_core::ValueRef;

use crate::error::ArenaError;

/// One slot of the slab.
///
/// `generation` is bumped every time the slot's value is freed, so
/// handles minted for an earlier tenant no longer match.
struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational slab that owns client values and mints handles to them.
///
/// Freed slots are recycled through a free list; resolution checks the
/// handle's generation against the slot's, so a recycled slot never
/// leaks its new tenant to a stale handle.
pub struct ValueArena<T> {
    entries: Vec<Entry<T>>,
    /// Vacant slot indices, most recently freed last.
    free: Vec<u32>,
    /// Number of occupied slots.
    live: usize,
}

impl<T> ValueArena<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the store holds no live values.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Take ownership of `value` and mint a handle for it.
    ///
    /// Recycles the most recently freed slot when one exists, at its
    /// bumped generation.
    pub fn insert(&mut self, value: T) -> ValueRef {
        self.live += 1;
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.entries[slot as usize];
            entry.value = Some(value);
            return ValueRef::new(slot, entry.generation);
        }
        let slot = self.entries.len() as u32;
        self.entries.push(Entry {
            generation: 0,
            value: Some(value),
        });
        ValueRef::new(slot, 0)
    }

    /// Resolve a handle to a shared reference to its value.
    ///
    /// Returns `Err(ArenaError::UnknownSlot)` for a slot this store
    /// never allocated, and `Err(ArenaError::StaleRef)` for a slot
    /// whose value has been freed since the handle was minted.
    pub fn get(&self, r: ValueRef) -> Result<&T, ArenaError> {
        let entry = self
            .entries
            .get(r.slot() as usize)
            .ok_or(ArenaError::UnknownSlot { slot: r.slot() })?;
        match &entry.value {
            Some(value) if entry.generation == r.generation() => Ok(value),
            _ => Err(ArenaError::StaleRef {
                ref_generation: r.generation(),
                slot_generation: entry.generation,
            }),
        }
    }

    /// Reclaim the value a handle refers to, returning it to the caller.
    ///
    /// The slot's generation is bumped and the slot joins the free
    /// list, so the handle (and any copy of it) is stale from here on.
    /// Fails with the same errors as [`ValueArena::get`].
    pub fn free(&mut self, r: ValueRef) -> Result<T, ArenaError> {
        let entry = self
            .entries
            .get_mut(r.slot() as usize)
            .ok_or(ArenaError::UnknownSlot { slot: r.slot() })?;
        if entry.generation != r.generation() || entry.value.is_none() {
            return Err(ArenaError::StaleRef {
                ref_generation: r.generation(),
                slot_generation: entry.generation,
            });
        }
        let value = entry.value.take().expect("occupancy checked above");
        entry.generation += 1;
        self.free.push(r.slot());
        self.live -= 1;
        Ok(value)
    }
}

impl<T> Default for ValueArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let mut arena = ValueArena::new();
        let r = arena.insert("hello".to_string());
        assert_eq!(arena.get(r).unwrap(), "hello");
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn free_returns_the_value_and_staleness_follows() {
        let mut arena = ValueArena::new();
        let r = arena.insert(42);
        assert_eq!(arena.free(r).unwrap(), 42);
        assert!(arena.is_empty());
        assert!(matches!(arena.get(r), Err(ArenaError::StaleRef { .. })));
        assert!(matches!(arena.free(r), Err(ArenaError::StaleRef { .. })));
    }

    #[test]
    fn recycled_slot_rejects_old_handle() {
        let mut arena = ValueArena::new();
        let old = arena.insert("first");
        arena.free(old).unwrap();
        let new = arena.insert("second");
        // Same slot, new generation.
        assert_eq!(new.slot(), old.slot());
        assert_ne!(new.generation(), old.generation());
        assert_eq!(*arena.get(new).unwrap(), "second");
        assert!(matches!(arena.get(old), Err(ArenaError::StaleRef { .. })));
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let arena: ValueArena<u8> = ValueArena::new();
        let bogus = skein_core::ValueRef::new(3, 0);
        assert_eq!(arena.get(bogus).unwrap_err(), ArenaError::UnknownSlot { slot: 3 });
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn live_count_survives_churn(
                ops in proptest::collection::vec(any::<bool>(), 1..100),
            ) {
                // true inserts, false frees the oldest live handle.
                let mut arena = ValueArena::new();
                let mut held: Vec<_> = Vec::new();
                for (i, op) in ops.iter().enumerate() {
                    if *op {
                        held.push(arena.insert(i));
                    } else if !held.is_empty() {
                        let r = held.remove(0);
                        prop_assert!(arena.free(r).is_ok());
                    }
                    prop_assert_eq!(arena.len(), held.len());
                }
                // Every held handle still resolves to its value.
                for r in &held {
                    prop_assert!(arena.get(*r).is_ok());
                }
            }

            #[test]
            fn values_never_cross_handles(
                values in proptest::collection::vec(any::<u64>(), 1..50),
            ) {
                let mut arena = ValueArena::new();
                let handles: Vec<_> = values.iter().map(|&v| arena.insert(v)).collect();
                for (r, &v) in handles.iter().zip(values.iter()) {
                    prop_assert_eq!(*arena.get(*r).unwrap(), v);
                }
            }
        }
    }
}
