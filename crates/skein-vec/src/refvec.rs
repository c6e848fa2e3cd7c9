//! The [`RefVec`] container.
//!
//! An ordered, index-addressed, growable sequence of [`ValueRef`]
//! handles. The container stores handles by value and never resolves
//! them: lifetime and cleanup of the referenced client values stay with
//! the caller for every operation, including [`RefVec::set`] (which
//! hands back the overwritten handle) and [`RefVec::remove`] /
//! [`RefVec::pop`] (which hand back the removed one).

use skein_core::ValueRef;

use crate::error::VecError;

/// Growable ordered container of opaque value references.
///
/// Occupied slots `[0, len)` hold handles in insertion order; slots
/// `[len, capacity)` are vacant. Capacity starts at 1, doubles when an
/// insertion would outgrow it, and never shrinks — interleaved push/pop
/// at a capacity boundary therefore never oscillates between grow and
/// shrink.
///
/// Contract violations (out-of-bounds access, popping when empty) are
/// rejected with a [`VecError`] and leave the container untouched.
pub struct RefVec {
    /// Backing storage. `slots.len()` is the capacity; vacant slots are
    /// `None`.
    slots: Vec<Option<ValueRef>>,
    /// Number of occupied leading slots.
    len: usize,
}

impl RefVec {
    /// Create a new, empty container with capacity for one element.
    pub fn new() -> Self {
        Self {
            slots: vec![None],
            len: 0,
        }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the backing storage can hold without growing.
    ///
    /// Always at least 1, and always a power of two under the doubling
    /// growth policy.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether `index` addresses an occupied slot.
    ///
    /// True iff `0 <= index < len`. The index is taken as a signed
    /// value and the sign is tested before any magnitude comparison, so
    /// a negative index is rejected outright rather than wrapping
    /// through an unsigned conversion.
    pub fn in_bounds(&self, index: i64) -> bool {
        index >= 0 && (index as u64) < self.len as u64
    }

    /// Get the handle at `index`.
    ///
    /// Returns `Err(VecError::OutOfBounds)` if `index >= len`. The
    /// handle is copied out; the slot stays occupied.
    pub fn get(&self, index: usize) -> Result<ValueRef, VecError> {
        if index >= self.len {
            return Err(VecError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(self.occupied(index))
    }

    /// Overwrite the handle at `index`, returning the previous occupant.
    ///
    /// Returns `Err(VecError::OutOfBounds)` if `index >= len`. The
    /// container neither resolves nor frees the displaced handle — any
    /// cleanup of the value it refers to is the caller's job.
    pub fn set(&mut self, index: usize, value: ValueRef) -> Result<ValueRef, VecError> {
        if index >= self.len {
            return Err(VecError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        let previous = self.slots[index]
            .replace(value)
            .expect("slots below len are occupied");
        Ok(previous)
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len` appends. Returns
    /// `Err(VecError::InsertOutOfBounds)` if `index > len`; the
    /// container is unchanged on rejection. The shift runs highest
    /// index first so no occupied slot is overwritten before it has
    /// been moved.
    ///
    /// O(len − index), O(1) amortized including capacity growth.
    pub fn insert(&mut self, index: usize, value: ValueRef) -> Result<(), VecError> {
        if index > self.len {
            return Err(VecError::InsertOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.extend_if_full();
        for i in (index..self.len).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the handle at `index`, shifting later elements
    /// one slot left.
    ///
    /// Returns `Err(VecError::OutOfBounds)` if `index >= len`. The
    /// shift runs lowest index first so each slot is vacated before it
    /// is reused. Ownership of any further handling of the returned
    /// handle passes to the caller; the container retains nothing.
    ///
    /// O(len − index). Capacity is unchanged — removal never shrinks.
    pub fn remove(&mut self, index: usize) -> Result<ValueRef, VecError> {
        if index >= self.len {
            return Err(VecError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        let removed = self.slots[index]
            .take()
            .expect("slots below len are occupied");
        for i in index..self.len - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Append `value` at the end.
    ///
    /// Equivalent to `insert(len, value)`, and infallible for the same
    /// reason that index is always a valid insertion point. O(1)
    /// amortized.
    pub fn push(&mut self, value: ValueRef) {
        self.insert(self.len, value)
            .expect("append index is always a valid insertion point");
    }

    /// Remove and return the last handle.
    ///
    /// Equivalent to `remove(len - 1)`. Returns `Err(VecError::Empty)`
    /// when the container holds no elements.
    pub fn pop(&mut self) -> Result<ValueRef, VecError> {
        if self.len == 0 {
            return Err(VecError::Empty);
        }
        self.remove(self.len - 1)
    }

    /// Handle at an occupied slot.
    fn occupied(&self, index: usize) -> ValueRef {
        self.slots[index].expect("slots below len are occupied")
    }

    /// Double the backing storage when every slot is occupied.
    ///
    /// Copy-on-grow: occupied slots move to the front of the new
    /// storage in order. Growth is all-or-nothing — an allocation
    /// failure aborts before any slot has moved, leaving the container
    /// as it was.
    fn extend_if_full(&mut self) {
        if self.len < self.slots.len() {
            return;
        }
        let mut grown = vec![None; self.slots.len() * 2];
        for (dst, src) in grown.iter_mut().zip(self.slots.iter_mut()) {
            *dst = src.take();
        }
        self.slots = grown;
    }
}

impl Default for RefVec {
    fn default() -> Self {
        Self::new()
    }
}
