//! Bounded LIFO scratch buffer.
//!
//! Purpose
//! - Fixed-capacity, array-backed stack of `Copy` items used as working
//!   storage by the Graham scan. Storage is reserved once at construction and
//!   never grows, so a stack can be reused across many hull computations.
//!
//! Bounds discipline
//! - `push` validates capacity before writing. A full stack rejects the item
//!   and leaves its storage untouched.
//! - `pop`/`peek` report underflow instead of reading stale slots.
//!
//! Code cross-refs: `hull::Hull2::compute_hull`, `hull::FlaggedIndex`

use std::fmt;

/// Failure modes of [`BoundedStack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
    /// Backing storage for `capacity` items could not be reserved.
    Alloc { capacity: usize },
    /// Push onto a stack already holding `capacity` items.
    Full { capacity: usize },
    /// Pop from an empty stack.
    Empty,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Alloc { capacity } => {
                write!(f, "cannot reserve stack storage for {capacity} items")
            }
            StackError::Full { capacity } => write!(f, "stack is full ({capacity} items)"),
            StackError::Empty => write!(f, "stack is empty"),
        }
    }
}

impl std::error::Error for StackError {}

/// Fixed-capacity LIFO with value semantics (items are copied in and out).
///
/// Invariants:
/// - `items.len() <= capacity` at all times.
/// - `items` never reallocates after construction.
#[derive(Clone, Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Copy> BoundedStack<T> {
    /// Reserve storage for exactly `capacity` items.
    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| StackError::Alloc { capacity })?;
        Ok(Self { items, capacity })
    }

    /// Drop all items in O(1); storage is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Push `item` as the new top. Fails without writing when full.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if self.items.len() >= self.capacity {
            return Err(StackError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top item.
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Copy of the item `depth` positions below the top (`0` is the top).
    #[inline]
    pub fn peek(&self, depth: usize) -> Option<T> {
        let n = self.items.len();
        if depth < n {
            Some(self.items[n - 1 - depth])
        } else {
            None
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Current content, bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}
