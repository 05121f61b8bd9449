// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Array-backed binary min-heap ordered by a caller-supplied comparator.
//!
//! The heap tracks its own logical capacity: it grows by half again when
//! full and shrinks to fit once utilization drops to half, never going below
//! the configured floor.

use crate::error::HeapError;
use std::cmp::Ordering;

/// Capacity floor used by [`MinHeap::new`].
pub const DEFAULT_MIN_CAPACITY: usize = 10;

/// Utilization divisor at or below which the backing storage shrinks.
const DECREASE_FACTOR: usize = 2;

/// Total order over `T` used to arrange heap elements.
///
/// Relative order between elements that compare equal is unspecified; use a
/// secondary key when it matters.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Lifts a comparator over `T` to `Option<T>`, sorting `None` after every `Some`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneLast<C>(pub C);

impl<T, C: Comparator<T>> Comparator<Option<T>> for NoneLast<C> {
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => self.0.compare(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Binary min-heap.
#[derive(Debug, Clone)]
pub struct MinHeap<T, C = NaturalOrder> {
    items: Vec<T>,
    capacity: usize,
    min_capacity: usize,
    comparator: C,
}

impl<T: Ord> MinHeap<T, NaturalOrder> {
    /// Empty heap using natural ordering and the default capacity floor.
    pub fn new() -> Self {
        Self::with_default_capacity(NaturalOrder)
    }
}

impl<T: Ord> Default for MinHeap<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> MinHeap<T, C> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Elements in backing-array order (heap order, not sorted order).
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Smallest element, if any.
    pub fn min(&self) -> Option<&T> {
        self.items.first()
    }
}

impl<T, C: Comparator<T>> MinHeap<T, C> {
    /// Empty heap ordered by `comparator` with the default capacity floor.
    pub fn with_default_capacity(comparator: C) -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_MIN_CAPACITY),
            capacity: DEFAULT_MIN_CAPACITY,
            min_capacity: DEFAULT_MIN_CAPACITY,
            comparator,
        }
    }

    /// Empty heap ordered by `comparator` that never shrinks below `min_capacity`.
    pub fn with_comparator(comparator: C, min_capacity: usize) -> Result<Self, HeapError> {
        if min_capacity == 0 {
            return Err(HeapError::InvalidCapacity(min_capacity));
        }
        Ok(Self {
            items: Vec::with_capacity(min_capacity),
            capacity: min_capacity,
            min_capacity,
            comparator,
        })
    }

    /// Build a heap from existing items by successive insertion.
    ///
    /// Initial capacity is the larger of the item count and `min_capacity`.
    pub fn from_iter_with<I>(items: I, comparator: C, min_capacity: usize) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        if min_capacity == 0 {
            return Err(HeapError::InvalidCapacity(min_capacity));
        }
        let items: Vec<T> = items.into_iter().collect();
        let capacity = items.len().max(min_capacity);
        let mut heap = Self {
            items: Vec::with_capacity(capacity),
            capacity,
            min_capacity,
            comparator,
        };
        for item in items {
            heap.insert(item);
        }
        Ok(heap)
    }

    /// Add an element, growing the backing storage first when it is full.
    pub fn insert(&mut self, item: T) {
        self.grow_when_full();
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the smallest element.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        let last = self.items.len().checked_sub(1).ok_or(HeapError::Empty)?;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(HeapError::Empty)?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        self.shrink_when_spare();
        Ok(min)
    }

    /// Remove the first element (in backing-array order) matching `predicate`.
    ///
    /// The match is bubbled to the root along its ancestor chain without
    /// comparing, then extracted; every ancestor it passes is no greater than
    /// the subtree it moves into, so the heap property holds below the root.
    pub fn remove_by<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut pos = self.items.iter().position(predicate)?;
        while pos > 0 {
            let up = parent(pos);
            self.items.swap(pos, up);
            pos = up;
        }
        self.extract_min().ok()
    }

    /// Remove one element equal to `item`. No-op returning `None` when absent.
    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_by(|candidate| candidate == item)
    }

    fn grow_when_full(&mut self) {
        let len = self.items.len();
        if len < self.capacity {
            return;
        }
        // ceil(len * 1.5)
        let new_capacity = (len + len.div_ceil(2)).max(len + 1);
        self.items.reserve_exact(new_capacity - len);
        self.capacity = new_capacity;
    }

    fn shrink_when_spare(&mut self) {
        let len = self.items.len();
        if len <= self.min_capacity || len > self.capacity / DECREASE_FACTOR {
            return;
        }
        self.items.shrink_to(len);
        self.capacity = len;
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.items[a], &self.items[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let up = parent(pos);
            if !self.less(pos, up) {
                break;
            }
            self.items.swap(pos, up);
            pos = up;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                return;
            }
            self.items.swap(pos, smallest);
            pos = smallest;
        }
    }
}

fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

#[cfg(test)]
#[path = "heap_tests.rs"]
mod tests;
