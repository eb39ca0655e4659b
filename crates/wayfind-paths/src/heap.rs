use std::collections::HashMap;
use std::hash::Hash;

/// Array-backed binary min-heap with an identity index.
///
/// Every item is stored once, next to its priority, and a `HashMap` maps
/// each item back to its slot. That index gives O(1) [`contains`] and lets
/// [`upsert`] re-prioritise an item in place (decrease-key) instead of
/// pushing a duplicate entry.
///
/// Priorities only need `PartialOrd`. An item moves past another only when
/// its priority is *strictly* smaller, so incomparable priorities (`NaN`)
/// never move and equal priorities keep their current order.
///
/// [`contains`]: IndexedMinHeap::contains
/// [`upsert`]: IndexedMinHeap::upsert
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T, P = f64> {
    items: Vec<T>,
    priorities: Vec<P>,
    index: HashMap<T, usize>,
}

impl<T, P> Default for IndexedMinHeap<T, P> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            priorities: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T, P> IndexedMinHeap<T, P>
where
    T: Clone + Eq + Hash,
    P: PartialOrd + Copy,
{
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            priorities: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of items in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item, keeping the allocations.
    pub fn clear(&mut self) {
        self.items.clear();
        self.priorities.clear();
        self.index.clear();
    }

    /// Whether `item` is currently in the heap. O(1).
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// The stored priority of `item`, if present.
    pub fn priority(&self, item: &T) -> Option<P> {
        self.index.get(item).map(|&i| self.priorities[i])
    }

    /// The minimum item and its priority, without removing it.
    pub fn peek(&self) -> Option<(&T, P)> {
        Some((self.items.first()?, *self.priorities.first()?))
    }

    /// Add an item that is not yet in the heap.
    ///
    /// The item is appended and sifted toward the root while its priority is
    /// strictly smaller than its parent's. Inserting an item that is already
    /// present is a logic error: debug builds panic, release builds treat it
    /// as [`upsert`](Self::upsert) so the index stays consistent.
    pub fn insert(&mut self, item: T, priority: P) {
        debug_assert!(
            !self.contains(&item),
            "IndexedMinHeap::insert called with an item already in the heap"
        );
        if self.contains(&item) {
            self.upsert(item, priority);
            return;
        }

        let idx = self.items.len();
        self.index.insert(item.clone(), idx);
        self.items.push(item);
        self.priorities.push(priority);
        self.sift_up(idx);
        self.debug_check();
    }

    /// Insert `item`, or update its priority if it is already present.
    ///
    /// For a present item the new priority is stored and the heap property
    /// is restored from the item's current slot: it moves up when it now
    /// beats its parent (decrease-key), otherwise down past any strictly
    /// smaller child. An unchanged priority leaves the heap untouched.
    pub fn upsert(&mut self, item: T, priority: P) {
        let Some(&idx) = self.index.get(&item) else {
            self.insert(item, priority);
            return;
        };
        self.priorities[idx] = priority;
        let idx = self.sift_up(idx);
        self.sift_down(idx);
        self.debug_check();
    }

    /// Remove and return the minimum item, or `None` if the heap is empty.
    pub fn remove_min(&mut self) -> Option<T> {
        self.remove_min_with_priority().map(|(item, _)| item)
    }

    /// Remove and return the minimum item together with its priority.
    ///
    /// The last item is moved into the root slot and sifted down.
    pub fn remove_min_with_priority(&mut self) -> Option<(T, P)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.swap(0, last);
        let item = self.items.pop()?;
        let priority = self.priorities.pop()?;
        self.index.remove(&item);

        if !self.items.is_empty() {
            self.sift_down(0);
        }
        self.debug_check();
        Some((item, priority))
    }

    /// Move the item at `idx` up while it is strictly smaller than its
    /// parent. Returns its final slot.
    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.priorities[idx] < self.priorities[parent] {
                self.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
        idx
    }

    /// Move the item at `idx` down, always toward the smaller child, until
    /// no child is strictly smaller.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut smallest = idx;
            if self.priorities[left] < self.priorities[smallest] {
                smallest = left;
            }
            if right < len && self.priorities[right] < self.priorities[smallest] {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap(idx, smallest);
            idx = smallest;
        }
    }

    /// Exchange two slots, keeping items, priorities and index in lockstep.
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.items.swap(a, b);
        self.priorities.swap(a, b);
        if let Some(slot) = self.index.get_mut(&self.items[a]) {
            *slot = a;
        }
        if let Some(slot) = self.index.get_mut(&self.items[b]) {
            *slot = b;
        }
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(self.items.len(), self.priorities.len());
        debug_assert_eq!(self.items.len(), self.index.len());
    }

    /// Walk the whole array and check the heap property and the index.
    #[cfg(test)]
    pub(crate) fn validate(&self) {
        assert_eq!(self.items.len(), self.priorities.len());
        assert_eq!(self.items.len(), self.index.len());
        for (i, item) in self.items.iter().enumerate() {
            assert_eq!(self.index.get(item), Some(&i), "index out of sync at {i}");
            for child in [2 * i + 1, 2 * i + 2] {
                if child < self.items.len() {
                    assert_ne!(
                        self.priorities[i].partial_cmp(&self.priorities[child]),
                        Some(std::cmp::Ordering::Greater),
                        "heap property violated between {i} and {child}"
                    );
                }
            }
        }
    }
}
