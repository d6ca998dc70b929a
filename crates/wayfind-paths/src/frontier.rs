//! Indexed min-priority frontier.
//!
//! Entries are kept in a binary heap keyed by `(key, seq)`. `seq` is the
//! order in which an item was first inserted, so equal keys pop FIFO. A
//! position table maps each item to its heap slot, which makes
//! [`insert_or_update`](Frontier::insert_or_update) an in-place
//! decrease-key instead of a duplicate push.

const ABSENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Entry {
    item: usize,
    key: u32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl Entry {
    #[inline]
    fn precedes(&self, other: &Entry) -> bool {
        (self.key, self.seq) < (other.key, other.seq)
    }
}

/// Min-priority queue over item indices `0..capacity`.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    heap: Vec<Entry>,
    slots: Vec<usize>,
    seq: u64,
}

impl Frontier {
    /// Create an empty frontier for items `0..capacity`. Larger items grow
    /// the position table on demand.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::new(),
            slots: vec![ABSENT; capacity],
            seq: 0,
        }
    }

    /// Insert `item` with `key`, or move it to `key` if already present.
    ///
    /// An update keeps the item's original insertion rank for tie-breaking.
    pub fn insert_or_update(&mut self, item: usize, key: u32) {
        if item >= self.slots.len() {
            self.slots.resize(item + 1, ABSENT);
        }
        let at = self.slots[item];
        if at == ABSENT {
            let seq = self.seq;
            self.seq += 1;
            self.heap.push(Entry { item, key, seq });
            let last = self.heap.len() - 1;
            self.slots[item] = last;
            self.sift_up(last);
            return;
        }
        let old = self.heap[at].key;
        self.heap[at].key = key;
        if key < old {
            self.sift_up(at);
        } else if key > old {
            self.sift_down(at);
        }
    }

    /// Remove and return the item with the smallest key, with its key.
    /// Among equal keys the earliest-inserted item wins.
    pub fn extract_min(&mut self) -> Option<(usize, u32)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.slots[top.item] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((top.item, top.key))
    }

    /// Whether no items are waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of items waiting.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether `item` is currently in the frontier.
    #[inline]
    pub fn contains(&self, item: usize) -> bool {
        self.slots.get(item).is_some_and(|&at| at != ABSENT)
    }

    /// Current key of `item`, if present.
    pub fn key_of(&self, item: usize) -> Option<u32> {
        match self.slots.get(item) {
            Some(&at) if at != ABSENT => Some(self.heap[at].key),
            _ => None,
        }
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].item] = a;
        self.slots[self.heap[b].item] = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < len && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }
}
