use crate::graphs::{Distance, Vertex};

/// A trait for a priority queue that manages vertices and their distances.
/// This trait is useful for graph algorithms that need to repeatedly retrieve
/// the vertex with the smallest distance (such as Dijkstra's algorithm).
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex with its associated distance. If the vertex is
    /// already enqueued, its distance is decreased in place when the new
    /// distance is smaller and left untouched otherwise.
    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the vertex with the smallest distance, or None if
    /// the queue is empty.
    fn pop(&mut self) -> Option<Vertex>;

    fn is_empty(&self) -> bool;
}

/// A binary min heap over (distance, vertex) entries with a per-vertex slot
/// map into the backing vector. The slot map makes decrease-key addressable
/// in O(1) and therefore O(log V) overall, no linear search needed.
///
/// Entries compare by distance alone. Equal distances keep their heap
/// structure order, ties are never broken by vertex id.
pub struct VertexDistanceQueueIndexedHeap {
    entries: Vec<(Distance, Vertex)>,
    slots: Vec<Option<usize>>,
}

impl VertexDistanceQueueIndexedHeap {
    pub fn new(number_of_vertices: usize) -> Self {
        VertexDistanceQueueIndexedHeap {
            entries: Vec::new(),
            slots: vec![None; number_of_vertices],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.slots[vertex as usize].is_some()
    }

    pub fn peek(&self) -> Option<(Vertex, Distance)> {
        self.entries.first().map(|&(distance, vertex)| (vertex, distance))
    }

    /// The only place that moves entries around. Keeps the backing vector
    /// and the slot map consistent with each other.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots[self.entries[a].1 as usize] = Some(a);
        self.slots[self.entries[b].1 as usize] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].0 >= self.entries[parent].0 {
                break;
            }
            self.swap_entries(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;

            let mut smallest = slot;
            if left < self.entries.len() && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < self.entries.len() && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }

            if smallest == slot {
                break;
            }
            self.swap_entries(slot, smallest);
            slot = smallest;
        }
    }

    fn push(&mut self, vertex: Vertex, distance: Distance) {
        self.entries.push((distance, vertex));
        self.slots[vertex as usize] = Some(self.entries.len() - 1);
        self.sift_up(self.entries.len() - 1);
    }

    /// Distances only ever shrink during a search, so restoring the heap
    /// order after a decrease is an upward sift only.
    fn decrease(&mut self, slot: usize, distance: Distance) {
        self.entries[slot].0 = distance;
        self.sift_up(slot);
    }
}

impl VertexDistanceQueue for VertexDistanceQueueIndexedHeap {
    fn clear(&mut self) {
        for &(_, vertex) in &self.entries {
            self.slots[vertex as usize] = None;
        }
        self.entries.clear();
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        match self.slots[vertex as usize] {
            Some(slot) if distance < self.entries[slot].0 => self.decrease(slot, distance),
            Some(_) => {}
            None => self.push(vertex, distance),
        }
    }

    fn pop(&mut self) -> Option<Vertex> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap_entries(0, last);

        let (_, vertex) = self.entries.pop().unwrap();
        self.slots[vertex as usize] = None;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some(vertex)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
