//! LRU Tracker Module
//!
//! Arena-backed recency list used for LRU eviction.
//!
//! Nodes live in a slot vector and are linked to each other by index, so
//! handles stay valid across unrelated insertions and removals and no node
//! ever owns another. Reclaimed slots are kept on a free list and reused.
//!
//! ```text
//!   head (MRU) ─► [3] ◄──► [0] ◄──► [2] ◄── tail (LRU)
//! ```
//!
//! All operations are O(1) except `drain` and iteration.

// == Node Handle ==
/// Handle to a node in an [`LruTracker`].
///
/// A handle is valid until its node is removed. Vacated slots are reused, so a
/// handle kept past removal may later address an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct LruTracker<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> LruTracker<T> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a value as the most recently used node and returns its handle.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let node = Node {
            value,
            prev: None,
            next: self.head,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };

        match self.head {
            Some(head) => self.node_mut(head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    // == Move To Front ==
    /// Marks a node as recently used.
    ///
    /// Does nothing if the handle's slot is vacant.
    pub fn move_to_front(&mut self, id: NodeId) {
        if !self.contains(id) || self.head == Some(id) {
            return;
        }
        self.unlink(id);
        let old_head = self.head;
        {
            let node = self.node_mut(id);
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => self.node_mut(head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    // == Remove ==
    /// Removes a node, returning its value and releasing its slot.
    ///
    /// Returns None if the handle's slot is vacant.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.unlink(id);
        let node = self.slots[id.0].take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.value)
    }

    // == Back ==
    /// Returns the handle of the least recently used node.
    pub fn back(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the value stored at `id`.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored at `id`.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots
            .get_mut(id.0)
            .and_then(|slot| slot.as_mut())
            .map(|node| &mut node.value)
    }

    /// Checks if a handle refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    // == Iteration ==
    /// Iterates values from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tracker: self,
            cursor: self.head,
            forward: true,
        }
    }

    /// Iterates values from least to most recently used.
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            tracker: self,
            cursor: self.tail,
            forward: false,
        }
    }

    // == Drain ==
    /// Removes every node, yielding values in unspecified order.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.free.clear();
        self.slots.drain(..).flatten().map(|node| node.value)
    }

    // == Length ==
    /// Returns the number of tracked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = {
            let node = self.node_mut(id);
            (node.prev.take(), node.next.take())
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    // Links only ever point at live slots.
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots[id.0].as_mut() {
            Some(node) => node,
            None => unreachable!("linked node {} is vacant", id.0),
        }
    }
}

impl<T> Default for LruTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Walks an [`LruTracker`] in either direction.
pub struct Iter<'a, T> {
    tracker: &'a LruTracker<T>,
    cursor: Option<NodeId>,
    forward: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.tracker.slots.get(id.0)?.as_ref()?;
        self.cursor = if self.forward { node.next } else { node.prev };
        Some(&node.value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order<T: Clone>(lru: &LruTracker<T>) -> Vec<T> {
        lru.iter().cloned().collect()
    }

    #[test]
    fn test_lru_new() {
        let lru: LruTracker<&str> = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert!(lru.back().is_none());
    }

    #[test]
    fn test_lru_push_front_order() {
        let mut lru = LruTracker::new();

        let a = lru.push_front("a");
        lru.push_front("b");
        lru.push_front("c");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.back(), Some(a));
        assert_eq!(order(&lru), vec!["c", "b", "a"]);
        assert_eq!(lru.iter_rev().cloned().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_lru_move_to_front() {
        let mut lru = LruTracker::new();

        let a = lru.push_front("a");
        let b = lru.push_front("b");
        lru.push_front("c");

        lru.move_to_front(a);
        assert_eq!(order(&lru), vec!["a", "c", "b"]);
        assert_eq!(lru.back(), Some(b));

        // Moving the head is a no-op
        lru.move_to_front(a);
        assert_eq!(order(&lru), vec!["a", "c", "b"]);

        lru.move_to_front(b);
        assert_eq!(order(&lru), vec!["b", "a", "c"]);
        assert_eq!(lru.iter_rev().cloned().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_lru_remove_middle_and_ends() {
        let mut lru = LruTracker::new();

        let a = lru.push_front("a");
        let b = lru.push_front("b");
        let c = lru.push_front("c");

        assert_eq!(lru.remove(b), Some("b"));
        assert_eq!(order(&lru), vec!["c", "a"]);

        assert_eq!(lru.remove(a), Some("a"));
        assert_eq!(lru.back(), Some(c));
        assert_eq!(order(&lru), vec!["c"]);

        assert_eq!(lru.remove(c), Some("c"));
        assert!(lru.is_empty());
        assert!(lru.back().is_none());
    }

    #[test]
    fn test_lru_vacant_handle_is_ignored() {
        let mut lru = LruTracker::new();

        let a = lru.push_front("a");
        lru.push_front("b");
        assert_eq!(lru.remove(a), Some("a"));

        assert_eq!(lru.remove(a), None);
        lru.move_to_front(a);
        assert_eq!(order(&lru), vec!["b"]);
        assert!(!lru.contains(a));
    }

    #[test]
    fn test_lru_slot_reuse() {
        let mut lru = LruTracker::new();

        let a = lru.push_front("a");
        lru.push_front("b");
        lru.remove(a);

        let c = lru.push_front("c");
        assert_eq!(c, a);
        assert_eq!(lru.get(c), Some(&"c"));
        assert_eq!(order(&lru), vec!["c", "b"]);

        // The handle from before removal now addresses the new node
        assert_eq!(lru.get(a), Some(&"c"));
    }

    #[test]
    fn test_lru_get_mut() {
        let mut lru = LruTracker::new();
        let id = lru.push_front(1);

        if let Some(value) = lru.get_mut(id) {
            *value = 5;
        }
        assert_eq!(lru.get(id), Some(&5));
    }

    #[test]
    fn test_lru_drain() {
        let mut lru = LruTracker::new();
        let a = lru.push_front(1);
        lru.push_front(2);
        lru.push_front(3);
        lru.remove(a);

        let mut drained: Vec<_> = lru.drain().collect();
        drained.sort();
        assert_eq!(drained, vec![2, 3]);
        assert!(lru.is_empty());
        assert!(lru.back().is_none());

        // Tracker is reusable after draining
        lru.push_front(4);
        assert_eq!(order(&lru), vec![4]);
    }
}
