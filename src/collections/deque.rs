use std::mem;

use super::CollectionError;

const SENTINEL: usize = 0;

/// Handle to a node of a [`Deque`].
///
/// Handles stay valid until their node is removed. A removed node's slot may be reused, the
/// generation makes sure an old handle never resolves to the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub const SENTINEL: NodeId = NodeId {
        index: SENTINEL,
        generation: 0,
    };

    pub fn is_sentinel(self) -> bool {
        self.index == SENTINEL
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Sentinel,
    Data(T),
    Free,
}

#[derive(Debug, Clone)]
struct Node<T> {
    slot: Slot<T>,
    generation: u32,
    next: usize,
    prev: usize,
}

/// Circular doubly linked list with a single sentinel, stored in an arena.
///
/// Slot `0` is always the sentinel, it never holds data. Links are arena indices, so inserting
/// or removing a node is just rewiring its two neighbours.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                slot: Slot::Sentinel,
                generation: 0,
                next: SENTINEL,
                prev: SENTINEL,
            }],
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T) -> NodeId {
        let head = self.nodes[SENTINEL].next;
        self.link(value, SENTINEL, head)
    }

    pub fn push_back(&mut self, value: T) -> NodeId {
        let tail = self.nodes[SENTINEL].prev;
        self.link(value, tail, SENTINEL)
    }

    pub fn pop_front(&mut self) -> Result<T, CollectionError> {
        let head = self.nodes[SENTINEL].next;
        self.unlink(head).ok_or(CollectionError::Empty)
    }

    pub fn pop_back(&mut self) -> Result<T, CollectionError> {
        let tail = self.nodes[SENTINEL].prev;
        self.unlink(tail).ok_or(CollectionError::Empty)
    }

    pub fn front(&self) -> Option<&T> {
        self.data(self.nodes[SENTINEL].next)
    }

    pub fn back(&self) -> Option<&T> {
        self.data(self.nodes[SENTINEL].prev)
    }

    /// Inserts `value` right after the node `after`. Inserting after the sentinel is the same as
    /// [`push_front`](Self::push_front).
    pub fn insert_after(&mut self, after: NodeId, value: T) -> Result<NodeId, CollectionError> {
        if !self.is_live(after) {
            return Err(CollectionError::InvalidNode(after));
        }

        let next = self.nodes[after.index].next;
        Ok(self.link(value, after.index, next))
    }

    /// Returns the first node from the head whose value matches `pred`, or
    /// [`NodeId::SENTINEL`] if there is none.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> NodeId {
        let mut cursor = self.nodes[SENTINEL].next;
        while cursor != SENTINEL {
            let node = &self.nodes[cursor];
            if let Slot::Data(value) = &node.slot {
                if pred(value) {
                    return NodeId {
                        index: cursor,
                        generation: node.generation,
                    };
                }
            }
            cursor = node.next;
        }

        NodeId::SENTINEL
    }

    /// Unlinks the node and returns its value. Does nothing for the sentinel or a stale handle.
    pub fn remove_node(&mut self, node: NodeId) -> Option<T> {
        if node.is_sentinel() || !self.is_live(node) {
            return None;
        }
        self.unlink(node.index)
    }

    pub fn get(&self, node: NodeId) -> Option<&T> {
        if !self.is_live(node) {
            return None;
        }
        self.data(node.index)
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Iterates values from the head to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            cursor: self.nodes[SENTINEL].next,
        }
    }

    fn is_live(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.index)
            .is_some_and(|n| n.generation == node.generation && !matches!(n.slot, Slot::Free))
    }

    fn data(&self, index: usize) -> Option<&T> {
        match &self.nodes.get(index)?.slot {
            Slot::Data(value) => Some(value),
            Slot::Sentinel | Slot::Free => None,
        }
    }

    // `prev` and `next` must be adjacent live members of the chain
    fn link(&mut self, value: T, prev: usize, next: usize) -> NodeId {
        let index = match self.free.pop() {
            Some(index) => {
                let node = &mut self.nodes[index];
                node.slot = Slot::Data(value);
                node.prev = prev;
                node.next = next;
                index
            }
            None => {
                self.nodes.push(Node {
                    slot: Slot::Data(value),
                    generation: 0,
                    next,
                    prev,
                });
                self.nodes.len() - 1
            }
        };

        self.nodes[prev].next = index;
        self.nodes[next].prev = index;
        self.len += 1;

        NodeId {
            index,
            generation: self.nodes[index].generation,
        }
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        let node = self.nodes.get_mut(index)?;
        let value = match mem::replace(&mut node.slot, Slot::Free) {
            Slot::Data(value) => value,
            other => {
                node.slot = other;
                return None;
            }
        };
        node.generation = node.generation.wrapping_add(1);
        let (prev, next) = (node.prev, node.next);

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(index);
        self.len -= 1;

        Some(value)
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        for value in iter {
            deque.push_back(value);
        }
        deque
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == SENTINEL {
            return None;
        }

        let node = &self.deque.nodes[self.cursor];
        self.cursor = node.next;
        match &node.slot {
            Slot::Data(value) => Some(value),
            Slot::Sentinel | Slot::Free => None,
        }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Deque<&'static str> {
        ["abc", "bcd", "cde", "def"].into_iter().collect()
    }

    #[test]
    fn empty_deque() {
        let mut deque: Deque<i32> = Deque::new();
        assert_eq!(deque.len(), 0);
        assert!(deque.is_empty());
        assert_eq!(deque.pop_front(), Err(CollectionError::Empty));
        assert_eq!(deque.pop_back(), Err(CollectionError::Empty));
        assert!(deque.find(|_| true).is_sentinel());
        assert_eq!(deque.iter().count(), 0);
    }

    #[test]
    fn push_at_both_ends() {
        let mut deque = abcd();
        deque.push_front("first");
        deque.push_back("last");

        assert_eq!(deque.len(), 6);
        assert_eq!(
            deque.iter().copied().collect::<Vec<_>>(),
            ["first", "abc", "bcd", "cde", "def", "last"]
        );
        assert_eq!(deque.front(), Some(&"first"));
        assert_eq!(deque.back(), Some(&"last"));
    }

    #[test]
    fn pop_from_both_ends() {
        let mut deque = abcd();

        assert_eq!(deque.pop_front(), Ok("abc"));
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.pop_back(), Ok("def"));
        assert_eq!(deque.len(), 2);
        assert_eq!(deque.pop_back(), Ok("cde"));
        assert_eq!(deque.pop_front(), Ok("bcd"));
        assert!(deque.is_empty());
        assert_eq!(deque.pop_front(), Err(CollectionError::Empty));
    }

    #[test]
    fn find_and_remove_node() {
        let mut deque = abcd();

        let node = deque.find(|s| s.starts_with('c'));
        assert_eq!(deque.get(node), Some(&"cde"));
        assert_eq!(deque.remove_node(node), Some("cde"));
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), ["abc", "bcd", "def"]);

        // handle is stale now
        assert_eq!(deque.remove_node(node), None);
        assert_eq!(deque.get(node), None);

        let missing = deque.find(|s| s.is_empty());
        assert!(missing.is_sentinel());
        assert_eq!(deque.remove_node(missing), None);
        assert_eq!(deque.len(), 3);
    }

    #[test]
    fn reused_slot_does_not_revive_stale_handle() {
        let mut deque = Deque::new();
        let old = deque.push_back(1);
        assert_eq!(deque.pop_back(), Ok(1));

        let new = deque.push_back(2);
        assert_ne!(old, new);
        assert_eq!(deque.get(old), None);
        assert_eq!(deque.get(new), Some(&2));
        assert_eq!(
            deque.insert_after(old, 3),
            Err(CollectionError::InvalidNode(old))
        );
    }

    #[test]
    fn insert_after() {
        let mut deque = abcd();
        let bcd = deque.find(|s| *s == "bcd");
        deque.insert_after(bcd, "xyz").unwrap();
        deque.insert_after(NodeId::SENTINEL, "head").unwrap();

        assert_eq!(
            deque.iter().copied().collect::<Vec<_>>(),
            ["head", "abc", "bcd", "xyz", "cde", "def"]
        );
    }

    #[test]
    fn size_tracks_every_operation() {
        let mut deque = Deque::new();
        let mut expected = 0;
        for i in 0..10 {
            if i % 3 == 0 {
                deque.push_front(i);
            } else {
                deque.push_back(i);
            }
            expected += 1;
            assert_eq!(deque.len(), expected);
            assert_eq!(deque.iter().count(), expected);
        }
        while expected > 0 {
            if expected % 2 == 0 {
                deque.pop_front().unwrap();
            } else {
                deque.pop_back().unwrap();
            }
            expected -= 1;
            assert_eq!(deque.len(), expected);
            assert_eq!(deque.iter().count(), expected);
        }
    }

    #[test]
    fn clear() {
        let mut deque = abcd();
        let node = deque.find(|s| *s == "abc");
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.get(node), None);
        deque.push_back("again");
        assert_eq!(deque.pop_front(), Ok("again"));
    }
}
