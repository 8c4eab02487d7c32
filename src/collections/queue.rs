use super::{CollectionError, Deque, List};

/// Discovered-but-not-expanded items of a search.
pub trait Frontier<T>: Default {
    fn put(&mut self, item: T);
    fn take(&mut self) -> Result<T, CollectionError>;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}

/// First in, first out. Items enter at the bottom and leave from the head.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: Deque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: Deque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Last in, first out. Items enter and leave at the head.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Deque<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: Deque::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_front(item);
    }

    pub fn pop(&mut self) -> Result<T, CollectionError> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Bulk construction keeps sequence order: the first element is the first one removed.

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<List<T>> for Queue<T> {
    fn from(list: List<T>) -> Self {
        list.into_iter().collect()
    }
}

impl<T> From<List<T>> for Stack<T> {
    fn from(list: List<T>) -> Self {
        list.into_iter().collect()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn put(&mut self, item: T) {
        self.enqueue(item);
    }

    fn take(&mut self) -> Result<T, CollectionError> {
        self.dequeue()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }

    fn take(&mut self) -> Result<T, CollectionError> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        for i in 1..=4 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 4);

        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(5);
        let rest: Vec<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
        assert_eq!(rest, [2, 3, 4, 5]);
        assert_eq!(queue.dequeue(), Err(CollectionError::Empty));
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        for i in 1..=4 {
            stack.push(i);
        }
        assert_eq!(stack.peek(), Some(&4));
        assert_eq!(stack.pop(), Ok(4));
        stack.push(5);
        let rest: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();
        assert_eq!(rest, [5, 3, 2, 1]);
        assert_eq!(stack.pop(), Err(CollectionError::Empty));
    }

    #[test]
    fn bulk_construction_keeps_order() {
        let list: List<_> = vec!['a', 'b', 'c'].into();
        let mut queue = Queue::from(list.clone());
        let mut stack = Stack::from(list);

        assert_eq!(queue.dequeue(), Ok('a'));
        assert_eq!(stack.pop(), Ok('a'));
        assert_eq!(queue.len(), 2);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn frontier_clear() {
        fn fill_and_clear<F: Frontier<u8>>() {
            let mut frontier = F::default();
            frontier.put(1);
            frontier.put(2);
            assert!(!frontier.is_empty());
            frontier.clear();
            assert!(frontier.is_empty());
            assert_eq!(frontier.take(), Err(CollectionError::Empty));
        }

        fill_and_clear::<Queue<u8>>();
        fill_and_clear::<Stack<u8>>();
    }
}
