use std::{ops, slice, vec};

/// Owned, growable ordered sequence.
///
/// Used to accumulate vertices and spanning tree edges. Every mutating method works in place,
/// there is no hidden sharing between lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an element at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Moves every element of `other` to the end of this list, keeping their order.
    pub fn append(&mut self, mut other: List<T>) {
        self.items.append(&mut other.items);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Everything after the first element, empty for lists shorter than two.
    pub fn rest(&self) -> &[T] {
        self.items.get(1..).unwrap_or_default()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ops::Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::List;

    fn words(items: &[&'static str]) -> List<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut list = List::new();
        assert!(list.is_empty());

        list.push("");
        list.push("Dhilan");
        list.push("Damian");

        assert_eq!(list, words(&["", "Dhilan", "Damian"]));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn append() {
        let mut empty = List::new();
        empty.append(words(&["maze", "is", "difficult"]));
        assert_eq!(empty, words(&["maze", "is", "difficult"]));

        let mut list = words(&["maze", "is", "difficult"]);
        list.append(List::new());
        assert_eq!(list.len(), 3);

        let mut list = words(&["maze", "is", "very", "difficult"]);
        list.append(words(&["maze", "is", "difficult"]));
        assert_eq!(
            list,
            words(&["maze", "is", "very", "difficult", "maze", "is", "difficult"])
        );
    }

    #[test]
    fn first_rest_and_get() {
        let empty: List<&str> = List::new();
        assert_eq!(empty.first(), None);
        assert!(empty.rest().is_empty());
        assert_eq!(empty.get(0), None);

        let list = words(&["maze", "is", "difficult"]);
        assert_eq!(list.first(), Some(&"maze"));
        assert_eq!(list.rest(), ["is", "difficult"]);
        assert_eq!(list.get(2), Some(&"difficult"));
        assert_eq!(list.get(3), None);
        assert_eq!(list[1], "is");
    }
}
