//! Stable top-down merge sort, used to order the edges for Kruskal's algorithm.

use std::cmp::Ordering;

/// Sorts `items` by `compare`. Items that compare equal keep their relative order.
pub fn merge_sort_by<T>(items: Vec<T>, mut compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    sort(items, &mut compare)
}

pub fn merge_sort_by_key<T, K: Ord>(items: Vec<T>, mut key: impl FnMut(&T) -> K) -> Vec<T> {
    merge_sort_by(items, |a, b| key(a).cmp(&key(b)))
}

/// Merges two runs into one. When the heads compare equal, the head of `left` goes first.
///
/// The runs are not required to be sorted, merging just repeatedly takes the smaller head.
pub fn merge_by<T>(
    left: Vec<T>,
    right: Vec<T>,
    mut compare: impl FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) != Ordering::Less,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged
}

fn sort<T, F: FnMut(&T, &T) -> Ordering>(mut items: Vec<T>, compare: &mut F) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = sort(items, compare);
    let right = sort(right, compare);

    merge_by(left, right, &mut *compare)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, VertexId};

    fn edge(weight: u32) -> Edge {
        Edge::new(VertexId(0), VertexId(0), weight)
    }

    fn weights(edges: &[Edge]) -> Vec<u32> {
        edges.iter().map(|e| e.weight).collect()
    }

    #[test]
    fn sorts_edges_by_weight() {
        let edges = [35, 14, 10, 30, 23].map(edge).to_vec();
        let sorted = merge_sort_by_key(edges, |e| e.weight);
        assert_eq!(weights(&sorted), [10, 14, 23, 30, 35]);
    }

    #[test]
    fn merge_takes_smaller_head() {
        let left = [35, 14, 10].map(edge).to_vec();
        let right = [30, 23].map(edge).to_vec();
        let merged = merge_by(left, right, |a, b| a.weight.cmp(&b.weight));
        assert_eq!(weights(&merged), [30, 23, 35, 14, 10]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];
        let sorted = merge_sort_by_key(items, |&(k, _)| k);
        assert_eq!(
            sorted,
            [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
    }

    #[test]
    fn matches_std_stable_sort() {
        let items: Vec<(u8, usize)> = (0..200).map(|i| (((i * 7919) % 13) as u8, i)).collect();
        let mut expected = items.clone();
        expected.sort_by_key(|&(k, _)| k);

        assert_eq!(merge_sort_by_key(items, |&(k, _)| k), expected);
    }

    #[test]
    fn trivial_inputs() {
        assert!(merge_sort_by_key(Vec::<u32>::new(), |&x| x).is_empty());
        assert_eq!(merge_sort_by_key(vec![7], |&x| x), [7]);
    }
}
