//! This is priority queue that supports changing priorities of its elements.
//!
//! It keeps two ordered indexes over one set of elements: a hash index from
//! value to priority and a tree index from priority to the values sharing it.
//!
//! Each element has associated *value* and *priority*.
//! Values must be unique, hashable and ordered; priorities must implement
//! the Ord trait and need not be unique.
//!
//! The front element is the one with the lowest priority; among elements tied
//! on that priority, the lowest value is in front, so draining order is fully
//! deterministic.
//!
//! Insert, update of a priority and removal of the front have ***O(log n)***
//! time complexity; front access, lookup by value and size queries are
//! ***O(1)***.
//!
//! The crate also ships [`const_sqrt`], an unrelated square-root routine
//! usable in constant expressions.
//!
//! # Examples
//!
//! This is an implementation of [Dijkstra's algorithm][dijkstra] over an
//! edge-weighted directed graph given as adjacency lists.
//!
//! The frontier holds every reachable but unsettled node. When a shorter
//! path to a node already in the frontier is found, the node's priority
//! needs to be lowered to the new distance.
//!
//! This example shows how to change priorities in [`UpdatablePriorityQueue`]
//! when needed.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`UpdatablePriorityQueue`]: struct.UpdatablePriorityQueue.html
//! [`const_sqrt`]: fn.const_sqrt.html
//!
//! ```
//! use updatable_priority_queue::UpdatablePriorityQueue;
//!
//! fn shortest_distance(
//!     adjacency: &[Vec<(usize, u64)>],
//!     start: usize,
//!     target: usize,
//! ) -> Option<u64> {
//!     let mut settled = vec![false; adjacency.len()];
//!     // Nodes to visit next, keyed by the best known distance to them.
//!     let mut frontier = UpdatablePriorityQueue::<usize, u64>::new();
//!     frontier.insert(start, 0);
//!
//!     while let Some((node, distance)) = frontier.pop_front() {
//!         if node == target {
//!             return Some(distance);
//!         }
//!         settled[node] = true;
//!
//!         for &(next, weight) in &adjacency[node] {
//!             if settled[next] {
//!                 continue;
//!             }
//!             let candidate = distance + weight;
//!             match frontier.get_priority(&next) {
//!                 None => {
//!                     // First path to this node found
//!                     frontier.insert(next, candidate);
//!                 }
//!                 Some(&known) if candidate < known => {
//!                     // Have found shorter path to node in frontier
//!                     frontier.update(&next, candidate);
//!                 }
//!                 _ => { /* Have found longer path. */ }
//!             }
//!         }
//!     }
//!     None
//! }
//!
//! let adjacency: Vec<Vec<(usize, u64)>> = vec![
//!     vec![(1, 7), (2, 2)],
//!     vec![(3, 1)],
//!     vec![(1, 3), (3, 8), (4, 12)],
//!     vec![(4, 2)],
//!     vec![],
//! ];
//!
//! assert_eq!(shortest_distance(&adjacency, 0, 4), Some(8));
//! assert_eq!(shortest_distance(&adjacency, 4, 0), None);
//! ```

mod const_sqrt;
mod priority_groups;
mod updatable_priority_queue;
mod value_index;

pub use crate::const_sqrt::const_sqrt;
pub use crate::updatable_priority_queue::{
    PriorityGroupIter, UpdatablePriorityQueue, UpdatablePriorityQueueBorrowIter,
    UpdatablePriorityQueueIterator,
};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
