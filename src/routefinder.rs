/*
routefinder.rs

Copyright 2026 Gamebox contributors

This file is part of Gamebox.

Gamebox is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gamebox is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gamebox. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Shortest-path route finder over a small weighted map.
//!
//! The map is a fixed six-node undirected graph. Routes are computed with
//! Dijkstra's algorithm, backed by a sorted-insertion priority queue: inserts
//! keep the vector ordered by priority, and the minimum pops from the front.

use log::debug;
use std::collections::HashMap;

/// The locations on the map.
pub const LOCATIONS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// A computed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Ordered list of locations from start to destination. Empty when the
    /// destination is unreachable.
    pub path: Vec<String>,

    /// Total distance, or None when no route exists.
    pub distance: Option<u32>,
}

/// Priority queue with O(n) sorted insertion.
pub struct PriorityQueue<T> {
    items: Vec<(T, u32)>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    /// Create a [`PriorityQueue`] object.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert an element, keeping the queue sorted by ascending priority.
    pub fn enqueue(&mut self, element: T, priority: u32) {
        let position: usize = self
            .items
            .iter()
            .position(|(_, p)| priority < *p)
            .unwrap_or(self.items.len());
        self.items.insert(position, (element, priority));
    }

    /// Remove and return the element with the lowest priority.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0).0)
        }
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The weighted undirected road map.
pub struct Map {
    /// Adjacency list: for each location, its neighbors and edge weights.
    edges: HashMap<&'static str, Vec<(&'static str, u32)>>,
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Map {
    /// Create the fixed six-location map.
    pub fn new() -> Self {
        let mut edges: HashMap<&'static str, Vec<(&'static str, u32)>> = HashMap::new();
        edges.insert("A", vec![("B", 2), ("C", 7)]);
        edges.insert("B", vec![("A", 2), ("C", 5), ("D", 3)]);
        edges.insert("C", vec![("A", 7), ("B", 5), ("D", 8), ("F", 4)]);
        edges.insert("D", vec![("B", 3), ("C", 8), ("E", 1)]);
        edges.insert("E", vec![("D", 1), ("F", 2)]);
        edges.insert("F", vec![("C", 4), ("E", 2)]);
        Self { edges }
    }

    /// Whether the location exists on the map.
    pub fn contains(&self, location: &str) -> bool {
        self.edges.contains_key(location)
    }

    /// Compute the shortest route between two locations with Dijkstra's
    /// algorithm.
    ///
    /// Distances start at infinity (None) and the start at zero. The
    /// algorithm repeatedly takes the closest unvisited location from the
    /// queue, relaxes its neighbor edges, and stops when the queue runs out.
    /// The route is rebuilt by walking the predecessor links back from the
    /// destination.
    pub fn shortest_route(&self, start: &str, end: &str) -> Route {
        let mut dist: HashMap<&str, u32> = HashMap::new();
        let mut prev: HashMap<&str, &str> = HashMap::new();
        let mut visited: Vec<&str> = Vec::with_capacity(self.edges.len());
        let mut queue: PriorityQueue<&str> = PriorityQueue::new();

        dist.insert(start, 0);
        queue.enqueue(start, 0);

        while let Some(current) = queue.dequeue() {
            if visited.contains(&current) {
                continue;
            }
            visited.push(current);
            let current_dist: u32 = dist[current];
            debug!("Visiting {current} at distance {current_dist}");

            if let Some(neighbors) = self.edges.get(current) {
                for &(neighbor, weight) in neighbors {
                    if visited.contains(&neighbor) {
                        continue;
                    }
                    let candidate: u32 = current_dist + weight;
                    // Relaxation: keep the shorter estimate
                    if dist.get(neighbor).is_none_or(|d| candidate < *d) {
                        dist.insert(neighbor, candidate);
                        prev.insert(neighbor, current);
                        queue.enqueue(neighbor, candidate);
                    }
                }
            }
        }

        let distance: Option<u32> = dist.get(end).copied();
        if distance.is_none() {
            return Route {
                path: Vec::new(),
                distance: None,
            };
        }

        let mut path: Vec<String> = Vec::new();
        let mut cursor: &str = end;
        loop {
            path.push(cursor.to_string());
            match prev.get(cursor) {
                Some(&p) => cursor = p,
                None => break,
            }
        }
        path.reverse();

        Route { path, distance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_lowest_priority_first() {
        let mut queue: PriorityQueue<&str> = PriorityQueue::new();
        queue.enqueue("far", 9);
        queue.enqueue("near", 1);
        queue.enqueue("mid", 5);
        assert_eq!(queue.dequeue(), Some("near"));
        assert_eq!(queue.dequeue(), Some("mid"));
        assert_eq!(queue.dequeue(), Some("far"));
        assert!(queue.is_empty());
    }

    #[test]
    fn shortest_route_a_to_e() {
        let map: Map = Map::new();
        let route: Route = map.shortest_route("A", "E");
        // A-B (2) + B-D (3) + D-E (1) = 6
        assert_eq!(route.distance, Some(6));
        assert_eq!(route.path, vec!["A", "B", "D", "E"]);
    }

    #[test]
    fn equal_candidate_does_not_displace_first_relaxation() {
        let map: Map = Map::new();
        // Direct A-C weighs 7, A-B-C weighs 7 too; the direct edge relaxes
        // first and is never displaced by an equal candidate.
        let route: Route = map.shortest_route("A", "C");
        assert_eq!(route.distance, Some(7));
    }

    #[test]
    fn route_to_self_is_trivial() {
        let map: Map = Map::new();
        let route: Route = map.shortest_route("D", "D");
        assert_eq!(route.distance, Some(0));
        assert_eq!(route.path, vec!["D"]);
    }

    #[test]
    fn unknown_destination_has_no_route() {
        let map: Map = Map::new();
        let route: Route = map.shortest_route("A", "Z");
        assert_eq!(route.distance, None);
        assert!(route.path.is_empty());
    }

    #[test]
    fn all_pairs_are_reachable() {
        let map: Map = Map::new();
        for start in LOCATIONS {
            for end in LOCATIONS {
                let route: Route = map.shortest_route(start, end);
                assert!(route.distance.is_some(), "{start} -> {end}");
                assert_eq!(route.path.first().map(String::as_str), Some(start));
                assert_eq!(route.path.last().map(String::as_str), Some(end));
            }
        }
    }
}
