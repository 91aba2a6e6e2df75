use smallvec::SmallVec;
use std::collections::VecDeque;
use std::hash::Hash;

use crate::graph::Graph;
use crate::utils;
use crate::utils::{FnvHashMap, FnvHashSet};

/// Find a shortest path, counted in edges, from `source` to `target`.
///
/// The returned path starts with `source` and ends with `target`. `None` means there is no path,
/// which includes the case of `source` not being in the graph. When several shortest paths exist any
/// one of them may be returned.
///
/// A node is always reachable from itself, even if it is absent from the graph.
pub fn path_to<N, L>(graph: &Graph<N, L>, source: &N, target: &N) -> Option<Vec<N>>
    where N: Eq + Hash + Clone
{
    if source == target {
        return Some(vec![source.clone()]);
    }

    let mut best_path_so_far: FnvHashMap<N, Vec<N>> = utils::fnv_hashmap(graph.node_count());
    best_path_so_far.insert(source.clone(), vec![source.clone()]);

    // FIFO order expands nodes in non decreasing distance from the source. A node's path is set on
    // its first discovery only, so it is never replaced by a longer one.
    let mut todo = VecDeque::new();
    todo.push_back(source.clone());
    let mut visited: FnvHashSet<N> = utils::fnv_hashset(graph.node_count());

    while let Some(node) = todo.pop_front() {

        let path = match best_path_so_far.get(&node) {
            Some(p) => p.clone(),
            None => continue,
        };

        for neighbour in graph.successors(&node) {
            if visited.contains(neighbour) || best_path_so_far.contains_key(neighbour) {
                continue;
            }

            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(neighbour.clone());

            if neighbour == target {
                log::trace!("Path found after expanding {} nodes", visited.len() + 1);
                return Some(extended);
            }

            best_path_so_far.insert(neighbour.clone(), extended);
            todo.push_back(neighbour.clone());
        }

        visited.insert(node);
    }

    log::trace!("No path found after expanding {} nodes", visited.len());
    None
}

/// Hop counts from one start node to every node reachable from it.
#[derive(Debug, Clone)]
pub struct Distances<N: Eq + Hash> {
    start: N,
    distances: FnvHashMap<N, usize>,
    max_distance: usize,
}

impl<N> Distances<N>
    where N: Eq + Hash + Clone
{
    pub fn for_graph<L>(graph: &Graph<N, L>, start: N) -> Distances<N> {

        let mut distances: FnvHashMap<N, usize> = utils::fnv_hashmap(graph.node_count());
        distances.insert(start.clone(), 0);
        let mut max = 0;

        // Every edge is one step, so the first distance recorded for a node is already the
        // shortest. The distances map doubles as the visited set.
        let mut frontier = vec![start.clone()];
        let mut distance = 0;
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for node in &frontier {
                for neighbour in graph.successors(node) {
                    if !distances.contains_key(neighbour) {
                        distances.insert(neighbour.clone(), distance + 1);
                        new_frontier.push(neighbour.clone());
                    }
                }
            }

            if !new_frontier.is_empty() {
                distance += 1;
                max = distance;
            }
            frontier = new_frontier;
        }

        Distances {
            start,
            distances,
            max_distance: max,
        }
    }

    #[inline(always)]
    pub fn start(&self) -> &N {
        &self.start
    }

    #[inline(always)]
    pub fn max(&self) -> usize {
        self.max_distance
    }

    /// None if `node` is unreachable from the start.
    #[inline(always)]
    pub fn distance_to(&self, node: &N) -> Option<usize> {
        self.distances.get(node).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points(&self) -> SmallVec<[N; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(node, _)| node.clone())
            .collect()
    }
}

/// The longest shortest path within the part of the graph reachable from `start`.
///
/// Exact only for trees such as a generated maze, where the node furthest from any node is one end
/// of a longest path. On graphs with cycles you get back some long path. None if `start` is not a
/// node of the graph.
pub fn longest_path<N, L>(graph: &Graph<N, L>, start: &N) -> Option<Vec<N>>
    where N: Eq + Hash + Clone
{
    if !graph.contains_node(start) {
        return None;
    }

    let first_distances = Distances::for_graph(graph, start.clone());
    let path_start = first_distances.furthest_points().into_iter().next()?;

    let distances_from_path_start = Distances::for_graph(graph, path_start.clone());
    let path_end = distances_from_path_start.furthest_points().into_iter().next()?;

    path_to(graph, &path_start, &path_end)
}
