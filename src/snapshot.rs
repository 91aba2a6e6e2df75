use itertools::Itertools;
use serde_derive::Serialize;
use std::hash::Hash;

use crate::graph::Graph;

/// A borrowed, serializable view of a graph's nodes and edges.
///
/// Serializes as `{"nodes": [node, ...], "edges": [[source, target], ...]}`. Labels are not included.
/// Nodes and edges are sorted so the output is stable across runs.
#[derive(Debug, Serialize)]
pub struct GraphSnapshot<'a, N> {
    nodes: Vec<&'a N>,
    edges: Vec<(&'a N, &'a N)>,
}

impl<'a, N> GraphSnapshot<'a, N>
    where N: Eq + Hash + Clone + Ord
{
    pub fn new<L>(graph: &'a Graph<N, L>) -> GraphSnapshot<'a, N> {
        GraphSnapshot {
            nodes: graph.nodes().sorted().collect(),
            edges: graph.edges().map(|e| (&e.source, &e.target)).sorted().collect(),
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[&'a N] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[(&'a N, &'a N)] {
        &self.edges
    }
}

pub fn to_json<N, L>(graph: &Graph<N, L>) -> serde_json::Result<String>
    where N: Eq + Hash + Clone + Ord + serde::Serialize
{
    serde_json::to_string(&GraphSnapshot::new(graph))
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators::{generate_maze, Maze};
    use crate::units::{Height, Width};

    #[test]
    fn two_cell_maze_json() {
        let maze = generate_maze(Width(2), Height(1));
        assert_eq!(to_json(&maze).unwrap(),
                   r#"{"nodes":[[0,0],[1,0]],"edges":[[[0,0],[1,0]],[[1,0],[0,0]]]}"#);
    }

    #[test]
    fn empty_graph_json() {
        let g = Maze::new();
        assert_eq!(to_json(&g).unwrap(), r#"{"nodes":[],"edges":[]}"#);
    }

    #[test]
    fn snapshot_is_sorted() {
        let mut g = Graph::<u8, f64>::new();
        g.add_nodes(vec![3, 1, 2]);
        g.add_edges(vec![(3, 1), (1, 2), (1, 1)]);
        let snapshot = GraphSnapshot::new(&g);
        assert_eq!(snapshot.nodes(), &[&1, &2, &3]);
        assert_eq!(snapshot.edges(), &[(&1, &1), (&1, &2), (&3, &1)]);
    }

    #[test]
    fn snapshot_round_trips_through_json_values() {
        let maze = generate_maze(Width(3), Height(3));
        let value: serde_json::Value = serde_json::from_str(&to_json(&maze).unwrap()).unwrap();
        assert_eq!(value["nodes"].as_array().map(|a| a.len()), Some(9));
        assert_eq!(value["edges"].as_array().map(|a| a.len()), Some(16));
        assert_eq!(value["nodes"][0], serde_json::json!([0, 0]));
    }
}
