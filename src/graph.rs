use itertools::Itertools;
use std::fmt;
use std::hash::Hash;

use crate::utils;
use crate::utils::{FnvHashMap, FnvHashSet};

/// A directed connection from `source` to `target`.
///
/// An undirected connection is two edges, one in each direction.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Edge<N> {
    pub source: N,
    pub target: N,
}

impl<N> Edge<N> {
    pub fn new(source: N, target: N) -> Edge<N> {
        Edge { source, target }
    }

    pub fn reversed(self) -> Edge<N> {
        Edge {
            source: self.target,
            target: self.source,
        }
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from(source_target_pair: (N, N)) -> Edge<N> {
        Edge::new(source_target_pair.0, source_target_pair.1)
    }
}

/// A set of nodes and a set of directed edges between them, with optional edge labels.
///
/// The graph only grows. Edges may name nodes that were never added, and labels may name edges that
/// do not exist; neither is an error. Iteration order over nodes, edges and labels is unspecified.
#[derive(Clone, Debug)]
pub struct Graph<N: Eq + Hash, L = f64> {
    nodes: FnvHashSet<N>,
    edges: FnvHashSet<Edge<N>>,
    labels: FnvHashMap<Edge<N>, L>,
    // source -> targets, always in step with `edges`
    adjacency: FnvHashMap<N, FnvHashSet<N>>,
}

impl<N: Eq + Hash, L> Default for Graph<N, L> {
    fn default() -> Graph<N, L> {
        Graph {
            nodes: utils::fnv_hashset(0),
            edges: utils::fnv_hashset(0),
            labels: utils::fnv_hashmap(0),
            adjacency: utils::fnv_hashmap(0),
        }
    }
}

impl<N, L> Graph<N, L>
    where N: Eq + Hash + Clone
{
    pub fn new() -> Graph<N, L> {
        Graph::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Graph<N, L> {
        Graph {
            nodes: utils::fnv_hashset(nodes),
            edges: utils::fnv_hashset(edges),
            labels: utils::fnv_hashmap(0),
            adjacency: utils::fnv_hashmap(nodes),
        }
    }

    /// Insert each node. Nodes already present are left alone.
    pub fn add_nodes<I>(&mut self, nodes: I)
        where I: IntoIterator<Item = N>
    {
        self.nodes.extend(nodes);
    }

    /// Insert each directed edge. Edges already present are left alone.
    ///
    /// The endpoints are not checked against, nor added to, the node set.
    pub fn add_edges<I, E>(&mut self, edges: I)
        where I: IntoIterator<Item = E>,
              E: Into<Edge<N>>
    {
        for edge in edges {
            let edge = edge.into();
            if self.edges.contains(&edge) {
                continue;
            }
            self.adjacency
                .entry(edge.source.clone())
                .or_insert_with(|| utils::fnv_hashset(4))
                .insert(edge.target.clone());
            self.edges.insert(edge);
        }
    }

    /// Insert the edge pair `a -> b` and `b -> a`.
    pub fn add_undirected_edge(&mut self, a: N, b: N) {
        self.add_edges([(a.clone(), b.clone()), (b, a)]);
    }

    /// The targets of every edge leaving `node`.
    ///
    /// A node with no outgoing edges, or one not in the graph, has no neighbours.
    pub fn neighbors(&self, node: &N) -> FnvHashSet<N> {
        self.adjacency
            .get(node)
            .cloned()
            .unwrap_or_else(|| utils::fnv_hashset(0))
    }

    /// Borrowing version of `neighbors`.
    pub fn successors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + 'a {
        self.adjacency.get(node).into_iter().flat_map(|targets| targets.iter())
    }

    /// Attach `label` to the edge, returning the label it replaces.
    pub fn label_edge<E: Into<Edge<N>>>(&mut self, edge: E, label: L) -> Option<L> {
        self.labels.insert(edge.into(), label)
    }

    #[inline]
    pub fn label(&self, edge: &Edge<N>) -> Option<&L> {
        self.labels.get(edge)
    }

    #[inline]
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    #[inline]
    pub fn contains_edge(&self, source: &N, target: &N) -> bool {
        self.adjacency.get(source).map_or(false, |targets| targets.contains(target))
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<N>> {
        self.edges.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = (&Edge<N>, &L)> {
        self.labels.iter()
    }
}

impl<N, L> fmt::Display for Graph<N, L>
    where N: Eq + Hash + fmt::Debug,
          L: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let nodes = self.nodes.iter().map(|n| format!("{:?}", n)).join(", ");
        let edges = self.edges
            .iter()
            .map(|e| format!("{:?} -> {:?}", e.source, e.target))
            .join(", ");
        let labels = self.labels
            .iter()
            .map(|(e, l)| format!("{:?} -> {:?}: {:?}", e.source, e.target, l))
            .join(", ");
        write!(f, "nodes: {{{}}}\nedges: {{{}}}\nlabels: {{{}}}", nodes, edges, labels)
    }
}
