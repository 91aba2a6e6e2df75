//! **graphmaze** is a small generic directed graph with breadth first path finding, and a random
//! spanning tree maze generator built on it.
//!
//! Rendering and serialization are left to callers: `generators::walls` tells a renderer where to
//! draw, and `snapshot` gives a serde view of any graph.

pub mod cells;
pub mod generators;
pub mod graph;
pub mod pathing;
pub mod snapshot;
pub mod units;
pub mod utils;

pub use crate::generators::{generate_maze, generate_maze_seeded, Maze};
pub use crate::graph::{Edge, Graph};
pub use crate::pathing::path_to;
