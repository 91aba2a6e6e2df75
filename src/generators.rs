use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary, ALL_DIRECTIONS};
use crate::graph::Graph;
use crate::units::{Height, Width};
use crate::utils;
use crate::utils::{FnvHashSet, RandomPickSet};

/// A maze is a graph of grid cells where an edge pair between two adjacent cells is an open passage.
pub type Maze = Graph<Cartesian2DCoordinate, f64>;

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;
pub type DirectionSmallVec = SmallVec<[CompassPrimary; 4]>;

/// Generate a maze over a `width` by `height` grid, seeded from the thread local random generator.
///
/// See `generate_maze_with_rng`.
pub fn generate_maze(width: Width, height: Height) -> Maze {
    let seed = rand::thread_rng().gen::<u64>();
    generate_maze_seeded(width, height, seed)
}

/// Generate a maze that is reproducible: the same seed and dimensions always give the same maze.
pub fn generate_maze_seeded(width: Width, height: Height, seed: u64) -> Maze {
    log::debug!("Maze seed: {}", seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);
    generate_maze_with_rng(width, height, &mut rng)
}

/// Carve a random spanning tree through a `width` by `height` grid of cells.
///
/// Starting from the `(0, 0)` cell, the tree grows from a frontier: the cells already in the tree
/// that may still have neighbours outside it. Each step picks a frontier cell at random and links it to
/// one of its neighbours not yet in the tree, also chosen at random, which then joins the frontier.
/// A frontier cell with no such neighbours left is retired.
///
/// Every cell ends up in the tree, so the maze is perfect: exactly one path between any two cells,
/// `width * height - 1` passages, each stored as a pair of directed edges. No labels are set.
///
/// A grid with no cells gives an empty maze. So does a grid whose sides do not fit a `u32`
/// coordinate, or whose cell count overflows `usize`; a warning is logged for those.
pub fn generate_maze_with_rng<R>(width: Width, height: Height, rng: &mut R) -> Maze
    where R: Rng + ?Sized
{
    let (w, h, cells_count) = match grid_size(width, height) {
        Some(size) => size,
        None => {
            log::warn!("Grid of {:?} by {:?} is too large for a maze", width, height);
            return Maze::new();
        }
    };
    let mut maze = Maze::with_capacity(cells_count, 2 * cells_count.saturating_sub(1));
    if cells_count == 0 {
        return maze;
    }

    maze.add_nodes((0..w).flat_map(|x| {
        (0..h).map(move |y| Cartesian2DCoordinate::new(x, y))
    }));

    let mut todo = RandomPickSet::with_capacity(cells_count);
    todo.insert(Cartesian2DCoordinate::new(0, 0));
    let mut visited: FnvHashSet<Cartesian2DCoordinate> = utils::fnv_hashset(cells_count);

    while let Some(current) = todo.choose(rng) {

        let candidates = grid_neighbours(current, width, height)
            .into_iter()
            .filter(|c| !visited.contains(c) && !todo.contains(c))
            .collect::<CoordinateSmallVec>();

        if let Some(&next) = candidates.choose(rng) {
            maze.add_undirected_edge(current, next);
            todo.insert(next);
        }

        // The candidate just linked is now in the tree, so at most one candidate means none remain.
        if candidates.len() <= 1 {
            todo.remove(&current);
            visited.insert(current);
        }
    }

    log::debug!("Generated {}x{} maze with {} passages", w, h, maze.edge_count() / 2);
    maze
}

/// The 4-connected neighbours of `coord` that lie inside a `width` by `height` grid.
pub fn grid_neighbours(coord: Cartesian2DCoordinate,
                       width: Width,
                       height: Height)
                       -> CoordinateSmallVec {
    ALL_DIRECTIONS.iter()
        .filter_map(|dir| coord.offset(*dir))
        .filter(|c| is_in_grid(*c, width, height))
        .collect()
}

/// The grid sides as coordinate values and the cell count, or None if either does not fit.
fn grid_size(Width(width): Width, Height(height): Height) -> Option<(u32, u32, usize)> {
    let w = u32::try_from(width).ok()?;
    let h = u32::try_from(height).ok()?;
    let cells_count = width.checked_mul(height)?;
    Some((w, h, cells_count))
}

/// The bottom right (south east) cell of a `width` by `height` grid.
///
/// None for a grid with no cells, or one too large for `generate_maze_with_rng` to build.
pub fn last_cell(width: Width, height: Height) -> Option<Cartesian2DCoordinate> {
    match grid_size(width, height)? {
        (w, h, _) if w > 0 && h > 0 => Some(Cartesian2DCoordinate::new(w - 1, h - 1)),
        _ => None,
    }
}

#[inline]
pub fn is_in_grid(coord: Cartesian2DCoordinate, Width(width): Width, Height(height): Height) -> bool {
    (coord.x as usize) < width && (coord.y as usize) < height
}

/// Is there an open passage leaving `coord` towards `direction`?
pub fn is_neighbour_linked(maze: &Maze, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
    coord.offset(direction)
        .map_or(false, |neighbour| maze.contains_edge(&coord, &neighbour))
}

/// The sides of the cell at `coord` that are walled off, i.e. have no passage through them.
///
/// Cells on the grid boundary always have walls on their outer sides. This is everything a renderer
/// needs to draw the cell.
pub fn walls(maze: &Maze, coord: Cartesian2DCoordinate) -> DirectionSmallVec {
    ALL_DIRECTIONS.iter()
        .cloned()
        .filter(|dir| !is_neighbour_linked(maze, coord, *dir))
        .collect()
}
