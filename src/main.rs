use docopt::Docopt;
use error_chain::bail;
use itertools::Itertools;
use serde_derive::Deserialize;
use graphmaze::{
    cells::Cartesian2DCoordinate,
    generators,
    generators::Maze,
    pathing,
    snapshot,
    units::{Height, Width},
};
use std::{
    fs::File,
    io::prelude::*,
};

const USAGE: &str = "Maze driver

Usage:
    maze_driver -h | --help
    maze_driver [--width=<w>] [--height=<h>] [--seed=<n>] [--json-out=<path>] [--show-path | --longest-path]

Options:
    -h --help            Show this screen.
    --width=<w>          Number of cells across the maze [default: 20].
    --height=<h>         Number of cells down the maze [default: 20].
    --seed=<n>           Seed for the maze generator, for a reproducible maze. Random if not given.
    --json-out=<path>    Write the maze nodes and edges to a JSON file.
    --show-path          Print the path from the top left cell to the bottom right cell.
    --longest-path       Print the longest path through the maze.

Set RUST_LOG=debug to see the generator's log output.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: usize,
    flag_height: usize,
    flag_seed: Option<u64>,
    flag_json_out: String,
    flag_show_path: bool,
    flag_longest_path: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            Io(::std::io::Error);
            Json(::serde_json::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    let (width, height) = (Width(args.flag_width), Height(args.flag_height));

    let maze = if let Some(seed) = args.flag_seed {
        generators::generate_maze_seeded(width, height, seed)
    } else {
        generators::generate_maze(width, height)
    };
    println!("{}x{} maze: {} cells, {} passages",
             args.flag_width,
             args.flag_height,
             maze.node_count(),
             maze.edge_count() / 2);

    if !args.flag_json_out.is_empty() {
        save_maze_json(&maze, &args.flag_json_out)?;
    }

    let path = if args.flag_show_path {
        let start = Cartesian2DCoordinate::new(0, 0);
        let end = match generators::last_cell(width, height) {
            Some(cell) => cell,
            None => bail!("A path needs a maze with at least one cell and sides of at most {} cells.",
                          u32::MAX),
        };
        Some(pathing::path_to(&maze, &start, &end))
    } else if args.flag_longest_path {
        Some(pathing::longest_path(&maze, &Cartesian2DCoordinate::new(0, 0)))
    } else {
        None
    };

    match path {
        Some(Some(cells)) => {
            println!("path of {} steps: {}", cells.len() - 1, cells.iter().join(" -> "));
        }
        Some(None) => println!("no path"),
        None => {}
    }

    Ok(())
}

fn save_maze_json(maze: &Maze, file_path: &str) -> Result<()> {
    let json = snapshot::to_json(maze)?;
    let mut f = File::create(file_path)
        .chain_err(|| format!("Failed to create maze JSON file {}", file_path))?;
    f.write_all(json.as_bytes())
        .chain_err(|| format!("Failed to write maze JSON file {}", file_path))?;
    Ok(())
}
