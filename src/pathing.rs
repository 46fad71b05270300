//! Shortest path search from the `Start` cell to the `End` cell of a grid.
//!
//! Every non-wall cell is a node and every pair of side by side non-wall cells is an edge of
//! unit weight, so a breadth first flood finds a shortest route. The flood records how each cell
//! was first reached; walking those records back from the end gives the path.

use std::collections::VecDeque;

use log::debug;

use crate::cells::{CellState, GridCoordinate, COMPASS_ORDER};
use crate::grid::Grid;
use crate::utils::{self, FnvHashMap};

pub type Path = Vec<GridCoordinate>;

/// How each visited cell was first reached. The search origin maps to `None`.
type ParentMap = FnvHashMap<GridCoordinate, Option<GridCoordinate>>;

/// Find the shortest path from `Start` to `End` and mark the cells along it.
///
/// Returns `None` when the end cannot be reached, leaving the grid untouched.
///
/// # Panics
/// If the grid has no `Start` cell.
pub fn solve(grid: &mut Grid) -> Option<Path> {
    let start = find_start(grid);
    solve_from(grid, start)
}

/// As `solve`, but searching from a known start coordinate rather than scanning for the marker.
pub fn solve_from(grid: &mut Grid, start: GridCoordinate) -> Option<Path> {
    let path = shortest_path_from(grid, start)?;
    mark_path(grid, &path);
    Some(path)
}

/// Shortest `Start` to `End` path without touching the grid.
///
/// # Panics
/// If the grid has no `Start` cell.
pub fn shortest_path(grid: &Grid) -> Option<Path> {
    shortest_path_from(grid, find_start(grid))
}

/// Breadth first search from `start` to the first `End` cell dequeued.
///
/// Neighbours are expanded up, down, left, right, so among equally short paths the one found
/// first under that order is returned.
pub fn shortest_path_from(grid: &Grid, start: GridCoordinate) -> Option<Path> {
    let mut parents: ParentMap = utils::fnv_hashmap(grid.size());
    let mut queue = VecDeque::new();
    parents.insert(start, None);
    queue.push_back(start);

    while let Some(coord) = queue.pop_front() {
        if grid.get(coord) == CellState::End {
            let path = backtrack(&parents, coord);
            debug!("Found a path of {} cells from {} to {}", path.len(), start, coord);
            return Some(path);
        }

        for dir in &COMPASS_ORDER {
            if let Some(next) = grid.neighbour_at_direction(coord, *dir, 1) {
                if !grid.get(next).is_wall() && !parents.contains_key(&next) {
                    parents.insert(next, Some(coord));
                    queue.push_back(next);
                }
            }
        }
    }

    debug!("No path from {} after visiting {} cells", start, parents.len());
    None
}

/// Mark every cell on the path as part of the solution, except the start and end markers.
pub fn mark_path(grid: &mut Grid, path: &[GridCoordinate]) {
    for &coord in path {
        match grid.get(coord) {
            CellState::Start | CellState::End => {}
            _ => grid.set(coord, CellState::SolutionMark),
        }
    }
}

fn find_start(grid: &Grid) -> GridCoordinate {
    grid.find_first(CellState::Start)
        .expect("Grid has no Start cell to search from.")
}

fn backtrack(parents: &ParentMap, end: GridCoordinate) -> Path {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&Some(parent)) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
