use log::{debug, trace};
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{CellState, GridCoordinate, COMPASS_ORDER};
use crate::grid::{Grid, GridError};
use crate::units::{ColumnsCount, RowsCount};

/// Passages are carved between cells two steps apart, knocking out the wall cell between them.
const CARVE_STEP: usize = 2;

/// A candidate carving move from an already open cell to a cell two steps away.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct FrontierEdge {
    pub from: GridCoordinate,
    pub to: GridCoordinate,
}

impl FrontierEdge {
    /// The wall cell separating the two ends of the edge.
    #[inline]
    pub fn midpoint(&self) -> GridCoordinate {
        self.from.midpoint(self.to)
    }
}

pub type FrontierEdgeSmallVec = SmallVec<[FrontierEdge; 4]>;

/// Where the generator put the two maze markers.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Endpoints {
    pub start: GridCoordinate,
    pub end: GridCoordinate,
}

/// Allocate a new grid and carve a maze into it with `prims`.
pub fn generate<R>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Result<Grid, GridError>
    where R: Rng + ?Sized
{
    let mut grid = Grid::new(rows, columns)?;
    let _ = prims(&mut grid, rng);
    Ok(grid)
}

/// Apply a randomised Prim's algorithm to the grid.
///
/// Cells an even number of steps away from a random start cell act as the nodes of a graph, with
/// the cell between two nodes acting as the edge. Starting with every cell a wall, the start is
/// opened and the edges leaving it go into a frontier. An edge drawn uniformly at random from the
/// frontier is carved when its far end is still a wall, and that end then adds its own edges.
/// Once the frontier is exhausted every node is open exactly once, giving a perfect maze with no
/// loops.
///
/// The start cell is then marked `Start` and an independently drawn random cell is marked `End`.
/// No constraint is placed on the end cell: it may be a wall, sit next to the start, or replace the
/// start marker entirely.
pub fn prims<R>(grid: &mut Grid, rng: &mut R) -> Endpoints
    where R: Rng + ?Sized
{
    for coord in grid.iter() {
        grid.set(coord, CellState::Wall);
    }

    let start = grid.random_cell(rng);
    let carved = carve_passages(grid, start, rng);

    grid.set(start, CellState::Start);
    let end = grid.random_cell(rng);
    grid.set(end, CellState::End);

    debug!("Carved {} passages on a {}x{} grid, start {} end {}",
           carved,
           grid.rows().0,
           grid.columns().0,
           start,
           end);

    Endpoints { start, end }
}

/// Open `start` and grow a spanning tree of passages out from it.
///
/// Returns how many cells were carved beyond the start cell. Each carve opens two cells: the
/// target node and the wall cell in between.
pub fn carve_passages<R>(grid: &mut Grid, start: GridCoordinate, rng: &mut R) -> usize
    where R: Rng + ?Sized
{
    grid.set(start, CellState::Open);

    let mut frontier: Vec<FrontierEdge> = frontier_edges(grid, start).into_iter().collect();
    let mut carved = 0;

    while !frontier.is_empty() {
        let pick = rng.gen::<usize>() % frontier.len();
        let edge = frontier.swap_remove(pick);

        if grid.get(edge.to).is_wall() {
            trace!("Carving {} -> {}", edge.from, edge.to);
            grid.set(edge.midpoint(), CellState::Open);
            grid.set(edge.to, CellState::Open);
            frontier.extend(frontier_edges(grid, edge.to));
            carved += 1;
        }
    }

    carved
}

/// Every edge from `coord` to a cell two steps away that is still on the grid, in compass order.
pub fn frontier_edges(grid: &Grid, coord: GridCoordinate) -> FrontierEdgeSmallVec {
    COMPASS_ORDER.iter()
        .filter_map(|dir| grid.neighbour_at_direction(coord, *dir, CARVE_STEP))
        .map(|to| FrontierEdge { from: coord, to })
        .collect()
}
