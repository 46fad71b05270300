use std::fmt;

use rand::Rng;

use crate::cells::GridCoordinate;
use crate::generators::{self, Endpoints};
use crate::grid::{Grid, GridError};
use crate::pathing::{self, Path};
use crate::units::{ColumnsCount, RowsCount};

/// A generated maze together with where its start and end markers were placed.
///
/// Remembering the start coordinate lets the maze be solved even when the end marker was drawn on
/// top of the start marker.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    endpoints: Endpoints,
}

impl Maze {
    pub fn new<R>(rows: RowsCount, columns: ColumnsCount, rng: &mut R) -> Result<Maze, GridError>
        where R: Rng + ?Sized
    {
        let mut grid = Grid::new(rows, columns)?;
        let endpoints = generators::prims(&mut grid, rng);
        Ok(Maze { grid, endpoints })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.endpoints.start
    }

    #[inline]
    pub fn end(&self) -> GridCoordinate {
        self.endpoints.end
    }

    /// Find and mark the shortest path from start to end. `None` when the two are not connected.
    pub fn solve(&mut self) -> Option<Path> {
        pathing::solve_from(&mut self.grid, self.endpoints.start)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::cells::CellState;

    #[test]
    fn single_cell_maze() {
        let mut rng = XorShiftRng::seed_from_u64(9);
        let mut maze = Maze::new(RowsCount(1), ColumnsCount(1), &mut rng).unwrap();
        let origin = GridCoordinate::new(0, 0);
        assert_eq!(maze.start(), origin);
        assert_eq!(maze.end(), origin);

        assert_eq!(maze.solve(), Some(vec![origin]));
        assert_eq!(maze.grid().count(CellState::SolutionMark), 0);
        assert_eq!(format!("{}", maze), "E\n");
    }

    #[test]
    fn invalid_dimensions() {
        let mut rng = XorShiftRng::seed_from_u64(9);
        assert_eq!(Maze::new(RowsCount(0), ColumnsCount(1), &mut rng).unwrap_err(),
                   GridError::InvalidDimensions);
    }

    #[test]
    fn seeded_maze_matches_plain_generation() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        let mut maze = Maze::new(RowsCount(5), ColumnsCount(5), &mut rng).unwrap();
        assert_eq!(maze.start(), GridCoordinate::new(4, 1));
        assert_eq!(maze.end(), GridCoordinate::new(1, 2));

        let mut rng = XorShiftRng::seed_from_u64(42);
        let plain = generators::generate(RowsCount(5), ColumnsCount(5), &mut rng).unwrap();
        assert_eq!(maze.grid(), &plain);

        let path = maze.solve().unwrap();
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.end()));
    }

    #[test]
    fn render_parse_round_trip() {
        let mut rng = XorShiftRng::seed_from_u64(1234);
        let mut maze = Maze::new(RowsCount(11), ColumnsCount(17), &mut rng).unwrap();
        let _ = maze.solve();
        let rendered = format!("{}", maze);
        let parsed = rendered.parse::<Grid>().unwrap();
        assert_eq!(&parsed, maze.grid());
        assert_eq!(format!("{}", parsed), rendered);
    }

    #[test]
    fn quickcheck_render_parse_round_trip() {
        fn p(rows: u8, columns: u8, seed: u64, solve: bool) -> bool {
            let (rows, columns) = (rows as usize % 30 + 1, columns as usize % 30 + 1);
            let mut rng = XorShiftRng::seed_from_u64(seed);
            let mut maze = Maze::new(RowsCount(rows), ColumnsCount(columns), &mut rng).unwrap();
            if solve {
                let _ = maze.solve();
            }
            format!("{}", maze).parse::<Grid>().as_ref() == Ok(maze.grid())
        }
        quickcheck(p as fn(u8, u8, u64, bool) -> bool);
    }
}
