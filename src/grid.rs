use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::cells::{CellState, CompassPrimary, GridCoordinate};
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{ColumnsCount, RowsCount};


/// Rectangular array of cell states, stored row-major.
///
/// The dimensions are fixed at construction and every cell always holds a state.
#[derive(Clone, Eq, PartialEq)]
pub struct Grid {
    cells: Vec<CellState>,
    rows: RowsCount,
    columns: ColumnsCount,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridError {
    InvalidDimensions,
    RaggedRows { row: usize, expected: usize, found: usize },
    UnknownSymbol { row: usize, column: usize, symbol: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridError::InvalidDimensions => {
                write!(f, "grid rows and columns must both be at least 1")
            }
            GridError::RaggedRows { row, expected, found } => {
                write!(f, "row {} has {} cells, expected {}", row, found, expected)
            }
            GridError::UnknownSymbol { row, column, symbol } => {
                write!(f, "unknown maze symbol {:?} at row {} column {}", symbol, row, column)
            }
        }
    }
}

impl Error for GridError {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}\n{}", self.rows, self.columns, self)
    }
}

impl Grid {
    /// Allocate a grid of the given size with every cell a `Wall`.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid, GridError> {
        if rows.0 == 0 || columns.0 == 0 {
            return Err(GridError::InvalidDimensions);
        }
        let cells_count = rows.0.checked_mul(columns.0).ok_or(GridError::InvalidDimensions)?;

        Ok(Grid {
            cells: vec![CellState::Wall; cells_count],
            rows,
            columns,
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// State of the cell at `coord`.
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, coord: GridCoordinate) -> CellState {
        self.cells[self.checked_index(coord)]
    }

    /// Overwrite the state of the cell at `coord`.
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn set(&mut self, coord: GridCoordinate, state: CellState) {
        let index = self.checked_index(coord);
        self.cells[index] = state;
    }

    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.rows.contains(coord.row_index()) && self.columns.contains(coord.column_index())
    }

    /// The cell `steps` away from `coord` in `direction`, if it is on the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary,
                                  steps: usize)
                                  -> Option<GridCoordinate> {
        coord.offset(direction, steps)
            .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Uniformly pick any cell on the grid.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> GridCoordinate {
        let index = rng.gen::<usize>() % self.size();
        GridCoordinate::from_row_major_index(index, self.columns)
    }

    /// First cell in row-major order holding `state`.
    pub fn find_first(&self, state: CellState) -> Option<GridCoordinate> {
        self.cells
            .iter()
            .position(|&cell| cell == state)
            .map(|index| GridCoordinate::from_row_major_index(index, self.columns))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    pub fn iter(&self) -> CellIter {
        CellIter::new(self.rows, self.columns)
    }

    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.rows, self.columns)
    }

    fn checked_index(&self, coord: GridCoordinate) -> usize {
        if !self.is_valid_coordinate(coord) {
            panic!("Coordinate {} is outside the {}x{} grid.", coord, self.rows.0, self.columns.0);
        }
        coord.row * self.columns.0 + coord.column
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut output = String::with_capacity(self.rows.0 * (self.columns.0 + 1));
        for row in self.iter_row() {
            output.extend(row.into_iter().map(|coord| self.get(coord).symbol()));
            output.push('\n');
        }
        write!(f, "{}", output)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse the text rendering of a grid: one line per row, one symbol per cell.
    fn from_str(text: &str) -> Result<Grid, GridError> {
        let lines = text.lines().collect::<Vec<&str>>();
        let rows_count = lines.len();
        let columns_count = lines.first().map_or(0, |line| line.chars().count());

        let mut grid = Grid::new(RowsCount(rows_count), ColumnsCount(columns_count))?;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns_count {
                return Err(GridError::RaggedRows { row, expected: columns_count, found });
            }
            for (column, symbol) in line.chars().enumerate() {
                let state = CellState::try_from(symbol)
                    .map_err(|symbol| GridError::UnknownSymbol { row, column, symbol })?;
                grid.set(GridCoordinate::new(row, column), state);
            }
        }

        Ok(grid)
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn small_grid(rows: usize, columns: usize) -> Grid {
        Grid::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    #[test]
    fn new_grid_is_all_wall() {
        let g = small_grid(3, 4);
        assert_eq!(g.size(), 12);
        assert_eq!(g.rows(), RowsCount(3));
        assert_eq!(g.columns(), ColumnsCount(4));
        assert!(g.iter().all(|coord| g.get(coord) == CellState::Wall));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Grid::new(RowsCount(0), ColumnsCount(4)), Err(GridError::InvalidDimensions));
        assert_eq!(Grid::new(RowsCount(4), ColumnsCount(0)), Err(GridError::InvalidDimensions));
        assert_eq!(Grid::new(RowsCount(0), ColumnsCount(0)), Err(GridError::InvalidDimensions));
    }

    #[test]
    fn get_and_set() {
        let mut g = small_grid(2, 3);
        let coord = GridCoordinate::new(1, 2);
        g.set(coord, CellState::Open);
        assert_eq!(g.get(coord), CellState::Open);
        assert_eq!(g.get(GridCoordinate::new(0, 2)), CellState::Wall);
        assert_eq!(g.count(CellState::Open), 1);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let g = small_grid(2, 3);
        g.get(GridCoordinate::new(0, 3));
    }

    #[test]
    #[should_panic]
    fn set_out_of_range_panics() {
        let mut g = small_grid(2, 3);
        g.set(GridCoordinate::new(2, 0), CellState::Open);
    }

    #[test]
    fn neighbour_at_dir() {
        let g = small_grid(3, 3);
        let gc = |r, c| GridCoordinate::new(r, c);
        let check_neighbour = |coord, dir: CompassPrimary, steps, expected| {
            assert_eq!(g.neighbour_at_direction(coord, dir, steps), expected);
        };
        check_neighbour(gc(0, 0), CompassPrimary::North, 1, None);
        check_neighbour(gc(0, 0), CompassPrimary::South, 1, Some(gc(1, 0)));
        check_neighbour(gc(0, 0), CompassPrimary::South, 2, Some(gc(2, 0)));
        check_neighbour(gc(0, 0), CompassPrimary::South, 3, None);
        check_neighbour(gc(0, 0), CompassPrimary::East, 2, Some(gc(0, 2)));
        check_neighbour(gc(0, 0), CompassPrimary::West, 1, None);

        check_neighbour(gc(2, 2), CompassPrimary::North, 2, Some(gc(0, 2)));
        check_neighbour(gc(2, 2), CompassPrimary::East, 1, None);
        check_neighbour(gc(2, 2), CompassPrimary::West, 2, Some(gc(2, 0)));
    }

    #[test]
    fn random_cell() {
        let g = small_grid(4, 7);
        let mut rng = XorShiftRng::seed_from_u64(17);
        for _ in 0..1000 {
            let coord = g.random_cell(&mut rng);
            assert!(g.is_valid_coordinate(coord));
        }
    }

    #[test]
    fn find_first_scans_row_major() {
        let mut g = small_grid(3, 3);
        assert_eq!(g.find_first(CellState::Start), None);
        g.set(GridCoordinate::new(2, 0), CellState::Start);
        g.set(GridCoordinate::new(1, 2), CellState::Start);
        assert_eq!(g.find_first(CellState::Start), Some(GridCoordinate::new(1, 2)));
    }

    #[test]
    fn into_iter_matches_iter() {
        let g = small_grid(2, 2);
        let via_ref = (&g).into_iter().collect::<Vec<_>>();
        assert_eq!(via_ref, g.iter().collect::<Vec<_>>());
        assert_eq!(via_ref.iter().cloned().sorted().collect::<Vec<_>>(), via_ref);
    }

    #[test]
    fn render() {
        let mut g = small_grid(2, 3);
        g.set(GridCoordinate::new(0, 0), CellState::Start);
        g.set(GridCoordinate::new(0, 1), CellState::SolutionMark);
        g.set(GridCoordinate::new(1, 1), CellState::Open);
        g.set(GridCoordinate::new(1, 2), CellState::End);
        assert_eq!(format!("{}", g), "So#\n# E\n");
    }

    #[test]
    fn parse_reverses_render() {
        let text = "#S#\n# #\n#oE\n";
        let g = text.parse::<Grid>().unwrap();
        assert_eq!(g.rows(), RowsCount(3));
        assert_eq!(g.columns(), ColumnsCount(3));
        assert_eq!(g.get(GridCoordinate::new(0, 1)), CellState::Start);
        assert_eq!(g.get(GridCoordinate::new(2, 1)), CellState::SolutionMark);
        assert_eq!(format!("{}", g), text);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridError::InvalidDimensions));
        assert_eq!("\n".parse::<Grid>(), Err(GridError::InvalidDimensions));
        assert_eq!("##\n#\n".parse::<Grid>(),
                   Err(GridError::RaggedRows { row: 1, expected: 2, found: 1 }));
        assert_eq!("#x\n".parse::<Grid>(),
                   Err(GridError::UnknownSymbol { row: 0, column: 1, symbol: 'x' }));
    }
}
