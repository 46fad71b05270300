use std::convert::TryFrom;
use std::fmt;

use crate::units::{ColumnIndex, ColumnsCount, RowIndex};

/// What occupies a single square of the maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Wall,
    Open,
    Start,
    End,
    SolutionMark,
}

impl CellState {
    /// The character used for this state in a text rendering of the maze.
    pub fn symbol(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Open => ' ',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::SolutionMark => 'o',
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }
}

impl TryFrom<char> for CellState {
    type Error = char;

    fn try_from(symbol: char) -> Result<CellState, char> {
        match symbol {
            '#' => Ok(CellState::Wall),
            ' ' => Ok(CellState::Open),
            'S' => Ok(CellState::Start),
            'E' => Ok(CellState::End),
            'o' => Ok(CellState::SolutionMark),
            unknown => Err(unknown),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Zero based (row, column) position on a grid.
///
/// Structural equality and hashing make it usable directly as a map key when
/// tracking how a cell was reached.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> GridCoordinate {
        GridCoordinate::new(row_index.0, col_index.0)
    }

    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> GridCoordinate {
        let ColumnsCount(row_length) = columns;
        let row = index / row_length;
        let column = index - (row * row_length);
        GridCoordinate::new(row, column)
    }

    #[inline]
    pub fn row_index(&self) -> RowIndex {
        RowIndex(self.row)
    }

    #[inline]
    pub fn column_index(&self) -> ColumnIndex {
        ColumnIndex(self.column)
    }

    /// Coordinate half way between this and another coordinate, component-wise rounding down.
    pub fn midpoint(&self, other: GridCoordinate) -> GridCoordinate {
        GridCoordinate::new((self.row + other.row) / 2,
                            (self.column + other.column) / 2)
    }

    /// Creates a new coordinate offset `steps` cells away in the given direction.
    /// Returns None if the coordinate would fall below zero; the upper bounds are for the grid to check.
    pub fn offset(&self, dir: CompassPrimary, steps: usize) -> Option<GridCoordinate> {
        let (row, column) = (self.row, self.column);
        match dir {
            CompassPrimary::North => row.checked_sub(steps).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::South => row.checked_add(steps).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::West => column.checked_sub(steps).map(|c| GridCoordinate::new(row, c)),
            CompassPrimary::East => column.checked_add(steps).map(|c| GridCoordinate::new(row, c)),
        }
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// Up, down, left, right. Search order over these decides which of several equally short
/// paths gets found first.
pub const COMPASS_ORDER: [CompassPrimary; 4] = [CompassPrimary::North,
                                                CompassPrimary::South,
                                                CompassPrimary::West,
                                                CompassPrimary::East];
