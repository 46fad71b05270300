//! **maze_runner** generates perfect mazes on a rectangular character grid and finds the
//! shortest route through them.

pub mod cells;
pub mod generators;
pub mod grid;
pub mod grid_iterators;
pub mod maze;
pub mod pathing;
pub mod units;
pub mod utils;
