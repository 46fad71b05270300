//! Newtypes keeping row and column quantities apart.

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct ColumnIndex(pub usize);

impl RowsCount {
    #[inline]
    pub fn contains(self, RowIndex(row): RowIndex) -> bool {
        row < self.0
    }
}

impl ColumnsCount {
    #[inline]
    pub fn contains(self, ColumnIndex(column): ColumnIndex) -> bool {
        column < self.0
    }
}
