use std::ops::Index;

/// Immutable 3×3 matrix of `f64`, indexed as `(row, col)`.
///
/// Rows correspond to the N-anchor residues and columns to the C-anchor
/// residues. Iteration is always row-major: `(0,0), (0,1), (0,2), (1,0), …`,
/// which is also the order of the distance columns in the output database
/// and of the lines in a distance table file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix3 {
    cells: [[f64; 3]; 3],
}

impl Matrix3 {
    pub const SIZE: usize = 3;

    pub const fn new(cells: [[f64; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut cells = [[0.0; 3]; 3];
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = f(i, j);
            }
        }
        Self { cells }
    }

    /// Builds a matrix from nine values in row-major order.
    pub fn from_row_major(values: [f64; 9]) -> Self {
        Self::from_fn(|i, j| values[i * Self::SIZE + j])
    }

    /// Returns a copy with a single cell replaced.
    pub fn with(mut self, row: usize, col: usize, value: f64) -> Self {
        self.cells[row][col] = value;
        self
    }

    /// Iterates over the cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Row-major `(row, col)` coordinates of every cell.
    pub fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..Self::SIZE).flat_map(|i| (0..Self::SIZE).map(move |j| (i, j)))
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.cells[row][col]
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(cells: [[f64; 3]; 3]) -> Self {
        Self::new(cells)
    }
}
