use super::cell::{Cell, CellKind};

/// Row-major rectangular array of cell classifications.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Box<[CellKind]>,
    height: usize,
    width: usize,
}

impl Grid {
    pub fn new(height: usize, width: usize, kind: CellKind) -> Self {
        let data = vec![kind; height * width].into_boxed_slice();
        Grid {
            data,
            height,
            width,
        }
    }

    /// Wraps row-major `cells`, or `None` if their count is not `height * width`.
    pub fn from_cells(height: usize, width: usize, cells: Vec<CellKind>) -> Option<Self> {
        (height.checked_mul(width) == Some(cells.len())).then(|| Grid {
            data: cells.into_boxed_slice(),
            height,
            width,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: (usize, usize)) -> bool {
        coord.0 < self.height && coord.1 < self.width
    }

    pub fn ravel_index(&self, coord: (usize, usize)) -> usize {
        coord.0 * self.width + coord.1
    }

    pub fn unravel_index(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    pub fn is_wall(&self, coord: (usize, usize)) -> bool {
        self[coord].is_wall()
    }

    pub fn set(&mut self, coord: (usize, usize), kind: CellKind) {
        let idx = self.ravel_index(coord);
        self.data[idx] = kind;
    }

    pub fn cell(&self, coord: (usize, usize)) -> Option<Cell> {
        self.is_in_bounds(coord)
            .then(|| Cell::new(coord.0, coord.1, self[coord]))
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.data.chunks(self.width.max(1))
    }

    /// Orthogonal neighbors of `coord` that lie inside the grid, in the order up, left, right, down.
    pub fn neighbors(&self, coord: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, column) = coord;
        [
            // NOTE: row - 1 or column - 1 wraps to usize::MAX on underflow, and row + 1 or
            // column + 1 saturates at usize::MAX. Both are then dropped by the bounds check.
            (row.wrapping_sub(1), column),
            (row, column.wrapping_sub(1)),
            (row, column.saturating_add(1)),
            (row.saturating_add(1), column),
        ]
        .into_iter()
        .filter(move |&c| self.is_in_bounds(c))
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = CellKind;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}
