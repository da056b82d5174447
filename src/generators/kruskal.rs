use rand::{Rng, seq::SliceRandom};

use super::UnionFind;
use crate::maze::Cell;

/// Candidate connection between two coarse cells, stored as their flat indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub first: usize,
    pub second: usize,
}

/// Randomized Kruskal over the coarse grid of passage centers.
///
/// A maze of `height × width` fine cells has its passage centers at odd rows and columns,
/// which form a `⌊(height-1)/2⌋ × ⌊(width-1)/2⌋` coarse grid. A spanning tree over that grid
/// is turned back into the fine wall cells that have to be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassageTree {
    height: usize,
    width: usize,
}

impl PassageTree {
    /// Builds the coarse grid for a maze of the given fine dimensions.
    pub fn new(maze_height: usize, maze_width: usize) -> Self {
        PassageTree {
            height: maze_height.saturating_sub(1) / 2,
            width: maze_width.saturating_sub(1) / 2,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn to_index(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    fn from_index(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Every pair of horizontally or vertically adjacent coarse cells.
    pub fn candidate_edges(&self) -> Vec<Edge> {
        let (height, width) = (self.height, self.width);
        (0..height)
            .flat_map(|row| (0..width).map(move |column| (row, column)))
            .flat_map(|(row, column)| {
                [
                    (column + 1 < width).then(|| Edge {
                        first: self.to_index(row, column),
                        second: self.to_index(row, column + 1),
                    }),
                    (row + 1 < height).then(|| Edge {
                        first: self.to_index(row, column),
                        second: self.to_index(row + 1, column),
                    }),
                ]
            })
            .flatten()
            .collect()
    }

    /// Shuffles the candidates and keeps each one that joins two separate components.
    pub fn spanning_tree<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Edge> {
        let mut edges = self.candidate_edges();
        let candidates = edges.len();
        edges.shuffle(rng);

        let mut uf = UnionFind::new(self.height * self.width);
        edges.retain(|edge| uf.union(edge.first, edge.second));

        tracing::debug!(
            "[generate] kept {} of {} candidate edges over a {}x{} coarse grid",
            edges.len(),
            candidates,
            self.height,
            self.width
        );
        edges
    }

    /// The fine-grid wall cells that must become passages to realize a random spanning tree.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Cell> {
        self.spanning_tree(rng)
            .into_iter()
            .map(|edge| self.passage(edge))
            .collect()
    }

    /// The wall cell sitting between the two coarse cells of `edge`.
    fn passage(&self, edge: Edge) -> Cell {
        let (r1, c1) = self.from_index(edge.first);
        let (r2, c2) = self.from_index(edge.second);
        // Coarse (r, c) lives at fine (2r + 1, 2c + 1), so the midpoint is the sum plus one.
        Cell::passage(r1 + r2 + 1, c1 + c2 + 1)
    }
}
