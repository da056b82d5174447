pub mod cell;
mod format;
mod grid;

use rand::Rng;
use std::fmt;

pub use cell::{Cell, CellKind};
pub use grid::Grid;

use crate::{
    error::{MazeError, Result},
    generators::{PassageTree, get_rng},
    solvers::solve_astar,
};

/// Smallest allowed height and width of a maze.
pub const MIN_SIDE: usize = 3;

/// A rectangular maze with its entrance in the top row and its exit in the bottom row.
///
/// Generated mazes are perfect: every passage is reachable from every other one by exactly one
/// route. Loaded mazes are taken as-is.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    /// Escape route from entrance to exit, empty until solved or when there is none
    escape: Vec<Cell>,
    solved: bool,
}

impl Maze {
    /// Generates a new maze using an OS-seeded random number generator.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Maze::with_rng(height, width, &mut get_rng(None))
    }

    /// Generates a reproducible maze: the same seed and dimensions give the same maze.
    pub fn with_seed(height: usize, width: usize, seed: u64) -> Result<Self> {
        Maze::with_rng(height, width, &mut get_rng(Some(seed)))
    }

    /// Generates a square maze.
    pub fn square(size: usize) -> Result<Self> {
        Maze::new(size, size)
    }

    /// Generates a new maze drawing randomness from `rng`.
    ///
    /// # Errors
    /// [`MazeError::InvalidDimensions`] if `height` or `width` is below [`MIN_SIDE`].
    pub fn with_rng<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Result<Self> {
        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(MazeError::InvalidDimensions { height, width });
        }

        let mut maze = Maze::from_grid(Maze::skeleton(height, width));
        let passages = PassageTree::new(height, width).generate(rng);
        tracing::debug!(
            "[generate] opening {} passages in a {}x{} maze",
            passages.len(),
            height,
            width
        );
        maze.apply(passages);
        Ok(maze)
    }

    fn from_grid(grid: Grid) -> Self {
        Maze {
            grid,
            escape: Vec::new(),
            solved: false,
        }
    }

    /// The grid before any random passage is opened: isolated passage cells at odd coordinates,
    /// walls everywhere else, plus the entrance and the exit.
    fn skeleton(height: usize, width: usize) -> Grid {
        let mut grid = Grid::new(height, width, CellKind::Wall);

        // Every second cell is a passage, the rest are walls
        (0..height).filter(|row| row % 2 == 1).for_each(|row| {
            (0..width)
                .filter(|column| column % 2 == 1)
                .for_each(|column| grid.set((row, column), CellKind::Passage));
        });

        // An even side leaves a trailing passage row or column that has to be closed again
        if height % 2 == 0 {
            (0..width).for_each(|column| grid.set((height - 1, column), CellKind::Wall));
        }
        if width % 2 == 0 {
            (0..height).for_each(|row| grid.set((row, width - 1), CellKind::Wall));
        }

        let exit_column = exit_column(width);
        grid.set((0, 1), CellKind::Passage);
        grid.set((height - 1, exit_column), CellKind::Passage);
        if height % 2 == 0 {
            grid.set((height - 2, exit_column), CellKind::Passage);
        }
        grid
    }

    /// Writes the given cells into the grid at their own positions.
    fn apply(&mut self, cells: impl IntoIterator<Item = Cell>) {
        for cell in cells {
            self.grid.set(cell.position(), cell.kind);
        }
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Column of the exit in the bottom row.
    pub fn exit_column(&self) -> usize {
        exit_column(self.width())
    }

    pub fn entrance(&self) -> Cell {
        Cell::new(0, 1, self.grid[(0, 1)])
    }

    pub fn exit(&self) -> Cell {
        let coord = (self.height() - 1, self.exit_column());
        Cell::new(coord.0, coord.1, self.grid[coord])
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.grid.cell((row, column))
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The escape route found by [`Maze::find_escape`], from entrance to exit.
    pub fn escape_path(&self) -> &[Cell] {
        &self.escape
    }

    /// Finds the route from the entrance to the exit, marks it on the grid and returns the
    /// rendering with the route shown.
    ///
    /// The search only runs once; later calls return the same rendering.
    pub fn find_escape(&mut self) -> String {
        if !self.solved {
            let entrance = self.entrance().position();
            let exit = self.exit().position();
            self.escape = solve_astar(&self.grid, entrance, exit);
            if self.escape.is_empty() {
                tracing::warn!("[solve] no escape from {entrance:?} to {exit:?}");
            } else {
                tracing::info!("[solve] escape found, {} cells long", self.escape.len());
            }
            let escape = self.escape.clone();
            self.apply(escape);
            self.solved = true;
        }
        self.render(true)
    }

    /// Two characters per cell, one line per row. The escape route is only drawn when
    /// `show_escape` is set and the maze has been solved.
    pub fn render(&self, show_escape: bool) -> String {
        let mut out = String::with_capacity(self.grid.len() * CellKind::CELL_WIDTH * 3);
        for row in self.grid.rows() {
            row.iter()
                .for_each(|kind| out.push_str(kind.glyph(show_escape)));
            out.push('\n');
        }
        out
    }

    /// Same layout as [`Maze::render`] with terminal colors.
    pub fn render_styled(&self, show_escape: bool) -> String {
        let mut out = String::new();
        for row in self.grid.rows() {
            for kind in row {
                out.push_str(&kind.styled(show_escape).to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Parses the text encoding produced by [`Maze::export`].
    ///
    /// # Errors
    /// [`MazeError::InvalidFormat`] on any malformed input. No partial maze is returned.
    pub fn load(input: &str) -> Result<Self> {
        let grid = format::parse(input).map_err(|reason| {
            tracing::debug!("[load] rejected input: {reason}");
            MazeError::InvalidFormat(reason)
        })?;
        tracing::debug!("[load] loaded a {}x{} maze", grid.height(), grid.width());
        Ok(Maze::from_grid(grid))
    }

    /// Serializes the wall/passage classification. Escape cells are written as passages.
    pub fn export(&self) -> String {
        format::write(&self.grid)
    }
}

fn exit_column(width: usize) -> usize {
    width - 3 + width % 2
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl std::str::FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Maze::load(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::UnionFind;
    use std::collections::VecDeque;

    /// Breadth-first distance in cells, both ends included.
    fn bfs_len(grid: &Grid, start: (usize, usize), goal: (usize, usize)) -> Option<usize> {
        let mut dist = vec![0usize; grid.len()];
        let mut queue = VecDeque::from([start]);
        dist[grid.ravel_index(start)] = 1;
        while let Some(c) = queue.pop_front() {
            let d = dist[grid.ravel_index(c)];
            if c == goal {
                return Some(d);
            }
            for n in grid.neighbors(c) {
                let i = grid.ravel_index(n);
                if !grid.is_wall(n) && dist[i] == 0 {
                    dist[i] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    fn walls(grid: &Grid) -> Vec<Vec<bool>> {
        grid.rows()
            .map(|row| row.iter().map(|k| k.is_wall()).collect())
            .collect()
    }

    #[test]
    fn test_dimension_limits() {
        assert!(matches!(
            Maze::new(2, 5),
            Err(MazeError::InvalidDimensions {
                height: 2,
                width: 5
            })
        ));
        assert!(matches!(
            Maze::new(5, 2),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(Maze::square(2).is_err());
        let maze = Maze::square(3).unwrap();
        assert_eq!((maze.height(), maze.width()), (3, 3));
    }

    #[test]
    fn test_skeleton_5x5() {
        let grid = Maze::skeleton(5, 5);
        let expected = [
            "#.###", //
            "#.#.#", //
            "#####", //
            "#.#.#", //
            "###.#", //
        ];
        let expected = expected
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(walls(&grid), expected);
    }

    #[test]
    fn test_skeleton_even_sides() {
        let grid = Maze::skeleton(4, 6);
        // Closed last column, exit at width - 3 with the connecting passage above it
        assert!((0..4).all(|row| grid.is_wall((row, 5))));
        assert!(!grid.is_wall((3, 3)));
        assert!(!grid.is_wall((2, 3)));
        assert!(grid.is_wall((3, 1)));
    }

    #[test]
    fn test_entrance_and_exit_are_passages() {
        for height in 3..12 {
            for width in 3..12 {
                let maze = Maze::with_seed(height, width, (height * 31 + width) as u64).unwrap();
                assert!(maze.entrance().is_passage(), "{height}x{width}");
                assert!(maze.exit().is_passage(), "{height}x{width}");
                assert_eq!(maze.exit().row, height - 1);
                assert_eq!(maze.exit_column(), width - 3 + width % 2);
            }
        }
    }

    #[test]
    fn test_generated_maze_is_perfect() {
        for (height, width, seed) in [(5, 5, 1), (9, 13, 2), (20, 31, 3), (4, 4, 4), (31, 30, 5)] {
            let maze = Maze::with_seed(height, width, seed).unwrap();
            let grid = maze.grid();
            let open = (0..grid.len())
                .map(|i| grid.unravel_index(i))
                .filter(|&c| !grid.is_wall(c))
                .collect::<Vec<_>>();

            // Connected and acyclic: exactly open - 1 adjacencies, all merging components
            let mut uf = UnionFind::new(grid.len());
            let mut links = 0;
            for &c in &open {
                for n in grid.neighbors(c).filter(|&n| n > c && !grid.is_wall(n)) {
                    assert!(
                        uf.union(grid.ravel_index(c), grid.ravel_index(n)),
                        "cycle through {c:?}-{n:?} in {height}x{width}"
                    );
                    links += 1;
                }
            }
            assert_eq!(links, open.len() - 1, "{height}x{width}");
        }
    }

    #[test]
    fn test_escape_path_in_generated_mazes() {
        let cases = [(3, 3, 0), (4, 4, 1), (5, 5, 2), (8, 13, 3), (21, 21, 4), (31, 30, 5)];
        for (height, width, seed) in cases {
            let mut maze = Maze::with_seed(height, width, seed).unwrap();
            let entrance = maze.entrance().position();
            let exit = maze.exit().position();
            let expected = bfs_len(maze.grid(), entrance, exit);

            maze.find_escape();
            let path = maze.escape_path();
            assert_eq!(Some(path.len()), expected, "{height}x{width}");
            assert_eq!(path.first().map(Cell::position), Some(entrance));
            assert_eq!(path.last().map(Cell::position), Some(exit));
            for pair in path.windows(2) {
                let (a, b) = (pair[0].position(), pair[1].position());
                assert_eq!(
                    a.0.abs_diff(b.0) + a.1.abs_diff(b.1),
                    1,
                    "{a:?} -> {b:?} in {height}x{width}"
                );
            }
        }
    }

    #[test]
    fn test_find_escape_5x5() {
        let mut maze = Maze::with_seed(5, 5, 99).unwrap();
        maze.find_escape();
        let path = maze.escape_path();
        assert!(!path.is_empty());
        assert_eq!(path.first().map(Cell::position), Some((0, 1)));
        assert_eq!(path.last().map(Cell::position), Some((4, 3)));
        assert!(path.iter().all(|c| maze.cell(c.row, c.column) == Some(*c)));
    }

    #[test]
    fn test_find_escape_is_cached() {
        let mut maze = Maze::with_seed(15, 21, 11).unwrap();
        assert!(!maze.is_solved());
        let first = maze.find_escape();
        assert!(maze.is_solved());
        let path = maze.escape_path().to_vec();
        assert_eq!(maze.find_escape(), first);
        assert_eq!(maze.escape_path(), &path[..]);
        assert!(first.contains("▓▓"));
        assert!(!maze.to_string().contains("▓▓"));
    }

    #[test]
    fn test_render_layout() {
        let maze = Maze::with_seed(3, 3, 0).unwrap();
        assert_eq!(maze.render(false), "██  ██\n██  ██\n██  ██\n");
        assert_eq!(maze.render(true), maze.to_string());
    }

    #[test]
    fn test_render_styled_layout() {
        let mut maze = Maze::with_seed(7, 9, 6).unwrap();
        maze.find_escape();
        let styled = maze.render_styled(true);
        assert_eq!(styled.lines().count(), 7);
        assert_eq!(styled.matches("▓▓").count(), maze.escape_path().len());
        assert_eq!(
            styled.matches("██").count(),
            maze.render(true).matches("██").count()
        );
    }

    #[test]
    fn test_export_load_round_trip() {
        let mut maze = Maze::with_seed(11, 8, 5).unwrap();
        maze.find_escape();
        let exported = maze.export();
        assert!(exported.starts_with("11 8\n"));
        assert_eq!(exported.lines().count(), 12);

        let loaded = Maze::load(&exported).unwrap();
        assert_eq!(walls(loaded.grid()), walls(maze.grid()));
        assert!(!loaded.is_solved());
        assert_eq!(loaded.export(), exported);
    }

    #[test]
    fn test_load_rejects_bad_input() {
        assert!(matches!(
            Maze::load("2 2\n0 0\n0 0"),
            Err(MazeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "3 3\n1 0 1\n1 0".parse::<Maze>(),
            Err(MazeError::InvalidFormat(_))
        ));
        // Oversized headers fail on the missing rows instead of allocating or overflowing
        assert!(matches!(
            Maze::load("4294967296 4294967296\n1 0 1\n"),
            Err(MazeError::InvalidFormat(_))
        ));
        assert!(matches!(
            Maze::load("100000 100000\n1 0 1\n"),
            Err(MazeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_loaded_maze_without_escape() {
        let mut maze = Maze::load("3 3\n1 0 1\n1 1 1\n1 0 1\n").unwrap();
        let rendered = maze.find_escape();
        assert!(maze.is_solved());
        assert!(maze.escape_path().is_empty());
        assert_eq!(rendered, maze.render(false));
    }
}
