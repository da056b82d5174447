use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// Classification of a single grid position.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    #[default]
    Wall,
    Passage,
    /// A passage that lies on the computed escape route.
    Escape,
}

impl CellKind {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: usize = 2;

    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }

    /// Plain glyph for this kind. Escape cells only stand out when `show_escape` is set.
    pub fn glyph(self, show_escape: bool) -> &'static str {
        let glyph = match self {
            CellKind::Wall => "██",
            CellKind::Escape if show_escape => "▓▓",
            CellKind::Escape | CellKind::Passage => "  ",
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            debug_assert_eq!(
                glyph.width(),
                CellKind::CELL_WIDTH,
                "Each cell must occupy exactly two character widths."
            );
        }

        glyph
    }

    /// Terminal-colored variant of [`CellKind::glyph`].
    pub fn styled(self, show_escape: bool) -> StyledContent<&'static str> {
        let glyph = self.glyph(show_escape);
        match self {
            CellKind::Wall => glyph.with(Color::White),
            CellKind::Escape if show_escape => glyph.with(Color::Yellow),
            CellKind::Escape | CellKind::Passage => glyph.with(Color::Reset),
        }
    }
}

/// A positioned cell. Equality covers the position and the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub kind: CellKind,
}

impl Cell {
    pub const fn new(row: usize, column: usize, kind: CellKind) -> Self {
        Cell { row, column, kind }
    }

    pub const fn passage(row: usize, column: usize) -> Self {
        Cell::new(row, column, CellKind::Passage)
    }

    pub const fn escape(row: usize, column: usize) -> Self {
        Cell::new(row, column, CellKind::Escape)
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    pub fn is_passage(&self) -> bool {
        self.kind == CellKind::Passage
    }

    pub fn is_escape(&self) -> bool {
        self.kind == CellKind::Escape
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}, {})", self.kind, self.row, self.column)
    }
}
