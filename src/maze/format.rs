//! Flat text encoding: a `"<height> <width>"` header, then one line per row of
//! space-separated integers where `1` is a wall and anything else a passage.

use super::{MIN_SIDE, cell::CellKind, grid::Grid};

/// Parses the text encoding into a grid. The error string describes the first problem found.
pub(super) fn parse(input: &str) -> Result<Grid, String> {
    let mut lines = input.lines();

    let header = lines.next().ok_or("missing header line")?;
    let mut dims = header.split_whitespace();
    let height = parse_dimension(dims.next(), "height")?;
    let width = parse_dimension(dims.next(), "width")?;
    if height < MIN_SIDE || width < MIN_SIDE {
        return Err(format!(
            "dimensions {height}x{width} are below the minimum of {MIN_SIDE}"
        ));
    }

    height
        .checked_mul(width)
        .ok_or_else(|| format!("dimensions {height}x{width} are too large"))?;

    // Cells are only buffered as rows are read, so a lying header cannot force a huge allocation
    let mut cells = Vec::new();
    for row in 0..height {
        let line = lines
            .next()
            .ok_or_else(|| format!("expected {height} rows, found {row}"))?;
        let mut tokens = line.split_whitespace();
        for column in 0..width {
            let token = tokens
                .next()
                .ok_or_else(|| format!("row {row} has {column} values, expected {width}"))?;
            let value = token
                .parse::<i64>()
                .map_err(|e| format!("bad value {token:?} at ({row}, {column}): {e}"))?;
            cells.push(if value == 1 {
                CellKind::Wall
            } else {
                CellKind::Passage
            });
        }
    }
    Grid::from_cells(height, width, cells)
        .ok_or_else(|| format!("cell count does not match {height}x{width}"))
}

fn parse_dimension(token: Option<&str>, name: &str) -> Result<usize, String> {
    let token = token.ok_or_else(|| format!("missing {name} in header"))?;
    token
        .parse::<usize>()
        .map_err(|e| format!("bad {name} {token:?} in header: {e}"))
}

/// Writes the text encoding. Escape cells are written as passages.
pub(super) fn write(grid: &Grid) -> String {
    let mut out = format!("{} {}\n", grid.height(), grid.width());
    for row in grid.rows() {
        for kind in row {
            out.push(if kind.is_wall() { '1' } else { '0' });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
