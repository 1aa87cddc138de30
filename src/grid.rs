use crate::errors::GridError;
use crate::info_log;
use std::fmt;
use std::fs;
use std::path::Path;

/// A cell coordinate, zero-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Immutable rectangular grid of single-letter cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from rows of letters.
    ///
    /// Fails with [`GridError::MalformedGrid`] if there are no rows, a row is
    /// empty, the rows are ragged, or a cell is not alphabetic.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::malformed("grid has no rows"));
        };
        let cols = first.len();
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);

        for (r, row) in rows.into_iter().enumerate() {
            if row.is_empty() {
                return Err(GridError::malformed(format!("row {r} is empty")));
            }
            if row.len() != cols {
                return Err(GridError::malformed(format!(
                    "number of columns changes (row {r} has {}, expected {cols})",
                    row.len()
                )));
            }
            if let Some(bad) = row.iter().find(|c| !c.is_alphabetic()) {
                return Err(GridError::malformed(format!(
                    "cell '{bad}' in row {r} is not a letter"
                )));
            }
            cells.extend(row);
        }

        Ok(Self {
            cells,
            rows: row_count,
            cols,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns the letter at `pos`, or [`GridError::OutOfBounds`].
    pub fn cell_at(&self, pos: Position) -> Result<char, GridError> {
        if self.contains(pos) {
            Ok(self.letter(pos))
        } else {
            Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Unchecked lookup for positions that came from [`Grid::positions`] or
    /// [`Grid::neighbors`]. Indexing panics if that invariant is broken.
    pub(crate) fn letter(&self, pos: Position) -> char {
        self.cells[pos.row * self.cols + pos.col]
    }

    /// In-bounds orthogonal neighbours, in the order left, right, up, down.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + use<> {
        let left = pos.col.checked_sub(1).map(|c| Position::new(pos.row, c));
        let right = (pos.col + 1 < self.cols).then(|| Position::new(pos.row, pos.col + 1));
        let up = pos.row.checked_sub(1).map(|r| Position::new(r, pos.col));
        let down = (pos.row + 1 < self.rows).then(|| Position::new(pos.row + 1, pos.col));
        [left, right, up, down].into_iter().flatten()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Swaps rows and columns.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let cells = (0..self.cols)
            .flat_map(|col| (0..self.rows).map(move |row| self.letter(Position::new(row, col))))
            .collect();
        Self {
            cells,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            write!(f, "|")?;
            for letter in row {
                write!(f, " {letter}")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

// Grid file format: one row per line, e.g. `| A G O I C|`

fn parse_row(line: &str, line_no: usize) -> Result<Vec<char>, GridError> {
    if !line.starts_with("| ") || !line.ends_with('|') {
        return Err(GridError::malformed(format!(
            "line {line_no} does not start with '| ' or end with '|'"
        )));
    }

    let inner = line
        .trim_start_matches('|')
        .trim_end_matches('|')
        .trim_matches(' ');

    inner
        .split(' ')
        .map(|cell| {
            let mut chars = cell.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_alphabetic() => Ok(c),
                (Some(_), None) => Err(GridError::malformed(format!(
                    "line {line_no}: cell '{cell}' is not a letter"
                ))),
                _ => Err(GridError::malformed(format!(
                    "line {line_no}: cell '{cell}' is not exactly one character"
                ))),
            }
        })
        .collect()
}

pub fn parse_grid_from_str(data: &str) -> Result<Grid, GridError> {
    let mut rows: Vec<Vec<char>> = Vec::new();

    for (idx, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let row = parse_row(line, line_no)?;
        if let Some(first) = rows.first()
            && first.len() != row.len()
        {
            return Err(GridError::malformed(format!(
                "line {line_no}: number of columns changes ({} instead of {})",
                row.len(),
                first.len()
            )));
        }
        rows.push(row);
    }

    let grid = Grid::new(rows)?;
    info_log!("Parsed {}x{} grid", grid.rows(), grid.cols());
    Ok(grid)
}

pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid, GridError> {
    let data = fs::read_to_string(path)?;
    parse_grid_from_str(&data)
}
