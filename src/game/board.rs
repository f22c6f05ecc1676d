use super::Player;
use crate::error::{BoardError, MoveError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of aligned pieces needed to win.
pub const CONNECT: usize = 4;

/// `(row, col)` with row 0 at the top.
pub type Position = (usize, usize);

/// Horizontal, vertical, down-right and down-left, as `(d_row, d_col)`.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Row-major grid whose dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the standard 7x6 layout
    pub fn new() -> Self {
        Board {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            cells: vec![Cell::Empty; DEFAULT_COLS * DEFAULT_ROWS],
        }
    }

    /// Create an empty board of `width` columns and `height` rows
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, `None` when out of bounds.
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.cells[col] != Cell::Empty
    }

    /// Lowest empty row in `col`, scanning from the bottom up
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row * self.width + col] = cell;
        Ok(row)
    }

    /// Empty a single cell. Returns the previous contents.
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Option<Cell> {
        let i = self.index(row, col)?;
        Some(std::mem::replace(&mut self.cells[i], Cell::Empty))
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Check whether `player` has four in a row anywhere on the board
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Scan every anchor cell in all four directions and return the first
    /// complete line owned by `player`.
    pub fn winning_line(&self, player: Player) -> Option<[Position; CONNECT]> {
        let target = player.to_cell();
        for row in 0..self.height {
            for col in 0..self.width {
                for &direction in &DIRECTIONS {
                    let Some(line) = self.line_from(row, col, direction) else {
                        continue;
                    };
                    if line
                        .iter()
                        .all(|&(r, c)| self.cells[r * self.width + c] == target)
                    {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// The `CONNECT` positions starting at `(row, col)` along `direction`,
    /// or `None` if any of them falls off the board.
    fn line_from(
        &self,
        row: usize,
        col: usize,
        (d_row, d_col): (isize, isize),
    ) -> Option<[Position; CONNECT]> {
        let mut line = [(0, 0); CONNECT];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(d_row * step as isize)?;
            let c = col.checked_add_signed(d_col * step as isize)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
