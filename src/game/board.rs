use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A `rows x cols` grid of cells. Dimensions and win length come from the
/// validated [`GameConfig`], so they are fixed for the lifetime of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board at the configured dimensions
    pub fn new(config: &GameConfig) -> Self {
        Board {
            rows: config.rows,
            cols: config.cols,
            win_length: config.win_length,
            cells: vec![Cell::Empty; config.rows * config.cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                let i = self.idx(row, col);
                self.cells[i] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        self.check_horizontal(row, col, cell)
            || self.check_vertical(row, col, cell)
            || self.check_diagonal_up(row, col, cell)
            || self.check_diagonal_down(row, col, cell)
    }

    /// Check horizontal win (left-right through the position)
    fn check_horizontal(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1; // Count the current piece

        // Check left
        let mut c = col as i32 - 1;
        while c >= 0 && self.get(row, c as usize) == cell {
            count += 1;
            c -= 1;
        }

        // Check right
        let mut c = col + 1;
        while c < self.cols && self.get(row, c) == cell {
            count += 1;
            c += 1;
        }

        count >= self.win_length
    }

    /// Check vertical win (down from the position)
    fn check_vertical(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Only need to check downward (pieces fall down)
        let mut r = row + 1;
        while r < self.rows && self.get(r, col) == cell {
            count += 1;
            r += 1;
        }

        count >= self.win_length
    }

    /// Check diagonal win (bottom-left to top-right, /)
    fn check_diagonal_up(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check down-left
        let mut r = row as i32 + 1;
        let mut c = col as i32 - 1;
        while r < self.rows as i32 && c >= 0 && self.get(r as usize, c as usize) == cell {
            count += 1;
            r += 1;
            c -= 1;
        }

        // Check up-right
        let mut r = row as i32 - 1;
        let mut c = col as i32 + 1;
        while r >= 0 && c < self.cols as i32 && self.get(r as usize, c as usize) == cell {
            count += 1;
            r -= 1;
            c += 1;
        }

        count >= self.win_length
    }

    /// Check diagonal win (top-left to bottom-right, \)
    fn check_diagonal_down(&self, row: usize, col: usize, cell: Cell) -> bool {
        let mut count = 1;

        // Check up-left
        let mut r = row as i32 - 1;
        let mut c = col as i32 - 1;
        while r >= 0 && c >= 0 && self.get(r as usize, c as usize) == cell {
            count += 1;
            r -= 1;
            c -= 1;
        }

        // Check down-right
        let mut r = row as i32 + 1;
        let mut c = col as i32 + 1;
        while r < self.rows as i32 && c < self.cols as i32 && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += 1;
            c += 1;
        }

        count >= self.win_length
    }
}
