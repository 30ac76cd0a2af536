use std::fmt;
use std::ops::{Deref, DerefMut};

use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 grid in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parses nine symbols: `X`, `O`, and `_` or `.` for empty cells.
    /// Whitespace and `|` separators are ignored.
    pub fn from_notation(notation: &str) -> Result<Self, String> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for symbol in notation.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let mark = Mark::from_symbol(symbol)
                .ok_or_else(|| format!("Invalid board symbol '{}'", symbol))?;
            if count == CELL_COUNT {
                return Err(format!("Board notation has more than {} cells", CELL_COUNT));
            }
            cells[count] = mark;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!(
                "Board notation must have {} cells, got {}",
                CELL_COUNT, count
            ));
        }

        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| format!("Cell index {} is out of bounds", index))?;
        *cell = mark;
        Ok(())
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Mark::Empty).count()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == mark).count()
    }

    /// Places `mark` at `index` until the returned guard is dropped; the
    /// guard writes `Mark::Empty` back on drop.
    pub fn place_scoped(&mut self, index: usize, mark: Mark) -> Result<ScopedMark<'_>, String> {
        match self.cells.get(index) {
            None => return Err(format!("Cell index {} is out of bounds", index)),
            Some(Mark::Empty) => {}
            Some(_) => return Err(format!("Cell {} is already marked", index)),
        }
        self.cells[index] = mark;
        Ok(ScopedMark { board: self, index })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                write!(f, "|")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

pub struct ScopedMark<'a> {
    board: &'a mut Board,
    index: usize,
}

impl ScopedMark<'_> {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for ScopedMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for ScopedMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for ScopedMark<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Mark::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_notation_row_major() {
        let board = Board::from_notation("XO_|_X_|__O").unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::O));
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.get(8), Some(Mark::O));
        assert_eq!(board.available_moves(), vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_from_notation_rejects_bad_input() {
        assert!(Board::from_notation("XO").is_err());
        assert!(Board::from_notation("XOXOXOXOXO").is_err());
        assert!(Board::from_notation("XO_?_____").is_err());
    }

    #[test]
    fn test_display_matches_notation() {
        let board = Board::from_notation("X.. .O. ..X").unwrap();
        assert_eq!(board.to_string(), "X__|_O_|__X");
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.set(9, Mark::X).is_err());
        assert!(board.set(8, Mark::X).is_ok());
        assert_eq!(board.count(Mark::X), 1);
    }

    #[test]
    fn test_scoped_mark_is_retracted_on_drop() {
        let mut board = Board::from_notation("X________").unwrap();
        let before = board;
        {
            let placed = board.place_scoped(4, Mark::O).unwrap();
            assert_eq!(placed.index(), 4);
            assert_eq!(placed.get(4), Some(Mark::O));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_scoped_marks() {
        let mut board = Board::new();
        {
            let mut first = board.place_scoped(0, Mark::X).unwrap();
            {
                let second = first.place_scoped(1, Mark::O).unwrap();
                assert_eq!(second.empty_count(), 7);
            }
            assert_eq!(first.empty_count(), 8);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_scoped_mark_rejects_bad_cells() {
        let mut board = Board::from_notation("X________").unwrap();
        let before = board;

        assert_eq!(
            board.place_scoped(0, Mark::O).err(),
            Some("Cell 0 is already marked".to_string())
        );
        assert_eq!(
            board.place_scoped(9, Mark::O).err(),
            Some("Cell index 9 is out of bounds".to_string())
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_win_lines_cover_every_cell() {
        for cell in 0..CELL_COUNT {
            assert!(WIN_LINES.iter().any(|line| line.contains(&cell)));
        }
    }
}
