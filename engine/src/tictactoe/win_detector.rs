use super::board::{Board, WIN_LINES};
use super::types::{COMPUTER_MARK, HUMAN_MARK, Mark, Outcome, WinLine};

/// First completed line for `mark`, in `WIN_LINES` order.
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinLine> {
    if mark == Mark::Empty {
        return None;
    }

    let cells = board.cells();
    WIN_LINES
        .iter()
        .enumerate()
        .find(|(_, line)| line.iter().all(|&cell| cells[cell] == mark))
        .map(|(index, line)| WinLine {
            index,
            cells: *line,
        })
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}

/// Boards where both marks have a line are not reachable by alternating
/// play; the computer's line is reported for them.
pub fn classify_outcome(board: &Board) -> Outcome {
    if has_won(board, COMPUTER_MARK) {
        Outcome::Win(COMPUTER_MARK)
    } else if has_won(board, HUMAN_MARK) {
        Outcome::Win(HUMAN_MARK)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::Continuing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        Board::from_notation(notation).unwrap()
    }

    #[test]
    fn test_empty_board_is_continuing() {
        assert_eq!(classify_outcome(&Board::new()), Outcome::Continuing);
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_top_row_win_for_computer() {
        let board = board("XXX|OO_|___");
        assert!(has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(classify_outcome(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = board("XOX|OXO|OXO");
        assert!(is_full(&board));
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(classify_outcome(&board), Outcome::Tie);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_tie() {
        let board = board("XOX|OXO|XOX");
        assert!(is_full(&board));
        assert_eq!(classify_outcome(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_every_line_is_detected_for_human() {
        for (index, line) in WIN_LINES.iter().enumerate() {
            let mut board = Board::new();
            for &cell in line {
                board.set(cell, Mark::O).unwrap();
            }
            assert_eq!(classify_outcome(&board), Outcome::Win(Mark::O));
            assert_eq!(
                winning_line(&board, Mark::O),
                Some(WinLine {
                    index,
                    cells: *line
                })
            );
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board("OO_|X__|X__");
        assert!(!has_won(&board, Mark::O));
        assert_eq!(classify_outcome(&board), Outcome::Continuing);
    }

    #[test]
    fn test_empty_cells_never_form_a_line() {
        assert_eq!(winning_line(&Board::new(), Mark::Empty), None);
    }

    #[test]
    fn test_diagonal_reports_first_matching_line() {
        let board = board("O_O|_O_|O_O");
        let line = winning_line(&board, Mark::O).unwrap();
        assert_eq!(line.index, 6);
        assert_eq!(line.cells, [0, 4, 8]);
    }
}
