use super::board::Board;
use super::types::{COMPUTER_MARK, HUMAN_MARK, MoveCandidate, Player};
use super::win_detector::{has_won, is_full};

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const TIE_SCORE: i32 = 0;

/// Result of one recursive step. `index` is `None` for terminal positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub index: Option<usize>,
    pub score: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub candidate: MoveCandidate,
    pub nodes_visited: u64,
}

/// Picks the cell the computer should mark next.
///
/// The board must still be undecided and have at least one empty cell.
/// Calling it on a won or full board is a caller error and yields `None`.
/// The search runs on a private copy, so `board` is never modified.
pub fn best_move(board: &Board) -> Option<usize> {
    search(board).map(|report| report.candidate.index)
}

/// Same as [`best_move`] but also reports the chosen score and how many
/// positions were visited.
pub fn search(board: &Board) -> Option<SearchReport> {
    if terminal_score(board).is_some() {
        return None;
    }

    let mut scratch = *board;
    let mut nodes_visited = 1;
    let candidates = score_candidates(&mut scratch, Player::Computer, &mut nodes_visited);
    let candidate = select_best(&candidates, Player::Computer)?;

    Some(SearchReport {
        candidate,
        nodes_visited,
    })
}

/// Scores every empty cell for `to_move`, in index order.
/// Empty for decided boards.
pub fn evaluate_moves(board: &Board, to_move: Player) -> Vec<MoveCandidate> {
    if terminal_score(board).is_some() {
        return Vec::new();
    }

    let mut scratch = *board;
    let mut nodes_visited = 1;
    score_candidates(&mut scratch, to_move, &mut nodes_visited)
}

/// Exhaustive minimax from the computer's point of view.
///
/// Speculative marks are placed on `board` and retracted before returning,
/// so the board is left exactly as it was passed in.
pub fn minimax(board: &mut Board, to_move: Player) -> SearchNode {
    let mut nodes_visited = 0;
    minimax_counted(board, to_move, &mut nodes_visited)
}

fn minimax_counted(board: &mut Board, to_move: Player, nodes_visited: &mut u64) -> SearchNode {
    *nodes_visited += 1;

    if let Some(score) = terminal_score(board) {
        return SearchNode { index: None, score };
    }

    let candidates = score_candidates(board, to_move, nodes_visited);
    match select_best(&candidates, to_move) {
        Some(best) => SearchNode {
            index: Some(best.index),
            score: best.score,
        },
        // undecided boards always have an empty cell
        None => SearchNode {
            index: None,
            score: TIE_SCORE,
        },
    }
}

/// The human's line is checked first, independent of who moved last.
fn terminal_score(board: &Board) -> Option<i32> {
    if has_won(board, HUMAN_MARK) {
        Some(LOSS_SCORE)
    } else if has_won(board, COMPUTER_MARK) {
        Some(WIN_SCORE)
    } else if is_full(board) {
        Some(TIE_SCORE)
    } else {
        None
    }
}

fn score_candidates(
    board: &mut Board,
    to_move: Player,
    nodes_visited: &mut u64,
) -> Vec<MoveCandidate> {
    let mut candidates = Vec::with_capacity(board.empty_count());

    for index in board.available_moves() {
        let score = {
            // indices come from available_moves, so placement cannot fail
            let Ok(mut placed) = board.place_scoped(index, to_move.mark()) else {
                continue;
            };
            minimax_counted(&mut placed, to_move.opponent(), nodes_visited).score
        };
        candidates.push(MoveCandidate::new(index, score));
    }

    candidates
}

/// Strict comparison keeps the first of several equal scores, i.e. the
/// lowest cell index.
fn select_best(candidates: &[MoveCandidate], to_move: Player) -> Option<MoveCandidate> {
    let mut best: Option<MoveCandidate> = None;

    for &candidate in candidates {
        let better = match best {
            None => true,
            Some(current) => match to_move {
                Player::Computer => candidate.score > current.score,
                Player::Human => candidate.score < current.score,
            },
        };
        if better {
            best = Some(candidate);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Mark;

    fn board(notation: &str) -> Board {
        Board::from_notation(notation).unwrap()
    }

    #[test]
    fn test_empty_board_picks_first_cell() {
        assert_eq!(best_move(&Board::new()), Some(0));
    }

    #[test]
    fn test_all_opening_moves_are_draws() {
        let scores: Vec<i32> = evaluate_moves(&Board::new(), Player::Computer)
            .iter()
            .map(|candidate| candidate.score)
            .collect();
        assert_eq!(scores, vec![TIE_SCORE; 9]);
    }

    #[test]
    fn test_forced_block() {
        assert_eq!(best_move(&board("OO_|___|___")), Some(2));
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        // O threatens 2, X completes the middle row at 5
        assert_eq!(best_move(&board("OO_|XX_|O__")), Some(5));
    }

    #[test]
    fn test_equal_wins_resolve_to_lowest_index() {
        let board = board("XO_|_XO|XO_");
        let candidates = evaluate_moves(&board, Player::Computer);
        assert_eq!(
            candidates,
            vec![
                MoveCandidate::new(2, WIN_SCORE),
                MoveCandidate::new(3, WIN_SCORE),
                MoveCandidate::new(8, WIN_SCORE),
            ]
        );
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn test_human_side_minimizes_with_same_tie_break() {
        let mut board = board("OX_|_OX|OX_");
        let node = minimax(&mut board, Player::Human);
        assert_eq!(node, SearchNode { index: Some(2), score: LOSS_SCORE });
    }

    #[test]
    fn test_terminal_positions_score_from_computer_view() {
        let mut lost = board("OOO|XX_|X__");
        assert_eq!(
            minimax(&mut lost, Player::Computer),
            SearchNode { index: None, score: LOSS_SCORE }
        );

        let mut won = board("XXX|OO_|O__");
        assert_eq!(
            minimax(&mut won, Player::Human),
            SearchNode { index: None, score: WIN_SCORE }
        );

        let mut tied = board("XOX|OXO|OXO");
        assert_eq!(
            minimax(&mut tied, Player::Computer),
            SearchNode { index: None, score: TIE_SCORE }
        );
    }

    #[test]
    fn test_decided_boards_have_no_best_move() {
        assert_eq!(best_move(&board("XXX|OO_|___")), None);
        assert_eq!(best_move(&board("XOX|OXO|OXO")), None);
        assert!(evaluate_moves(&board("OOO|XX_|X__"), Player::Computer).is_empty());
    }

    #[test]
    fn test_minimax_restores_working_board() {
        let mut working = board("X__|_O_|___");
        let before = working;
        minimax(&mut working, Player::Computer);
        assert_eq!(working, before);
    }

    #[test]
    fn test_best_move_leaves_caller_board_untouched() {
        let board = board("O__|_X_|__O");
        let before = board;
        let index = best_move(&board).unwrap();
        assert_eq!(board, before);
        assert_eq!(board.get(index), Some(Mark::Empty));
    }

    #[test]
    fn test_search_counts_visited_positions() {
        let report = search(&board("XOX|OXO|O__")).unwrap();
        assert_eq!(report.candidate, MoveCandidate::new(8, WIN_SCORE));
        assert_eq!(report.nodes_visited, 4);
    }

    #[test]
    fn test_single_empty_cell() {
        let report = search(&board("XOX|XOO|OX_")).unwrap();
        assert_eq!(report.candidate, MoveCandidate::new(8, TIE_SCORE));
        assert_eq!(report.nodes_visited, 2);
    }
}
