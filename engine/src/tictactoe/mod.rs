mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, ScopedMark, WIN_LINES};
pub use bot_controller::{
    LOSS_SCORE, SearchNode, SearchReport, TIE_SCORE, WIN_SCORE, best_move, evaluate_moves,
    minimax, search,
};
pub use game_state::GameState;
pub use types::{COMPUTER_MARK, HUMAN_MARK, Mark, MoveCandidate, Outcome, Player, WinLine};
pub use win_detector::{classify_outcome, has_won, is_full, winning_line};
