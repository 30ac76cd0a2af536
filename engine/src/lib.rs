pub mod config;
pub mod logger;
pub mod tictactoe;

pub use tictactoe::{
    Board, GameState, Mark, MoveCandidate, Outcome, Player, best_move, classify_outcome,
};
