use crate::log;
use super::board::{Board, CELL_COUNT};
use super::bot_controller::search;
use super::types::{Outcome, Player};
use super::win_detector::classify_outcome;

/// One game between the human and the computer.
///
/// Mirrors the turn flow a front end needs: apply the human's mark, stop if
/// the game is decided, otherwise let the computer answer.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    last_move: Option<usize>,
    move_count: usize,
}

impl GameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            outcome: Outcome::Continuing,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn place_human_mark(&mut self, index: usize) -> Result<Outcome, String> {
        self.ensure_turn(Player::Human)?;

        if index >= CELL_COUNT {
            return Err(format!(
                "Cell {} is out of bounds (expected 0..{})",
                index, CELL_COUNT
            ));
        }

        if !self.board.is_empty_at(index) {
            return Err("Cell is already marked".to_string());
        }

        self.apply(index, Player::Human)
    }

    /// Runs the search and applies the computer's answer.
    pub fn play_computer_turn(&mut self) -> Result<(usize, Outcome), String> {
        self.ensure_turn(Player::Computer)?;

        let report = search(&self.board)
            .ok_or_else(|| format!("No move available on board {}", self.board))?;
        log!(
            "Computer picked cell {} with score {} after {} positions",
            report.candidate.index,
            report.candidate.score,
            report.nodes_visited
        );

        let index = report.candidate.index;
        let outcome = self.apply(index, Player::Computer)?;
        Ok((index, outcome))
    }

    pub fn restart(&mut self, first_player: Player) {
        *self = Self::new(first_player);
    }

    fn ensure_turn(&self, player: Player) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }
        if self.current_player != player {
            return Err("Not your turn".to_string());
        }
        Ok(())
    }

    fn apply(&mut self, index: usize, player: Player) -> Result<Outcome, String> {
        self.board.set(index, player.mark())?;
        self.last_move = Some(index);
        self.move_count += 1;
        self.outcome = classify_outcome(&self.board);

        if self.outcome == Outcome::Continuing {
            self.current_player = player.opponent();
        } else {
            log!("Game over after {} moves: {:?}", self.move_count, self.outcome);
        }

        Ok(self.outcome)
    }
}
