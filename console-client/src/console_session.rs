use std::io::{BufRead, Write};

use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{
    CELL_COUNT, GameState, HUMAN_MARK, Outcome, Player, evaluate_moves, winning_line,
};

use crate::board_view::{render_board, render_candidates};
use crate::config::FirstPlayerMode;
use crate::session_rng::SessionRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub first_player: FirstPlayerMode,
    pub show_move_scores: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl SessionSummary {
    pub fn games_finished(&self) -> u32 {
        self.human_wins + self.computer_wins + self.ties
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(HUMAN_MARK) => self.human_wins += 1,
            Outcome::Win(_) => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Continuing => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Place(usize),
    Hint,
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "h" | "hint" => Ok(Command::Hint),
        "r" | "restart" => Ok(Command::Restart),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => {
            let cell: usize = trimmed
                .parse()
                .map_err(|_| format!("Unknown command '{}'", line.trim()))?;
            if cell == 0 || cell > CELL_COUNT {
                return Err(format!("Cell {} is out of range, pick 1-{}", cell, CELL_COUNT));
            }
            Ok(Command::Place(cell - 1))
        }
    }
}

enum GameEnd {
    Finished(Outcome),
    Restarted,
    Quit,
}

/// Plays games over a line-based reader/writer pair until the player quits
/// or the input runs out.
pub struct ConsoleSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    options: SessionOptions,
    rng: SessionRng,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            options,
            rng,
            summary: SessionSummary::default(),
        }
    }

    pub fn run(mut self) -> Result<SessionSummary, String> {
        loop {
            let first_player = self.options.first_player.resolve(&mut self.rng);
            log!("Starting game, first player: {:?}", first_player);

            match self.play_game(first_player)? {
                GameEnd::Finished(outcome) => {
                    self.summary.record(outcome);
                    if !self.ask_play_again()? {
                        break;
                    }
                }
                GameEnd::Restarted => continue,
                GameEnd::Quit => break,
            }
        }

        let summary = self.summary;
        self.write_line(&format!(
            "Final score - you: {}, computer: {}, ties: {}",
            summary.human_wins, summary.computer_wins, summary.ties
        ))?;
        Ok(summary)
    }

    fn play_game(&mut self, first_player: Player) -> Result<GameEnd, String> {
        let mut state = GameState::new(first_player);
        self.write_line("")?;
        self.write_line(&format!(
            "New game. You are {}, the computer is {}.",
            Player::Human.mark().symbol(),
            Player::Computer.mark().symbol()
        ))?;
        if first_player == Player::Computer {
            self.write_line("The computer moves first.")?;
        }

        loop {
            if state.is_over() {
                self.write_line(&render_board(state.board()))?;
                self.announce(&state)?;
                return Ok(GameEnd::Finished(state.outcome()));
            }

            match state.current_player() {
                Player::Computer => self.computer_turn(&mut state)?,
                Player::Human => {
                    self.write_line(&render_board(state.board()))?;
                    let Some(command) = self.read_command()? else {
                        return Ok(GameEnd::Quit);
                    };
                    match command {
                        Command::Place(index) => {
                            if let Err(e) = state.place_human_mark(index) {
                                self.write_line(&e)?;
                            }
                        }
                        Command::Hint => {
                            let candidates = evaluate_moves(state.board(), Player::Human);
                            self.write_line(&format!(
                                "Hint: {}",
                                render_candidates(&candidates, Player::Human)
                            ))?;
                        }
                        Command::Restart => {
                            self.write_line("Restarting.")?;
                            return Ok(GameEnd::Restarted);
                        }
                        Command::Quit => return Ok(GameEnd::Quit),
                    }
                }
            }
        }
    }

    fn computer_turn(&mut self, state: &mut GameState) -> Result<(), String> {
        if self.options.show_move_scores {
            let candidates = evaluate_moves(state.board(), Player::Computer);
            self.write_line(&format!(
                "Computer sees: {}",
                render_candidates(&candidates, Player::Computer)
            ))?;
        }

        let (index, _) = state.play_computer_turn()?;
        self.write_line(&format!("Computer marks cell {}.", index + 1))
    }

    fn announce(&mut self, state: &GameState) -> Result<(), String> {
        let message = match state.outcome() {
            Outcome::Win(mark) => {
                let line = winning_line(state.board(), mark)
                    .map(|line| {
                        let cells: Vec<String> =
                            line.cells.iter().map(|cell| (cell + 1).to_string()).collect();
                        format!(" ({})", cells.join("-"))
                    })
                    .unwrap_or_default();
                if mark == HUMAN_MARK {
                    format!("You win!{}", line)
                } else {
                    format!("You lose.{}", line)
                }
            }
            Outcome::Tie => "It's a tie!".to_string(),
            Outcome::Continuing => return Ok(()),
        };
        log!("Game finished: {}", message);
        self.write_line(&message)
    }

    /// `None` when the input is exhausted.
    fn read_command(&mut self) -> Result<Option<Command>, String> {
        loop {
            self.write_prompt("Your move (1-9, h = hint, r = restart, q = quit): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(command) => return Ok(Some(command)),
                Err(e) => self.write_line(&e)?,
            }
        }
    }

    fn ask_play_again(&mut self) -> Result<bool, String> {
        self.write_prompt("Play again? [y/n]: ")?;
        Ok(matches!(
            self.read_line()?.map(|line| line.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "yes")
        ))
    }

    fn read_line(&mut self) -> Result<Option<String>, String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
    }

    fn write_prompt(&mut self, text: &str) -> Result<(), String> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| format!("Failed to write output: {}", e))
    }
}
