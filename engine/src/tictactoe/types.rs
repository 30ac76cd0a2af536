use serde::{Deserialize, Serialize};

pub const COMPUTER_MARK: Mark = Mark::X;
pub const HUMAN_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            '_' | '.' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Computer,
    Human,
}

impl Player {
    pub fn mark(&self) -> Mark {
        match self {
            Player::Computer => COMPUTER_MARK,
            Player::Human => HUMAN_MARK,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::Computer => Player::Human,
            Player::Human => Player::Computer,
        }
    }

    pub fn from_mark(mark: Mark) -> Option<Player> {
        match mark {
            COMPUTER_MARK => Some(Player::Computer),
            HUMAN_MARK => Some(Player::Human),
            _ => None,
        }
    }
}

/// Derived from a board on demand, never stored alongside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continuing,
    Win(Mark),
    Tie,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continuing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(mark) => Player::from_mark(*mark),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCandidate {
    pub index: usize,
    pub score: i32,
}

impl MoveCandidate {
    pub fn new(index: usize, score: i32) -> Self {
        Self { index, score }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinLine {
    /// Position of the line in `WIN_LINES`.
    pub index: usize,
    pub cells: [usize; 3],
}
