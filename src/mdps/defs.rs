use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate. Walls are never states.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct State {
    pub row: usize,
    pub col: usize,
}

impl State {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for State {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Exit,
    /// Only labels the "remain in place" outcome of a noisy move, never legal.
    Stay,
}

impl Action {
    /// The fixed ordering the noisy models rotate over.
    pub const DIRECTIONS: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    pub fn delta(&self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
            Action::Exit | Action::Stay => (0, 0),
        }
    }

    pub fn is_direction(&self) -> bool {
        Self::DIRECTIONS.contains(self)
    }

    /// The direction `offset` places away in `DIRECTIONS`, wrapping around.
    /// This is an ordering neighbour, not a geometric rotation.
    pub fn offset(&self, offset: isize) -> Option<Action> {
        let idx = Self::DIRECTIONS.iter().position(|a| a == self)? as isize;
        let n = Self::DIRECTIONS.len() as isize;
        Some(Self::DIRECTIONS[(idx + offset).rem_euclid(n) as usize])
    }

    pub fn symbol(&self) -> char {
        match self {
            Action::Up => '^',
            Action::Down => 'v',
            Action::Left => '<',
            Action::Right => '>',
            Action::Exit => 'X',
            Action::Stay => 'o',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Exit => "exit",
            Action::Stay => "stay",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next_state: State,
    pub probability: f64,
    pub reward: f64,
}
