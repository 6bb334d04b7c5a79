use super::defs::State;
use crate::{Error, Result};
use itertools::iproduct;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Empty,
    Start,
    Wall,
    Terminal(f64),
}

impl Cell {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "#" => Some(Cell::Wall),
            "S" => Some(Cell::Start),
            "" | " " => Some(Cell::Empty),
            t => t.trim().parse::<f64>().ok().map(Cell::Terminal),
        }
    }

    pub fn reward(&self) -> Option<f64> {
        if let Cell::Terminal(r) = self {
            Some(*r)
        } else {
            None
        }
    }
}

/// A validated rectangular grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    n_rows: usize,
    n_cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn parse<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: AsRef<str>,
    {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if n_rows == 0 || n_cols == 0 {
            return Err(Error::EmptyBoard);
        }

        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (row, tokens) in rows.iter().enumerate() {
            let tokens = tokens.as_ref();
            if tokens.len() != n_cols {
                return Err(Error::RaggedBoard {
                    row,
                    expected: n_cols,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                let token = token.as_ref();
                let cell = Cell::parse(token).ok_or_else(|| Error::MalformedToken {
                    row,
                    col,
                    token: token.to_string(),
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            n_rows,
            n_cols,
            cells,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn cell(&self, s: State) -> Option<Cell> {
        if s.row < self.n_rows && s.col < self.n_cols {
            Some(self.cells[s.row * self.n_cols + s.col])
        } else {
            None
        }
    }

    /// The neighbour of `s` by `(dr, dc)`, if it is on the grid.
    pub fn neighbour(&self, s: State, (dr, dc): (isize, isize)) -> Option<State> {
        let row = s.row.checked_add_signed(dr)?;
        let col = s.col.checked_add_signed(dc)?;
        (row < self.n_rows && col < self.n_cols).then_some(State { row, col })
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = State> + '_ {
        iproduct!(0..self.n_rows, 0..self.n_cols).map(State::from)
    }
}
