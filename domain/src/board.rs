use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;

/// Rows, then columns, then diagonals. The first complete line decides the winner.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Index into a session's participant pair.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Mark::X),
            1 => Some(Mark::O),
            _ => None,
        }
    }

    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Terminal result of a session, sent to clients as `"X"`, `"O"` or `"Draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    X,
    O,
    Draw,
}

impl From<Mark> for Outcome {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::X,
            Mark::O => Outcome::O,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `mark` into an empty in-range cell. Returns `false` and leaves the board alone otherwise.
    pub fn place(
        &mut self,
        position: usize,
        mark: Mark,
    ) -> bool {
        match self.cells.get_mut(position) {
            Some(cell) if cell.is_none() => {
                *cell = Some(mark);
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Winner if any line is complete, otherwise a draw once no cell is left.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(mark) => Some(mark.into()),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}
