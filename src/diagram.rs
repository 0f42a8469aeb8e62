use std::fmt;

use thiserror::Error;

use crate::{components::Cell, types::GRID_BOUND};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("diagram is {width}x{height}, evaluation is only defined up to {GRID_BOUND}x{GRID_BOUND}")]
    TooLarge { width: usize, height: usize },
    #[error("diagram needs at least one row and one column")]
    ZeroSized,
}

/// A rectangular grid of cells. Built and mutated by the editor;
/// the engine only ever reads it. Construction enforces the grid
/// bound so evaluation never has to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagram {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Diagram {
    pub fn new(width: usize, height: usize) -> Result<Diagram, DiagramError> {
        if width == 0 || height == 0 {
            return Err(DiagramError::ZeroSized);
        }
        if width > GRID_BOUND || height > GRID_BOUND {
            return Err(DiagramError::TooLarge { width, height });
        }
        Ok(Diagram {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Builds from row slices, padding short rows with `Empty`.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Diagram, DiagramError> {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut d = Diagram::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                d.set(x, y, *cell);
            }
        }
        Ok(d)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reads as `Empty` outside the declared bounds.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::Empty
        }
    }

    /// Out-of-bounds placements are dropped silently.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(x, y).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
