/// Number of addressable inputs/outputs per diagram.
pub const MAX_IO: usize = 8;

/// Power flow is only defined on grids up to this many cells a side.
pub const GRID_BOUND: usize = 16;

pub type IoVec = [bool; MAX_IO];

/// Side from which power arrives at a cell. Most cells conduct
/// asymmetrically, so this travels with every queue entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    pub fn index(self) -> usize {
        match self {
            Dir::Left => 0,
            Dir::Right => 1,
            Dir::Up => 2,
            Dir::Down => 3,
        }
    }
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }
    /// Grid offset when power leaves a cell toward this side.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
        }
    }
}
