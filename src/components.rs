use crate::types::{Dir, IoVec, MAX_IO};

/// One grid position of a ladder diagram. Contacts read an input line,
/// coils drive an output line; the index payloads address `IoVec`
/// slots and are tolerated (as inert) when out of range.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    HWire,
    VWire,
    Junction,
    /// Normally open contact: conducts while its input is true.
    ContactNo(usize),
    /// Normally closed contact: conducts while its input is false.
    ContactNc(usize),
    Coil(usize),
    LatchCoil(usize),
    UnlatchCoil(usize),
    LeftRail,
    RightRail,
}

const ALL_DIRS: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

impl Cell {
    /// Whether power entering from `entry` passes through this cell
    /// under the given input lines. Directions not listed for a cell
    /// kind never conduct.
    pub fn conducts(&self, entry: Dir, inputs: &IoVec) -> bool {
        match *self {
            Cell::Empty => false,
            Cell::HWire => matches!(entry, Dir::Left | Dir::Right),
            Cell::VWire => matches!(entry, Dir::Up | Dir::Down),
            Cell::Junction => true,
            Cell::ContactNo(i) => entry == Dir::Left && input_level(inputs, i),
            Cell::ContactNc(i) => entry == Dir::Left && !input_level(inputs, i),
            Cell::Coil(_) | Cell::LatchCoil(_) | Cell::UnlatchCoil(_) => entry == Dir::Left,
            Cell::LeftRail => entry == Dir::Left,
            Cell::RightRail => entry == Dir::Left,
        }
    }

    /// Sides power continues toward after conducting. Only meaningful
    /// for an entry that `conducts`; other entries offer no exits.
    pub fn exits(&self, entry: Dir) -> &'static [Dir] {
        match *self {
            Cell::HWire => match entry {
                Dir::Left => &[Dir::Right],
                Dir::Right => &[Dir::Left],
                _ => &[],
            },
            Cell::VWire => match entry {
                Dir::Up => &[Dir::Down],
                Dir::Down => &[Dir::Up],
                _ => &[],
            },
            Cell::Junction => &ALL_DIRS,
            Cell::ContactNo(_)
            | Cell::ContactNc(_)
            | Cell::Coil(_)
            | Cell::LatchCoil(_)
            | Cell::UnlatchCoil(_)
            | Cell::LeftRail => match entry {
                Dir::Left => &[Dir::Right],
                _ => &[],
            },
            Cell::Empty | Cell::RightRail => &[],
        }
    }

    /// Any of the coil variants, i.e. a rung's output element.
    pub fn is_output_coil(&self) -> bool {
        matches!(
            *self,
            Cell::Coil(_) | Cell::LatchCoil(_) | Cell::UnlatchCoil(_)
        )
    }

    pub fn glyph(&self) -> char {
        match *self {
            Cell::Empty => '.',
            Cell::HWire => '-',
            Cell::VWire => '|',
            Cell::Junction => '+',
            Cell::ContactNo(_) => '[',
            Cell::ContactNc(_) => ']',
            Cell::Coil(_) => 'O',
            Cell::LatchCoil(_) => 'L',
            Cell::UnlatchCoil(_) => 'U',
            Cell::LeftRail => '#',
            Cell::RightRail => '#',
        }
    }
}

// out-of-range input lines read as false, so a NO contact goes inert
// and an NC contact conducts
fn input_level(inputs: &IoVec, idx: usize) -> bool {
    if idx < MAX_IO {
        inputs[idx]
    } else {
        false
    }
}
