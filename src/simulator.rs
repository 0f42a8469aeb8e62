use std::collections::VecDeque;

use log::{debug, trace};

use crate::{
    components::Cell,
    diagram::Diagram,
    types::{Dir, IoVec, GRID_BOUND, MAX_IO},
};

/// Everything one evaluation produces. Recomputed from scratch each
/// call; nothing here persists between calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationResult {
    width: usize,
    height: usize,
    /// Output lines after latch resolution.
    pub outputs: IoVec,
    /// Latch coils that were energized this call (pending SET).
    pub set_flags: IoVec,
    /// Unlatch coils that were energized this call (pending CLEAR).
    pub clear_flags: IoVec,
    /// Lines the diagram drives with a plain coil. Anything else may
    /// fall through to remembered state, see `LatchMemory`.
    pub driven: IoVec,
    /// Highest wave number reached by the flood.
    pub max_depth: u16,
    power: Vec<bool>,
    depth: Vec<u16>,
}

impl SimulationResult {
    fn new(width: usize, height: usize) -> SimulationResult {
        SimulationResult {
            width,
            height,
            outputs: [false; MAX_IO],
            set_flags: [false; MAX_IO],
            clear_flags: [false; MAX_IO],
            driven: [false; MAX_IO],
            max_depth: 0,
            power: vec![false; width * height],
            depth: vec![0; width * height],
        }
    }

    pub fn powered(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.power[y * self.width + x]
        } else {
            false
        }
    }

    /// Wave at which the cell first received power, 0 if it never did.
    pub fn depth_at(&self, x: usize, y: usize) -> u16 {
        if x < self.width && y < self.height {
            self.depth[y * self.width + x]
        } else {
            0
        }
    }
}

/// Evaluates the diagram against one input vector, discarding the
/// power/depth trace.
pub fn simulate(diagram: &Diagram, inputs: &IoVec) -> IoVec {
    simulate_with_power(diagram, inputs).outputs
}

/// Full evaluation: floods power from the left rails breadth-first and
/// reports energized outputs plus the per-cell power and wave maps the
/// renderer animates from.
///
/// The flood is direction-aware. A queue entry is a cell position plus
/// the side power arrives from, and the visited board is keyed the
/// same way: a junction entered from two sides must propagate both
/// times, while each (cell, side) pair runs at most once, which bounds
/// the whole sweep at `width * height * 4` steps.
pub fn simulate_with_power(diagram: &Diagram, inputs: &IoVec) -> SimulationResult {
    let w = diagram.width();
    let h = diagram.height();
    let mut res = SimulationResult::new(w, h);
    let mut visited = vec![false; w * h * 4];
    let mut queue: VecDeque<(i32, i32, Dir)> = VecDeque::with_capacity(w * h * 4);

    for y in 0..h {
        for x in 0..w {
            if let Cell::Coil(i) = diagram.get(x, y) {
                if i < MAX_IO {
                    res.driven[i] = true;
                }
            }
        }
    }

    // every left rail in column 0 is a power source
    let mut wave: u16 = 0;
    for y in 0..h {
        if diagram.get(0, y) == Cell::LeftRail {
            wave = 1;
            res.power[y * w] = true;
            res.depth[y * w] = 1;
            queue.push_back((1, y as i32, Dir::Left));
        }
    }
    trace!("seeded {} rail(s)", queue.len());

    while !queue.is_empty() {
        wave += 1;
        let layer = queue.len();
        for _ in 0..layer {
            let (qx, qy, entry) = match queue.pop_front() {
                Some(e) => e,
                None => break,
            };
            if qx < 0 || qy < 0 {
                continue;
            }
            let (x, y) = (qx as usize, qy as usize);
            if x >= w || y >= h || x >= GRID_BOUND || y >= GRID_BOUND {
                continue;
            }
            let slot = (y * w + x) * 4 + entry.index();
            if visited[slot] {
                continue;
            }
            visited[slot] = true;

            let cell = diagram.get(x, y);
            if !cell.conducts(entry, inputs) {
                continue;
            }
            let at = y * w + x;
            res.power[at] = true;
            if res.depth[at] == 0 {
                res.depth[at] = wave;
            }
            match cell {
                Cell::Coil(i) => {
                    if i < MAX_IO {
                        res.outputs[i] = true;
                    }
                }
                // latch effects are deferred until the sweep is done
                Cell::LatchCoil(i) => {
                    if i < MAX_IO {
                        res.set_flags[i] = true;
                    }
                }
                Cell::UnlatchCoil(i) => {
                    if i < MAX_IO {
                        res.clear_flags[i] = true;
                    }
                }
                _ => {}
            }
            for exit in cell.exits(entry) {
                let (dx, dy) = exit.offset();
                queue.push_back((qx + dx, qy + dy, exit.opposite()));
            }
        }
    }
    res.max_depth = wave;

    // SET wins over CLEAR when both fired this call
    for i in 0..MAX_IO {
        if res.set_flags[i] {
            res.outputs[i] = true;
        } else if res.clear_flags[i] {
            res.outputs[i] = false;
        }
    }
    debug!("flood done, {} wave(s)", wave);
    res
}
