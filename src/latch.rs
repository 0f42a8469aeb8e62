use crate::{
    simulator::SimulationResult,
    types::{IoVec, MAX_IO},
};

/// Remembered coil state for seal-in circuits. The simulator itself is
/// stateless; whoever sequences evaluations (the truth-table checker,
/// an interactive session) owns one of these and feeds every run
/// through it. SET wins over CLEAR within a single run.
pub struct LatchMemory {
    remembered: IoVec,
}

impl LatchMemory {
    pub fn new() -> LatchMemory {
        LatchMemory {
            remembered: [false; MAX_IO],
        }
    }

    pub fn reset(&mut self) {
        self.remembered = [false; MAX_IO];
    }

    pub fn remembered(&self) -> &IoVec {
        &self.remembered
    }

    /// Folds one run's latch flags into the remembered vector and
    /// returns the merged output view: lines driven by a plain coil
    /// take the run's value, every other line reads from memory.
    pub fn absorb(&mut self, run: &SimulationResult) -> IoVec {
        for i in 0..MAX_IO {
            if run.set_flags[i] {
                self.remembered[i] = true;
            } else if run.clear_flags[i] {
                self.remembered[i] = false;
            }
        }
        let mut merged = run.outputs;
        for i in 0..MAX_IO {
            if !run.driven[i] {
                merged[i] = self.remembered[i];
            }
        }
        merged
    }
}

impl Default for LatchMemory {
    fn default() -> Self {
        LatchMemory::new()
    }
}
