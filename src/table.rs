use log::debug;

use crate::{
    diagram::Diagram,
    latch::LatchMemory,
    simulator::simulate_with_power,
    types::{IoVec, MAX_IO},
};

/// One line of a level's truth table. Entries past the level's
/// declared input/output counts are padding and never compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TruthRow {
    pub inputs: IoVec,
    pub expected: IoVec,
}

impl TruthRow {
    /// Pads both slices out to `MAX_IO`; extra entries are dropped.
    pub fn new(inputs: &[bool], expected: &[bool]) -> TruthRow {
        let mut row = TruthRow {
            inputs: [false; MAX_IO],
            expected: [false; MAX_IO],
        };
        for (i, v) in inputs.iter().take(MAX_IO).enumerate() {
            row.inputs[i] = *v;
        }
        for (i, v) in expected.iter().take(MAX_IO).enumerate() {
            row.expected[i] = *v;
        }
        row
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub passed: bool,
    /// Index of the first row that mismatched, if any.
    pub failing_row: Option<usize>,
    pub actual: IoVec,
    pub expected: IoVec,
}

/// Runs the diagram over every truth row in declared order and compares
/// the first `n_out` outputs. Rows are threaded through a fresh
/// `LatchMemory`, so seal-in levels see coil state carry forward from
/// earlier rows; for diagrams without latch coils the memory never
/// substitutes anything and the rows behave independently.
pub fn check_against_truth_table(
    diagram: &Diagram,
    rows: &[TruthRow],
    n_in: usize,
    n_out: usize,
) -> CheckReport {
    let n_in = n_in.min(MAX_IO);
    let n_out = n_out.min(MAX_IO);
    let mut memory = LatchMemory::new();
    let mut last_actual = [false; MAX_IO];
    let mut last_expected = [false; MAX_IO];
    for (idx, row) in rows.iter().enumerate() {
        let mut inputs = [false; MAX_IO];
        inputs[..n_in].copy_from_slice(&row.inputs[..n_in]);
        let run = simulate_with_power(diagram, &inputs);
        let actual = memory.absorb(&run);
        if actual[..n_out] != row.expected[..n_out] {
            debug!("truth table mismatch at row {idx}");
            return CheckReport {
                passed: false,
                failing_row: Some(idx),
                actual,
                expected: row.expected,
            };
        }
        last_actual = actual;
        last_expected = row.expected;
    }
    CheckReport {
        passed: true,
        failing_row: None,
        actual: last_actual,
        expected: last_expected,
    }
}

/// All input vectors over `bits` lines, most significant line first,
/// counting up from all-false. Handy for generating full tables.
pub fn input_combinations(bits: usize) -> impl Iterator<Item = IoVec> {
    let bits = bits.min(MAX_IO);
    let total = 1usize << bits;
    (0..total).map(move |n| {
        let mut v = [false; MAX_IO];
        for i in 0..bits {
            v[i] = (n >> (bits - 1 - i)) & 1 == 1;
        }
        v
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combination_counter_is_msb_first() {
        let all: Vec<IoVec> = input_combinations(2).collect();
        assert_eq!(all.len(), 4);
        assert_eq!(&all[0][..2], &[false, false]);
        assert_eq!(&all[1][..2], &[false, true]);
        assert_eq!(&all[2][..2], &[true, false]);
        assert_eq!(&all[3][..2], &[true, true]);
    }

    #[test]
    fn truth_row_pads_and_truncates() {
        let row = TruthRow::new(&[true], &[true; 12]);
        assert!(row.inputs[0]);
        assert!(!row.inputs[1]);
        assert!(row.expected.iter().all(|v| *v));
    }
}
