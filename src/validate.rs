use crate::{components::Cell, diagram::Diagram};

/// Outcome of the structural lint. Warnings flag suspicious rungs but
/// never block validity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: u32,
    pub warnings: u32,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors == 0
    }
}

/// Input-independent lint over a diagram: rail columns must hold rails
/// or nothing, and a rung with parts but no coil is probably a mistake.
pub fn validate_structure(diagram: &Diagram) -> ValidationReport {
    let mut report = ValidationReport::default();
    let w = diagram.width();
    for y in 0..diagram.height() {
        let leftmost = diagram.get(0, y);
        if leftmost != Cell::LeftRail && leftmost != Cell::Empty {
            report.errors += 1;
        }
        let rightmost = diagram.get(w - 1, y);
        if rightmost != Cell::RightRail && rightmost != Cell::Empty {
            report.errors += 1;
        }

        let mut has_parts = false;
        let mut has_coil = false;
        for x in 1..w.saturating_sub(1) {
            let cell = diagram.get(x, y);
            if cell != Cell::Empty {
                has_parts = true;
            }
            if cell.is_output_coil() {
                has_coil = true;
            }
        }
        if has_parts && !has_coil {
            report.warnings += 1;
        }
    }
    report
}
