pub mod components;
pub mod diagram;
pub mod latch;
pub mod simulator;
pub mod table;
pub mod types;
pub mod validate;

pub use components::Cell;
pub use diagram::{Diagram, DiagramError};
pub use latch::LatchMemory;
pub use simulator::{simulate, simulate_with_power, SimulationResult};
pub use table::{check_against_truth_table, input_combinations, CheckReport, TruthRow};
pub use types::{Dir, IoVec, GRID_BOUND, MAX_IO};
pub use validate::{validate_structure, ValidationReport};
