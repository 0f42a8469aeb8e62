use lsim_engine::{
    check_against_truth_table, simulate_with_power, Cell, Diagram, LatchMemory, SimulationResult,
    TruthRow, MAX_IO,
};

fn print_powered(d: &Diagram, run: &SimulationResult) {
    for y in 0..d.height() {
        for x in 0..d.width() {
            let g = d.get(x, y).glyph();
            if run.powered(x, y) {
                print!("\x1b[32m{}\x1b[0m", g); // green when powered
            } else {
                print!("{}", g);
            }
        }
        println!();
    }
    println!("max wave: {}", run.max_depth);
}

fn seal_in_latch() {
    // rung 0 sets output 0 while input 0 is held, rung 1 clears it
    let d = Diagram::from_rows(&[
        vec![
            Cell::LeftRail,
            Cell::ContactNo(0),
            Cell::LatchCoil(0),
            Cell::RightRail,
        ],
        vec![
            Cell::LeftRail,
            Cell::ContactNo(1),
            Cell::UnlatchCoil(0),
            Cell::RightRail,
        ],
    ])
    .unwrap();

    let mut memory = LatchMemory::new();
    let presses = [
        ("start pressed", [true, false]),
        ("both released", [false, false]),
        ("stop pressed", [false, true]),
        ("both released", [false, false]),
    ];
    println!("--- seal-in latch ---");
    for (what, [start, stop]) in presses {
        let mut inputs = [false; MAX_IO];
        inputs[0] = start;
        inputs[1] = stop;
        let run = simulate_with_power(&d, &inputs);
        let outs = memory.absorb(&run);
        println!("{}: motor {}", what, if outs[0] { "ON" } else { "off" });
        print_powered(&d, &run);
    }
}

fn xor_level() {
    let d = Diagram::from_rows(&[
        vec![
            Cell::LeftRail,
            Cell::ContactNo(0),
            Cell::ContactNc(1),
            Cell::Coil(0),
            Cell::RightRail,
        ],
        vec![
            Cell::LeftRail,
            Cell::ContactNc(0),
            Cell::ContactNo(1),
            Cell::Coil(0),
            Cell::RightRail,
        ],
    ])
    .unwrap();

    let rows: Vec<TruthRow> = lsim_engine::input_combinations(2)
        .map(|inputs| TruthRow::new(&inputs[..2], &[inputs[0] != inputs[1]]))
        .collect();
    let report = check_against_truth_table(&d, &rows, 2, 1);
    println!("--- xor level ---");
    println!("{}", d);
    println!("passes xor table: {}", report.passed);
}

fn main() {
    seal_in_latch();
    xor_level();
}
