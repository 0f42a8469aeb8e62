use lsim_engine::{simulate, simulate_with_power, Cell, Diagram, MAX_IO};

fn inputs(bits: &[bool]) -> [bool; MAX_IO] {
    let mut v = [false; MAX_IO];
    v[..bits.len()].copy_from_slice(bits);
    v
}

#[test]
fn evaluation_is_deterministic() {
    let d = Diagram::from_rows(&[
        vec![
            Cell::LeftRail,
            Cell::Junction,
            Cell::ContactNo(0),
            Cell::Coil(0),
            Cell::RightRail,
        ],
        vec![
            Cell::LeftRail,
            Cell::Junction,
            Cell::ContactNc(0),
            Cell::Coil(1),
            Cell::RightRail,
        ],
    ])
    .unwrap();
    let v = inputs(&[true]);
    assert_eq!(simulate_with_power(&d, &v), simulate_with_power(&d, &v));
}

#[test]
fn horizontal_wire_blocks_vertical_entry() {
    let d = Diagram::from_rows(&[
        vec![Cell::LeftRail, Cell::Junction, Cell::Coil(0), Cell::RightRail],
        vec![Cell::Empty, Cell::HWire, Cell::Empty, Cell::Empty],
    ])
    .unwrap();
    let run = simulate_with_power(&d, &inputs(&[]));
    assert!(run.powered(1, 0));
    // the junction pushes power down, but a horizontal wire entered
    // from above never conducts
    assert!(!run.powered(1, 1));
    assert!(run.outputs[0]);
}

#[test]
fn no_and_nc_contacts_are_complementary() {
    let no = Diagram::from_rows(&[vec![
        Cell::LeftRail,
        Cell::ContactNo(0),
        Cell::Coil(0),
        Cell::RightRail,
    ]])
    .unwrap();
    let nc = Diagram::from_rows(&[vec![
        Cell::LeftRail,
        Cell::ContactNc(0),
        Cell::Coil(0),
        Cell::RightRail,
    ]])
    .unwrap();
    for level in [false, true] {
        let v = inputs(&[level]);
        assert_eq!(simulate(&no, &v)[0], level);
        assert_eq!(simulate(&nc, &v)[0], !level);
    }
}

#[test]
fn series_contacts_act_as_and() {
    let d = Diagram::from_rows(&[vec![
        Cell::LeftRail,
        Cell::ContactNo(0),
        Cell::HWire,
        Cell::Coil(0),
        Cell::RightRail,
    ]])
    .unwrap();

    let off = simulate_with_power(&d, &inputs(&[false]));
    assert!(!off.outputs[0]);
    assert!(!off.powered(1, 0));

    let on = simulate_with_power(&d, &inputs(&[true]));
    assert!(on.outputs[0]);
    let rail = on.depth_at(0, 0);
    let contact = on.depth_at(1, 0);
    let wire = on.depth_at(2, 0);
    let coil = on.depth_at(3, 0);
    assert_eq!(rail, 1);
    assert!(rail < contact && contact < wire && wire < coil);
    assert!(on.max_depth >= coil);
}

#[test]
fn parallel_rungs_act_as_or() {
    let d = Diagram::from_rows(&[
        vec![
            Cell::LeftRail,
            Cell::ContactNo(0),
            Cell::Coil(0),
            Cell::RightRail,
        ],
        vec![
            Cell::LeftRail,
            Cell::ContactNo(1),
            Cell::Coil(0),
            Cell::RightRail,
        ],
    ])
    .unwrap();
    assert!(!simulate(&d, &inputs(&[false, false]))[0]);
    assert!(simulate(&d, &inputs(&[true, false]))[0]);
    assert!(simulate(&d, &inputs(&[false, true]))[0]);
    assert!(simulate(&d, &inputs(&[true, true]))[0]);
}

#[test]
fn junction_fans_power_out_to_both_rungs() {
    let d = Diagram::from_rows(&[
        vec![Cell::LeftRail, Cell::Junction, Cell::Coil(0), Cell::RightRail],
        vec![Cell::Empty, Cell::Junction, Cell::Coil(1), Cell::RightRail],
    ])
    .unwrap();
    let run = simulate_with_power(&d, &inputs(&[]));
    assert!(run.outputs[0]);
    assert!(run.outputs[1]);
    assert!(run.powered(1, 0));
    assert!(run.powered(1, 1));
}

#[test]
fn latch_set_beats_clear() {
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
    assert!(simulate(&d, &inputs(&[true, false]))[0]);
    assert!(!simulate(&d, &inputs(&[false, true]))[0]);
    assert!(simulate(&d, &inputs(&[true, true]))[0]);
}

#[test]
fn out_of_range_coil_index_is_inert() {
    let d = Diagram::from_rows(&[vec![
        Cell::LeftRail,
        Cell::HWire,
        Cell::Coil(MAX_IO + 3),
        Cell::RightRail,
    ]])
    .unwrap();
    let run = simulate_with_power(&d, &inputs(&[]));
    assert_eq!(run.outputs, [false; MAX_IO]);
    // the coil cell itself still carries power
    assert!(run.powered(2, 0));
}

#[test]
fn diagram_without_rails_stays_dark() {
    let d = Diagram::from_rows(&[vec![Cell::HWire, Cell::Coil(0), Cell::RightRail]]).unwrap();
    let run = simulate_with_power(&d, &inputs(&[]));
    assert_eq!(run.outputs, [false; MAX_IO]);
    assert_eq!(run.max_depth, 0);
    assert!(!run.powered(0, 0));
}

#[test]
fn rail_loop_through_junctions_terminates() {
    // junction block that feeds power back on itself
    let d = Diagram::from_rows(&[
        vec![Cell::LeftRail, Cell::Junction, Cell::Junction, Cell::RightRail],
        vec![Cell::Empty, Cell::Junction, Cell::Junction, Cell::Empty],
    ])
    .unwrap();
    let run = simulate_with_power(&d, &inputs(&[]));
    assert!(run.powered(1, 0) && run.powered(2, 0));
    assert!(run.powered(1, 1) && run.powered(2, 1));
    assert!(run.powered(3, 0));
}
