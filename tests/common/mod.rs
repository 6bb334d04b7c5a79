use gridmdp::*;

pub const LINE: &[&[&str]] = &[&["S", " ", "10"]];

pub const POCKET: &[&[&str]] = &[
    &["#", "#", "#", "#"],
    &["#", "S", " ", "5"],
    &["#", "#", " ", "#"],
    &["-5", " ", " ", "#"],
];

#[allow(dead_code)]
pub fn s(row: usize, col: usize) -> State {
    State::new(row, col)
}

/// Settings generous enough for both solvers to reach their fixed points.
#[allow(dead_code)]
pub fn converging_config(seed: u64) -> SolverConfig {
    SolverConfig {
        discount: 0.9,
        iterations: 300,
        evaluation_iterations: 300,
        seed: Some(seed),
    }
}

/// Runs both solvers and returns (value iteration values, policy iteration values,
/// whether policy iteration reported convergence).
#[allow(dead_code)]
pub fn solve_both(mdp: &GridMdp, config: &SolverConfig) -> (ValueTable, ValueTable, bool) {
    let vi = &mut ValueIteration::new(mdp, config).unwrap();
    vi.exec();
    let pi = &mut PolicyIteration::new(mdp, config).unwrap();
    let (stable, _) = pi.exec();

    (vi.values().clone(), pi.values().clone(), stable)
}
