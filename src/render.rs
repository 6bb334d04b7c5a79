use crate::mdps::{board::Cell, defs::State, grid::GridMdp, mdp_solver_policy::Policy};
use crate::mdps::solvers::ValueTable;
use itertools::Itertools;

/// One character per cell: the chosen action, `X` for terminals, `#` for
/// walls and `.` where the policy has nothing to say.
pub fn render_policy(mdp: &GridMdp, policy: &dyn Policy) -> String {
    let board = mdp.board();
    (0..board.n_rows())
        .map(|row| {
            (0..board.n_cols())
                .map(|col| {
                    let s = State::new(row, col);
                    match board.cell(s) {
                        Some(Cell::Wall) | None => '#',
                        Some(Cell::Terminal(_)) => 'X',
                        _ => policy.policy(s).map(|a| a.symbol()).unwrap_or('.'),
                    }
                })
                .collect::<String>()
        })
        .join("\n")
}

pub fn render_values(mdp: &GridMdp, values: &ValueTable) -> String {
    let board = mdp.board();
    (0..board.n_rows())
        .map(|row| {
            (0..board.n_cols())
                .map(|col| {
                    let s = State::new(row, col);
                    match board.cell(s) {
                        Some(Cell::Wall) | None => format!("{:>8}", "#"),
                        _ => format!("{:>8.2}", values.get(s)),
                    }
                })
                .join(" ")
        })
        .join("\n")
}
