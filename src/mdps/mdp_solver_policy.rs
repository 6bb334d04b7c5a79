use super::{defs::*, solvers::PolicyTable, MdpSolver};

pub trait Policy {
    fn policy(&self, s: State) -> Option<Action>;
}

/// Acts greedily with respect to a solved MDP.
pub struct MdpSolverPolicy<'a, T> {
    pub mdp_solver: &'a dyn MdpSolver<T>,
}

impl<T> Policy for MdpSolverPolicy<'_, T> {
    fn policy(&self, s: State) -> Option<Action> {
        self.mdp_solver.pi_star(s)
    }
}

impl Policy for PolicyTable {
    fn policy(&self, s: State) -> Option<Action> {
        self.get(s)
    }
}
