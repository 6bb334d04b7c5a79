pub mod board;
pub mod defs;
pub mod grid;
pub mod mdp_simulator;
pub mod mdp_solver_policy;
pub mod solvers;

use defs::*;

/// Markov Decision Process - Sutton & Barto 2018.
pub trait Mdp {
    /// Every state, in a fixed order.
    fn states(&self) -> &[State];

    fn is_terminal(&self, s: State) -> bool;

    fn legal_actions(&self, s: State) -> &'static [Action];

    fn transitions(&self, s: State, a: Action) -> Vec<Transition>;

    fn reward(&self, s: State, a: Action, next: State) -> f64;

    fn initial_state(&self) -> State;
}

pub trait MdpSolver<T> {
    fn v_star(&self, s: State) -> f64;

    fn q_star(&self, s: State, a: Action) -> f64;

    fn pi_star(&self, s: State) -> Option<Action>;

    /// Runs the solver from scratch. Returns the solver specific outcome and
    /// the number of iterations performed.
    fn exec(&mut self) -> (T, usize);
}
