use super::common::*;
use crate::config::SolverConfig;
use crate::mdps::{defs::*, Mdp, MdpSolver};
use crate::Result;
use tracing::debug;

/// Synchronous value iteration for a fixed number of sweeps.
#[derive(Debug, Clone)]
pub struct ValueIteration<'a, M: Mdp> {
    mdp: &'a M,
    gamma: f64,
    iterations: usize,
    values: ValueTable,
}

impl<'a, M: Mdp> ValueIteration<'a, M> {
    pub fn new(mdp: &'a M, config: &SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mdp,
            gamma: config.discount,
            iterations: config.iterations,
            values: ValueTable::default(),
        })
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Same as `pi_star`.
    pub fn action(&self, s: State) -> Option<Action> {
        self.pi_star(s)
    }

    /// One Bellman optimality backup of every state, reading only `values`.
    fn sweep(&self, values: &ValueTable) -> ValueTable {
        let mut next = ValueTable::default();
        for &s in self.mdp.states() {
            let v = if self.mdp.is_terminal(s) {
                0.
            } else {
                self.mdp
                    .legal_actions(s)
                    .iter()
                    .map(|&a| q_value(self.mdp, self.gamma, values, s, a))
                    .reduce(f64::max)
                    .unwrap_or(0.)
            };
            next.set(s, v);
        }

        next
    }
}

/// `exec` yields the largest value change of the last sweep.
impl<'a, M: Mdp> MdpSolver<f64> for ValueIteration<'a, M> {
    fn v_star(&self, s: State) -> f64 {
        self.values.get(s)
    }

    fn q_star(&self, s: State, a: Action) -> f64 {
        q_value(self.mdp, self.gamma, &self.values, s, a)
    }

    fn pi_star(&self, s: State) -> Option<Action> {
        if self.mdp.is_terminal(s) {
            return None;
        }

        greedy_action(self.mdp, self.gamma, &self.values, s)
    }

    fn exec(&mut self) -> (f64, usize) {
        self.values = ValueTable::default();
        let mut delta = 0.;
        for i in 0..self.iterations {
            let next = self.sweep(&self.values);
            delta = next.max_abs_diff(&self.values);
            self.values = next;
            debug!(iteration = i + 1, delta, "value iteration sweep");
        }

        (delta, self.iterations)
    }
}
