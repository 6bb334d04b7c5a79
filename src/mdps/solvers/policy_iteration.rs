use super::common::*;
use crate::config::SolverConfig;
use crate::mdps::{defs::*, Mdp, MdpSolver};
use crate::Result;
use rand::prelude::*;
use tracing::{debug, info};

/// Policy iteration with truncated, warm-started policy evaluation.
#[derive(Debug, Clone)]
pub struct PolicyIteration<'a, M: Mdp> {
    mdp: &'a M,
    gamma: f64,
    iterations: usize,
    evaluation_iterations: usize,
    seed: Option<u64>,
    values: ValueTable,
    policy: PolicyTable,
}

impl<'a, M: Mdp> PolicyIteration<'a, M> {
    pub fn new(mdp: &'a M, config: &SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mdp,
            gamma: config.discount,
            iterations: config.iterations,
            evaluation_iterations: config.evaluation_iterations,
            seed: config.seed,
            values: ValueTable::default(),
            policy: PolicyTable::default(),
        })
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    pub fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    /// Approximates the values of `policy` with a bounded number of
    /// synchronous sweeps, starting from `initial` when given.
    pub fn policy_evaluation(
        &self,
        policy: &PolicyTable,
        initial: Option<&ValueTable>,
    ) -> ValueTable {
        let mut values = initial.cloned().unwrap_or_default();
        for _ in 0..self.evaluation_iterations {
            let mut next = values.clone();
            for &s in self.mdp.states() {
                let v = match policy.get(s) {
                    Some(a) if !self.mdp.is_terminal(s) => {
                        q_value(self.mdp, self.gamma, &values, s, a)
                    }
                    _ => 0.,
                };
                next.set(s, v);
            }
            values = next;
        }

        values
    }

    /// The greedy policy with respect to `values`.
    pub fn policy_improvement(&self, values: &ValueTable) -> PolicyTable {
        let mut policy = PolicyTable::default();
        for &s in self.mdp.states() {
            let a = if self.mdp.is_terminal(s) {
                Some(Action::Exit)
            } else {
                greedy_action(self.mdp, self.gamma, values, s)
            };
            policy.set(s, a);
        }

        policy
    }

    fn random_policy(&self, rng: &mut StdRng) -> PolicyTable {
        let mut policy = PolicyTable::default();
        for &s in self.mdp.states() {
            let a = if self.mdp.is_terminal(s) {
                Some(Action::Exit)
            } else {
                self.mdp.legal_actions(s).choose(rng).copied()
            };
            policy.set(s, a);
        }

        policy
    }
}

/// `exec` yields whether the policy stopped changing within the budget.
impl<'a, M: Mdp> MdpSolver<bool> for PolicyIteration<'a, M> {
    fn v_star(&self, s: State) -> f64 {
        self.values.get(s)
    }

    fn q_star(&self, s: State, a: Action) -> f64 {
        q_value(self.mdp, self.gamma, &self.values, s, a)
    }

    fn pi_star(&self, s: State) -> Option<Action> {
        self.policy.get(s)
    }

    fn exec(&mut self) -> (bool, usize) {
        let rng = &mut match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.values = ValueTable::default();
        self.policy = self.random_policy(rng);

        for i in 0..self.iterations {
            self.values = self.policy_evaluation(&self.policy, Some(&self.values));
            let candidate = self.policy_improvement(&self.values);
            let stable = candidate.agrees_on(&self.policy, self.mdp.states());
            self.policy = candidate;
            debug!(iteration = i + 1, stable, "policy iteration round");

            if stable {
                info!("Policy converged after {} iterations.", i + 1);
                return (true, i + 1);
            }
        }

        (false, self.iterations)
    }
}
