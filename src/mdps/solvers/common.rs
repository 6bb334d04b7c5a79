use crate::mdps::{defs::*, Mdp};
use std::collections::HashMap;

/// State values; states never written read as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTable {
    values: HashMap<State, f64>,
}

impl ValueTable {
    pub fn get(&self, s: State) -> f64 {
        self.values.get(&s).copied().unwrap_or(0.)
    }

    pub fn set(&mut self, s: State, v: f64) {
        self.values.insert(s, v);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        self.values.iter().map(|(&s, &v)| (s, v))
    }

    /// Largest absolute difference over the states of either table.
    pub fn max_abs_diff(&self, other: &ValueTable) -> f64 {
        self.values
            .keys()
            .chain(other.values.keys())
            .map(|&s| (self.get(s) - other.get(s)).abs())
            .fold(0., f64::max)
    }
}

/// The action chosen in each state; `None` where no action is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyTable {
    actions: HashMap<State, Option<Action>>,
}

impl PolicyTable {
    pub fn get(&self, s: State) -> Option<Action> {
        self.actions.get(&s).copied().flatten()
    }

    pub fn set(&mut self, s: State, a: Option<Action>) {
        self.actions.insert(s, a);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// True when both tables pick the same action in every state of `states`.
    pub fn agrees_on(&self, other: &PolicyTable, states: &[State]) -> bool {
        states.iter().all(|&s| self.get(s) == other.get(s))
    }
}

/// Q(s, a) = sum_{s'} P(s'|s,a) [ R(s,a,s') + gamma * V(s') ].
pub fn q_value<M: Mdp + ?Sized>(
    mdp: &M,
    gamma: f64,
    values: &ValueTable,
    s: State,
    a: Action,
) -> f64 {
    mdp.transitions(s, a)
        .iter()
        .fold(0., |q, t| q + t.probability * (t.reward + gamma * values.get(t.next_state)))
}

/// The legal action with the highest Q-value. The first action in
/// `legal_actions` order wins ties.
pub fn greedy_action<M: Mdp + ?Sized>(
    mdp: &M,
    gamma: f64,
    values: &ValueTable,
    s: State,
) -> Option<Action> {
    let mut best: Option<(Action, f64)> = None;
    for &a in mdp.legal_actions(s) {
        let q = q_value(mdp, gamma, values, s, a);
        match best {
            Some((_, best_q)) if q <= best_q => {}
            _ => best = Some((a, q)),
        }
    }

    best.map(|(a, _)| a)
}
