use super::{defs::*, mdp_solver_policy::Policy, Mdp};
use rand::distributions::WeightedIndex;
use rand::prelude::*;

/// One step of an episode: the state arrived at and the reward for getting there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeEvent {
    pub s: State,
    pub r: f64,
}

pub trait Weighted<S> {
    fn s(&self) -> S;

    fn p(&self) -> f64;
}

impl Weighted<State> for Transition {
    fn s(&self) -> State {
        self.next_state
    }

    fn p(&self) -> f64 {
        self.probability
    }
}

/// Draws one item by weight. `None` when the weights cannot form a distribution.
pub fn pick_next<T, S>(rng: &mut StdRng, ts: &[T]) -> Option<S>
where
    T: Weighted<S>,
{
    let dist = WeightedIndex::new(ts.iter().map(|item| item.p())).ok()?;
    ts.get(dist.sample(rng)).map(|t| t.s())
}

/// Plays `policy` from the initial state until the agent exits a terminal, the
/// policy has no action, or `max_steps` moves were made.
pub fn rollout<M: Mdp + ?Sized>(
    mdp: &M,
    policy: &dyn Policy,
    rng: &mut StdRng,
    max_steps: usize,
) -> Vec<EpisodeEvent> {
    let mut s = mdp.initial_state();
    let mut ep = vec![EpisodeEvent { s, r: 0. }];
    for _ in 0..max_steps {
        let a = if mdp.is_terminal(s) {
            Action::Exit
        } else {
            match policy.policy(s) {
                Some(a) => a,
                None => break,
            }
        };

        let ts = mdp.transitions(s, a);
        let Some(next) = pick_next(rng, &ts) else {
            break;
        };
        let r = mdp.reward(s, a, next);
        ep.push(EpisodeEvent { s: next, r });
        if a == Action::Exit {
            break;
        }

        s = next;
    }

    ep
}

pub fn discounted_return(ep: &[EpisodeEvent], gamma: f64) -> f64 {
    ep.iter().skip(1).rev().fold(0., |g, e| gamma * g + e.r)
}
