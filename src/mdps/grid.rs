use super::{board::*, defs::*, Mdp};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionModel {
    /// The intended move happens with certainty.
    #[default]
    Deterministic,
    /// Each of the four directions with 0.25, whatever the chosen action.
    Uniform,
    /// Intended 0.6, next in order 0.2, previous in order 0.1, stay 0.1.
    SkewedPrimary,
}

impl FromStr for TransitionModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "deterministic" => Ok(Self::Deterministic),
            "uniform_0.25" => Ok(Self::Uniform),
            "skewed_primary" | "task3_probabilities" => Ok(Self::SkewedPrimary),
            _ => Err(Error::UnknownTransitionModel(s.to_string())),
        }
    }
}

impl fmt::Display for TransitionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deterministic => "deterministic",
            Self::Uniform => "uniform_0.25",
            Self::SkewedPrimary => "skewed_primary",
        })
    }
}

const NO_ACTIONS: &[Action] = &[];
const EXIT_ONLY: &[Action] = &[Action::Exit];

/// A grid world. Reward is collected on arriving at a terminal cell, and again
/// by the `exit` action out of it.
#[derive(Debug, Clone)]
pub struct GridMdp {
    board: Board,
    model: TransitionModel,
    states: Vec<State>,
    initial_state: State,
}

impl GridMdp {
    pub fn new(board: Board, model: TransitionModel) -> Self {
        let states = board
            .coordinates()
            .filter(|&s| board.cell(s) != Some(Cell::Wall))
            .collect();
        let initial_state = board
            .coordinates()
            .find(|&s| board.cell(s) == Some(Cell::Start))
            .unwrap_or_default();

        Self {
            board,
            model,
            states,
            initial_state,
        }
    }

    /// Builds from raw rows and a transition model name.
    pub fn parse<R, T>(rows: &[R], model: &str) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: AsRef<str>,
    {
        let model = model.parse()?;
        Ok(Self::new(Board::parse(rows)?, model))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn transition_model(&self) -> TransitionModel {
        self.model
    }

    fn is_wall(&self, s: State) -> bool {
        !matches!(
            self.board.cell(s),
            Some(Cell::Empty | Cell::Start | Cell::Terminal(_))
        )
    }

    /// Where an attempted move from `s` lands; off-grid and wall moves bounce back.
    fn attempt(&self, s: State, a: Action) -> State {
        match self.board.neighbour(s, a.delta()) {
            Some(next) if !self.is_wall(next) => next,
            _ => s,
        }
    }

    fn outcome(&self, s: State, a: Action, moved: Action, probability: f64) -> Transition {
        let next_state = self.attempt(s, moved);
        Transition {
            next_state,
            probability,
            reward: self.reward(s, a, next_state),
        }
    }
}

impl Mdp for GridMdp {
    fn states(&self) -> &[State] {
        &self.states
    }

    fn is_terminal(&self, s: State) -> bool {
        matches!(self.board.cell(s), Some(Cell::Terminal(_)))
    }

    fn legal_actions(&self, s: State) -> &'static [Action] {
        if self.is_wall(s) {
            NO_ACTIONS
        } else if self.is_terminal(s) {
            EXIT_ONLY
        } else {
            &Action::DIRECTIONS
        }
    }

    fn transitions(&self, s: State, a: Action) -> Vec<Transition> {
        if let Some(reward) = self.board.cell(s).and_then(|c| c.reward()) {
            return if a == Action::Exit {
                vec![Transition {
                    next_state: s,
                    probability: 1.,
                    reward,
                }]
            } else {
                vec![]
            };
        }

        if self.is_wall(s) || !a.is_direction() {
            return vec![];
        }

        match self.model {
            TransitionModel::Deterministic => vec![self.outcome(s, a, a, 1.)],
            TransitionModel::Uniform => Action::DIRECTIONS
                .iter()
                .map(|&moved| self.outcome(s, a, moved, 0.25))
                .collect(),
            TransitionModel::SkewedPrimary => [
                (Some(a), 0.6),
                (a.offset(1), 0.2),
                (a.offset(-1), 0.1),
                (Some(Action::Stay), 0.1),
            ]
            .into_iter()
            .filter_map(|(moved, p)| moved.map(|m| self.outcome(s, a, m, p)))
            .collect(),
        }
    }

    fn reward(&self, _s: State, _a: Action, next: State) -> f64 {
        self.board
            .cell(next)
            .and_then(|c| c.reward())
            .unwrap_or(0.)
    }

    fn initial_state(&self) -> State {
        self.initial_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertor::*;
    use float_eq::*;
    use rstest::rstest;

    fn line() -> GridMdp {
        GridMdp::parse(&[vec!["S", " ", "10"]], "deterministic").unwrap()
    }

    fn s(row: usize, col: usize) -> State {
        State::new(row, col)
    }

    #[test]
    fn states_skip_walls_in_row_major_order() {
        let mdp = GridMdp::parse(&[vec![" ", "#"], vec!["S", "1"]], "deterministic").unwrap();
        assert_eq!(mdp.states(), &[s(0, 0), s(1, 0), s(1, 1)]);
        assert_that!(mdp.initial_state()).is_equal_to(s(1, 0));
    }

    #[test]
    fn initial_state_defaults_to_top_left() {
        let mdp = GridMdp::parse(&[vec!["#", " ", "1"]], "deterministic").unwrap();
        assert_eq!(mdp.initial_state(), s(0, 0));
    }

    #[test]
    fn unknown_model_is_rejected() {
        let err = GridMdp::parse(&[vec!["S"]], "slippery").unwrap_err();
        assert!(matches!(err, Error::UnknownTransitionModel(ref m) if m == "slippery"));
    }

    #[test]
    fn model_names_round_trip_through_display() {
        for m in [
            TransitionModel::Deterministic,
            TransitionModel::Uniform,
            TransitionModel::SkewedPrimary,
        ] {
            assert_eq!(m.to_string().parse::<TransitionModel>().unwrap(), m);
        }
        assert_eq!(
            "task3_probabilities".parse::<TransitionModel>().unwrap(),
            TransitionModel::SkewedPrimary
        );
    }

    #[test]
    fn legal_actions_by_cell_kind() {
        let mdp = GridMdp::parse(&[vec!["S", "#", "-1"]], "deterministic").unwrap();
        assert_eq!(mdp.legal_actions(s(0, 0)), &Action::DIRECTIONS);
        assert!(mdp.legal_actions(s(0, 1)).is_empty());
        assert_eq!(mdp.legal_actions(s(0, 2)), &[Action::Exit]);
        assert!(mdp.legal_actions(s(3, 3)).is_empty());
        assert!(mdp.is_terminal(s(0, 2)));
        assert!(!mdp.is_terminal(s(0, 0)));
        assert!(!mdp.is_terminal(s(0, 1)));
    }

    #[test]
    fn reward_is_paid_on_arrival() {
        let mdp = line();
        let ts = mdp.transitions(s(0, 1), Action::Right);
        assert_eq!(
            ts,
            vec![Transition {
                next_state: s(0, 2),
                probability: 1.,
                reward: 10.
            }]
        );
        assert_float_eq!(mdp.reward(s(0, 0), Action::Right, s(0, 1)), 0., abs <= 0.);
    }

    #[test]
    fn exit_is_the_only_way_out_of_a_terminal() {
        let mdp = line();
        assert_eq!(
            mdp.transitions(s(0, 2), Action::Exit),
            vec![Transition {
                next_state: s(0, 2),
                probability: 1.,
                reward: 10.
            }]
        );
        assert!(mdp.transitions(s(0, 2), Action::Left).is_empty());
        assert!(mdp.transitions(s(0, 0), Action::Exit).is_empty());
    }

    #[test]
    fn walls_have_no_transitions() {
        let mdp = GridMdp::parse(&[vec!["S", "#"]], "uniform_0.25").unwrap();
        assert!(mdp.transitions(s(0, 1), Action::Left).is_empty());
    }

    #[test]
    fn blocked_moves_bounce_back_without_reward() {
        let board = [
            vec!["#", "#", "#"],
            vec!["#", " ", " "],
            vec!["#", "#", "#"],
        ];
        let mdp = GridMdp::parse(&board, "deterministic").unwrap();
        for a in [Action::Up, Action::Down, Action::Left] {
            let ts = mdp.transitions(s(1, 1), a);
            assert_eq!(ts.len(), 1);
            assert_eq!(ts[0].next_state, s(1, 1));
            assert_float_eq!(ts[0].reward, 0., abs <= 0.);
        }
        assert_eq!(mdp.transitions(s(1, 1), Action::Right)[0].next_state, s(1, 2));
    }

    #[test]
    fn uniform_keeps_blocked_directions_as_self_loops() {
        let mdp = GridMdp::parse(&[vec!["S", " "], vec![" ", " "]], "uniform_0.25").unwrap();
        let ts = mdp.transitions(s(0, 0), Action::Right);
        let next = ts.iter().map(|t| t.next_state).collect::<Vec<_>>();
        assert_eq!(next, vec![s(0, 0), s(1, 0), s(0, 0), s(0, 1)]);
        assert!(ts.iter().all(|t| t.probability == 0.25));
    }

    #[test]
    fn uniform_ignores_the_chosen_action() {
        let mdp = GridMdp::parse(&[vec!["S", " ", "1"]], "uniform_0.25").unwrap();
        let up = mdp.transitions(s(0, 1), Action::Up);
        let right = mdp.transitions(s(0, 1), Action::Right);
        assert_eq!(up, right);
    }

    #[test]
    fn skewed_distributes_over_ordering_neighbours() {
        let board = [
            vec![" ", " ", " "],
            vec![" ", "S", "5"],
            vec![" ", " ", " "],
        ];
        let mdp = GridMdp::parse(&board, "skewed_primary").unwrap();
        let ts = mdp.transitions(s(1, 1), Action::Up);
        assert_eq!(
            ts,
            vec![
                Transition {
                    next_state: s(0, 1),
                    probability: 0.6,
                    reward: 0.
                },
                Transition {
                    next_state: s(2, 1),
                    probability: 0.2,
                    reward: 0.
                },
                Transition {
                    next_state: s(1, 2),
                    probability: 0.1,
                    reward: 5.
                },
                Transition {
                    next_state: s(1, 1),
                    probability: 0.1,
                    reward: 0.
                },
            ]
        );
    }

    #[rstest]
    #[case("deterministic")]
    #[case("uniform_0.25")]
    #[case("skewed_primary")]
    fn outcome_probabilities_sum_to_one(#[case] model: &str) {
        let board = [
            vec!["S", " ", " ", "1"],
            vec![" ", "#", " ", "-1"],
            vec![" ", " ", " ", " "],
        ];
        let mdp = GridMdp::parse(&board, model).unwrap();
        for &st in mdp.states() {
            for &a in mdp.legal_actions(st) {
                let total = mdp
                    .transitions(st, a)
                    .iter()
                    .map(|t| t.probability)
                    .sum::<f64>();
                assert_float_eq!(total, 1., abs <= 1e-9);
            }
        }
    }
}
