use crate::mdps::grid::GridMdp;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub discount: f64,
    /// Sweeps for value iteration, outer rounds for policy iteration.
    pub iterations: usize,
    /// Evaluation sweeps per policy iteration round.
    pub evaluation_iterations: usize,
    /// Seed for the initial random policy; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            discount: 0.9,
            iterations: 100,
            evaluation_iterations: 50,
            seed: None,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.discount > 0. && self.discount <= 1. {
            Ok(())
        } else {
            Err(Error::InvalidDiscount(self.discount))
        }
    }
}

fn default_transition_model() -> String {
    "deterministic".to_string()
}

/// A board, its dynamics and the solver settings, as read from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub board: Vec<Vec<String>>,
    #[serde(default = "default_transition_model")]
    pub transition_model: String,
    #[serde(default)]
    pub solver: SolverConfig,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Validates the whole scenario up front and builds its MDP.
    pub fn mdp(&self) -> Result<GridMdp> {
        self.solver.validate()?;
        GridMdp::parse(&self.board, &self.transition_model)
    }
}
