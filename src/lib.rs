pub mod boards;
pub mod config;
pub mod error;
pub mod mdps;
pub mod render;

pub use config::{Scenario, SolverConfig};
pub use error::{Error, Result};
pub use mdps::{
    defs::*,
    grid::{GridMdp, TransitionModel},
    solvers::{PolicyIteration, PolicyTable, ValueIteration, ValueTable},
    Mdp, MdpSolver,
};
