pub mod common;
pub mod policy_iteration;
pub mod value_iteration;

pub use common::{PolicyTable, ValueTable};
pub use policy_iteration::PolicyIteration;
pub use value_iteration::ValueIteration;
