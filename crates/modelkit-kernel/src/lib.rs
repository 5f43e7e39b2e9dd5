//! ModelKit Kernel - Reference collaborators for the declaration layer
//!
//! The deferred-construction core is generic over its collaborators; this
//! crate provides concrete ones:
//! - Linear expressions and comparison expressions
//! - Constraint, variable, and objective elements with their factories
//! - The `Model` aggregate that owns installed component containers

pub mod expr;

mod constraint;
mod model;
mod objective;
mod variable;

pub use constraint::{Constraint, ConstraintFactory};
pub use expr::{ComparisonSense, ConstraintExpr, LinearExpr, VarId};
pub use model::Model;
pub use objective::{Objective, ObjectiveSense};
pub use variable::{Variable, VariableFactory};
