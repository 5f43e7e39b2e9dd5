//! ModelKit - Declare indexed model components now, build them later
//!
//! A declaration captures an index set and rule functions before any model
//! data exists; an external build phase later supplies the concrete model
//! and each deferred builder materializes a populated keyed container.
//!
//! # Example
//!
//! ```
//! use modelkit::prelude::*;
//!
//! // Declaration phase: rules are captured, not evaluated.
//! let days = set(1u32..=3, true);
//! let x = var(Some(days.clone()), 0.0, (0.0, 24.0)).unwrap();
//! let cap = constraint(
//!     Some(days),
//!     Some(Box::new(|_m: &Model, i: &u32| {
//!         Ok(LinearExpr::var(VarId::new(*i)).le(f64::from(*i)))
//!     })),
//!     None,
//! )
//! .unwrap();
//!
//! // Build phase: materialize against a concrete model and install.
//! let mut model = concrete_model();
//! if let VarDecl::Deferred(builder) = x {
//!     let vars = builder.materialize(&model).unwrap();
//!     model.install("x", vars);
//! }
//! if let ConstraintDecl::Deferred(builder) = cap {
//!     let constraints = builder.materialize(&model).unwrap();
//!     assert_eq!(constraints.len(), 3);
//! }
//! ```

mod decl;
mod error;

pub use decl::{
    concrete_model, constraint, expression, objective, set, var, ConstraintDecl, ConstraintRule,
    IndexedConstraintBuilder, IndexedVariableBuilder, VarDecl,
};
pub use error::DeclError;

// Deferred-construction core
pub use modelkit_core::{
    BoundsField, DeferredConstraint, DeferredVariable, IndexSet, IndexedMap, KeyedContainer,
    NumericConstant, RuleError, ScalarField,
};

// Kernel collaborators
pub use modelkit_kernel::{
    ComparisonSense, Constraint, ConstraintExpr, LinearExpr, Model, Objective, ObjectiveSense,
    VarId, Variable,
};

pub mod prelude {
    pub use super::{concrete_model, constraint, expression, objective, set, var};
    pub use super::{ConstraintDecl, DeclError, VarDecl};
    pub use super::{BoundsField, IndexSet, IndexedMap, KeyedContainer, RuleError, ScalarField};
    pub use super::{
        ComparisonSense, Constraint, ConstraintExpr, LinearExpr, Model, Objective, ObjectiveSense,
        VarId, Variable,
    };
}
