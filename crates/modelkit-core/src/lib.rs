//! ModelKit Core - Deferred construction of indexed model components
//!
//! This crate provides the fundamental abstractions for ModelKit:
//! - Index-set snapshots captured at declaration time
//! - Constant-or-rule fields with their two classification policies
//! - Deferred builders that materialize keyed containers on demand
//! - Capability traits for element constructors and keyed containers

pub mod container;
pub mod deferred;
pub mod element;
pub mod error;
pub mod field;
pub mod index_set;
pub mod numeric;

pub use container::{IndexedMap, KeyedContainer};
pub use deferred::{ConstraintRule, DeferredConstraint, DeferredVariable};
pub use element::{ConstraintConstructor, VariableConstructor};
pub use error::RuleError;
pub use field::{BoundsField, BoundsRule, ScalarField, ScalarRule};
pub use index_set::IndexSet;
pub use numeric::NumericConstant;
