//! Declaration entry points.
//!
//! Each entry point either constructs an element immediately (no index set)
//! or returns a deferred builder wired to the kernel collaborators. A
//! deferred declaration stays inert until an external build phase calls
//! `materialize(model)` on it; nothing here triggers materialization
//! implicitly.

use std::hash::Hash;

use modelkit_core::{
    BoundsField, DeferredConstraint, DeferredVariable, IndexSet, IndexedMap, RuleError,
    ScalarField,
};
use modelkit_kernel::{
    Constraint, ConstraintExpr, ConstraintFactory, LinearExpr, Model, Objective, Variable,
    VariableFactory,
};

use crate::error::DeclError;

/// Deferred constraint builder over the kernel collaborators.
pub type IndexedConstraintBuilder<I> =
    DeferredConstraint<Model, I, ConstraintFactory, IndexedMap<I, Constraint>>;

/// Deferred variable builder over the kernel collaborators.
pub type IndexedVariableBuilder<I> =
    DeferredVariable<Model, I, VariableFactory, IndexedMap<I, Variable>>;

/// Rule signature accepted by [`constraint`].
pub type ConstraintRule<I> =
    Box<dyn Fn(&Model, &I) -> Result<ConstraintExpr, RuleError> + Send + Sync>;

/// A declared constraint: already built, or awaiting materialization.
///
/// The only transition out of `Deferred` is an external build phase calling
/// `materialize(model)` on the builder; there is no reverse transition.
#[derive(Debug)]
pub enum ConstraintDecl<I> {
    /// Fully constructed single constraint (terminal).
    Immediate(Constraint),
    /// Builder awaiting a model context.
    Deferred(IndexedConstraintBuilder<I>),
}

impl<I> ConstraintDecl<I> {
    /// Returns the immediate constraint, if this declaration is one.
    pub fn into_immediate(self) -> Option<Constraint> {
        match self {
            Self::Immediate(constraint) => Some(constraint),
            Self::Deferred(_) => None,
        }
    }

    /// Returns the deferred builder, if this declaration is one.
    pub fn into_deferred(self) -> Option<IndexedConstraintBuilder<I>> {
        match self {
            Self::Immediate(_) => None,
            Self::Deferred(builder) => Some(builder),
        }
    }

    /// Returns whether this declaration is deferred.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

/// A declared variable: already built, or awaiting materialization.
#[derive(Debug)]
pub enum VarDecl<I> {
    /// Fully constructed single variable (terminal).
    Immediate(Variable),
    /// Builder awaiting a model context.
    Deferred(IndexedVariableBuilder<I>),
}

impl<I> VarDecl<I> {
    /// Returns the immediate variable, if this declaration is one.
    pub fn into_immediate(self) -> Option<Variable> {
        match self {
            Self::Immediate(variable) => Some(variable),
            Self::Deferred(_) => None,
        }
    }

    /// Returns the deferred builder, if this declaration is one.
    pub fn into_deferred(self) -> Option<IndexedVariableBuilder<I>> {
        match self {
            Self::Immediate(_) => None,
            Self::Deferred(builder) => Some(builder),
        }
    }

    /// Returns whether this declaration is deferred.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

/// Snapshots a collection into an [`IndexSet`].
///
/// `ordered` is accepted for interface compatibility and currently has no
/// effect: the snapshot always preserves the collection's iteration order.
pub fn set<I>(initialize: impl IntoIterator<Item = I>, ordered: bool) -> IndexSet<I> {
    let _ = ordered;
    IndexSet::new(initialize)
}

/// Declares a constraint.
///
/// With `expr` alone, returns an immediate single constraint wrapping it;
/// with `index_set` and `rule`, returns a deferred builder. Supplying `expr`
/// together with either of the other two, or an incomplete pair, is a
/// contract violation.
pub fn constraint<I: Clone + Eq + Hash>(
    index_set: Option<IndexSet<I>>,
    rule: Option<ConstraintRule<I>>,
    expr: Option<ConstraintExpr>,
) -> Result<ConstraintDecl<I>, DeclError> {
    match (expr, index_set, rule) {
        (Some(expr), None, None) => Ok(ConstraintDecl::Immediate(Constraint::new(expr))),
        (Some(_), _, _) => Err(DeclError::ConflictingConstraintArgs),
        (None, Some(index_set), Some(rule)) => {
            tracing::debug!(indices = index_set.len(), "declared deferred constraint");
            Ok(ConstraintDecl::Deferred(DeferredConstraint::from_boxed(
                index_set,
                rule,
                ConstraintFactory,
            )))
        }
        (None, _, _) => Err(DeclError::MissingConstraintArgs),
    }
}

/// Declares a variable.
///
/// Without an index set, `initialize` must be a constant or absent and
/// `bounds` must be a fixed pair or absent; an immediate single variable is
/// returned. With an index set, both fields may also be rules and a deferred
/// builder is returned.
pub fn var<I: Clone + Eq + Hash>(
    index_set: Option<IndexSet<I>>,
    initialize: impl Into<ScalarField<Model, I, f64>>,
    bounds: impl Into<BoundsField<Model, I, f64>>,
) -> Result<VarDecl<I>, DeclError> {
    let initialize = initialize.into();
    let bounds = bounds.into();
    match index_set {
        Some(index_set) => {
            tracing::debug!(indices = index_set.len(), "declared deferred variable");
            Ok(VarDecl::Deferred(DeferredVariable::new(
                index_set,
                initialize,
                bounds,
                VariableFactory,
            )))
        }
        None => {
            let value = match initialize {
                ScalarField::Absent => None,
                ScalarField::Constant(value) => Some(value),
                ScalarField::Rule(_) => return Err(DeclError::InitRuleWithoutIndexSet),
            };
            let (lower, upper) = match bounds {
                BoundsField::Absent => (None, None),
                BoundsField::Fixed(lower, upper) => (Some(lower), Some(upper)),
                BoundsField::Rule(_) => return Err(DeclError::BoundsRuleWithoutIndexSet),
            };
            Ok(VarDecl::Immediate(Variable::new(lower, upper, value)))
        }
    }
}

/// Returns the expression unchanged.
pub fn expression(expr: LinearExpr) -> LinearExpr {
    expr
}

/// Declares an immediately constructed objective wrapping `expr`.
pub fn objective(expr: LinearExpr) -> Objective {
    Objective::new(expr)
}

/// Returns a freshly constructed, empty model aggregate.
pub fn concrete_model() -> Model {
    Model::new()
}
