//! Deferred builders: declaration-time capture, build-time materialization.
//!
//! A deferred builder binds an index-set snapshot and one or more rules to
//! an element constructor. `materialize` borrows the model for the duration
//! of one call, evaluates the rules once per index in traversal order, and
//! returns a freshly populated keyed container. The builder itself is never
//! mutated, so the same declaration can be materialized again, producing an
//! independent container with identical keys.

use std::fmt;
use std::marker::PhantomData;

use crate::container::KeyedContainer;
use crate::element::{ConstraintConstructor, VariableConstructor};
use crate::error::RuleError;
use crate::field::{BoundsField, ScalarField};
use crate::index_set::IndexSet;

/// Per-index rule for an indexed constraint.
pub type ConstraintRule<M, I, E> = Box<dyn Fn(&M, &I) -> Result<E, RuleError> + Send + Sync>;

/// A constraint declaration awaiting a model context.
///
/// Created with an index-set snapshot, a rule, and an element constructor.
/// The container type `C` is fixed at declaration time.
pub struct DeferredConstraint<M, I, F, C>
where
    F: ConstraintConstructor,
{
    index_set: IndexSet<I>,
    rule: ConstraintRule<M, I, F::Expr>,
    factory: F,
    _container: PhantomData<C>,
}

impl<M, I, F, C> DeferredConstraint<M, I, F, C>
where
    I: Clone,
    F: ConstraintConstructor,
    C: KeyedContainer<I, F::Element>,
{
    /// Creates a deferred constraint builder.
    pub fn new<R>(index_set: IndexSet<I>, rule: R, factory: F) -> Self
    where
        R: Fn(&M, &I) -> Result<F::Expr, RuleError> + Send + Sync + 'static,
    {
        Self::from_boxed(index_set, Box::new(rule), factory)
    }

    /// Creates a deferred constraint builder from an already-boxed rule.
    pub fn from_boxed(
        index_set: IndexSet<I>,
        rule: ConstraintRule<M, I, F::Expr>,
        factory: F,
    ) -> Self {
        Self {
            index_set,
            rule,
            factory,
            _container: PhantomData,
        }
    }

    /// Returns the captured index set.
    pub fn index_set(&self) -> &IndexSet<I> {
        &self.index_set
    }

    /// Evaluates the rule once per index and returns the populated container.
    ///
    /// The first rule failure aborts the call; no entries beyond the failing
    /// index are produced and the partial container is dropped. The builder
    /// is unchanged and may be materialized again.
    pub fn materialize(&self, model: &M) -> Result<C, RuleError> {
        tracing::debug!(indices = self.index_set.len(), "materializing indexed constraint");
        let mut container = C::empty();
        for index in self.index_set.iter() {
            let expr = (self.rule)(model, index)?;
            container.insert(index.clone(), self.factory.construct(expr));
        }
        Ok(container)
    }
}

impl<M, I, F, C> fmt::Debug for DeferredConstraint<M, I, F, C>
where
    I: fmt::Debug,
    F: ConstraintConstructor,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredConstraint")
            .field("index_set", &self.index_set)
            .finish_non_exhaustive()
    }
}

/// A variable declaration awaiting a model context.
///
/// Created with an index-set snapshot, an initial-value field, a bounds
/// field, and an element constructor. The two fields keep their distinct
/// constant-vs-rule classification policies (see [`ScalarField`] and
/// [`BoundsField`]).
pub struct DeferredVariable<M, I, F, C>
where
    F: VariableConstructor,
{
    index_set: IndexSet<I>,
    initialize: ScalarField<M, I, F::Scalar>,
    bounds: BoundsField<M, I, F::Scalar>,
    factory: F,
    _container: PhantomData<C>,
}

impl<M, I, F, C> DeferredVariable<M, I, F, C>
where
    I: Clone,
    F: VariableConstructor,
    F::Scalar: Clone,
    C: KeyedContainer<I, F::Element>,
{
    /// Creates a deferred variable builder.
    pub fn new(
        index_set: IndexSet<I>,
        initialize: ScalarField<M, I, F::Scalar>,
        bounds: BoundsField<M, I, F::Scalar>,
        factory: F,
    ) -> Self {
        Self {
            index_set,
            initialize,
            bounds,
            factory,
            _container: PhantomData,
        }
    }

    /// Returns the captured index set.
    pub fn index_set(&self) -> &IndexSet<I> {
        &self.index_set
    }

    /// Resolves both fields once per index and returns the populated
    /// container.
    ///
    /// Constants and the absence marker resolve without invocation; rules
    /// are invoked with `(model, index)`. Failure policy matches
    /// [`DeferredConstraint::materialize`].
    pub fn materialize(&self, model: &M) -> Result<C, RuleError> {
        tracing::debug!(indices = self.index_set.len(), "materializing indexed variable");
        let mut container = C::empty();
        for index in self.index_set.iter() {
            let value = self.initialize.resolve(model, index)?;
            let (lower, upper) = self.bounds.resolve(model, index)?;
            container.insert(index.clone(), self.factory.construct(lower, upper, value));
        }
        Ok(container)
    }
}

impl<M, I, F, C> fmt::Debug for DeferredVariable<M, I, F, C>
where
    I: fmt::Debug,
    F: VariableConstructor,
    F::Scalar: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredVariable")
            .field("index_set", &self.index_set)
            .field("initialize", &self.initialize)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::IndexedMap;

    struct TestModel {
        limits: Vec<i64>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TestConstraint(i64);

    struct TestConstraintFactory;

    impl ConstraintConstructor for TestConstraintFactory {
        type Expr = i64;
        type Element = TestConstraint;

        fn construct(&self, expr: i64) -> TestConstraint {
            TestConstraint(expr)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TestVariable {
        lower: Option<f64>,
        upper: Option<f64>,
        value: Option<f64>,
    }

    struct TestVariableFactory;

    impl VariableConstructor for TestVariableFactory {
        type Scalar = f64;
        type Element = TestVariable;

        fn construct(
            &self,
            lower: Option<f64>,
            upper: Option<f64>,
            value: Option<f64>,
        ) -> TestVariable {
            TestVariable { lower, upper, value }
        }
    }

    type ConstraintBuilder =
        DeferredConstraint<TestModel, usize, TestConstraintFactory, IndexedMap<usize, TestConstraint>>;
    type VariableBuilder =
        DeferredVariable<TestModel, usize, TestVariableFactory, IndexedMap<usize, TestVariable>>;

    fn limit_rule(model: &TestModel, index: &usize) -> Result<i64, RuleError> {
        model
            .limits
            .get(*index)
            .copied()
            .ok_or_else(|| RuleError::new(format!("no limit at index {index}")))
    }

    #[test]
    fn constraint_container_matches_index_set() {
        let builder: ConstraintBuilder =
            DeferredConstraint::new(IndexSet::new(0..3), limit_rule, TestConstraintFactory);
        let model = TestModel { limits: vec![7, 8, 9] };

        let container = builder.materialize(&model).unwrap();
        assert_eq!(container.len(), 3);
        let keys: Vec<usize> = container.keys().copied().collect();
        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(container.get(&1), Some(&TestConstraint(8)));
    }

    #[test]
    fn constraint_rule_failure_aborts() {
        let builder: ConstraintBuilder =
            DeferredConstraint::new(IndexSet::new(0..5), limit_rule, TestConstraintFactory);
        let model = TestModel { limits: vec![1, 2] };

        let err = builder.materialize(&model).unwrap_err();
        assert_eq!(err.message(), "no limit at index 2");
    }

    #[test]
    fn constraint_builder_is_rematerializable() {
        let builder: ConstraintBuilder =
            DeferredConstraint::new(IndexSet::new(0..2), limit_rule, TestConstraintFactory);
        let model = TestModel { limits: vec![4, 5] };

        let first = builder.materialize(&model).unwrap();
        let second = builder.materialize(&model).unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first.get(&0), second.get(&0));
        assert_eq!(first.get(&1), second.get(&1));
    }

    #[test]
    fn rematerialization_after_transient_failure() {
        let builder: ConstraintBuilder =
            DeferredConstraint::new(IndexSet::new(0..3), limit_rule, TestConstraintFactory);

        let short = TestModel { limits: vec![1] };
        assert!(builder.materialize(&short).is_err());

        let full = TestModel { limits: vec![1, 2, 3] };
        assert_eq!(builder.materialize(&full).unwrap().len(), 3);
    }

    #[test]
    fn variable_constant_value_is_shared() {
        let builder: VariableBuilder = DeferredVariable::new(
            IndexSet::new(0..3),
            ScalarField::constant(5.0),
            BoundsField::absent(),
            TestVariableFactory,
        );
        let model = TestModel { limits: vec![] };

        let container = builder.materialize(&model).unwrap();
        for (_, var) in container.iter() {
            assert_eq!(var.value, Some(5.0));
            assert_eq!((var.lower, var.upper), (None, None));
        }
    }

    #[test]
    fn variable_rules_resolve_per_index() {
        let builder: VariableBuilder = DeferredVariable::new(
            IndexSet::new(1..4),
            ScalarField::rule(|_m, i: &usize| Ok(*i as f64)),
            BoundsField::rule(|_m, i: &usize| Ok((Some(0.0), Some(*i as f64 * 10.0)))),
            TestVariableFactory,
        );
        let model = TestModel { limits: vec![] };

        let container = builder.materialize(&model).unwrap();
        let var = container.get(&2).unwrap();
        assert_eq!(var.value, Some(2.0));
        assert_eq!((var.lower, var.upper), (Some(0.0), Some(20.0)));
    }

    #[test]
    fn variable_fixed_bounds_are_shared() {
        let builder: VariableBuilder = DeferredVariable::new(
            IndexSet::new(0..2),
            ScalarField::absent(),
            BoundsField::fixed(0.0, 10.0),
            TestVariableFactory,
        );
        let model = TestModel { limits: vec![] };

        let container = builder.materialize(&model).unwrap();
        for (_, var) in container.iter() {
            assert_eq!((var.lower, var.upper), (Some(0.0), Some(10.0)));
            assert_eq!(var.value, None);
        }
    }

    #[test]
    fn variable_bounds_rule_failure_aborts() {
        let builder: VariableBuilder = DeferredVariable::new(
            IndexSet::new(0..3),
            ScalarField::absent(),
            BoundsField::rule(|_m, i: &usize| {
                if *i < 2 {
                    Ok((None, None))
                } else {
                    Err(RuleError::new("bounds undefined"))
                }
            }),
            TestVariableFactory,
        );
        let model = TestModel { limits: vec![] };

        assert!(builder.materialize(&model).is_err());
    }
}
