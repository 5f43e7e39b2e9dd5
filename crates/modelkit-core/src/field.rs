//! Constant-or-rule declaration fields.
//!
//! A declaration-time field is in one of three shapes: the absence marker,
//! a shared constant used at every index, or a rule invoked once per index.
//! The scalar field and the bounds field classify constants with two
//! different tests (numeric type membership vs fixed-pair shape). The
//! asymmetry is load-bearing: a rule that returns a pair stays a rule, and
//! the two policies must not be unified.

use std::fmt;

use crate::error::RuleError;
use crate::numeric::NumericConstant;

/// Per-index rule for a scalar field.
pub type ScalarRule<M, I, V> = Box<dyn Fn(&M, &I) -> Result<V, RuleError> + Send + Sync>;

/// Per-index rule for a bounds field; either bound may be absent at a given
/// index.
pub type BoundsRule<M, I, V> =
    Box<dyn Fn(&M, &I) -> Result<(Option<V>, Option<V>), RuleError> + Send + Sync>;

/// A scalar declaration field: absent, one constant for every index, or a
/// per-index rule.
///
/// Constants are classified by numeric type membership: the checked
/// constructor [`ScalarField::constant`] only accepts types in the
/// recognized numeric set.
pub enum ScalarField<M, I, V> {
    /// No value at any index.
    Absent,
    /// The same value at every index; never invoked.
    Constant(V),
    /// Invoked once per index during materialization.
    Rule(ScalarRule<M, I, V>),
}

impl<M, I, V> ScalarField<M, I, V> {
    /// The absence marker.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// A constant used for every index.
    pub fn constant(value: V) -> Self
    where
        V: NumericConstant,
    {
        Self::Constant(value)
    }

    /// A rule invoked per index with the model and the index.
    pub fn rule<F>(rule: F) -> Self
    where
        F: Fn(&M, &I) -> Result<V, RuleError> + Send + Sync + 'static,
    {
        Self::Rule(Box::new(rule))
    }

    /// Returns whether this field is a rule.
    pub fn is_rule(&self) -> bool {
        matches!(self, Self::Rule(_))
    }

    /// Resolves the field at one index.
    pub fn resolve(&self, model: &M, index: &I) -> Result<Option<V>, RuleError>
    where
        V: Clone,
    {
        match self {
            Self::Absent => Ok(None),
            Self::Constant(value) => Ok(Some(value.clone())),
            Self::Rule(rule) => rule(model, index).map(Some),
        }
    }
}

impl<M, I, V: NumericConstant> From<V> for ScalarField<M, I, V> {
    fn from(value: V) -> Self {
        Self::Constant(value)
    }
}

impl<M, I, V: fmt::Debug> fmt::Debug for ScalarField<M, I, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("ScalarField::Absent"),
            Self::Constant(value) => f.debug_tuple("ScalarField::Constant").field(value).finish(),
            Self::Rule(_) => f.write_str("ScalarField::Rule"),
        }
    }
}

/// A bounds declaration field: absent, one fixed `(lower, upper)` pair for
/// every index, or a per-index rule.
///
/// Constants are classified by shape: any two-element pair counts as fixed
/// bounds, with no numeric-membership requirement. This deliberately differs
/// from [`ScalarField`]'s classification.
pub enum BoundsField<M, I, V> {
    /// `(absent, absent)` at every index.
    Absent,
    /// The same `(lower, upper)` pair at every index; never invoked.
    Fixed(V, V),
    /// Invoked once per index during materialization.
    Rule(BoundsRule<M, I, V>),
}

impl<M, I, V> BoundsField<M, I, V> {
    /// The absence marker.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// A fixed `(lower, upper)` pair used for every index.
    pub fn fixed(lower: V, upper: V) -> Self {
        Self::Fixed(lower, upper)
    }

    /// A rule invoked per index; returns `(lower, upper)`, each optionally
    /// absent.
    pub fn rule<F>(rule: F) -> Self
    where
        F: Fn(&M, &I) -> Result<(Option<V>, Option<V>), RuleError> + Send + Sync + 'static,
    {
        Self::Rule(Box::new(rule))
    }

    /// Returns whether this field is a rule.
    pub fn is_rule(&self) -> bool {
        matches!(self, Self::Rule(_))
    }

    /// Resolves the field at one index.
    pub fn resolve(&self, model: &M, index: &I) -> Result<(Option<V>, Option<V>), RuleError>
    where
        V: Clone,
    {
        match self {
            Self::Absent => Ok((None, None)),
            Self::Fixed(lower, upper) => Ok((Some(lower.clone()), Some(upper.clone()))),
            Self::Rule(rule) => rule(model, index),
        }
    }
}

impl<M, I, V> From<(V, V)> for BoundsField<M, I, V> {
    fn from((lower, upper): (V, V)) -> Self {
        Self::Fixed(lower, upper)
    }
}

impl<M, I, V: fmt::Debug> fmt::Debug for BoundsField<M, I, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("BoundsField::Absent"),
            Self::Fixed(lower, upper) => f
                .debug_tuple("BoundsField::Fixed")
                .field(lower)
                .field(upper)
                .finish(),
            Self::Rule(_) => f.write_str("BoundsField::Rule"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ctx;

    #[test]
    fn scalar_constant_resolves_without_invocation() {
        let field: ScalarField<Ctx, u32, f64> = ScalarField::constant(5.0);
        assert_eq!(field.resolve(&Ctx, &0).unwrap(), Some(5.0));
        assert_eq!(field.resolve(&Ctx, &9).unwrap(), Some(5.0));
    }

    #[test]
    fn scalar_absent_resolves_to_none() {
        let field: ScalarField<Ctx, u32, f64> = ScalarField::absent();
        assert_eq!(field.resolve(&Ctx, &1).unwrap(), None);
    }

    #[test]
    fn scalar_rule_is_invoked_per_index() {
        let field: ScalarField<Ctx, u32, f64> = ScalarField::rule(|_m, i| Ok(f64::from(*i) * 2.0));
        assert_eq!(field.resolve(&Ctx, &3).unwrap(), Some(6.0));
        assert!(field.is_rule());
    }

    #[test]
    fn scalar_rule_failure_propagates() {
        let field: ScalarField<Ctx, u32, f64> =
            ScalarField::rule(|_m, _i| Err(RuleError::new("bad index")));
        assert!(field.resolve(&Ctx, &0).is_err());
    }

    #[test]
    fn bounds_fixed_pair_resolves_at_every_index() {
        let field: BoundsField<Ctx, u32, f64> = BoundsField::fixed(0.0, 10.0);
        assert_eq!(field.resolve(&Ctx, &7).unwrap(), (Some(0.0), Some(10.0)));
    }

    #[test]
    fn bounds_absent_resolves_to_absent_pair() {
        let field: BoundsField<Ctx, u32, f64> = BoundsField::absent();
        assert_eq!(field.resolve(&Ctx, &0).unwrap(), (None, None));
    }

    #[test]
    fn bounds_rule_returns_its_value_verbatim() {
        let field: BoundsField<Ctx, u32, f64> =
            BoundsField::rule(|_m, i| Ok((Some(f64::from(*i)), None)));
        assert_eq!(field.resolve(&Ctx, &4).unwrap(), (Some(4.0), None));
    }

    #[test]
    fn conversions_classify_by_shape() {
        let scalar: ScalarField<Ctx, u32, f64> = 2.5.into();
        assert!(matches!(scalar, ScalarField::Constant(_)));

        let bounds: BoundsField<Ctx, u32, f64> = (0.0, 1.0).into();
        assert!(matches!(bounds, BoundsField::Fixed(_, _)));
    }
}
