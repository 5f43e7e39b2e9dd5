//! Declaration-time errors.

use thiserror::Error;

/// A contract violation in a declaration.
///
/// These are model-definition bugs: they fail loudly at declaration time
/// and are never caught internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeclError {
    /// `constraint` was given `expr` together with an index set or a rule.
    #[error("constraint accepts either `expr` or (`index_set`, `rule`), not both")]
    ConflictingConstraintArgs,

    /// `constraint` was given neither `expr` nor a complete
    /// (`index_set`, `rule`) pair.
    #[error("constraint requires either `expr` or both `index_set` and `rule`")]
    MissingConstraintArgs,

    /// `var` without an index set was given an initialize rule; there is no
    /// index to invoke it with.
    #[error("an initialize rule requires an index set")]
    InitRuleWithoutIndexSet,

    /// `var` without an index set was given a bounds rule; bounds must be a
    /// fixed pair or absent.
    #[error("a bounds rule requires an index set")]
    BoundsRuleWithoutIndexSet,
}
