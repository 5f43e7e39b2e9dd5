//! Constraint elements.

use modelkit_core::ConstraintConstructor;

use crate::expr::ConstraintExpr;

/// A single constraint wrapping a comparison expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    expr: ConstraintExpr,
}

impl Constraint {
    /// Creates a constraint from a comparison expression.
    pub fn new(expr: ConstraintExpr) -> Self {
        Self { expr }
    }

    /// Returns the wrapped expression.
    pub fn expr(&self) -> &ConstraintExpr {
        &self.expr
    }
}

/// Constructs kernel constraints; injected into deferred builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintFactory;

impl ConstraintConstructor for ConstraintFactory {
    type Expr = ConstraintExpr;
    type Element = Constraint;

    fn construct(&self, expr: ConstraintExpr) -> Constraint {
        Constraint::new(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{LinearExpr, VarId};

    #[test]
    fn factory_wraps_expression() {
        let expr = LinearExpr::var(VarId::new(0)).le(4.0);
        let built = ConstraintFactory.construct(expr.clone());
        assert_eq!(built, Constraint::new(expr));
    }
}
