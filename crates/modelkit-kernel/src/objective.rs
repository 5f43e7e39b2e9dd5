//! Objective elements.

use crate::expr::LinearExpr;

/// Optimization direction of an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveSense {
    #[default]
    Minimize,
    Maximize,
}

/// An objective wrapping an expression, minimized by default.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    expr: LinearExpr,
    sense: ObjectiveSense,
}

impl Objective {
    /// Creates a minimizing objective.
    pub fn new(expr: LinearExpr) -> Self {
        Self {
            expr,
            sense: ObjectiveSense::Minimize,
        }
    }

    /// Sets the optimization direction.
    pub fn with_sense(mut self, sense: ObjectiveSense) -> Self {
        self.sense = sense;
        self
    }

    /// Returns the wrapped expression.
    pub fn expr(&self) -> &LinearExpr {
        &self.expr
    }

    /// Returns the optimization direction.
    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::VarId;

    #[test]
    fn minimize_is_the_default() {
        let obj = Objective::new(LinearExpr::var(VarId::new(0)));
        assert_eq!(obj.sense(), ObjectiveSense::Minimize);
    }

    #[test]
    fn with_sense_overrides() {
        let obj = Objective::new(LinearExpr::from_constant(1.0))
            .with_sense(ObjectiveSense::Maximize);
        assert_eq!(obj.sense(), ObjectiveSense::Maximize);
    }
}
