//! Variable elements.

use modelkit_core::VariableConstructor;

/// A single decision variable with optional bounds and initial value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    lower: Option<f64>,
    upper: Option<f64>,
    value: Option<f64>,
}

impl Variable {
    /// Creates a variable from resolved bounds and value.
    pub fn new(lower: Option<f64>, upper: Option<f64>, value: Option<f64>) -> Self {
        Self { lower, upper, value }
    }

    /// Returns the lower bound, if any.
    pub fn lower(&self) -> Option<f64> {
        self.lower
    }

    /// Returns the upper bound, if any.
    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    /// Returns `(lower, upper)`.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.lower, self.upper)
    }

    /// Returns the initial value, if any.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

/// Constructs kernel variables; injected into deferred builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableFactory;

impl VariableConstructor for VariableFactory {
    type Scalar = f64;
    type Element = Variable;

    fn construct(&self, lower: Option<f64>, upper: Option<f64>, value: Option<f64>) -> Variable {
        Variable::new(lower, upper, value)
    }
}
