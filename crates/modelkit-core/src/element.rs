//! Element-constructor capabilities.
//!
//! The core never depends on a concrete expression or modeling subsystem;
//! element construction is injected through these traits, one per element
//! kind.

/// Constructs constraint elements from resolved per-index expressions.
pub trait ConstraintConstructor {
    /// The expression type a constraint wraps.
    type Expr;
    /// The constructed element type.
    type Element;

    /// Builds one constraint element.
    fn construct(&self, expr: Self::Expr) -> Self::Element;
}

/// Constructs variable elements from resolved per-index bounds and value.
///
/// Any of the three arguments may be absent; the element constructor decides
/// what absence means for the concrete element type.
pub trait VariableConstructor {
    /// The scalar type of bounds and initial values.
    type Scalar;
    /// The constructed element type.
    type Element;

    /// Builds one variable element.
    fn construct(
        &self,
        lower: Option<Self::Scalar>,
        upper: Option<Self::Scalar>,
        value: Option<Self::Scalar>,
    ) -> Self::Element;
}
