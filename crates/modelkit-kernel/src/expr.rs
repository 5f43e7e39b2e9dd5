//! Linear expressions and comparison expressions.
//!
//! Expressions are linear terms plus a constant. Comparing an expression
//! against a scalar folds the constant into the right-hand side, so a
//! constraint expression always has a zero-constant left-hand side.

use std::ops;

/// Identifier of a variable inside an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct VarId(u32);

impl VarId {
    /// Creates an ID from a u32 value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the inner u32 value.
    pub fn inner(self) -> u32 {
        self.0
    }
}

/// A linear expression: `sum(coeff_k * var_k) + constant`.
///
/// # Example
///
/// ```
/// use modelkit_kernel::{ComparisonSense, LinearExpr, VarId};
///
/// let x = VarId::new(0);
/// let e = LinearExpr::term(x, 2.0).add_constant(3.0);
/// let c = e.le(10.0);
///
/// assert_eq!(c.sense(), ComparisonSense::LessEqual);
/// assert_eq!(c.rhs(), 7.0); // constant folded into the rhs
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
    constant: f64,
}

impl LinearExpr {
    /// Expression from linear terms and a constant.
    pub fn new(terms: Vec<(VarId, f64)>, constant: f64) -> Self {
        Self { terms, constant }
    }

    /// Just a constant, no variable terms.
    pub fn from_constant(constant: f64) -> Self {
        Self {
            constant,
            ..Self::default()
        }
    }

    /// Single variable with coefficient 1.0.
    pub fn var(var_id: VarId) -> Self {
        Self::term(var_id, 1.0)
    }

    /// Single linear term: `coeff * var`.
    pub fn term(var_id: VarId, coeff: f64) -> Self {
        if coeff == 0.0 {
            return Self::default();
        }
        Self {
            terms: vec![(var_id, coeff)],
            constant: 0.0,
        }
    }

    /// Returns the constant part.
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Returns the linear terms.
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    /// Scales all terms and the constant by a factor.
    pub fn scale(&self, by: f64) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(v, c)| (*v, *c * by))
                .filter(|(_, c)| *c != 0.0)
                .collect(),
            constant: self.constant * by,
        }
    }

    /// Adds another expression, concatenating terms.
    pub fn add(&self, other: &LinearExpr) -> Self {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        Self {
            terms,
            constant: self.constant + other.constant,
        }
    }

    /// Adds a constant offset.
    pub fn add_constant(&self, value: f64) -> Self {
        Self {
            terms: self.terms.clone(),
            constant: self.constant + value,
        }
    }

    /// Copy with the constant set to zero.
    pub fn without_constant(&self) -> Self {
        Self {
            terms: self.terms.clone(),
            constant: 0.0,
        }
    }

    fn compare(&self, rhs: f64, sense: ComparisonSense) -> ConstraintExpr {
        ConstraintExpr::new(self.without_constant(), sense, rhs - self.constant)
    }

    /// `self <= rhs` as a constraint expression.
    pub fn le(&self, rhs: f64) -> ConstraintExpr {
        self.compare(rhs, ComparisonSense::LessEqual)
    }

    /// `self >= rhs` as a constraint expression.
    pub fn ge(&self, rhs: f64) -> ConstraintExpr {
        self.compare(rhs, ComparisonSense::GreaterEqual)
    }

    /// `self == rhs` as a constraint expression.
    pub fn eq(&self, rhs: f64) -> ConstraintExpr {
        self.compare(rhs, ComparisonSense::Equal)
    }
}

impl ops::Add for LinearExpr {
    type Output = LinearExpr;

    fn add(self, rhs: LinearExpr) -> Self::Output {
        LinearExpr::add(&self, &rhs)
    }
}

impl ops::Sub for LinearExpr {
    type Output = LinearExpr;

    fn sub(self, rhs: LinearExpr) -> Self::Output {
        LinearExpr::add(&self, &rhs.scale(-1.0))
    }
}

impl ops::Mul<f64> for LinearExpr {
    type Output = LinearExpr;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl ops::Neg for LinearExpr {
    type Output = LinearExpr;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

/// Direction of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl ComparisonSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "le",
            ComparisonSense::GreaterEqual => "ge",
            ComparisonSense::Equal => "eq",
        }
    }
}

/// A linear expression compared against a right-hand side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintExpr {
    expr: LinearExpr,
    sense: ComparisonSense,
    rhs: f64,
}

impl ConstraintExpr {
    pub fn new(expr: LinearExpr, sense: ComparisonSense, rhs: f64) -> Self {
        Self { expr, sense, rhs }
    }

    pub fn expr(&self) -> &LinearExpr {
        &self.expr
    }

    pub fn sense(&self) -> ComparisonSense {
        self.sense
    }

    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    pub fn into_parts(self) -> (LinearExpr, ComparisonSense, f64) {
        (self.expr, self.sense, self.rhs)
    }
}
