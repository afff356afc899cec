//! Component-wise operations over [`Components`] values.
//!
//! Binary arithmetic between two values of the same arity, or a value and a
//! scalar, is just glam's operators. The functions here cover the rest:
//! variadic folds over mixed scalar/vector operand lists, the unary shaping
//! functions noise is built from, and the products.

use glam::{DVec2, DVec3, DVec4};

use crate::components::Components;

// ============================================================================
// Operands
// ============================================================================

/// One entry of a variadic operand list: a scalar or a vector of arity `V`.
///
/// Scalars are broadcast to every component. Because `V` is fixed for the
/// whole list, a single call cannot mix vector arities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<V> {
    /// A bare scalar, broadcast to every component.
    Scalar(f64),
    /// A vector contributing per component.
    Vector(V),
}

impl<V: Components> Operand<V> {
    /// Expands the operand to a full value of arity `V`.
    #[inline]
    pub fn broadcast(self) -> V {
        match self {
            Operand::Scalar(s) => V::splat(s),
            Operand::Vector(v) => v,
        }
    }
}

impl<V: Components> From<f64> for Operand<V> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<DVec2> for Operand<DVec2> {
    fn from(value: DVec2) -> Self {
        Operand::Vector(value)
    }
}

impl From<DVec3> for Operand<DVec3> {
    fn from(value: DVec3) -> Self {
        Operand::Vector(value)
    }
}

impl From<DVec4> for Operand<DVec4> {
    fn from(value: DVec4) -> Self {
        Operand::Vector(value)
    }
}

/// Builds an operand array from scalars and vectors of one arity.
///
/// ```
/// use rhizome_resin_vecmath::{Operand, add, operands};
/// use glam::DVec2;
///
/// let ops: [Operand<DVec2>; 2] = operands![DVec2::new(1.0, 2.0), 3.0];
/// assert_eq!(add(&ops), DVec2::new(4.0, 5.0));
/// ```
#[macro_export]
macro_rules! operands {
    ($($operand:expr),* $(,)?) => {
        [$($crate::Operand::from($operand)),*]
    };
}

// ============================================================================
// Variadic Folds
// ============================================================================

/// Left fold with identity-element semantics.
///
/// An empty list yields `identity` in every component, a single operand is
/// returned unchanged, otherwise the first operand seeds the accumulator.
fn fold<V: Components>(operands: &[Operand<V>], identity: f64, op: fn(f64, f64) -> f64) -> V {
    let mut iter = operands.iter().copied();
    let Some(first) = iter.next() else {
        return V::splat(identity);
    };
    iter.fold(first.broadcast(), |acc, next| acc.zip_with(next.broadcast(), op))
}

/// Sums all operands. Empty input yields zero.
pub fn add<V: Components>(operands: &[Operand<V>]) -> V {
    fold(operands, 0.0, |a, b| a + b)
}

/// Subtracts every later operand from the first. Empty input yields zero.
pub fn subtract<V: Components>(operands: &[Operand<V>]) -> V {
    fold(operands, 0.0, |a, b| a - b)
}

/// Multiplies all operands. Empty input yields one.
pub fn multiply<V: Components>(operands: &[Operand<V>]) -> V {
    fold(operands, 1.0, |a, b| a * b)
}

/// Divides the first operand by every later one. Empty input yields one.
pub fn divide<V: Components>(operands: &[Operand<V>]) -> V {
    fold(operands, 1.0, |a, b| a / b)
}

// ============================================================================
// Unary Operations
// ============================================================================

/// Component-wise sine.
#[inline]
pub fn sin<V: Components>(v: V) -> V {
    v.map(f64::sin)
}

/// Component-wise cosine.
#[inline]
pub fn cos<V: Components>(v: V) -> V {
    v.map(f64::cos)
}

/// Component-wise floor.
#[inline]
pub fn floor<V: Components>(v: V) -> V {
    v.map(f64::floor)
}

/// Component-wise fractional part, `x - floor(x)`. Always in `[0, 1)` for
/// finite input.
#[inline]
pub fn fraction<V: Components>(v: V) -> V {
    v.map(|x| {
        let f = x - x.floor();
        // Tiny negatives round up to exactly 1.
        if f < 1.0 { f } else { 0.0 }
    })
}

/// Component-wise absolute value.
#[inline]
pub fn abs<V: Components>(v: V) -> V {
    v.map(f64::abs)
}

/// Cubic Hermite kernel `3t² - 2t³` (smoothstep without clamping).
#[inline]
pub fn cubic<V: Components>(v: V) -> V {
    v.map(|t| t * t * (3.0 - 2.0 * t))
}

/// Quintic kernel `6t⁵ - 15t⁴ + 10t³`.
#[inline]
pub fn quintic<V: Components>(v: V) -> V {
    v.map(|t| t * t * t * (t * (t * 6.0 - 15.0) + 10.0))
}

// ============================================================================
// Binary Operations
// ============================================================================

/// Component-wise maximum; `other` may be a scalar.
#[inline]
pub fn max<V: Components>(v: V, other: impl Into<Operand<V>>) -> V {
    v.zip_with(other.into().broadcast(), f64::max)
}

/// Component-wise minimum; `other` may be a scalar.
#[inline]
pub fn min<V: Components>(v: V, other: impl Into<Operand<V>>) -> V {
    v.zip_with(other.into().broadcast(), f64::min)
}

/// Linear interpolation `x·(1 - t) + y·t`.
#[inline]
pub fn mix<V: Components>(x: V, y: V, t: f64) -> V {
    x.zip_with(y, |x, y| x * (1.0 - t) + y * t)
}

/// Sum of pairwise component products.
///
/// Both sides share `V`, so mismatched arities do not compile.
#[inline]
pub fn dot<V: Components>(a: V, b: V) -> f64 {
    a.zip_with(b, |x, y| x * y).sum_components()
}

/// Cross product of two 3-vectors.
#[inline]
pub fn cross(a: DVec3, b: DVec3) -> DVec3 {
    DVec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}
