//! Runtime-shaped vectors.
//!
//! [`AnyVec`] is for callers whose operand shapes are only known at runtime
//! (parsed input, scripting bridges). Every combining operation checks that
//! the vector operands agree on arity and reports [`VecMathError`] otherwise.
//! Code that knows its arities should use the generic functions instead.

use glam::{DVec2, DVec3, DVec4};

use crate::components::{Axis, Components};
use crate::error::VecMathError;
use crate::ops::{self, Operand};

/// A scalar or a 2/3/4-component vector whose shape is decided at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyVec {
    /// A bare scalar.
    Scalar(f64),
    /// Two components.
    Vec2(DVec2),
    /// Three components.
    Vec3(DVec3),
    /// Four components.
    Vec4(DVec4),
}

impl AnyVec {
    /// Builds a vector from 2, 3 or 4 components.
    pub fn from_components(components: &[f64]) -> Result<Self, VecMathError> {
        match *components {
            [x, y] => Ok(AnyVec::Vec2(DVec2::new(x, y))),
            [x, y, z] => Ok(AnyVec::Vec3(DVec3::new(x, y, z))),
            [x, y, z, w] => Ok(AnyVec::Vec4(DVec4::new(x, y, z, w))),
            _ => Err(VecMathError::UnsupportedArity(components.len())),
        }
    }

    /// Number of components; 1 for scalars.
    pub fn arity(&self) -> usize {
        match self {
            AnyVec::Scalar(_) => 1,
            AnyVec::Vec2(_) => 2,
            AnyVec::Vec3(_) => 3,
            AnyVec::Vec4(_) => 4,
        }
    }

    /// Returns true for [`AnyVec::Scalar`].
    pub fn is_scalar(&self) -> bool {
        matches!(self, AnyVec::Scalar(_))
    }

    /// Reads a named component.
    pub fn get(&self, axis: Axis) -> Result<f64, VecMathError> {
        let value = match self {
            AnyVec::Scalar(s) => s.component(axis.index()),
            AnyVec::Vec2(v) => v.component(axis.index()),
            AnyVec::Vec3(v) => v.component(axis.index()),
            AnyVec::Vec4(v) => v.component(axis.index()),
        };
        value.ok_or(VecMathError::ComponentOutOfRange {
            axis,
            arity: self.arity(),
        })
    }

    /// Applies `f` to every component, preserving shape.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            AnyVec::Scalar(s) => AnyVec::Scalar(f(s)),
            AnyVec::Vec2(v) => AnyVec::Vec2(v.map(f)),
            AnyVec::Vec3(v) => AnyVec::Vec3(v.map(f)),
            AnyVec::Vec4(v) => AnyVec::Vec4(v.map(f)),
        }
    }

    fn as_vec2(self) -> Option<DVec2> {
        match self {
            AnyVec::Vec2(v) => Some(v),
            _ => None,
        }
    }

    fn as_vec3(self) -> Option<DVec3> {
        match self {
            AnyVec::Vec3(v) => Some(v),
            _ => None,
        }
    }

    fn as_vec4(self) -> Option<DVec4> {
        match self {
            AnyVec::Vec4(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for AnyVec {
    fn from(value: f64) -> Self {
        AnyVec::Scalar(value)
    }
}

impl From<DVec2> for AnyVec {
    fn from(value: DVec2) -> Self {
        AnyVec::Vec2(value)
    }
}

impl From<DVec3> for AnyVec {
    fn from(value: DVec3) -> Self {
        AnyVec::Vec3(value)
    }
}

impl From<DVec4> for AnyVec {
    fn from(value: DVec4) -> Self {
        AnyVec::Vec4(value)
    }
}

// ============================================================================
// Shape checking
// ============================================================================

/// Converts a mixed list into operands of arity `V`, rejecting any vector of
/// another arity.
fn narrow<V: Components>(
    operands: &[AnyVec],
    pick: fn(AnyVec) -> Option<V>,
) -> Result<Vec<Operand<V>>, VecMathError> {
    operands
        .iter()
        .map(|&op| match op {
            AnyVec::Scalar(s) => Ok(Operand::Scalar(s)),
            other => pick(other)
                .map(Operand::Vector)
                .ok_or(VecMathError::ArityMismatch {
                    expected: V::ARITY,
                    got: other.arity(),
                }),
        })
        .collect()
}

/// Folds a mixed list, with the result shape fixed by the first vector.
fn fold_dynamic(
    operands: &[AnyVec],
    fold2: fn(&[Operand<DVec2>]) -> DVec2,
    fold3: fn(&[Operand<DVec3>]) -> DVec3,
    fold4: fn(&[Operand<DVec4>]) -> DVec4,
    fold1: fn(&[Operand<f64>]) -> f64,
) -> Result<AnyVec, VecMathError> {
    let shape = operands.iter().find(|op| !op.is_scalar()).copied();
    Ok(match shape {
        None | Some(AnyVec::Scalar(_)) => {
            AnyVec::Scalar(fold1(&narrow::<f64>(operands, |_| None)?))
        }
        Some(AnyVec::Vec2(_)) => AnyVec::Vec2(fold2(&narrow(operands, AnyVec::as_vec2)?)),
        Some(AnyVec::Vec3(_)) => AnyVec::Vec3(fold3(&narrow(operands, AnyVec::as_vec3)?)),
        Some(AnyVec::Vec4(_)) => AnyVec::Vec4(fold4(&narrow(operands, AnyVec::as_vec4)?)),
    })
}

// ============================================================================
// Operations
// ============================================================================

/// Sums a mixed list of scalars and same-arity vectors.
pub fn add(operands: &[AnyVec]) -> Result<AnyVec, VecMathError> {
    fold_dynamic(operands, ops::add, ops::add, ops::add, ops::add)
}

/// Subtracts every later operand from the first.
pub fn subtract(operands: &[AnyVec]) -> Result<AnyVec, VecMathError> {
    fold_dynamic(
        operands,
        ops::subtract,
        ops::subtract,
        ops::subtract,
        ops::subtract,
    )
}

/// Multiplies all operands.
pub fn multiply(operands: &[AnyVec]) -> Result<AnyVec, VecMathError> {
    fold_dynamic(
        operands,
        ops::multiply,
        ops::multiply,
        ops::multiply,
        ops::multiply,
    )
}

/// Divides the first operand by every later one.
pub fn divide(operands: &[AnyVec]) -> Result<AnyVec, VecMathError> {
    fold_dynamic(operands, ops::divide, ops::divide, ops::divide, ops::divide)
}

/// Dot product of two values of equal arity.
pub fn dot(a: AnyVec, b: AnyVec) -> Result<f64, VecMathError> {
    match (a, b) {
        (AnyVec::Scalar(x), AnyVec::Scalar(y)) => Ok(ops::dot(x, y)),
        (AnyVec::Vec2(x), AnyVec::Vec2(y)) => Ok(ops::dot(x, y)),
        (AnyVec::Vec3(x), AnyVec::Vec3(y)) => Ok(ops::dot(x, y)),
        (AnyVec::Vec4(x), AnyVec::Vec4(y)) => Ok(ops::dot(x, y)),
        (a, b) => Err(VecMathError::ArityMismatch {
            expected: a.arity(),
            got: b.arity(),
        }),
    }
}

/// Cross product; both sides must be 3-vectors.
pub fn cross(a: AnyVec, b: AnyVec) -> Result<AnyVec, VecMathError> {
    match (a, b) {
        (AnyVec::Vec3(x), AnyVec::Vec3(y)) => Ok(AnyVec::Vec3(ops::cross(x, y))),
        (AnyVec::Vec3(_), other) | (other, _) => Err(VecMathError::UnsupportedArity(other.arity())),
    }
}

/// Linear interpolation between two values of equal arity.
pub fn mix(x: AnyVec, y: AnyVec, t: f64) -> Result<AnyVec, VecMathError> {
    match (x, y) {
        (AnyVec::Scalar(a), AnyVec::Scalar(b)) => Ok(AnyVec::Scalar(ops::mix(a, b, t))),
        (AnyVec::Vec2(a), AnyVec::Vec2(b)) => Ok(AnyVec::Vec2(ops::mix(a, b, t))),
        (AnyVec::Vec3(a), AnyVec::Vec3(b)) => Ok(AnyVec::Vec3(ops::mix(a, b, t))),
        (AnyVec::Vec4(a), AnyVec::Vec4(b)) => Ok(AnyVec::Vec4(ops::mix(a, b, t))),
        (x, y) => Err(VecMathError::ArityMismatch {
            expected: x.arity(),
            got: y.arity(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_mixed_arity() {
        let result = add(&[DVec2::ONE.into(), DVec3::ONE.into()]);
        assert_eq!(
            result,
            Err(VecMathError::ArityMismatch {
                expected: 2,
                got: 3
            })
        );
    }

    #[test]
    fn test_mismatch_is_deterministic() {
        let operands = [AnyVec::from(1.0), DVec4::ONE.into(), DVec2::ONE.into()];
        let first = multiply(&operands);
        for _ in 0..10 {
            assert_eq!(multiply(&operands), first);
        }
        assert!(first.is_err());
    }

    #[test]
    fn test_scalar_broadcast() {
        let result = add(&[DVec2::new(1.0, 2.0).into(), 3.0.into()]).unwrap();
        assert_eq!(result, AnyVec::Vec2(DVec2::new(4.0, 5.0)));
    }

    #[test]
    fn test_all_scalars_yield_scalar() {
        let result = divide(&[12.0.into(), 3.0.into(), 2.0.into()]).unwrap();
        assert_eq!(result, AnyVec::Scalar(2.0));
    }

    #[test]
    fn test_empty_and_single_operand() {
        assert_eq!(add(&[]).unwrap(), AnyVec::Scalar(0.0));
        assert_eq!(multiply(&[]).unwrap(), AnyVec::Scalar(1.0));
        let v = AnyVec::Vec3(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(subtract(&[v]).unwrap(), v);
    }

    #[test]
    fn test_from_components() {
        assert_eq!(
            AnyVec::from_components(&[1.0, 2.0, 3.0]).unwrap(),
            AnyVec::Vec3(DVec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(
            AnyVec::from_components(&[1.0]),
            Err(VecMathError::UnsupportedArity(1))
        );
        assert_eq!(
            AnyVec::from_components(&[0.0; 5]),
            Err(VecMathError::UnsupportedArity(5))
        );
    }

    #[test]
    fn test_dot_and_cross() {
        let d = dot(DVec2::new(2.0, 3.0).into(), DVec2::new(4.0, 5.0).into()).unwrap();
        assert_eq!(d, 23.0);
        assert_eq!(
            dot(DVec2::ONE.into(), DVec3::ONE.into()),
            Err(VecMathError::ArityMismatch {
                expected: 2,
                got: 3
            })
        );
        assert_eq!(
            dot(DVec4::ONE.into(), 2.0.into()),
            Err(VecMathError::ArityMismatch {
                expected: 4,
                got: 1
            })
        );

        let c = cross(DVec3::X.into(), DVec3::Y.into()).unwrap();
        assert_eq!(c, AnyVec::Vec3(DVec3::Z));
        assert_eq!(
            cross(DVec3::X.into(), DVec2::Y.into()),
            Err(VecMathError::UnsupportedArity(2))
        );
        assert_eq!(
            cross(DVec4::X.into(), DVec3::Y.into()),
            Err(VecMathError::UnsupportedArity(4))
        );
    }

    #[test]
    fn test_mix_checks_arity() {
        let m = mix(DVec2::ZERO.into(), DVec2::ONE.into(), 0.5).unwrap();
        assert_eq!(m, AnyVec::Vec2(DVec2::splat(0.5)));
        assert_eq!(
            mix(1.0.into(), DVec2::ONE.into(), 0.5),
            Err(VecMathError::ArityMismatch {
                expected: 1,
                got: 2
            })
        );
        assert_eq!(
            mix(2.0.into(), 4.0.into(), 0.25).unwrap(),
            AnyVec::Scalar(2.5)
        );
    }

    #[test]
    fn test_named_components() {
        let v = AnyVec::Vec2(DVec2::new(3.0, 4.0));
        assert_eq!(v.get(Axis::Y), Ok(4.0));
        assert_eq!(
            v.get(Axis::Z),
            Err(VecMathError::ComponentOutOfRange {
                axis: Axis::Z,
                arity: 2
            })
        );
        assert_eq!(v.map(|c| c * 2.0), AnyVec::Vec2(DVec2::new(6.0, 8.0)));
    }
}
