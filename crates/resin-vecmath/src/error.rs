//! Error types for resin-vecmath.

use crate::components::Axis;
use thiserror::Error;

/// Errors raised by the dynamically shaped vector API ([`AnyVec`](crate::AnyVec)).
///
/// The statically typed functions never produce these: arity is part of the
/// type there, so mismatches fail to compile instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VecMathError {
    /// Vectors of different component counts were combined in one call.
    #[error("arity mismatch: expected {expected} components, got {got}")]
    ArityMismatch {
        /// Arity fixed by the first vector operand.
        expected: usize,
        /// Arity of the offending operand.
        got: usize,
    },

    /// Component count outside the supported set for the operation.
    #[error("unsupported arity: {0} components")]
    UnsupportedArity(usize),

    /// A named component was read past the end of a value.
    #[error("component {axis} out of range for a value with {arity} components")]
    ComponentOutOfRange {
        /// Requested component.
        axis: Axis,
        /// Arity of the value that was indexed.
        arity: usize,
    },
}
