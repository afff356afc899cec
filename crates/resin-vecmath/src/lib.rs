//! Shader-style vector algebra for resin.
//!
//! Component-wise math over scalars (`f64`) and glam's double precision
//! vectors, written once against the [`Components`] trait:
//!
//! - Variadic folds: [`add`], [`subtract`], [`multiply`], [`divide`] over
//!   [`Operand`] lists mixing scalars with vectors of one arity
//! - Unary shaping: [`sin`], [`cos`], [`floor`], [`fraction`], [`abs`],
//!   [`cubic`], [`quintic`]
//! - [`dot`], [`cross`], [`mix`], [`max`], [`min`]
//!
//! ```
//! use rhizome_resin_vecmath::{Operand, add, dot, fraction, operands};
//! use glam::DVec2;
//!
//! let p = DVec2::new(2.5, -0.25);
//! assert_eq!(fraction(p), DVec2::new(0.5, 0.75));
//!
//! let sum: [Operand<DVec2>; 3] = operands![p, 1.0, DVec2::Y];
//! assert_eq!(add(&sum), DVec2::new(3.5, 1.75));
//! assert_eq!(dot(DVec2::new(2.0, 3.0), DVec2::new(4.0, 5.0)), 23.0);
//! ```
//!
//! Arity is part of the type, so combining a `DVec2` with a `DVec3` is a
//! compile error. The [`dynamic`] module offers the same operations over
//! [`AnyVec`] for shapes only known at runtime, reporting [`VecMathError`].

mod components;
pub mod dynamic;
mod error;
mod ops;

pub use components::{
    Axis, Channel, Components, UNIT2, UNIT3, UNIT4, broadcast2, broadcast3, broadcast4, vec2,
    vec3, vec4,
};
pub use dynamic::AnyVec;
pub use error::VecMathError;
pub use glam;
pub use ops::{
    Operand, abs, add, cos, cross, cubic, divide, dot, floor, fraction, max, min, mix, multiply,
    quintic, sin, subtract,
};
