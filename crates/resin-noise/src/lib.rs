//! Noise functions for per-pixel procedural synthesis.
//!
//! Shader-style lattice noise in double precision, built on
//! [`rhizome_resin_vecmath`]:
//!
//! - Hash ("random") noise from a coordinate to a scalar or 2-vector
//! - Value noise: interpolated lattice hashes
//! - Gradient noise: interpolated lattice gradients, zero at lattice points
//! - Simplex noise on a skewed triangular grid
//!
//! # Free functions
//!
//! Each noise has a plain function taking every parameter explicitly:
//!
//! ```
//! use rhizome_resin_noise::{DEFAULT_1D_V1, DEFAULT_A, random_noise_2d_to_1d, simplex_noise_2d_to_1d};
//! use glam::DVec2;
//!
//! let xy = DVec2::new(2.3, 4.7);
//! let hash = random_noise_2d_to_1d(xy, DEFAULT_1D_V1, DEFAULT_A);
//! assert!((0.0..1.0).contains(&hash));
//!
//! let s = simplex_noise_2d_to_1d(xy);
//! assert!(s.abs() <= 1.2);
//! ```
//!
//! # Struct-based API
//!
//! The noise types are small `Copy` structs carrying their hash parameters
//! and interpolation kernel, sampled through [`Noise2D`]:
//!
//! ```
//! use rhizome_resin_noise::{Interpolation, Noise2D, RandomNoise2D, ValueNoise2D};
//! use glam::DVec2;
//!
//! let noise = ValueNoise2D::new().kernel(Interpolation::Quintic);
//! let value = noise.sample(DVec2::new(1.5, 2.5));
//! assert!((0.0..=1.0).contains(&value));
//!
//! // Retuned hash
//! let tuned = ValueNoise2D::new().hash(RandomNoise2D::new().scale(1234.5));
//! let _ = tuned.sample_xy(1.5, 2.5);
//! ```
//!
//! Everything here is pure: no call reads or writes shared state, so samplers
//! can be evaluated from any number of threads.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, DVec3, DVec4};
use rhizome_resin_vecmath::{Components, abs, cubic, dot, floor, fraction, max, mix, quintic, sin};
use thiserror::Error;

// =============================================================================
// Noise Traits
// =============================================================================

/// Trait for 1D noise functions.
pub trait Noise1D {
    /// Sample the noise at position x.
    fn sample(&self, x: f64) -> f64;
}

/// Trait for scalar 2D noise functions.
pub trait Noise2D {
    /// Sample the noise at position xy.
    fn sample(&self, xy: DVec2) -> f64;

    /// Sample the noise at position (x, y).
    fn sample_xy(&self, x: f64, y: f64) -> f64 {
        self.sample(DVec2::new(x, y))
    }
}

/// Trait for 2D noise functions with a 2D result.
pub trait Noise2DTo2D {
    /// Sample the noise at position xy.
    fn sample(&self, xy: DVec2) -> DVec2;
}

// =============================================================================
// Constants
// =============================================================================

/// Default hash direction for 2D -> 1D random noise.
pub const DEFAULT_1D_V1: DVec2 = DVec2::new(12.9898, 78.233);

/// Default first hash direction for 2D -> 2D random noise.
pub const DEFAULT_2D_V1: DVec2 = DVec2::new(127.1, 311.7);

/// Default second hash direction for 2D -> 2D random noise.
pub const DEFAULT_2D_V2: DVec2 = DVec2::new(269.5, 183.3);

/// Default hash scale. Large enough that `sin` output is scrambled in the
/// fractional digits.
pub const DEFAULT_A: f64 = 43758.5453123;

// Lattice corner offsets within a cell.
const TOP_LEFT: DVec2 = DVec2::new(0.0, 0.0);
const TOP_RIGHT: DVec2 = DVec2::new(1.0, 0.0);
const BOTTOM_LEFT: DVec2 = DVec2::new(0.0, 1.0);
const BOTTOM_RIGHT: DVec2 = DVec2::new(1.0, 1.0);

// =============================================================================
// Interpolation
// =============================================================================

/// Kernel used to reshape the fractional cell offset before blending corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// `3t² - 2t³`, continuous first derivative.
    #[default]
    Cubic,
    /// `6t⁵ - 15t⁴ + 10t³`, continuous second derivative.
    Quintic,
}

impl Interpolation {
    /// Applies the kernel component-wise.
    #[inline]
    pub fn apply<V: Components>(self, t: V) -> V {
        match self {
            Interpolation::Cubic => cubic(t),
            Interpolation::Quintic => quintic(t),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Interpolation::Cubic => "cubic",
            Interpolation::Quintic => "quintic",
        })
    }
}

impl FromStr for Interpolation {
    type Err = ParseNoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cubic" => Ok(Interpolation::Cubic),
            "quintic" => Ok(Interpolation::Quintic),
            _ => Err(ParseNoiseError::UnknownInterpolation(s.to_string())),
        }
    }
}

/// Error parsing a noise or kernel name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNoiseError {
    /// Not one of the [`NoiseKind`] names.
    #[error("unknown noise kind '{0}' (expected random, value, gradient or simplex)")]
    UnknownKind(String),

    /// Not one of the [`Interpolation`] names.
    #[error("unknown interpolation '{0}' (expected cubic or quintic)")]
    UnknownInterpolation(String),
}

// =============================================================================
// Random (Hash) Noise
// =============================================================================

/// Hashes a scalar to `[0, 1)`: `fraction(sin(x) * a)`.
#[inline]
pub fn random_noise_1d_to_1d(x: f64, a: f64) -> f64 {
    fraction(sin(x) * a)
}

/// Hashes a point to `[0, 1)`: `fraction(sin(dot(xy, v)) * a)`.
#[inline]
pub fn random_noise_2d_to_1d(xy: DVec2, v: DVec2, a: f64) -> f64 {
    fraction(sin(dot(xy, v)) * a)
}

/// Hashes a point to a pseudo-gradient in `[-1, 1)²`, one hash per direction.
#[inline]
pub fn random_noise_2d_to_2d(xy: DVec2, v1: DVec2, v2: DVec2, a: f64) -> DVec2 {
    let st = DVec2::new(dot(xy, v1), dot(xy, v2));
    -1.0 + 2.0 * fraction(sin(st) * a)
}

/// 1D hash noise.
///
/// Returns values in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomNoise1D {
    /// Multiplier applied to `sin(x)` before taking the fraction.
    pub a: f64,
}

impl Default for RandomNoise1D {
    fn default() -> Self {
        Self { a: DEFAULT_A }
    }
}

impl RandomNoise1D {
    /// Creates the hash with the default scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale.
    pub fn scale(mut self, a: f64) -> Self {
        self.a = a;
        self
    }
}

impl Noise1D for RandomNoise1D {
    fn sample(&self, x: f64) -> f64 {
        random_noise_1d_to_1d(x, self.a)
    }
}

/// 2D -> 1D hash noise.
///
/// Uncorrelated between neighbouring inputs; the base of [`ValueNoise2D`].
/// Returns values in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomNoise2D {
    /// Direction the coordinate is projected onto.
    pub v: DVec2,
    /// Multiplier applied to the sine before taking the fraction.
    pub a: f64,
}

impl Default for RandomNoise2D {
    fn default() -> Self {
        Self {
            v: DEFAULT_1D_V1,
            a: DEFAULT_A,
        }
    }
}

impl RandomNoise2D {
    /// Creates the hash with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the projection direction.
    pub fn direction(mut self, v: DVec2) -> Self {
        self.v = v;
        self
    }

    /// Sets the scale.
    pub fn scale(mut self, a: f64) -> Self {
        self.a = a;
        self
    }
}

impl Noise2D for RandomNoise2D {
    fn sample(&self, xy: DVec2) -> f64 {
        random_noise_2d_to_1d(xy, self.v, self.a)
    }
}

/// 2D -> 2D hash noise, used as per-corner gradients by [`GradientNoise2D`].
///
/// Returns vectors in [-1, 1)².
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomGradient2D {
    /// Direction hashed into the x component.
    pub v1: DVec2,
    /// Direction hashed into the y component.
    pub v2: DVec2,
    /// Multiplier applied to the sines before taking the fraction.
    pub a: f64,
}

impl Default for RandomGradient2D {
    fn default() -> Self {
        Self {
            v1: DEFAULT_2D_V1,
            v2: DEFAULT_2D_V2,
            a: DEFAULT_A,
        }
    }
}

impl RandomGradient2D {
    /// Creates the hash with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both projection directions.
    pub fn directions(mut self, v1: DVec2, v2: DVec2) -> Self {
        self.v1 = v1;
        self.v2 = v2;
        self
    }

    /// Sets the scale.
    pub fn scale(mut self, a: f64) -> Self {
        self.a = a;
        self
    }
}

impl Noise2DTo2D for RandomGradient2D {
    fn sample(&self, xy: DVec2) -> DVec2 {
        random_noise_2d_to_2d(xy, self.v1, self.v2, self.a)
    }
}

// =============================================================================
// Value Noise
// =============================================================================

/// 2D value noise with default hash parameters.
///
/// Returns values in [0, 1].
#[inline]
pub fn value_noise_2d_to_1d(xy: DVec2, kernel: Interpolation) -> f64 {
    ValueNoise2D::new().kernel(kernel).sample(xy)
}

/// 2D value noise.
///
/// Hashes at lattice corners, blended with kernel-smoothed weights. Cheap,
/// but the grid is visible. At a lattice point the result is exactly the
/// corner hash. Returns values in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueNoise2D {
    /// Corner hash.
    pub hash: RandomNoise2D,
    /// Weight shaping kernel.
    pub kernel: Interpolation,
}

impl ValueNoise2D {
    /// Creates value noise with the default hash and cubic kernel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the corner hash.
    pub fn hash(mut self, hash: RandomNoise2D) -> Self {
        self.hash = hash;
        self
    }

    /// Sets the interpolation kernel.
    pub fn kernel(mut self, kernel: Interpolation) -> Self {
        self.kernel = kernel;
        self
    }
}

impl Noise2D for ValueNoise2D {
    fn sample(&self, xy: DVec2) -> f64 {
        let i = floor(xy);
        let f = fraction(xy);

        let a = self.hash.sample(i + TOP_LEFT);
        let b = self.hash.sample(i + TOP_RIGHT);
        let c = self.hash.sample(i + BOTTOM_LEFT);
        let d = self.hash.sample(i + BOTTOM_RIGHT);

        let u = self.kernel.apply(f);

        mix(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y
    }
}

// =============================================================================
// Gradient Noise
// =============================================================================

/// 2D gradient noise with default hash parameters.
///
/// Returns values in approximately [-1, 1].
#[inline]
pub fn gradient_noise_2d_to_1d(xy: DVec2, kernel: Interpolation) -> f64 {
    GradientNoise2D::new().kernel(kernel).sample(xy)
}

/// 2D gradient (Perlin-style) noise.
///
/// Every corner gets a pseudo-random gradient; its contribution is the
/// gradient dotted with the offset from the corner to the sample. Zero at
/// every lattice point. Returns values in approximately [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientNoise2D {
    /// Corner gradient hash.
    pub hash: RandomGradient2D,
    /// Weight shaping kernel.
    pub kernel: Interpolation,
}

impl GradientNoise2D {
    /// Creates gradient noise with the default hash and cubic kernel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gradient hash.
    pub fn hash(mut self, hash: RandomGradient2D) -> Self {
        self.hash = hash;
        self
    }

    /// Sets the interpolation kernel.
    pub fn kernel(mut self, kernel: Interpolation) -> Self {
        self.kernel = kernel;
        self
    }
}

impl Noise2D for GradientNoise2D {
    fn sample(&self, xy: DVec2) -> f64 {
        let i = floor(xy);
        let f = fraction(xy);

        let a = self.hash.sample(i + TOP_LEFT);
        let b = self.hash.sample(i + TOP_RIGHT);
        let c = self.hash.sample(i + BOTTOM_LEFT);
        let d = self.hash.sample(i + BOTTOM_RIGHT);

        let u = self.kernel.apply(f);

        mix(
            mix(dot(a, f - TOP_LEFT), dot(b, f - TOP_RIGHT), u.x),
            mix(dot(c, f - BOTTOM_LEFT), dot(d, f - BOTTOM_RIGHT), u.x),
            u.y,
        )
    }
}

// =============================================================================
// Simplex Noise
// =============================================================================

/// Skew/unskew constants for the triangular grid:
/// x = (3 - sqrt(3)) / 6, y = (sqrt(3) - 1) / 2, z = -1 + 2x, w = 1 / 41.
const SIMPLEX: DVec4 = DVec4::new(
    0.211324865405187,
    0.366025403784439,
    -0.577350269189626,
    0.024390243902439,
);

/// Gradient renormalization: 1.79284291400159 - 0.85373472095314 * r².
const NORM_BASE: f64 = 1.79284291400159;
const NORM_SLOPE: f64 = 0.85373472095314;

/// `x mod 289`, keeping permutation inputs small enough to stay exact.
#[inline]
fn mod289<V: Components>(x: V) -> V {
    x.map(|c| c - (c * (1.0 / 289.0)).floor() * 289.0)
}

/// Permutation polynomial `(34x + 1)·x mod 289`.
#[inline]
fn permute(x: DVec3) -> DVec3 {
    mod289((x * 34.0 + 1.0) * x)
}

/// 2D simplex noise.
///
/// Returns values in approximately [-1, 1].
#[inline]
pub fn simplex_noise_2d_to_1d(xy: DVec2) -> f64 {
    Simplex2D.sample(xy)
}

/// 2D simplex noise.
///
/// Three corners per sample instead of four, with radial falloff and no
/// axis-aligned artifacts. Permutation and gradients are computed
/// arithmetically, without lookup tables. Returns values in approximately
/// [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Simplex2D;

impl Simplex2D {
    /// Creates simplex noise.
    pub fn new() -> Self {
        Self
    }
}

impl Noise2D for Simplex2D {
    fn sample(&self, xy: DVec2) -> f64 {
        let cx = DVec2::splat(SIMPLEX.x);
        let cy = DVec2::splat(SIMPLEX.y);
        let cz = DVec2::splat(SIMPLEX.z);

        // First corner
        let i = floor(xy + dot(xy, cy));
        let x0 = xy - i + dot(i, cx);

        // Other corners; ties go to +y
        let i1 = if x0.x > x0.y { DVec2::X } else { DVec2::Y };
        let x1 = x0 + cx - i1;
        let x2 = x0 + cz;

        // Permutations
        let i = mod289(i);
        let p = permute(
            permute(i.y + DVec3::new(0.0, i1.y, 1.0)) + i.x + DVec3::new(0.0, i1.x, 1.0),
        );

        let m = max(
            0.5 - DVec3::new(dot(x0, x0), dot(x1, x1), dot(x2, x2)),
            0.0,
        );
        let m = m * m;
        let m = m * m;

        // Gradients from 41 points on a line mapped onto a diamond
        let x = 2.0 * fraction(p * SIMPLEX.w) - 1.0;
        let h = abs(x) - 0.5;
        let ox = floor(x + 0.5);
        let a0 = x - ox;

        let m = m * (NORM_BASE - NORM_SLOPE * (a0 * a0 + h * h));

        let gx = a0.x * x0.x + h.x * x0.y;
        let gyz = DVec2::new(a0.y, a0.z) * DVec2::new(x1.x, x2.x)
            + DVec2::new(h.y, h.z) * DVec2::new(x1.y, x2.y);
        let g = DVec3::new(gx, gyz.x, gyz.y);

        130.0 * dot(m, g)
    }
}

// =============================================================================
// Noise Kinds
// =============================================================================

/// Names the scalar 2D samplers, for selecting one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseKind {
    /// [`RandomNoise2D`]
    Random,
    /// [`ValueNoise2D`]
    Value,
    /// [`GradientNoise2D`]
    Gradient,
    /// [`Simplex2D`]
    Simplex,
}

impl NoiseKind {
    /// Every kind, in declaration order.
    pub const ALL: [NoiseKind; 4] = [
        NoiseKind::Random,
        NoiseKind::Value,
        NoiseKind::Gradient,
        NoiseKind::Simplex,
    ];

    /// True when the sampler's range is centered on zero rather than [0, 1].
    pub fn is_signed(self) -> bool {
        matches!(self, NoiseKind::Gradient | NoiseKind::Simplex)
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoiseKind::Random => "random",
            NoiseKind::Value => "value",
            NoiseKind::Gradient => "gradient",
            NoiseKind::Simplex => "simplex",
        })
    }
}

impl FromStr for NoiseKind {
    type Err = ParseNoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoiseKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNoiseError::UnknownKind(s.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
