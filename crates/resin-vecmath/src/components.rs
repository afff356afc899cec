use std::fmt;

use glam::{DVec2, DVec3, DVec4};

// ============================================================================
// Components Trait
// ============================================================================

/// A fixed-arity tuple of `f64` components.
///
/// Implemented for `f64` (arity 1) and the glam vectors [`DVec2`], [`DVec3`]
/// and [`DVec4`]. Every operation in this crate is written once against this
/// trait and works component-wise, so the result always has the arity of its
/// vector inputs.
///
/// ```
/// use rhizome_resin_vecmath::Components;
/// use glam::DVec3;
///
/// let v = DVec3::new(1.0, 2.0, 3.0).map(|c| c * 2.0);
/// assert_eq!(v, DVec3::new(2.0, 4.0, 6.0));
/// assert_eq!(<DVec3 as Components>::ARITY, 3);
/// ```
pub trait Components: Copy + fmt::Debug + PartialEq {
    /// Number of components.
    const ARITY: usize;

    /// Creates a value with every component set to `value`.
    fn splat(value: f64) -> Self;

    /// Returns the component at `index`, or `None` past the arity.
    fn component(&self, index: usize) -> Option<f64>;

    /// Applies `f` to every component.
    fn map(self, f: impl Fn(f64) -> f64) -> Self;

    /// Combines two values pairwise with `f`.
    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self;

    /// Sums the components left to right.
    fn sum_components(self) -> f64;
}

impl Components for f64 {
    const ARITY: usize = 1;

    #[inline]
    fn splat(value: f64) -> Self {
        value
    }

    #[inline]
    fn component(&self, index: usize) -> Option<f64> {
        (index == 0).then_some(*self)
    }

    #[inline]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        f(self)
    }

    #[inline]
    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        f(self, other)
    }

    #[inline]
    fn sum_components(self) -> f64 {
        self
    }
}

macro_rules! impl_components {
    ($ty:ty, $arity:literal) => {
        impl Components for $ty {
            const ARITY: usize = $arity;

            #[inline]
            fn splat(value: f64) -> Self {
                <$ty>::splat(value)
            }

            #[inline]
            fn component(&self, index: usize) -> Option<f64> {
                self.to_array().get(index).copied()
            }

            #[inline]
            fn map(self, f: impl Fn(f64) -> f64) -> Self {
                <$ty>::from_array(self.to_array().map(f))
            }

            #[inline]
            fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
                let (lhs, rhs) = (self.to_array(), other.to_array());
                <$ty>::from_array(std::array::from_fn(|i| f(lhs[i], rhs[i])))
            }

            #[inline]
            fn sum_components(self) -> f64 {
                self.to_array().into_iter().fold(0.0, |acc, c| acc + c)
            }
        }
    };
}

impl_components!(DVec2, 2);
impl_components!(DVec3, 3);
impl_components!(DVec4, 4);

// ============================================================================
// Named Components
// ============================================================================

/// Positional component names for vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// First component.
    X,
    /// Second component.
    Y,
    /// Third component.
    Z,
    /// Fourth component.
    W,
}

impl Axis {
    /// Component index of this axis.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::W => 3,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::W => "w",
        })
    }
}

/// Color channel names for vectors used as colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Red, stored in the first component.
    R,
    /// Green, stored in the second component.
    G,
    /// Blue, stored in the third component.
    B,
    /// Alpha, stored in the fourth component.
    A,
}

impl Channel {
    /// The axis this channel is stored in.
    pub fn axis(self) -> Axis {
        match self {
            Channel::R => Axis::X,
            Channel::G => Axis::Y,
            Channel::B => Axis::Z,
            Channel::A => Axis::W,
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Builds a 2-vector.
#[inline]
pub const fn vec2(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

/// Builds a 3-vector.
#[inline]
pub const fn vec3(x: f64, y: f64, z: f64) -> DVec3 {
    DVec3::new(x, y, z)
}

/// Builds a 4-vector.
#[inline]
pub const fn vec4(x: f64, y: f64, z: f64, w: f64) -> DVec4 {
    DVec4::new(x, y, z, w)
}

/// Broadcasts `n` to both components.
#[inline]
pub const fn broadcast2(n: f64) -> DVec2 {
    DVec2::new(n, n)
}

/// Broadcasts `n` to all three components.
#[inline]
pub const fn broadcast3(n: f64) -> DVec3 {
    DVec3::new(n, n, n)
}

/// Broadcasts `n` to x, y and z; `w` is always 1.
#[inline]
pub const fn broadcast4(n: f64) -> DVec4 {
    DVec4::new(n, n, n, 1.0)
}

/// `(1, 1)`.
pub const UNIT2: DVec2 = broadcast2(1.0);
/// `(1, 1, 1)`.
pub const UNIT3: DVec3 = broadcast3(1.0);
/// `(1, 1, 1, 1)`.
pub const UNIT4: DVec4 = broadcast4(1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_access() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.component(Axis::Z.index()), Some(3.0));
        assert_eq!(v.component(Axis::W.index()), None);
        assert_eq!(4.5_f64.component(0), Some(4.5));
        assert_eq!(4.5_f64.component(1), None);
    }

    #[test]
    fn test_zip_with_is_pairwise() {
        let a = DVec4::new(1.0, 2.0, 3.0, 4.0);
        let b = DVec4::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.zip_with(b, |x, y| y - x), DVec4::new(9.0, 18.0, 27.0, 36.0));
    }

    #[test]
    fn test_broadcast4_keeps_w_one() {
        assert_eq!(broadcast4(0.25), DVec4::new(0.25, 0.25, 0.25, 1.0));
        assert_eq!(UNIT4, DVec4::ONE);
        assert_eq!(UNIT2, DVec2::ONE);
    }

    #[test]
    fn test_channel_axes() {
        assert_eq!(Channel::R.axis().index(), 0);
        assert_eq!(Channel::A.axis().index(), 3);
    }
}
