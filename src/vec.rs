//! Small fixed-size vectors usable as attribute pool keys.

use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use nalgebra::SVector;
use objgen_common::{impl_add_sub, impl_mul_div, impl_neg, item_with};

use crate::{Error, Result};

/// An immutable tuple of `N` [f64] components.
///
/// Unlike [nalgebra::SVector], this is [Eq] + [Hash]: two vectors are equal iff each pair of
/// components has the same canonical bit pattern. `-0.0` is treated as `0.0`, and every NaN is
/// treated as the same NaN, so that equality stays reflexive.
#[derive(Debug, Clone, Copy)]
pub struct Vector<const N: usize>(SVector<f64, N>);

/// A 2D vector; used for texture coordinates.
pub type Vector2 = Vector<2>;
/// A 3D vector; used for positions and normals.
pub type Vector3 = Vector<3>;

#[inline]
fn canonical_bits(c: f64) -> u64 {
    if c == 0.0 {
        0
    } else if c.is_nan() {
        f64::NAN.to_bits()
    } else {
        c.to_bits()
    }
}

impl<const N: usize> PartialEq for Vector<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| canonical_bits(*a) == canonical_bits(*b))
    }
}

impl<const N: usize> Eq for Vector<N> {}

impl<const N: usize> Hash for Vector<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.0.iter() {
            canonical_bits(*c).hash(state);
        }
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    #[inline]
    fn from(components: [f64; N]) -> Self {
        Self(SVector::from(components))
    }
}

impl<const N: usize> From<SVector<f64, N>> for Vector<N> {
    #[inline]
    fn from(inner: SVector<f64, N>) -> Self {
        Self(inner)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    #[inline]
    fn from(v: Vector<N>) -> Self {
        v.components()
    }
}

impl<const N: usize> Vector<N> {
    /// The zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    /// Construct a vector from a slice, which must contain exactly `N` components.
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        let arr: [f64; N] = components
            .try_into()
            .map_err(|_| Error::ComponentCount {
                expected: N,
                got: components.len(),
            })?;
        Ok(Self::from(arr))
    }

    /// The components of `self`, in order.
    #[inline]
    pub fn components(&self) -> [f64; N] {
        std::array::from_fn(|i| self.0[i])
    }

    /// Components, in order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// The underlying nalgebra vector.
    #[inline]
    pub fn as_svector(&self) -> &SVector<f64, N> {
        &self.0
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.0.dot(&rhs.0)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Scale `self` to unit length.
    ///
    /// # Errors
    ///
    /// [Error::ZeroMagnitude] if `self` has length 0.
    pub fn normalize(&self) -> Result<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            Err(Error::ZeroMagnitude)
        } else {
            Ok(Self(self.0 / mag))
        }
    }
}

impl Vector<2> {
    /// `(u, v)`
    #[inline]
    pub fn new(u: f64, v: f64) -> Self {
        Self(nalgebra::vector![u, v])
    }

    /// The `u` component.
    #[inline]
    pub fn u(&self) -> f64 {
        self.0.x
    }

    /// The `v` component.
    #[inline]
    pub fn v(&self) -> f64 {
        self.0.y
    }
}

impl Vector<3> {
    /// `(x, y, z)`
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(nalgebra::vector![x, y, z])
    }

    /// The `x` component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// The `y` component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// The `z` component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Right-handed cross product: `(ay·bz − az·by, az·bx − ax·bz, ax·by − ay·bx)`.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self(self.0.cross(&rhs.0))
    }
}

item_with! {V: Vector<2>, Vector<3> => impl_add_sub! {self: V, rhs: V;
    (Vector(self.0 + rhs.0); self.0 += rhs.0);
    (Vector(self.0 - rhs.0); self.0 -= rhs.0)}}

item_with! {V: Vector<2>, Vector<3> => impl_mul_div! {self: V, rhs: f64;
    (Vector(self.0 * rhs.to_owned()); self.0 *= rhs.to_owned());
    (Vector(self.0 / rhs.to_owned()); self.0 /= rhs.to_owned())}}

item_with! {V: Vector<2>, Vector<3> => impl_neg! {self: V; Vector(-self.0)}}

/// Components separated by single spaces; each always carries a decimal point (`0.0 0.2 1.0`).
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            // `Debug` is the shortest round-trip form and keeps the trailing `.0`
            write!(f, "{c:?}")?;
        }
        Ok(())
    }
}
