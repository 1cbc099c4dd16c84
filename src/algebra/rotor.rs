use std::ops::{Add, Div, Mul, Neg};

use nalgebra::{Quaternion, Rotation3, UnitQuaternion, UnitVector3, Vector3};

use crate::error::{ensure_index, GeometryError};
use crate::misc::{constant, FloatingPoint};

use super::{Bivector3, GeometricProduct, Multivector3};

/// The even subalgebra of 3D geometric algebra: a scalar plus a bivector.
/// Unit rotors represent rotations.
///
/// Rotors compose left to right: `a * b` applies `a` first, then `b`.
///
/// # Example
/// ```
/// use cubica::prelude::*;
/// use nalgebra::Vector3;
/// use approx::assert_relative_eq;
///
/// let rotor = Rotor3::from_angle_axis(std::f64::consts::FRAC_PI_2, &Vector3::z_axis());
/// assert_relative_eq!(rotor.rotate(&Vector3::x()), Vector3::y(), epsilon = 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotor3<T: FloatingPoint> {
    pub r: T,
    pub b: Bivector3<T>,
}

impl<T: FloatingPoint> Rotor3<T> {
    pub fn new(r: T, b: Bivector3<T>) -> Self {
        Self { r, b }
    }

    pub fn from_components(r: T, yz: T, zx: T, xy: T) -> Self {
        Self::new(r, Bivector3::new(yz, zx, xy))
    }

    pub fn identity() -> Self {
        Self::new(T::one(), Bivector3::zero())
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), Bivector3::zero())
    }

    /// Rotation by `angle` radians around `axis`
    pub fn from_angle_axis(angle: T, axis: &UnitVector3<T>) -> Self {
        let half = angle * constant(0.5);
        Self::new(half.cos(), Bivector3::from(axis.into_inner()) * half.sin())
    }

    /// The shortest rotation taking direction `a` onto direction `b`.
    ///
    /// When the directions are opposite the rotation plane is undetermined,
    /// so a half turn around an arbitrary axis perpendicular to `a` is used.
    pub fn from_to_rotation(a: &UnitVector3<T>, b: &UnitVector3<T>) -> Self {
        let (u, v) = (a.into_inner(), b.into_inner());
        let rotor = Self::new(T::one() + u.dot(&v), Bivector3::from_wedge(&u, &v));
        let sqr = rotor.sqr_magnitude();
        if sqr > T::default_epsilon() {
            rotor / sqr.sqrt()
        } else {
            log::debug!("opposite directions in from_to_rotation, rotating around an orthogonal axis");
            Self::new(T::zero(), Bivector3::from(orthonormal(a)))
        }
    }

    /// Rotation by twice the angle between `a` and `b`, in their common plane
    pub fn from_to_rotation_double(a: &UnitVector3<T>, b: &UnitVector3<T>) -> Self {
        a.into_inner().geometric(&b.into_inner())
    }

    /// Get a component by index, in `r`, `yz`, `zx`, `xy` order
    pub fn component(&self, index: usize) -> Result<T, GeometryError> {
        ensure_index(index, 4)?;
        Ok([self.r, self.b.yz, self.b.zx, self.b.xy][index])
    }

    pub fn sqr_magnitude(&self) -> T {
        self.r * self.r + self.b.sqr_magnitude()
    }

    pub fn magnitude(&self) -> T {
        self.sqr_magnitude().sqrt()
    }

    /// Scale to unit magnitude. A zero rotor yields NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Normalize the rotor, or `None` if its magnitude is not above `min_magnitude`
    pub fn try_normalize(&self, min_magnitude: T) -> Option<Self> {
        let magnitude = self.magnitude();
        if magnitude > min_magnitude {
            Some(*self / magnitude)
        } else {
            None
        }
    }

    /// The reverse of the rotor, which is its inverse when normalized
    pub fn conjugate(&self) -> Self {
        Self::new(self.r, -self.b)
    }

    /// Rotate a vector. Expects a unit rotor.
    pub fn rotate(&self, v: &Vector3<T>) -> Vector3<T> {
        let sandwich = self.conjugate() * Bivector3::from(*v) * *self;
        sandwich.b.hodge_dual()
    }

    /// The rotation angle and axis, `None` for the identity
    pub fn angle_axis(&self) -> Option<(T, UnitVector3<T>)> {
        let axis = UnitVector3::try_new(self.b.hodge_dual(), T::zero())?;
        let angle = self.b.magnitude().atan2(self.r) * constant(2.);
        Some((angle, axis))
    }

    pub fn to_quaternion(&self) -> Quaternion<T> {
        Quaternion::new(self.r, self.b.yz, self.b.zx, self.b.xy)
    }

    pub fn to_unit_quaternion(&self) -> UnitQuaternion<T> {
        UnitQuaternion::new_normalize(self.to_quaternion())
    }

    pub fn to_rotation_matrix(&self) -> Rotation3<T> {
        self.to_unit_quaternion().to_rotation_matrix()
    }
}

/// A unit vector perpendicular to `v`, built from the world axis `v` is least aligned with
fn orthonormal<T: FloatingPoint>(v: &UnitVector3<T>) -> Vector3<T> {
    let a = v.abs();
    let axis = if a.x <= a.y && a.x <= a.z {
        Vector3::x()
    } else if a.y <= a.z {
        Vector3::y()
    } else {
        Vector3::z()
    };
    v.cross(&axis).normalize()
}

impl<T: FloatingPoint> From<Bivector3<T>> for Rotor3<T> {
    fn from(b: Bivector3<T>) -> Self {
        Self::new(T::zero(), b)
    }
}

impl<T: FloatingPoint> From<UnitQuaternion<T>> for Rotor3<T> {
    fn from(q: UnitQuaternion<T>) -> Self {
        Self::from_components(q.w, q.i, q.j, q.k)
    }
}

impl<T: FloatingPoint> Neg for Rotor3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.r, -self.b)
    }
}

impl<T: FloatingPoint> Add for Rotor3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.b + rhs.b)
    }
}

impl<T: FloatingPoint> Mul<T> for Rotor3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.r * rhs, self.b * rhs)
    }
}

impl<T: FloatingPoint> Div<T> for Rotor3<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.r / rhs, self.b / rhs)
    }
}

impl<T: FloatingPoint> Mul for Rotor3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.b, rhs.b);
        Self::from_components(
            self.r * rhs.r + a.dot(&b),
            self.r * b.yz + a.yz * rhs.r - a.zx * b.xy + a.xy * b.zx,
            self.r * b.zx + a.yz * b.xy + a.zx * rhs.r - a.xy * b.yz,
            self.r * b.xy - a.yz * b.zx + a.zx * b.yz + a.xy * rhs.r,
        )
    }
}

impl<T: FloatingPoint> Mul<Bivector3<T>> for Rotor3<T> {
    type Output = Self;
    fn mul(self, rhs: Bivector3<T>) -> Self {
        self * Self::from(rhs)
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Rotor3<T> {
    type Output = Multivector3<T>;
    fn mul(self, v: Vector3<T>) -> Multivector3<T> {
        Multivector3::from_vector(v * self.r) + self.b * v
    }
}
