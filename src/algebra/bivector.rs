use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector3;

use crate::error::{ensure_index, GeometryError};
use crate::misc::FloatingPoint;

use super::{Multivector3, Rotor3, Trivector3};

/// An oriented plane element in 3D, with components on the `yz`, `zx` and `xy` planes.
///
/// The wedge of two vectors produces one; its Hodge dual is the plane normal
/// scaled by the enclosed area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bivector3<T: FloatingPoint> {
    pub yz: T,
    pub zx: T,
    pub xy: T,
}

/// Wedge (outer) product of two vectors
pub fn wedge<T: FloatingPoint>(a: &Vector3<T>, b: &Vector3<T>) -> Bivector3<T> {
    Bivector3::from_wedge(a, b)
}

impl<T: FloatingPoint> Bivector3<T> {
    pub fn new(yz: T, zx: T, xy: T) -> Self {
        Self { yz, zx, xy }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Wedge (outer) product `a ∧ b`. Zero when the vectors are parallel.
    ///
    /// # Example
    /// ```
    /// use cubica::prelude::*;
    /// use nalgebra::Vector3;
    ///
    /// let b = Bivector3::from_wedge(&Vector3::x(), &Vector3::y());
    /// assert_eq!(b, Bivector3::new(0., 0., 1.));
    /// assert_eq!(b.hodge_dual(), Vector3::x().cross(&Vector3::y()));
    /// ```
    pub fn from_wedge(a: &Vector3<T>, b: &Vector3<T>) -> Self {
        Self::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Get a component by index, in `yz`, `zx`, `xy` order
    pub fn component(&self, index: usize) -> Result<T, GeometryError> {
        ensure_index(index, 3)?;
        Ok([self.yz, self.zx, self.xy][index])
    }

    pub fn sqr_magnitude(&self) -> T {
        self.yz * self.yz + self.zx * self.zx + self.xy * self.xy
    }

    pub fn magnitude(&self) -> T {
        self.sqr_magnitude().sqrt()
    }

    /// Normalize the bivector, or `None` if its magnitude is not above `min_magnitude`
    pub fn try_normalize(&self, min_magnitude: T) -> Option<Self> {
        let magnitude = self.magnitude();
        if magnitude > min_magnitude {
            Some(*self / magnitude)
        } else {
            None
        }
    }

    /// The dual vector, perpendicular to the plane, with length equal to the area
    pub fn hodge_dual(&self) -> Vector3<T> {
        Vector3::new(self.yz, self.zx, self.xy)
    }

    /// Unit normal of the plane, `None` for a degenerate (zero area) bivector
    pub fn normal(&self) -> Option<Vector3<T>> {
        self.hodge_dual().try_normalize(T::zero())
    }

    /// Returns the unit normal and the area.
    /// The normal is the zero vector when the area is zero.
    pub fn normal_and_area(&self) -> (Vector3<T>, T) {
        let dual = self.hodge_dual();
        let area = dual.norm();
        if area > T::zero() {
            (dual / area, area)
        } else {
            (Vector3::zeros(), area)
        }
    }

    /// The scalar part of the product of two bivectors
    pub fn dot(&self, rhs: &Self) -> T {
        -self.yz * rhs.yz - self.zx * rhs.zx - self.xy * rhs.xy
    }

    /// The bivector part of the product of two bivectors
    pub fn wedge(&self, rhs: &Self) -> Self {
        Self::new(
            self.xy * rhs.zx - self.zx * rhs.xy,
            self.yz * rhs.xy - self.xy * rhs.yz,
            self.zx * rhs.yz - self.yz * rhs.zx,
        )
    }

    /// Geometric product with itself, a pure (negative) scalar
    pub fn square(&self) -> Rotor3<T> {
        *self * *self
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for Bivector3<T> {
    /// The bivector whose Hodge dual is `v`
    fn from(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> Neg for Bivector3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.yz, -self.zx, -self.xy)
    }
}

impl<T: FloatingPoint> Add for Bivector3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.yz + rhs.yz, self.zx + rhs.zx, self.xy + rhs.xy)
    }
}

impl<T: FloatingPoint> Sub for Bivector3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.yz - rhs.yz, self.zx - rhs.zx, self.xy - rhs.xy)
    }
}

impl<T: FloatingPoint> Mul<T> for Bivector3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.yz * rhs, self.zx * rhs, self.xy * rhs)
    }
}

impl<T: FloatingPoint> Div<T> for Bivector3<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.yz / rhs, self.zx / rhs, self.xy / rhs)
    }
}

impl<T: FloatingPoint> Mul for Bivector3<T> {
    type Output = Rotor3<T>;
    fn mul(self, rhs: Self) -> Rotor3<T> {
        Rotor3::new(self.dot(&rhs), self.wedge(&rhs))
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Bivector3<T> {
    type Output = Multivector3<T>;
    fn mul(self, v: Vector3<T>) -> Multivector3<T> {
        Multivector3::new(
            T::zero(),
            Vector3::new(
                self.xy * v.y - self.zx * v.z,
                self.yz * v.z - self.xy * v.x,
                self.zx * v.x - self.yz * v.y,
            ),
            Bivector3::zero(),
            Trivector3::new(self.yz * v.x + self.zx * v.y + self.xy * v.z),
        )
    }
}

impl<T: FloatingPoint> Mul<Trivector3<T>> for Bivector3<T> {
    type Output = Vector3<T>;
    fn mul(self, rhs: Trivector3<T>) -> Vector3<T> {
        Vector3::new(-self.yz * rhs.xyz, -self.zx * rhs.xyz, -self.xy * rhs.xyz)
    }
}

impl<T: FloatingPoint> Mul<Rotor3<T>> for Bivector3<T> {
    type Output = Rotor3<T>;
    fn mul(self, rhs: Rotor3<T>) -> Rotor3<T> {
        Rotor3::from(self) * rhs
    }
}
