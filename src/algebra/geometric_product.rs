use nalgebra::Vector3;

use crate::misc::FloatingPoint;

use super::{Bivector3, Multivector3, Rotor3, Trivector3};

/// Geometric product with a plain vector on the left hand side.
///
/// `Vector3` is foreign to this crate, so the product is spelled as a method
/// instead of the `*` operator the other algebra types use.
///
/// # Example
/// ```
/// use cubica::prelude::*;
/// use nalgebra::Vector3;
///
/// let r = Vector3::new(1., 0., 0.).geometric(&Vector3::new(0., 1., 0.));
/// assert_eq!(r.r, 0.);
/// assert_eq!(r.b, Bivector3::new(0., 0., 1.));
/// ```
pub trait GeometricProduct<Rhs> {
    type Output;

    fn geometric(&self, rhs: &Rhs) -> Self::Output;
}

impl<T: FloatingPoint> GeometricProduct<Vector3<T>> for Vector3<T> {
    type Output = Rotor3<T>;
    fn geometric(&self, rhs: &Vector3<T>) -> Rotor3<T> {
        Rotor3::new(self.dot(rhs), Bivector3::from_wedge(self, rhs))
    }
}

impl<T: FloatingPoint> GeometricProduct<Bivector3<T>> for Vector3<T> {
    type Output = Multivector3<T>;
    fn geometric(&self, b: &Bivector3<T>) -> Multivector3<T> {
        Multivector3::new(
            T::zero(),
            Vector3::new(
                self.z * b.zx - self.y * b.xy,
                self.x * b.xy - self.z * b.yz,
                self.y * b.yz - self.x * b.zx,
            ),
            Bivector3::zero(),
            Trivector3::new(self.x * b.yz + self.y * b.zx + self.z * b.xy),
        )
    }
}

impl<T: FloatingPoint> GeometricProduct<Trivector3<T>> for Vector3<T> {
    type Output = Bivector3<T>;
    fn geometric(&self, rhs: &Trivector3<T>) -> Bivector3<T> {
        *rhs * *self
    }
}

impl<T: FloatingPoint> GeometricProduct<Rotor3<T>> for Vector3<T> {
    type Output = Multivector3<T>;
    fn geometric(&self, rhs: &Rotor3<T>) -> Multivector3<T> {
        Multivector3::from_vector(self * rhs.r) + self.geometric(&rhs.b)
    }
}

impl<T: FloatingPoint> GeometricProduct<Multivector3<T>> for Vector3<T> {
    type Output = Multivector3<T>;
    fn geometric(&self, rhs: &Multivector3<T>) -> Multivector3<T> {
        Multivector3::from_vector(*self) * *rhs
    }
}
