use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector3;

use crate::misc::FloatingPoint;

use super::{Bivector3, GeometricProduct, Rotor3, Trivector3};

/// A general element of 3D geometric algebra, one part per grade
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multivector3<T: FloatingPoint> {
    pub r: T,
    pub v: Vector3<T>,
    pub b: Bivector3<T>,
    pub t: Trivector3<T>,
}

impl<T: FloatingPoint> Multivector3<T> {
    pub fn new(r: T, v: Vector3<T>, b: Bivector3<T>, t: Trivector3<T>) -> Self {
        Self { r, v, b, t }
    }

    pub fn zero() -> Self {
        Self::new(
            T::zero(),
            Vector3::zeros(),
            Bivector3::zero(),
            Trivector3::zero(),
        )
    }

    pub fn from_scalar(r: T) -> Self {
        Self { r, ..Self::zero() }
    }

    pub fn from_vector(v: Vector3<T>) -> Self {
        Self { v, ..Self::zero() }
    }

    pub fn from_bivector(b: Bivector3<T>) -> Self {
        Self { b, ..Self::zero() }
    }

    pub fn from_trivector(t: Trivector3<T>) -> Self {
        Self { t, ..Self::zero() }
    }

    /// The scalar and bivector parts
    pub fn even(&self) -> Rotor3<T> {
        Rotor3::new(self.r, self.b)
    }

    /// Reverse the order of the basis vectors in every blade,
    /// negating the bivector and trivector parts
    pub fn reverse(&self) -> Self {
        Self::new(self.r, self.v, -self.b, -self.t)
    }
}

impl<T: FloatingPoint> From<Rotor3<T>> for Multivector3<T> {
    fn from(rotor: Rotor3<T>) -> Self {
        Self {
            r: rotor.r,
            b: rotor.b,
            ..Self::zero()
        }
    }
}

impl<T: FloatingPoint> From<Bivector3<T>> for Multivector3<T> {
    fn from(b: Bivector3<T>) -> Self {
        Self::from_bivector(b)
    }
}

impl<T: FloatingPoint> From<Trivector3<T>> for Multivector3<T> {
    fn from(t: Trivector3<T>) -> Self {
        Self::from_trivector(t)
    }
}

impl<T: FloatingPoint> Neg for Multivector3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.r, -self.v, -self.b, -self.t)
    }
}

impl<T: FloatingPoint> Add for Multivector3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.v + rhs.v,
            self.b + rhs.b,
            self.t + rhs.t,
        )
    }
}

impl<T: FloatingPoint> Sub for Multivector3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl<T: FloatingPoint> Mul<T> for Multivector3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.r * rhs, self.v * rhs, self.b * rhs, self.t * rhs)
    }
}

impl<T: FloatingPoint> Mul for Multivector3<T> {
    type Output = Self;

    /// Full geometric product, accumulated grade by grade
    fn mul(self, rhs: Self) -> Self {
        // scalar factors on either side
        let mut out = rhs * self.r + Self::new(T::zero(), self.v, self.b, self.t) * rhs.r;

        // vector on the left
        out = out + Self::from(self.v.geometric(&rhs.v));
        out = out + self.v.geometric(&rhs.b);
        out = out + Self::from_bivector(self.v.geometric(&rhs.t));

        // bivector on the left
        out = out + Self::from(self.b * rhs.b);
        out = out + self.b * rhs.v;
        out = out + Self::from_vector(self.b * rhs.t);

        // trivector on the left
        out = out + Self::from_bivector(self.t * rhs.v);
        out = out + Self::from_vector(self.t * rhs.b);
        out.r += self.t * rhs.t;

        out
    }
}
