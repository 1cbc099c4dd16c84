use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector3;

use crate::misc::FloatingPoint;

use super::Bivector3;

/// An oriented volume element, a multiple of the pseudoscalar `xyz`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trivector3<T: FloatingPoint> {
    pub xyz: T,
}

impl<T: FloatingPoint> Trivector3<T> {
    pub fn new(xyz: T) -> Self {
        Self { xyz }
    }

    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    /// The unit pseudoscalar
    pub fn unit() -> Self {
        Self::new(T::one())
    }
}

impl<T: FloatingPoint> Neg for Trivector3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.xyz)
    }
}

impl<T: FloatingPoint> Add for Trivector3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.xyz + rhs.xyz)
    }
}

impl<T: FloatingPoint> Sub for Trivector3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.xyz - rhs.xyz)
    }
}

impl<T: FloatingPoint> Mul<T> for Trivector3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.xyz * rhs)
    }
}

/// `I * I = -1`
impl<T: FloatingPoint> Mul for Trivector3<T> {
    type Output = T;
    fn mul(self, rhs: Self) -> T {
        -self.xyz * rhs.xyz
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Trivector3<T> {
    type Output = Bivector3<T>;
    fn mul(self, v: Vector3<T>) -> Bivector3<T> {
        Bivector3::new(v.x * self.xyz, v.y * self.xyz, v.z * self.xyz)
    }
}

impl<T: FloatingPoint> Mul<Bivector3<T>> for Trivector3<T> {
    type Output = Vector3<T>;
    fn mul(self, b: Bivector3<T>) -> Vector3<T> {
        Vector3::new(-b.yz * self.xyz, -b.zx * self.xyz, -b.xy * self.xyz)
    }
}
