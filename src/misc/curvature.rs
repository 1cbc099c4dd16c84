use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OVector};

use crate::misc::FloatingPoint;

/// Curvature structure
#[derive(Debug, Clone, PartialEq)]
pub struct Curvature<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    /// Unit tangent vector
    t: OVector<T, D>,
    /// Curvature vector
    k: OVector<T, D>,
}

impl<T: FloatingPoint, D: DimName> Curvature<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    pub fn new(t: OVector<T, D>, k: OVector<T, D>) -> Self {
        Self { t, k }
    }

    /// Compute curvature from first and second derivatives
    /// Returns an error if the first derivative is zero
    pub fn derivatives(deriv1: OVector<T, D>, deriv2: OVector<T, D>) -> Result<Self, Self> {
        // T = D1 / |D1|
        // K = ( D2 - (D2 o T)*T )/( D1 o D1)
        let n1 = deriv1.norm();
        if n1.is_zero() {
            // At a cusp the unit tangent is parallel to the 2nd derivative,
            // when that one does not vanish as well.
            let n2 = deriv2.norm();
            if n2.is_zero() {
                Err(Self::new(OVector::zeros(), OVector::zeros()))
            } else {
                Err(Self::new(deriv2 / n2, OVector::zeros()))
            }
        } else {
            let tangent = &deriv1 / n1;
            let dot = deriv2.dot(&tangent);
            let d1 = T::one() / deriv1.norm_squared();
            let k = (deriv2 - &tangent * dot) * d1;
            Ok(Self::new(tangent, k))
        }
    }

    /// Returns the unit vector
    pub fn tangent_vector(&self) -> OVector<T, D> {
        self.t.clone()
    }

    /// Returns the curvature vector
    pub fn curvature_vector(&self) -> OVector<T, D> {
        self.k.clone()
    }

    /// Returns the curvature magnitude
    pub fn kappa(&self) -> T {
        self.k.norm()
    }

    /// Radius of the osculating circle, infinite on straight parts
    pub fn radius(&self) -> T {
        T::one() / self.kappa()
    }
}
