use argmin::core::{Gradient, Hessian};
use nalgebra::{allocator::Allocator, DefaultAllocator, DimName};

use crate::{curve::PolynomialCurve, misc::FloatingPoint};

/// Gradient & Hessian provider for the squared distance from a curve to the origin.
/// The curve is expected to be translated so that the query point sits at the origin.
pub struct PolynomialClosestParameterProblem<'a, T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    /// The curve relative to the query point.
    curve: &'a PolynomialCurve<T, D>,
}

impl<'a, T: FloatingPoint, D: DimName> PolynomialClosestParameterProblem<'a, T, D>
where
    DefaultAllocator: Allocator<D>,
{
    pub fn new(curve: &'a PolynomialCurve<T, D>) -> Self {
        Self { curve }
    }
}

impl<T: FloatingPoint, D: DimName> Gradient for PolynomialClosestParameterProblem<'_, T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Param = T;
    type Gradient = T;

    /// f(t) * f'(t)
    fn gradient(&self, param: &Self::Param) -> Result<Self::Gradient, anyhow::Error> {
        let f = self.curve.eval_vector(*param);
        let d1 = self.curve.eval_derivative(*param);
        Ok(f.dot(&d1))
    }
}

impl<T: FloatingPoint, D: DimName> Hessian for PolynomialClosestParameterProblem<'_, T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Param = T;
    type Hessian = T;

    /// f(t) * f"(t) + f'(t) * f'(t)
    fn hessian(&self, param: &Self::Param) -> Result<Self::Hessian, anyhow::Error> {
        let t = *param;
        let f = self.curve.eval_vector(t);
        let d1 = self.curve.eval_derivative(t);
        let d2 = self.curve.eval_second_derivative(t);
        Ok(f.dot(&d2) + d1.dot(&d1))
    }
}
