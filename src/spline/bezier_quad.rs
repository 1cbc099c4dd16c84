use argmin::core::ArgminFloat;
use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint, OVector};

use crate::curve::PolynomialCurve;
use crate::error::{ensure_index, GeometryError};
use crate::misc::{constant, FloatingPoint};

use super::{
    transform_rows, BezierCubic, QUADRATIC_BEZIER_FROM_MONOMIAL, QUADRATIC_BEZIER_TO_MONOMIAL,
};

/// A quadratic Bezier segment with three control points
#[derive(Clone, Debug, PartialEq)]
pub struct BezierQuad<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    points: [OVector<T, D>; 3],
}

impl<T: FloatingPoint, D: DimName> BezierQuad<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    pub fn new(p0: OVector<T, D>, p1: OVector<T, D>, p2: OVector<T, D>) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    /// Express a curve as a quadratic Bezier segment
    /// # Failures
    /// - if the curve is cubic, which a quadratic segment cannot represent
    pub fn try_from_curve(curve: &PolynomialCurve<T, D>) -> Result<Self, GeometryError> {
        let degree = curve.degree();
        if degree > 2 {
            return Err(GeometryError::InvalidConversion {
                degree,
                max_degree: 2,
            });
        }
        let [c0, c1, c2, _] = curve.coefficients();
        let coefficients = [c0.clone(), c1.clone(), c2.clone()];
        Ok(Self {
            points: transform_rows(&QUADRATIC_BEZIER_FROM_MONOMIAL, &coefficients),
        })
    }

    pub fn points(&self) -> &[OVector<T, D>; 3] {
        &self.points
    }

    /// Get a control point by index
    /// # Failures
    /// - if the index is greater than 2
    pub fn control_point(&self, index: usize) -> Result<&OVector<T, D>, GeometryError> {
        ensure_index(index, 3)?;
        Ok(&self.points[index])
    }

    pub fn set_control_point(&mut self, index: usize, point: OVector<T, D>) -> Result<(), GeometryError> {
        ensure_index(index, 3)?;
        self.points[index] = point;
        Ok(())
    }

    /// The monomial form of the segment
    pub fn curve(&self) -> PolynomialCurve<T, D> {
        let [c0, c1, c2] = transform_rows(&QUADRATIC_BEZIER_TO_MONOMIAL, &self.points);
        PolynomialCurve::quadratic(c0, c1, c2)
    }

    pub fn eval(&self, t: T) -> OPoint<T, D> {
        self.curve().eval(t)
    }

    /// Find the closest point on the segment to a given point,
    /// returning the point and its parameter
    pub fn project_point(&self, point: &OPoint<T, D>) -> (OPoint<T, D>, T)
    where
        T: ArgminFloat,
    {
        self.curve().project_point(point)
    }

    /// Blend the control points of two segments, without clamping `t`
    pub fn lerp(a: &Self, b: &Self, t: T) -> Self {
        Self {
            points: std::array::from_fn(|i| a.points[i].lerp(&b.points[i], t)),
        }
    }

    /// Split at `t` into two segments that together form the same shape
    pub fn split(&self, t: T) -> (Self, Self) {
        let [p0, p1, p2] = &self.points;
        let a = p0.lerp(p1, t);
        let b = p1.lerp(p2, t);
        let p = a.lerp(&b, t);
        (
            Self::new(p0.clone(), a, p.clone()),
            Self::new(p, b, p2.clone()),
        )
    }

    /// The same shape as a cubic Bezier segment
    pub fn elevate(&self) -> BezierCubic<T, D> {
        let [p0, p1, p2] = &self.points;
        let third = constant::<T>(1. / 3.);
        BezierCubic::new(
            p0.clone(),
            p0.lerp(p1, T::one() - third),
            p1.lerp(p2, third),
            p2.clone(),
        )
    }
}

impl<T: FloatingPoint, D: DimName> From<&BezierQuad<T, D>> for PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(segment: &BezierQuad<T, D>) -> Self {
        segment.curve()
    }
}

impl<T: FloatingPoint, D: DimName> TryFrom<&PolynomialCurve<T, D>> for BezierQuad<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Error = GeometryError;

    fn try_from(curve: &PolynomialCurve<T, D>) -> Result<Self, Self::Error> {
        Self::try_from_curve(curve)
    }
}
