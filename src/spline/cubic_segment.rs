use std::marker::PhantomData;

use argmin::core::ArgminFloat;
use nalgebra::{allocator::Allocator, Const, DefaultAllocator, DimName, OPoint, OVector};

use crate::curve::PolynomialCurve;
use crate::error::{ensure_index, GeometryError};
use crate::misc::FloatingPoint;

use super::{transform_rows, Bezier, CatmullRom, CubicBasis, Hermite, UniformBSpline};

/// A cubic spline segment given by four control points in the basis `B`.
///
/// # Example
/// ```
/// use cubica::prelude::*;
/// use nalgebra::{Point2, Vector2};
/// use approx::assert_relative_eq;
///
/// let bezier = BezierCubic::new(
///     Vector2::new(0., 0.),
///     Vector2::new(1., 2.),
///     Vector2::new(2., 2.),
///     Vector2::new(3., 0.),
/// );
/// assert_relative_eq!(bezier.eval(0.5), Point2::new(1.5, 1.5));
///
/// // the same shape expressed with tangents
/// let hermite = bezier.convert::<Hermite>();
/// assert_relative_eq!(*hermite.control_point(1).unwrap(), Vector2::new(3., 6.));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CubicSegment<T: FloatingPoint, D: DimName, B: CubicBasis>
where
    DefaultAllocator: Allocator<D>,
{
    points: [OVector<T, D>; 4],
    basis: PhantomData<B>,
}

pub type BezierCubic<T, D> = CubicSegment<T, D, Bezier>;
pub type CatRomCubic<T, D> = CubicSegment<T, D, CatmullRom>;
pub type HermiteCubic<T, D> = CubicSegment<T, D, Hermite>;
pub type UbsCubic<T, D> = CubicSegment<T, D, UniformBSpline>;

/// 2D cubic Bezier segment alias
pub type BezierCubic2D<T> = BezierCubic<T, Const<2>>;
/// 3D cubic Bezier segment alias
pub type BezierCubic3D<T> = BezierCubic<T, Const<3>>;

impl<T: FloatingPoint, D: DimName, B: CubicBasis> CubicSegment<T, D, B>
where
    DefaultAllocator: Allocator<D>,
{
    pub fn new(p0: OVector<T, D>, p1: OVector<T, D>, p2: OVector<T, D>, p3: OVector<T, D>) -> Self {
        Self::from_points([p0, p1, p2, p3])
    }

    pub fn from_points(points: [OVector<T, D>; 4]) -> Self {
        Self {
            points,
            basis: PhantomData,
        }
    }

    /// Express a curve of degree three or less in this basis
    pub fn from_curve(curve: &PolynomialCurve<T, D>) -> Self {
        Self::from_points(transform_rows(&B::FROM_MONOMIAL, curve.coefficients()))
    }

    pub fn points(&self) -> &[OVector<T, D>; 4] {
        &self.points
    }

    /// Get a control point by index
    /// # Failures
    /// - if the index is greater than 3
    pub fn control_point(&self, index: usize) -> Result<&OVector<T, D>, GeometryError> {
        ensure_index(index, 4)?;
        Ok(&self.points[index])
    }

    pub fn set_control_point(&mut self, index: usize, point: OVector<T, D>) -> Result<(), GeometryError> {
        ensure_index(index, 4)?;
        self.points[index] = point;
        Ok(())
    }

    /// The monomial form of the segment
    pub fn curve(&self) -> PolynomialCurve<T, D> {
        PolynomialCurve::from_coefficients(transform_rows(&B::TO_MONOMIAL, &self.points))
    }

    /// Convert into another basis describing the same shape
    pub fn convert<B2: CubicBasis>(&self) -> CubicSegment<T, D, B2> {
        let coefficients = transform_rows(&B::TO_MONOMIAL, &self.points);
        CubicSegment::from_points(transform_rows(&B2::FROM_MONOMIAL, &coefficients))
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
        Self::from_points(std::array::from_fn(|i| a.points[i].lerp(&b.points[i], t)))
    }
}

impl<T: FloatingPoint, D: DimName> BezierCubic<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Split at `t` with de Casteljau's algorithm,
    /// into two segments that together form the same shape
    pub fn split(&self, t: T) -> (Self, Self) {
        let [p0, p1, p2, p3] = &self.points;
        let a = p0.lerp(p1, t);
        let b = p1.lerp(p2, t);
        let c = p2.lerp(p3, t);
        let d = a.lerp(&b, t);
        let e = b.lerp(&c, t);
        let p = d.lerp(&e, t);
        (
            Self::new(p0.clone(), a, d, p.clone()),
            Self::new(p, e, c, p3.clone()),
        )
    }
}

impl<T: FloatingPoint, D: DimName, B: CubicBasis> From<&CubicSegment<T, D, B>>
    for PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(segment: &CubicSegment<T, D, B>) -> Self {
        segment.curve()
    }
}

impl<T: FloatingPoint, D: DimName, B: CubicBasis> From<&PolynomialCurve<T, D>>
    for CubicSegment<T, D, B>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(curve: &PolynomialCurve<T, D>) -> Self {
        Self::from_curve(curve)
    }
}
