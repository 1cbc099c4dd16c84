use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OVector};

use crate::misc::{constant, FloatingPoint};

/// A spline family of degree three.
///
/// `TO_MONOMIAL` maps the four control points of a segment to the monomial
/// coefficients `c0..c3`, one row per coefficient. `FROM_MONOMIAL` is its inverse.
/// Conversions between two families go through the monomial form.
pub trait CubicBasis {
    const TO_MONOMIAL: [[f64; 4]; 4];
    const FROM_MONOMIAL: [[f64; 4]; 4];
}

/// Bernstein basis, interpolating the first and last control points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bezier;

/// Catmull-Rom basis, interpolating the middle two control points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatmullRom;

/// Hermite basis, with control points ordered as `p0, v0, p1, v1`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hermite;

/// Uniform B-spline basis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformBSpline;

impl CubicBasis for Bezier {
    const TO_MONOMIAL: [[f64; 4]; 4] = [
        [1., 0., 0., 0.],
        [-3., 3., 0., 0.],
        [3., -6., 3., 0.],
        [-1., 3., -3., 1.],
    ];
    const FROM_MONOMIAL: [[f64; 4]; 4] = [
        [1., 0., 0., 0.],
        [1., 1. / 3., 0., 0.],
        [1., 2. / 3., 1. / 3., 0.],
        [1., 1., 1., 1.],
    ];
}

impl CubicBasis for CatmullRom {
    const TO_MONOMIAL: [[f64; 4]; 4] = [
        [0., 1., 0., 0.],
        [-0.5, 0., 0.5, 0.],
        [1., -2.5, 2., -0.5],
        [-0.5, 1.5, -1.5, 0.5],
    ];
    const FROM_MONOMIAL: [[f64; 4]; 4] = [
        [1., -1., 1., 1.],
        [1., 0., 0., 0.],
        [1., 1., 1., 1.],
        [1., 2., 4., 6.],
    ];
}

impl CubicBasis for Hermite {
    const TO_MONOMIAL: [[f64; 4]; 4] = [
        [1., 0., 0., 0.],
        [0., 1., 0., 0.],
        [-3., -2., 3., -1.],
        [2., 1., -2., 1.],
    ];
    const FROM_MONOMIAL: [[f64; 4]; 4] = [
        [1., 0., 0., 0.],
        [0., 1., 0., 0.],
        [1., 1., 1., 1.],
        [0., 1., 2., 3.],
    ];
}

impl CubicBasis for UniformBSpline {
    const TO_MONOMIAL: [[f64; 4]; 4] = [
        [1. / 6., 4. / 6., 1. / 6., 0.],
        [-3. / 6., 0., 3. / 6., 0.],
        [3. / 6., -6. / 6., 3. / 6., 0.],
        [-1. / 6., 3. / 6., -3. / 6., 1. / 6.],
    ];
    const FROM_MONOMIAL: [[f64; 4]; 4] = [
        [1., -1., 2. / 3., 0.],
        [1., 0., -1. / 3., 0.],
        [1., 1., 2. / 3., 0.],
        [1., 2., 11. / 3., 6.],
    ];
}

/// Control points of a quadratic Bezier segment to monomial coefficients `c0..c2`
pub const QUADRATIC_BEZIER_TO_MONOMIAL: [[f64; 3]; 3] =
    [[1., 0., 0.], [-2., 2., 0.], [1., -2., 1.]];

/// Monomial coefficients `c0..c2` to control points of a quadratic Bezier segment
pub const QUADRATIC_BEZIER_FROM_MONOMIAL: [[f64; 3]; 3] =
    [[1., 0., 0.], [1., 0.5, 0.], [1., 1., 1.]];

/// Multiply a characteristic matrix by a column of vectors
pub(crate) fn transform_rows<T: FloatingPoint, D: DimName, const N: usize>(
    matrix: &[[f64; N]; N],
    rows: &[OVector<T, D>; N],
) -> [OVector<T, D>; N]
where
    DefaultAllocator: Allocator<D>,
{
    std::array::from_fn(|i| {
        matrix[i]
            .iter()
            .zip(rows.iter())
            .fold(OVector::zeros(), |acc, (m, row)| acc + row * constant::<T>(*m))
    })
}
