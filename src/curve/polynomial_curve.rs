use std::ops::{Add, Div, Mul, Neg, Sub};

use argmin::core::{ArgminFloat, Executor, State};
use itertools::Itertools;
use nalgebra::{
    allocator::Allocator, Const, DefaultAllocator, DimName, Matrix3, Matrix4, OPoint, OVector,
    Point2, Point3, UnitVector3, Vector3,
};

use crate::algebra::Rotor3;
use crate::bounding_box::BoundingBox;
use crate::error::{ensure_index, GeometryError};
use crate::misc::{
    constant, is_nan, sign_as_int, Curvature, FloatingPoint, FrenetFrame, Invertible,
    Transformable,
};
use crate::polynomial::{cubic_polynomial::fit_cubic_from0_with, Polynomial};
use crate::{
    PointProjectionOptions, PolynomialClosestParameterNewton, PolynomialClosestParameterProblem,
};

/// Upper bound of interior stationary points of the squared distance that are refined.
/// `f·f'` of a cubic curve has degree five, and at most three of its sign changes
/// are separated local minima or maxima worth refining.
const MAX_PROJECTION_CANDIDATES: usize = 3;

/// A parametric curve of degree three or less in D space,
/// one cubic polynomial per axis sharing the parameter `t`.
///
/// The coefficients are stored as vectors, `f(t) = c0 + c1 t + c2 t^2 + c3 t^3`.
///
/// # Example
/// ```
/// use cubica::prelude::*;
/// use nalgebra::{Point2, Vector2};
/// use approx::assert_relative_eq;
///
/// let curve = PolynomialCurve2D::new(
///     Vector2::new(0., 0.),
///     Vector2::new(3., 6.),
///     Vector2::new(0., -6.),
///     Vector2::new(0., 0.),
/// );
/// assert_relative_eq!(curve.eval(0.5), Point2::new(1.5, 1.5));
/// assert_eq!(curve.degree(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialCurve<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    coefficients: [OVector<T, D>; 4],
}

/// 2D polynomial curve alias
pub type PolynomialCurve2D<T> = PolynomialCurve<T, Const<2>>;
/// 3D polynomial curve alias
pub type PolynomialCurve3D<T> = PolynomialCurve<T, Const<3>>;
/// 4D polynomial curve alias
pub type PolynomialCurve4D<T> = PolynomialCurve<T, Const<4>>;

impl<T: FloatingPoint, D: DimName> PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    pub fn new(c0: OVector<T, D>, c1: OVector<T, D>, c2: OVector<T, D>, c3: OVector<T, D>) -> Self {
        Self {
            coefficients: [c0, c1, c2, c3],
        }
    }

    pub fn from_coefficients(coefficients: [OVector<T, D>; 4]) -> Self {
        Self { coefficients }
    }

    pub fn quadratic(c0: OVector<T, D>, c1: OVector<T, D>, c2: OVector<T, D>) -> Self {
        Self::new(c0, c1, c2, OVector::zeros())
    }

    pub fn linear(c0: OVector<T, D>, c1: OVector<T, D>) -> Self {
        Self::new(c0, c1, OVector::zeros(), OVector::zeros())
    }

    /// A degenerate curve sitting at a single point
    pub fn constant(point: &OPoint<T, D>) -> Self {
        Self::linear(point.coords.clone(), OVector::zeros())
    }

    /// Build the curve from one polynomial per axis
    pub fn from_axis_fn<F: FnMut(usize) -> Polynomial<T>>(mut axis: F) -> Self {
        let mut coefficients: [OVector<T, D>; 4] = std::array::from_fn(|_| OVector::zeros());
        for i in 0..D::dim() {
            for (k, c) in axis(i).coefficients().into_iter().enumerate() {
                coefficients[k][i] = c;
            }
        }
        Self { coefficients }
    }

    /// Build the curve from a slice holding exactly one polynomial per axis
    /// # Failures
    /// - if the number of polynomials differs from the dimension
    pub fn from_axes(axes: &[Polynomial<T>]) -> Result<Self, GeometryError> {
        if axes.len() != D::dim() {
            return Err(GeometryError::DimensionMismatch {
                expected: D::dim(),
                actual: axes.len(),
            });
        }
        Ok(Self::from_axis_fn(|i| axes[i]))
    }

    /// A curve with every coefficient set to NaN, marking an invalid result
    pub fn nan() -> Self {
        let nan = OVector::from_element(constant::<T>(f64::NAN));
        Self::new(nan.clone(), nan.clone(), nan.clone(), nan)
    }

    /// Returns true if any coefficient is NaN
    pub fn is_nan(&self) -> bool {
        self.coefficients
            .iter()
            .any(|c| c.iter().any(|v| is_nan(*v)))
    }

    pub fn coefficients(&self) -> &[OVector<T, D>; 4] {
        &self.coefficients
    }

    /// Get the coefficient vector of the given degree
    /// # Failures
    /// - if the degree is greater than 3
    pub fn coefficient(&self, degree: usize) -> Result<&OVector<T, D>, GeometryError> {
        ensure_index(degree, 4)?;
        Ok(&self.coefficients[degree])
    }

    pub fn set_coefficient(&mut self, degree: usize, value: OVector<T, D>) -> Result<(), GeometryError> {
        ensure_index(degree, 4)?;
        self.coefficients[degree] = value;
        Ok(())
    }

    /// Get the polynomial driving one axis
    /// # Failures
    /// - if the axis is not below the dimension
    pub fn axis(&self, axis: usize) -> Result<Polynomial<T>, GeometryError> {
        ensure_index(axis, D::dim())?;
        Ok(self.axis_polynomial(axis))
    }

    pub fn set_axis(&mut self, axis: usize, polynomial: Polynomial<T>) -> Result<(), GeometryError> {
        ensure_index(axis, D::dim())?;
        for (k, c) in polynomial.coefficients().into_iter().enumerate() {
            self.coefficients[k][axis] = c;
        }
        Ok(())
    }

    fn axis_polynomial(&self, axis: usize) -> Polynomial<T> {
        let [c0, c1, c2, c3] = &self.coefficients;
        Polynomial::new(c0[axis], c1[axis], c2[axis], c3[axis])
    }

    /// Apply the same polynomial operation to every axis
    fn map_axes<F: FnMut(Polynomial<T>) -> Polynomial<T>>(&self, mut f: F) -> Self {
        Self::from_axis_fn(|i| f(self.axis_polynomial(i)))
    }

    /// The highest degree among the axes
    pub fn degree(&self) -> usize {
        (0..D::dim())
            .map(|i| self.axis_polynomial(i).degree())
            .max()
            .unwrap_or(0)
    }

    /// Evaluate the curve at `t`
    pub fn eval(&self, t: T) -> OPoint<T, D> {
        OPoint::from(self.eval_vector(t))
    }

    /// Evaluate the curve at `t` as a position vector
    pub fn eval_vector(&self, t: T) -> OVector<T, D> {
        let [c0, c1, c2, c3] = &self.coefficients;
        c0 + (c1 + (c2 + c3 * t) * t) * t
    }

    /// Evaluate the `n`-th derivative at `t`
    pub fn eval_nth(&self, t: T, n: usize) -> OVector<T, D> {
        match n {
            0 => self.eval_vector(t),
            1 => self.eval_derivative(t),
            2 => self.eval_second_derivative(t),
            3 => self.eval_third_derivative(),
            _ => OVector::zeros(),
        }
    }

    pub fn eval_derivative(&self, t: T) -> OVector<T, D> {
        let [_, c1, c2, c3] = &self.coefficients;
        c1 + (c2 * constant::<T>(2.) + c3 * (constant::<T>(3.) * t)) * t
    }

    pub fn eval_second_derivative(&self, t: T) -> OVector<T, D> {
        let [_, _, c2, c3] = &self.coefficients;
        c2 * constant::<T>(2.) + c3 * (constant::<T>(6.) * t)
    }

    /// The third derivative of a cubic does not depend on the parameter
    pub fn eval_third_derivative(&self) -> OVector<T, D> {
        &self.coefficients[3] * constant::<T>(6.)
    }

    /// Returns the `n`-th derivative curve
    pub fn differentiate(&self, n: usize) -> Self {
        self.map_axes(|p| p.differentiate(n))
    }

    /// Rescale the parameter space so that `g(t) = f(t / factor)`
    pub fn scale_parameter_space(&self, factor: T) -> Self {
        self.map_axes(|p| p.scale_parameter_space(factor))
    }

    /// Substitute the affine parameter `u = g0 + g1 t`
    pub fn compose(&self, g0: T, g1: T) -> Self {
        self.map_axes(|p| p.compose(g0, g1))
    }

    /// Split the unit interval at `u`, each half reparameterized over its own `[0, 1]`
    pub fn split01(&self, u: T) -> (Self, Self) {
        (
            self.compose(T::zero(), u),
            self.compose(u, T::one() - u),
        )
    }

    /// Returns the curve moved by `offset`
    pub fn translated(&self, offset: &OVector<T, D>) -> Self {
        let mut moved = self.clone();
        moved.coefficients[0] += offset;
        moved
    }

    /// Fit a cubic curve through four samples at `0, x1, x2, x3`.
    /// Coincident sample parameters produce the NaN curve.
    pub fn fit_cubic_from0(x1: T, x2: T, x3: T, samples: [OVector<T, D>; 4]) -> Self {
        fit_cubic_from0_with(x1, x2, x3, samples)
            .map(Self::from_coefficients)
            .unwrap_or_else(Self::nan)
    }

    /// Axis aligned bounds of the curve over `[0, 1]`
    pub fn bounds01(&self) -> BoundingBox<T, D> {
        BoundingBox::from_axis_ranges(|i| self.axis_polynomial(i).output_range01())
    }

    /// Unit tangent and curvature vector at `t`.
    /// Returns `Err` holding a degenerate curvature where the curve is stationary.
    pub fn curvature_at(&self, t: T) -> Result<Curvature<T, D>, Curvature<T, D>> {
        Curvature::derivatives(self.eval_derivative(t), self.eval_second_derivative(t))
    }

    /// `f(t)·f'(t)`, half the derivative of the squared distance to the origin
    fn distance_gradient(&self, t: T) -> T {
        self.eval_vector(t).dot(&self.eval_derivative(t))
    }

    /// Sample `f·f'` evenly over `[0, 1]` and return the midpoints of the
    /// first brackets where it changes sign, in ascending order.
    fn bracket_stationary_points(&self, subdivisions: usize) -> [Option<T>; MAX_PROJECTION_CANDIDATES] {
        let mut candidates = [None; MAX_PROJECTION_CANDIDATES];
        if subdivisions < 2 {
            return candidates;
        }

        let last = constant::<T>((subdivisions - 1) as f64);
        let half = constant::<T>(0.5);
        let brackets = (0..subdivisions)
            .map(|i| {
                let t = constant::<T>(i as f64) / last;
                (t, sign_as_int(self.distance_gradient(t)))
            })
            .tuple_windows()
            .filter(|((_, s0), (_, s1))| s0 != s1)
            .map(|((t0, _), (t1, _))| (t0 + t1) * half);

        // scanning stops as soon as every slot is filled
        candidates
            .iter_mut()
            .zip(brackets)
            .for_each(|(slot, t)| {
                log::trace!("stationary point bracketed around {t}");
                *slot = Some(t);
            });
        candidates
    }

    /// Find the closest point on the curve over `[0, 1]` to a given point
    /// with the default [`PointProjectionOptions`].
    ///
    /// Returns the closest point and its parameter.
    pub fn project_point(&self, point: &OPoint<T, D>) -> (OPoint<T, D>, T)
    where
        T: ArgminFloat,
    {
        self.project_point_with(point, &PointProjectionOptions::default())
    }

    /// Find the closest point on the curve over `[0, 1]` to a given point.
    ///
    /// Stationary points of the squared distance are bracketed by sampling,
    /// refined with Newton's method, and compared against both end points.
    /// On equal distances the start point wins, then the end point,
    /// then the candidates in ascending parameter order.
    pub fn project_point_with(
        &self,
        point: &OPoint<T, D>,
        options: &PointProjectionOptions,
    ) -> (OPoint<T, D>, T)
    where
        T: ArgminFloat,
    {
        let local = self.translated(&-&point.coords);
        let brackets = local.bracket_stationary_points(options.initial_subdivisions);

        let start = (T::zero(), local.eval_vector(T::zero()).norm_squared());
        let (t, _) = std::iter::once(T::one())
            .chain(
                brackets
                    .into_iter()
                    .flatten()
                    .map(|guess| local.refine_stationary_point(guess, options.refinement_iterations)),
            )
            .fold(start, |best, t| {
                let distance = local.eval_vector(t).norm_squared();
                if distance < best.1 {
                    (t, distance)
                } else {
                    best
                }
            });

        (local.eval(t) + &point.coords, t)
    }

    /// Newton refinement of a stationary point, falling back to the guess on failure
    fn refine_stationary_point(&self, guess: T, iterations: u64) -> T
    where
        T: ArgminFloat,
    {
        let solver = PolynomialClosestParameterNewton::new((T::zero(), T::one()));
        let res = Executor::new(PolynomialClosestParameterProblem::new(self), solver)
            .configure(|state| state.param(guess).max_iters(iterations))
            .run();
        match res {
            Ok(res) => res.state().get_param().copied().unwrap_or(guess),
            Err(err) => {
                log::warn!("closest parameter refinement failed, keeping {guess}: {err}");
                guess
            }
        }
    }
}

impl<T: FloatingPoint> PolynomialCurve3D<T> {
    /// Frenet frame at `t`, with the binormal taken from the plane of the first two derivatives.
    /// Returns `None` where the curve is stationary or locally straight.
    pub fn frenet_frame_at(&self, t: T) -> Option<FrenetFrame<T>> {
        FrenetFrame::from_derivatives(
            self.eval(t),
            &self.eval_derivative(t),
            &self.eval_second_derivative(t),
        )
    }

    /// Compute rotation minimizing frames at the given parameters.
    /// Each frame is carried to the next one by the rotor between consecutive tangents,
    /// so straight parts of the curve keep a stable normal.
    pub fn compute_frenet_frames(&self, parameters: &[T]) -> Vec<FrenetFrame<T>> {
        let mut tangent = UnitVector3::new_unchecked(Vector3::x());
        let tangents = parameters
            .iter()
            .map(|t| {
                let d1 = self.eval_derivative(*t);
                let d = UnitVector3::try_new(d1, T::zero())
                    .or_else(|| UnitVector3::try_new(self.eval_second_derivative(*t), T::zero()));
                if let Some(d) = d {
                    tangent = d;
                }
                tangent
            })
            .collect_vec();

        let Some(first) = tangents.first() else {
            return vec![];
        };

        let a = first.abs();
        let axis = if a.x <= a.y && a.x <= a.z {
            Vector3::x()
        } else if a.y <= a.z {
            Vector3::y()
        } else {
            Vector3::z()
        };
        let v = first.cross(&axis).normalize();
        let normal = first.cross(&v).normalize();
        let binormal = first.cross(&normal);

        let mut frames = Vec::with_capacity(parameters.len());
        frames.push(FrenetFrame::new(
            self.eval(parameters[0]),
            first.into_inner(),
            normal,
            binormal,
        ));
        for (t, tangent) in parameters.iter().zip(tangents.iter()).skip(1) {
            if let Some(prev) = frames.last() {
                let frame = prev.transport(self.eval(*t), tangent);
                frames.push(frame);
            }
        }
        frames
    }
}

impl<T: FloatingPoint, D: DimName> Invertible for PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Reverse the direction of the curve, `g(t) = f(1 - t)`
    /// # Example
    /// ```
    /// use cubica::prelude::*;
    /// use nalgebra::Vector2;
    /// use approx::assert_relative_eq;
    ///
    /// let curve = PolynomialCurve2D::quadratic(
    ///     Vector2::new(0., 0.),
    ///     Vector2::new(2., 0.),
    ///     Vector2::new(0., 1.),
    /// );
    /// let inverted = curve.inverse();
    /// assert_relative_eq!(inverted.eval(0.), curve.eval(1.));
    /// assert_relative_eq!(inverted.eval(0.25), curve.eval(0.75));
    /// ```
    fn invert(&mut self) {
        *self = self.compose(T::one(), -T::one());
    }
}

/// Affine transform of a 2D curve by a homogeneous 3x3 matrix
impl<'a, T: FloatingPoint> Transformable<&'a Matrix3<T>> for PolynomialCurve2D<T> {
    fn transform(&mut self, transform: &'a Matrix3<T>) {
        let [c0, rest @ ..] = &mut self.coefficients;
        *c0 = transform.transform_point(&Point2::from(*c0)).coords;
        rest.iter_mut()
            .for_each(|c| *c = transform.transform_vector(c));
    }
}

/// Affine transform of a 3D curve by a homogeneous 4x4 matrix
impl<'a, T: FloatingPoint> Transformable<&'a Matrix4<T>> for PolynomialCurve3D<T> {
    fn transform(&mut self, transform: &'a Matrix4<T>) {
        let [c0, rest @ ..] = &mut self.coefficients;
        *c0 = transform.transform_point(&Point3::from(*c0)).coords;
        rest.iter_mut()
            .for_each(|c| *c = transform.transform_vector(c));
    }
}

/// Rotate a 3D curve around the origin
impl<'a, T: FloatingPoint> Transformable<&'a Rotor3<T>> for PolynomialCurve3D<T> {
    fn transform(&mut self, rotor: &'a Rotor3<T>) {
        self.coefficients
            .iter_mut()
            .for_each(|c| *c = rotor.rotate(c));
    }
}

impl<T: FloatingPoint, D: DimName> Mul<T> for PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self {
            coefficients: self.coefficients.map(|c| c * rhs),
        }
    }
}

impl<T: FloatingPoint, D: DimName> Div<T> for PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self {
            coefficients: self.coefficients.map(|c| c / rhs),
        }
    }
}

impl<T: FloatingPoint, D: DimName> Add for PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3] = self.coefficients;
        let [b0, b1, b2, b3] = rhs.coefficients;
        Self::new(a0 + b0, a1 + b1, a2 + b2, a3 + b3)
    }
}

impl<T: FloatingPoint, D: DimName> Sub for PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl<T: FloatingPoint, D: DimName> Neg for PolynomialCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            coefficients: self.coefficients.map(|c| -c),
        }
    }
}
