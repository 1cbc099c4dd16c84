use std::fmt::Display;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{ensure_index, GeometryError};
use crate::misc::{
    binomial, constant, is_nan, solve_cubic, solve_quadratic, FloatingPoint, Invertible, Roots,
};

/// A polynomial of degree three or less over a single scalar channel,
/// `f(t) = c0 + c1 t + c2 t^2 + c3 t^3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polynomial<T: FloatingPoint> {
    /// constant coefficient
    pub c0: T,
    /// linear coefficient
    pub c1: T,
    /// quadratic coefficient
    pub c2: T,
    /// cubic coefficient
    pub c3: T,
}

impl<T: FloatingPoint> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> Polynomial<T> {
    /// Create a cubic polynomial from its coefficients, lowest degree first.
    ///
    /// # Example
    /// ```
    /// use cubica::prelude::*;
    ///
    /// let p = Polynomial::new(1., 2., 0., 1.);
    /// assert_eq!(p.eval(0.), 1.);
    /// assert_eq!(p.eval(2.), 1. + 4. + 8.);
    /// assert_eq!(p.degree(), 3);
    /// ```
    pub fn new(c0: T, c1: T, c2: T, c3: T) -> Self {
        Self { c0, c1, c2, c3 }
    }

    pub fn constant(c0: T) -> Self {
        Self::new(c0, T::zero(), T::zero(), T::zero())
    }

    pub fn linear(c0: T, c1: T) -> Self {
        Self::new(c0, c1, T::zero(), T::zero())
    }

    pub fn quadratic(c0: T, c1: T, c2: T) -> Self {
        Self::new(c0, c1, c2, T::zero())
    }

    pub fn zero() -> Self {
        Self::constant(T::zero())
    }

    /// A polynomial with every coefficient set to NaN, used to mark an invalid result.
    /// NaN propagates through every operation instead of being treated as zero.
    pub fn nan() -> Self {
        let nan = constant::<T>(f64::NAN);
        Self::new(nan, nan, nan, nan)
    }

    /// Returns true if any coefficient is NaN
    pub fn is_nan(&self) -> bool {
        self.coefficients().iter().any(|c| is_nan(*c))
    }

    pub fn from_coefficients(coefficients: [T; 4]) -> Self {
        let [c0, c1, c2, c3] = coefficients;
        Self::new(c0, c1, c2, c3)
    }

    pub fn coefficients(&self) -> [T; 4] {
        [self.c0, self.c1, self.c2, self.c3]
    }

    /// Get the coefficient of the given degree
    /// # Failures
    /// - if the degree is greater than 3
    pub fn coefficient(&self, degree: usize) -> Result<T, GeometryError> {
        ensure_index(degree, 4)?;
        Ok(self.coefficients()[degree])
    }

    /// Set the coefficient of the given degree
    /// # Failures
    /// - if the degree is greater than 3
    pub fn set_coefficient(&mut self, degree: usize, value: T) -> Result<(), GeometryError> {
        ensure_index(degree, 4)?;
        match degree {
            0 => self.c0 = value,
            1 => self.c1 = value,
            2 => self.c2 = value,
            _ => self.c3 = value,
        }
        Ok(())
    }

    /// The index of the highest nonzero coefficient.
    pub fn degree(&self) -> usize {
        if self.c3 != T::zero() {
            3
        } else if self.c2 != T::zero() {
            2
        } else if self.c1 != T::zero() {
            1
        } else {
            0
        }
    }

    /// Evaluate the polynomial at `t`
    pub fn eval(&self, t: T) -> T {
        self.c0 + t * (self.c1 + t * (self.c2 + t * self.c3))
    }

    /// Evaluate the `n`-th derivative at `t`
    pub fn eval_nth(&self, t: T, n: usize) -> T {
        self.differentiate(n).eval(t)
    }

    pub fn eval_derivative(&self, t: T) -> T {
        self.c1 + t * (constant::<T>(2.) * self.c2 + t * constant::<T>(3.) * self.c3)
    }

    /// Returns the `n`-th derivative.
    /// Differentiating past the degree results in the zero polynomial.
    pub fn differentiate(&self, n: usize) -> Self {
        let two = constant::<T>(2.);
        let three = constant::<T>(3.);
        match n {
            0 => *self,
            1 => Self::quadratic(self.c1, two * self.c2, three * self.c3),
            2 => Self::linear(two * self.c2, constant::<T>(6.) * self.c3),
            3 => Self::constant(constant::<T>(6.) * self.c3),
            _ => Self::zero(),
        }
    }

    /// Rescale the parameter space so that `g(t) = f(t / factor)`
    pub fn scale_parameter_space(&self, factor: T) -> Self {
        if factor == T::one() {
            return *self;
        }
        let factor2 = factor * factor;
        let factor3 = factor2 * factor;
        Self::new(self.c0, self.c1 / factor, self.c2 / factor2, self.c3 / factor3)
    }

    /// Substitute the affine parameter `u = g0 + g1 t`, returning `g(t) = f(g0 + g1 t)`
    pub fn compose(&self, g0: T, g1: T) -> Self {
        let g0_pow = [T::one(), g0, g0 * g0, g0 * g0 * g0];
        let g1_pow = [T::one(), g1, g1 * g1, g1 * g1 * g1];
        let c = self.coefficients();
        let mut composed = [T::zero(); 4];
        for k in 0..4 {
            for j in 0..=k {
                composed[j] += c[k] * constant::<T>(binomial(k, j)) * g0_pow[k - j] * g1_pow[j];
            }
        }
        Self::from_coefficients(composed)
    }

    /// Split the unit interval at `u` into two polynomials,
    /// each mapping its own `[0, 1]` range to `[0, u]` and `[u, 1]` of this one.
    ///
    /// # Example
    /// ```
    /// use cubica::prelude::*;
    /// use approx::assert_relative_eq;
    ///
    /// let p = Polynomial::new(1., -2., 3., 0.5);
    /// let (pre, post) = p.split01(0.25);
    /// assert_relative_eq!(pre.eval(1.), p.eval(0.25));
    /// assert_relative_eq!(post.eval(0.5), p.eval(0.625));
    /// ```
    pub fn split01(&self, u: T) -> (Self, Self) {
        let pre = self.compose(T::zero(), u);
        let post = self.compose(u, T::one() - u);
        (pre, post)
    }

    /// Fit a cubic through four samples at `0, x1, x2, x3` with values `y0..y3`.
    /// Coincident sample parameters produce the NaN polynomial.
    pub fn fit_cubic_from0(x1: T, x2: T, x3: T, y0: T, y1: T, y2: T, y3: T) -> Self {
        fit_cubic_from0_with(x1, x2, x3, [y0, y1, y2, y3])
            .map(Self::from_coefficients)
            .unwrap_or_else(Self::nan)
    }

    /// Fit a cubic through four samples at arbitrary parameters `x0..x3`.
    /// Coincident sample parameters produce the NaN polynomial.
    #[allow(clippy::too_many_arguments)]
    pub fn fit_cubic(x0: T, x1: T, x2: T, x3: T, y0: T, y1: T, y2: T, y3: T) -> Self {
        Self::fit_cubic_from0(x1 - x0, x2 - x0, x3 - x0, y0, y1, y2, y3).compose(-x0, T::one())
    }

    /// Real roots in ascending order
    pub fn roots(&self) -> Roots<T> {
        solve_cubic(self.c0, self.c1, self.c2, self.c3)
    }

    /// Parameters of the local extrema strictly inside `(0, 1)`
    pub fn local_extrema01(&self) -> Roots<T> {
        let mut inside = Roots::new();
        solve_quadratic(
            self.c1,
            constant::<T>(2.) * self.c2,
            constant::<T>(3.) * self.c3,
        )
        .iter()
        .filter(|t| **t > T::zero() && **t < T::one())
        .for_each(|t| inside.push(*t));
        inside
    }

    /// The `(min, max)` values attained over the unit interval
    pub fn output_range01(&self) -> (T, T) {
        if self.is_nan() {
            let nan = constant::<T>(f64::NAN);
            return (nan, nan);
        }
        let start = self.eval(T::zero());
        let end = self.eval(T::one());
        self.local_extrema01().iter().fold(
            (start.min(end), start.max(end)),
            |(min, max), t| {
                let v = self.eval(*t);
                (min.min(v), max.max(v))
            },
        )
    }
}

/// Lagrange basis for the sample parameters `0, x1, x2, x3`, expanded into monomial form.
struct LagrangeFrom0<T> {
    /// `1 / prod(x_i - x_j)` per sample
    scale: [T; 4],
    x1: T,
    x2: T,
    x3: T,
}

fn lagrange_from0<T: FloatingPoint>(x1: T, x2: T, x3: T) -> Option<LagrangeFrom0<T>> {
    let i12 = x2 - x1;
    let i13 = x3 - x1;
    let i23 = x3 - x2;
    let zero = T::zero();
    if x1 == zero || x2 == zero || x3 == zero || i12 == zero || i13 == zero || i23 == zero {
        return None;
    }
    Some(LagrangeFrom0 {
        scale: [
            T::one() / -(x1 * x2 * x3),
            T::one() / (x1 * i12 * i13),
            T::one() / -(x2 * i12 * i23),
            T::one() / (x3 * i13 * i23),
        ],
        x1,
        x2,
        x3,
    })
}

impl<T: FloatingPoint> LagrangeFrom0<T> {
    /// Sum the scaled basis polynomials into monomial coefficients.
    /// Generic over the sample value so that it is shared by scalar and vector fits.
    fn combine<V>(&self, scaled: [V; 4]) -> [V; 4]
    where
        V: Clone + Add<Output = V> + Mul<T, Output = V> + Neg<Output = V>,
    {
        let (x1, x2, x3) = (self.x1, self.x2, self.x3);
        let [s0, s1, s2, s3] = scaled;
        let c0 = -(s0.clone() * (x1 * x2 * x3));
        let c1 = s0.clone() * (x1 * x2 + x1 * x3 + x2 * x3)
            + s1.clone() * (x2 * x3)
            + s2.clone() * (x1 * x3)
            + s3.clone() * (x1 * x2);
        let c2 = -(s0.clone() * (x1 + x2 + x3)
            + s1.clone() * (x2 + x3)
            + s2.clone() * (x1 + x3)
            + s3.clone() * (x1 + x2));
        let c3 = s0 + s1 + s2 + s3;
        [c0, c1, c2, c3]
    }
}

pub(crate) fn fit_cubic_from0_with<T, V>(x1: T, x2: T, x3: T, y: [V; 4]) -> Option<[V; 4]>
where
    T: FloatingPoint,
    V: Clone + Add<Output = V> + Mul<T, Output = V> + Neg<Output = V>,
{
    let basis = lagrange_from0(x1, x2, x3)?;
    let [y0, y1, y2, y3] = y;
    let scaled = [
        y0 * basis.scale[0],
        y1 * basis.scale[1],
        y2 * basis.scale[2],
        y3 * basis.scale[3],
    ];
    Some(basis.combine(scaled))
}

impl<T: FloatingPoint> Invertible for Polynomial<T> {
    /// Reverse the parameter direction, `g(t) = f(1 - t)`
    fn invert(&mut self) {
        *self = self.compose(T::one(), -T::one());
    }
}

impl<T: FloatingPoint> Add for Polynomial<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2, self.c3 + rhs.c3)
    }
}

impl<T: FloatingPoint> Sub for Polynomial<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2, self.c3 - rhs.c3)
    }
}

impl<T: FloatingPoint> Neg for Polynomial<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<T: FloatingPoint> Mul<T> for Polynomial<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs, self.c3 * rhs)
    }
}

impl<T: FloatingPoint> Div<T> for Polynomial<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.c0 / rhs, self.c1 / rhs, self.c2 / rhs, self.c3 / rhs)
    }
}

impl<T: FloatingPoint> Display for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} + {}t + {}t^2 + {}t^3",
            self.c0, self.c1, self.c2, self.c3
        )
    }
}
