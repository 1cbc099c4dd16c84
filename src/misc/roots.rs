use nalgebra::ComplexField;

use super::{constant, FloatingPoint};

/// Real roots of a polynomial of degree three or less, kept in ascending order.
///
/// A cubic has at most three real roots, so the set lives entirely on the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roots<T: FloatingPoint> {
    values: [T; 3],
    len: usize,
}

impl<T: FloatingPoint> Default for Roots<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> Roots<T> {
    pub fn new() -> Self {
        Self {
            values: [T::zero(); 3],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }

    /// Inserts a root keeping ascending order. Values past the capacity are dropped.
    pub(crate) fn push(&mut self, value: T) {
        if self.len == self.values.len() {
            return;
        }
        let mut i = self.len;
        while i > 0 && self.values[i - 1] > value {
            self.values[i] = self.values[i - 1];
            i -= 1;
        }
        self.values[i] = value;
        self.len += 1;
    }
}

/// Solves `a + b t = 0`.
pub fn solve_linear<T: FloatingPoint>(a: T, b: T) -> Roots<T> {
    let mut roots = Roots::new();
    if b != T::zero() {
        roots.push(-a / b);
    }
    roots
}

/// Solves `a + b t + c t^2 = 0`.
pub fn solve_quadratic<T: FloatingPoint>(a: T, b: T, c: T) -> Roots<T> {
    if c == T::zero() {
        return solve_linear(a, b);
    }

    let two = constant::<T>(2.);
    let discriminant = b * b - constant::<T>(4.) * c * a;
    let mut roots = Roots::new();
    if discriminant < T::zero() {
        return roots;
    }
    if discriminant == T::zero() {
        roots.push(-b / (two * c));
        return roots;
    }

    // numerically stable form, avoids cancellation between -b and the root
    let sqrt = discriminant.sqrt();
    let q = if b < T::zero() {
        (-b + sqrt) / two
    } else {
        (-b - sqrt) / two
    };
    roots.push(q / c);
    roots.push(a / q);
    roots
}

/// Solves `a + b t + c t^2 + d t^3 = 0`.
pub fn solve_cubic<T: FloatingPoint>(a: T, b: T, c: T, d: T) -> Roots<T> {
    if d == T::zero() {
        return solve_quadratic(a, b, c);
    }

    // monic form t^3 + bb t^2 + cc t + dd, then depress with t = x - bb / 3
    let bb = c / d;
    let cc = b / d;
    let dd = a / d;

    let two = constant::<T>(2.);
    let three = constant::<T>(3.);
    let shift = bb / three;
    let p = cc - bb * bb / three;
    let q = two * bb * bb * bb / constant(27.) - bb * cc / three + dd;

    let half_q = q / two;
    let third_p = p / three;
    let discriminant = half_q * half_q + third_p * third_p * third_p;

    let mut roots = Roots::new();
    if discriminant > T::zero() {
        let sqrt = discriminant.sqrt();
        let x = (-half_q + sqrt).cbrt() + (-half_q - sqrt).cbrt();
        roots.push(x - shift);
    } else if discriminant == T::zero() {
        if p == T::zero() {
            roots.push(-shift);
        } else {
            roots.push(three * q / p - shift);
            roots.push(-three * q / (two * p) - shift);
        }
    } else {
        // three distinct real roots, p is negative here
        let r = two * (-third_p).sqrt();
        let arg = (three * q / (two * p) * (-three / p).sqrt()).clamp(-T::one(), T::one());
        let phi = ComplexField::acos(arg) / three;
        let step = T::two_pi() / three;
        for k in 0..3 {
            let x = r * (phi - step * constant(k as f64)).cos();
            roots.push(x - shift);
        }
    }
    roots
}
