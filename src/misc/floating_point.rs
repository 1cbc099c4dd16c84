use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

/// Converts an `f64` literal into the scalar type of a curve.
#[inline]
pub(crate) fn constant<T: FloatingPoint>(value: f64) -> T {
    nalgebra::convert(value)
}

/// Sign of a value as `1` or `-1`, where zero counts as positive.
#[inline]
pub(crate) fn sign_as_int<T: FloatingPoint>(value: T) -> i8 {
    if value >= T::zero() {
        1
    } else {
        -1
    }
}

#[inline]
pub(crate) fn is_nan<T: FloatingPoint>(value: T) -> bool {
    value.to_f64().is_some_and(f64::is_nan)
}
