#![allow(clippy::needless_range_loop)]

mod algebra;
mod bounding_box;
mod closest_parameter;
mod curve;
mod error;
mod misc;
mod polynomial;
mod spline;
use closest_parameter::*;

pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::bounding_box::*;
    pub use crate::closest_parameter::PointProjectionOptions;
    pub use crate::curve::*;
    pub use crate::error::GeometryError;
    pub use crate::misc::*;
    pub use crate::polynomial::*;
    pub use crate::spline::*;
}
