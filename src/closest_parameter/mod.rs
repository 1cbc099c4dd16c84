pub mod point_projection_options;
pub mod polynomial_closest_parameter_newton;
pub mod polynomial_closest_parameter_problem;
pub use point_projection_options::*;
pub use polynomial_closest_parameter_newton::*;
pub use polynomial_closest_parameter_problem::*;
