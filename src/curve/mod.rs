pub mod polynomial_curve;
pub use polynomial_curve::*;

#[cfg(test)]
mod tests;
