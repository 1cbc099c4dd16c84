pub mod cubic_polynomial;
pub use cubic_polynomial::*;

#[cfg(test)]
mod tests;
