//! A minimal 3D geometric algebra: bivectors, rotors, trivectors and
//! the full multivector they close under.
pub mod bivector;
pub mod geometric_product;
pub mod multivector;
pub mod rotor;
pub mod trivector;

pub use bivector::*;
pub use geometric_product::*;
pub use multivector::*;
pub use rotor::*;
pub use trivector::*;
