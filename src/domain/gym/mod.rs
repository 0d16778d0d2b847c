//! Gym entity.

mod aggregate;

pub use aggregate::Gym;
