//! Gymgate - Gym check-in domain kernel
//!
//! This crate implements the domain rules for geofenced gym check-ins:
//! self-validating value objects, geodesic distance eligibility, the
//! check-in validation window, and the user activation lifecycle.
//! Transport, persistence, and billing live behind ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
