//! Domain layer - port definitions
//!
//! This module defines the traits (ports) that cluster adapters implement,
//! following hexagonal architecture principles.

pub mod ports;

pub use ports::*;
