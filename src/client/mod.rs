//! Cluster Adapters
//!
//! Implementations of the domain ports backed by the Kubernetes API.

pub mod kubernetes;

pub use kubernetes::*;
