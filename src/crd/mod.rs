//! Custom Resource Definitions consumed by storagectl
//!
//! - BlockDevice: a storage device attached to a cluster node, discovered by
//!   OpenEBS node-disk-manager

pub mod block_device;

pub use block_device::*;
