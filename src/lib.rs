//! storagectl - OpenEBS storage inspector
//!
//! A small command-line client that reads OpenEBS custom resources from a
//! Kubernetes cluster and prints them as tree-shaped tables.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────┐   ┌──────────────────┐
//! │     CLI      │──▶│  BlockDeviceReporter │──▶│  Table Renderer  │
//! │    (clap)    │   │  group by node       │   │  (comfy-table)   │
//! └──────────────┘   └──────────┬───────────┘   └──────────────────┘
//!                               │ BlockDeviceSource (port)
//!                    ┌──────────┴───────────┐
//!                    │ KubeBlockDeviceClient │
//!                    │      (kube-rs)        │
//!                    └──────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cli`]: Argument parsing and command dispatch
//! - [`client`]: Kubernetes adapters
//! - [`crd`]: Custom Resource Definitions
//! - [`domain`]: Port traits
//! - [`report`]: Grouping, row building and rendering
//! - [`error`]: Error types and handling

pub mod cli;
pub mod client;
pub mod crd;
pub mod domain;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use cli::Args;

pub use client::KubeBlockDeviceClient;

pub use crd::{BlockDevice, BlockDeviceSpec, BlockDeviceStatus};

pub use domain::ports::{BlockDeviceSource, BlockDeviceSourceRef};

pub use error::{Error, Result};

pub use report::{
    BlockDeviceReporter, DisplayRow, NodeGroup, OutputFormat, BLOCK_DEVICE_TREE_COLUMNS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
