//! Domain Ports - trait boundaries between the reports and the cluster
//!
//! Reports depend only on these traits; the kube adapter in
//! [`crate::client`] implements them for a live cluster and tests supply
//! in-memory fakes.

use crate::crd::BlockDevice;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

// =============================================================================
// Block Device Source Port
// =============================================================================

/// Port for reading BlockDevice resources
#[async_trait]
pub trait BlockDeviceSource: Send + Sync {
    /// List BlockDevices in `namespace`.
    ///
    /// An empty `names` slice selects every device; otherwise only devices
    /// whose name is in `names` are returned. Order is the order the cluster
    /// returned them in.
    async fn list_block_devices(&self, names: &[String], namespace: &str)
        -> Result<Vec<BlockDevice>>;

    /// Namespace a request for `namespace` actually targets.
    ///
    /// Sources that give the empty namespace a meaning (such as the current
    /// kubeconfig context) override this so messages name the real namespace.
    fn resolve_namespace(&self, namespace: &str) -> String {
        namespace.to_string()
    }
}

// =============================================================================
// Type Aliases for Arc'd Traits
// =============================================================================

pub type BlockDeviceSourceRef = Arc<dyn BlockDeviceSource>;
