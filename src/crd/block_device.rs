//! BlockDevice CRD
//!
//! Read-only view of the OpenEBS node-disk-manager `BlockDevice` resource.
//! Only the fields the reports consume are modelled; everything else in the
//! upstream schema is ignored on deserialization.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// =============================================================================
// BlockDevice CRD
// =============================================================================

/// BlockDevice represents a physical or virtual storage device attached to a node.
#[derive(CustomResource, Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "openebs.io",
    version = "v1alpha1",
    kind = "BlockDevice",
    plural = "blockdevices",
    shortname = "bd",
    status = "BlockDeviceStatus",
    printcolumn = r#"{"name": "NodeName", "type": "string", "jsonPath": ".spec.nodeAttributes.nodeName"}"#,
    printcolumn = r#"{"name": "Size", "type": "string", "jsonPath": ".spec.capacity.storage"}"#,
    printcolumn = r#"{"name": "ClaimState", "type": "string", "jsonPath": ".status.claimState"}"#,
    printcolumn = r#"{"name": "Status", "type": "string", "jsonPath": ".status.state"}"#,
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct BlockDeviceSpec {
    /// Attributes of the node the device is attached to
    #[serde(default)]
    pub node_attributes: NodeAttributes,

    /// Device file path on the host (e.g., /dev/sdb)
    #[serde(default)]
    pub path: String,

    /// Device capacity
    #[serde(default)]
    pub capacity: DeviceCapacity,

    /// Filesystem found on the device, if any
    #[serde(default)]
    pub filesystem: FileSystemInfo,
}

// =============================================================================
// Sub-Types
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttributes {
    /// Name of the Kubernetes node
    #[serde(default)]
    pub node_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCapacity {
    /// Total capacity in bytes
    #[serde(default)]
    pub storage: u64,

    #[serde(default)]
    pub physical_sector_size: u32,

    #[serde(default)]
    pub logical_sector_size: u32,
}

/// Filesystem details; both fields are empty for unformatted, unmounted devices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemInfo {
    #[serde(default)]
    pub fs_type: String,

    #[serde(default)]
    pub mount_point: String,
}

// =============================================================================
// Status
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockDeviceStatus {
    /// Whether the device is reserved by a BlockDeviceClaim
    /// (node-disk-manager reports Unclaimed, Released or Claimed)
    #[serde(default)]
    pub claim_state: String,

    /// Availability as last observed by node-disk-manager
    /// (Active, Inactive or Unknown)
    #[serde(default)]
    pub state: String,
}

// =============================================================================
// Helper Methods
// =============================================================================

impl BlockDevice {
    /// Resource name, empty if unset
    pub fn device_name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Node the device is attached to
    pub fn node_name(&self) -> &str {
        &self.spec.node_attributes.node_name
    }

    pub fn capacity_bytes(&self) -> u64 {
        self.spec.capacity.storage
    }

    /// Claim state as reported, empty when the device has no status yet
    pub fn claim_state(&self) -> &str {
        self.status
            .as_ref()
            .map(|s| s.claim_state.as_str())
            .unwrap_or_default()
    }

    /// Device state as reported, empty when the device has no status yet
    pub fn state(&self) -> &str {
        self.status
            .as_ref()
            .map(|s| s.state.as_str())
            .unwrap_or_default()
    }
}
