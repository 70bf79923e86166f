//! Block Device Tree Report
//!
//! Lists BlockDevices grouped by the node they are attached to:
//!
//! ```text
//! NAME       PATH      SIZE       CLAIMSTATE  STATUS  FSTYPE  MOUNTPOINT
//! node-a
//! ├─bd1      /dev/sdb  1.0 GiB    Unclaimed   Active
//! └─bd2      /dev/sdc  512.0 MiB  Claimed     Active  ext4    /mnt/data
//!
//! node-b
//! └─bd3      /dev/sdb  2.0 GiB    Unclaimed   Active
//! ```

use super::format::format_capacity;
use super::DisplayRow;
use crate::crd::BlockDevice;
use crate::domain::ports::BlockDeviceSourceRef;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

// =============================================================================
// Node Groups
// =============================================================================

/// Devices attached to one node, in the order the cluster returned them
#[derive(Debug, Clone)]
pub struct NodeGroup {
    pub node_name: String,
    pub block_devices: Vec<BlockDevice>,
}

impl NodeGroup {
    /// Header row, one row per device and a trailing separator
    pub fn rows(&self) -> Vec<DisplayRow> {
        let mut rows = Vec::with_capacity(self.block_devices.len() + 2);
        rows.push(DisplayRow::node_header(&self.node_name));

        let last = self.block_devices.len().saturating_sub(1);
        for (i, bd) in self.block_devices.iter().enumerate() {
            rows.push(DisplayRow::block_device(bd, i == last));
        }

        rows.push(DisplayRow::separator());
        rows
    }
}

/// Group devices by node name.
///
/// Groups come back sorted by node name so repeated runs print the same
/// layout; devices keep their relative input order within a group.
pub fn group_by_node(devices: Vec<BlockDevice>) -> Vec<NodeGroup> {
    let mut by_node: BTreeMap<String, Vec<BlockDevice>> = BTreeMap::new();
    for bd in devices {
        by_node.entry(bd.node_name().to_string()).or_default().push(bd);
    }

    by_node
        .into_iter()
        .map(|(node_name, block_devices)| NodeGroup {
            node_name,
            block_devices,
        })
        .collect()
}

// =============================================================================
// Structured Output
// =============================================================================

/// Serializable view of a node group for json/yaml output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroupView {
    pub node: String,
    pub block_devices: Vec<BlockDeviceView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDeviceView {
    pub name: String,
    pub path: String,
    pub capacity: String,
    pub capacity_bytes: u64,
    pub claim_state: String,
    pub state: String,
    pub fs_type: String,
    pub mount_point: String,
}

impl From<&BlockDevice> for BlockDeviceView {
    fn from(bd: &BlockDevice) -> Self {
        Self {
            name: bd.device_name().to_string(),
            path: bd.spec.path.clone(),
            capacity: format_capacity(bd.capacity_bytes()),
            capacity_bytes: bd.capacity_bytes(),
            claim_state: bd.claim_state().to_string(),
            state: bd.state().to_string(),
            fs_type: bd.spec.filesystem.fs_type.clone(),
            mount_point: bd.spec.filesystem.mount_point.clone(),
        }
    }
}

impl From<&NodeGroup> for NodeGroupView {
    fn from(group: &NodeGroup) -> Self {
        Self {
            node: group.node_name.clone(),
            block_devices: group.block_devices.iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Reporter
// =============================================================================

/// Builds the block device tree report from an injected source
pub struct BlockDeviceReporter {
    source: BlockDeviceSourceRef,
}

impl BlockDeviceReporter {
    pub fn new(source: BlockDeviceSourceRef) -> Self {
        Self { source }
    }

    /// Fetch the selected devices and group them by node.
    ///
    /// Fails with [`Error::Fetch`] if the source fails and with
    /// [`Error::NotFound`] if nothing matched.
    pub async fn node_groups(&self, names: &[String], namespace: &str) -> Result<Vec<NodeGroup>> {
        let devices = self
            .source
            .list_block_devices(names, namespace)
            .await
            .map_err(|e| Error::fetch(self.source.resolve_namespace(namespace), e))?;

        if devices.is_empty() {
            return Err(Error::NotFound {
                namespace: self.source.resolve_namespace(namespace),
            });
        }

        let groups = group_by_node(devices);
        debug!("Grouped blockdevices onto {} nodes", groups.len());
        Ok(groups)
    }

    /// Rows of the tree report: per node a header row, one row per device
    /// and an empty separator row
    pub async fn report(&self, names: &[String], namespace: &str) -> Result<Vec<DisplayRow>> {
        let groups = self.node_groups(names, namespace).await?;
        Ok(groups.iter().flat_map(NodeGroup::rows).collect())
    }
}
