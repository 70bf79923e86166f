//! Kubernetes BlockDevice Adapter
//!
//! Lists OpenEBS BlockDevice resources through the Kubernetes API.

use crate::crd::BlockDevice;
use crate::domain::ports::BlockDeviceSource;
use crate::error::Result;
use async_trait::async_trait;
use kube::api::ListParams;
use kube::{Api, Client};
use std::collections::HashSet;
use tracing::debug;

// =============================================================================
// Kubernetes Adapter
// =============================================================================

/// Adapter reading BlockDevices from a live cluster
#[derive(Clone)]
pub struct KubeBlockDeviceClient {
    client: Client,
}

impl KubeBlockDeviceClient {
    /// Wrap an existing Kubernetes client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the local kubeconfig or in-cluster environment
    pub async fn try_default() -> Result<Self> {
        let client = Client::try_default().await?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl BlockDeviceSource for KubeBlockDeviceClient {
    async fn list_block_devices(
        &self,
        names: &[String],
        namespace: &str,
    ) -> Result<Vec<BlockDevice>> {
        let namespace = self.resolve_namespace(namespace);
        let api: Api<BlockDevice> = Api::namespaced(self.client.clone(), &namespace);

        debug!("Listing blockdevices in namespace {}", namespace);
        let list = api.list(&ListParams::default()).await?;
        debug!("Cluster returned {} blockdevices", list.items.len());

        Ok(filter_by_name(list.items, names))
    }

    fn resolve_namespace(&self, namespace: &str) -> String {
        if namespace.is_empty() {
            self.client.default_namespace().to_string()
        } else {
            namespace.to_string()
        }
    }
}

/// Keep only devices named in `names`; an empty selection keeps everything.
/// Requested names with no matching device are skipped.
fn filter_by_name(devices: Vec<BlockDevice>, names: &[String]) -> Vec<BlockDevice> {
    if names.is_empty() {
        return devices;
    }

    let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
    devices
        .into_iter()
        .filter(|bd| wanted.contains(bd.device_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::BlockDeviceSpec;

    fn devices(names: &[&str]) -> Vec<BlockDevice> {
        names
            .iter()
            .map(|name| BlockDevice::new(name, BlockDeviceSpec::default()))
            .collect()
    }

    fn names_of(devices: &[BlockDevice]) -> Vec<&str> {
        devices.iter().map(|bd| bd.device_name()).collect()
    }

    #[test]
    fn test_empty_selection_keeps_all() {
        let kept = filter_by_name(devices(&["bd-1", "bd-2", "bd-3"]), &[]);
        assert_eq!(names_of(&kept), vec!["bd-1", "bd-2", "bd-3"]);
    }

    #[test]
    fn test_selection_preserves_cluster_order() {
        let names = vec!["bd-3".to_string(), "bd-1".to_string()];
        let kept = filter_by_name(devices(&["bd-1", "bd-2", "bd-3"]), &names);
        assert_eq!(names_of(&kept), vec!["bd-1", "bd-3"]);
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        let names = vec!["bd-9".to_string()];
        let kept = filter_by_name(devices(&["bd-1", "bd-2"]), &names);
        assert!(kept.is_empty());
    }
}
