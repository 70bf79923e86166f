//! Command-line interface
//!
//! Argument definitions and command dispatch. The binary only parses
//! [`Args`], sets up logging and calls [`Args::run`].

use crate::client::KubeBlockDeviceClient;
use crate::error::Result;
use crate::report::{
    render_table, write_node_groups, BlockDeviceReporter, OutputFormat,
    BLOCK_DEVICE_TREE_COLUMNS,
};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

// =============================================================================
// CLI Arguments
// =============================================================================

/// storagectl - inspect OpenEBS storage resources in a Kubernetes cluster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display one or many resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}

#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// List block devices grouped by the node they are attached to
    #[command(name = "blockdevice", visible_aliases = ["bd", "blockdevices"])]
    BlockDevice(GetBlockDeviceArgs),
}

#[derive(clap::Args, Debug)]
pub struct GetBlockDeviceArgs {
    /// Names of the block devices to show; all devices when omitted
    pub names: Vec<String>,

    /// Namespace of the block devices; the kubeconfig default when empty
    #[arg(short, long, env = "OPENEBS_NAMESPACE", default_value = "")]
    pub namespace: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

// =============================================================================
// Dispatch
// =============================================================================

impl Args {
    /// Run the selected command, printing results to stdout
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Get { resource } => match resource {
                GetResource::BlockDevice(args) => {
                    let client = KubeBlockDeviceClient::try_default().await?;
                    let reporter = BlockDeviceReporter::new(Arc::new(client));
                    let stdout = std::io::stdout();
                    let mut out = stdout.lock();
                    args.execute(&reporter, &mut out).await?;
                    out.flush()?;
                    Ok(())
                }
            },
        }
    }
}

impl GetBlockDeviceArgs {
    /// Produce the block device report with `reporter` and write it to `out`
    pub async fn execute<W: Write>(&self, reporter: &BlockDeviceReporter, out: &mut W) -> Result<()> {
        info!(
            "Listing blockdevices (namespace: {:?}, names: {:?}, output: {})",
            self.namespace, self.names, self.output
        );

        if self.output.is_table() {
            let rows = reporter.report(&self.names, &self.namespace).await?;
            debug!("Rendering {} rows", rows.len());
            render_table(out, &BLOCK_DEVICE_TREE_COLUMNS, &rows)
        } else {
            let groups = reporter.node_groups(&self.names, &self.namespace).await?;
            write_node_groups(out, &groups, self.output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{BlockDevice, BlockDeviceSpec, NodeAttributes};
    use crate::domain::ports::BlockDeviceSource;
    use crate::error::Error;
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    struct StaticSource(Vec<BlockDevice>);

    #[async_trait]
    impl BlockDeviceSource for StaticSource {
        async fn list_block_devices(
            &self,
            _names: &[String],
            _namespace: &str,
        ) -> Result<Vec<BlockDevice>> {
            Ok(self.0.clone())
        }
    }

    fn reporter(devices: Vec<BlockDevice>) -> BlockDeviceReporter {
        BlockDeviceReporter::new(Arc::new(StaticSource(devices)))
    }

    fn device(name: &str, node: &str) -> BlockDevice {
        BlockDevice::new(
            name,
            BlockDeviceSpec {
                node_attributes: NodeAttributes {
                    node_name: node.into(),
                },
                path: "/dev/sdb".into(),
                ..Default::default()
            },
        )
    }

    fn get_args(argv: &[&str]) -> GetBlockDeviceArgs {
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Command::Get {
                resource: GetResource::BlockDevice(args),
            } => args,
        }
    }

    #[test]
    fn test_parse_get_blockdevice() {
        let args = get_args(&[
            "storagectl", "get", "bd", "bd-1", "bd-2", "-n", "openebs", "-o", "json",
        ]);
        assert_eq!(args.names, vec!["bd-1", "bd-2"]);
        assert_eq!(args.namespace, "openebs");
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["storagectl", "get", "blockdevices"]).unwrap();
        assert!(!args.log_json);
        match args.command {
            Command::Get {
                resource: GetResource::BlockDevice(args),
            } => {
                assert!(args.names.is_empty());
                assert_eq!(args.output, OutputFormat::Table);
            }
        }
    }

    #[test]
    fn test_parse_rejects_unknown_output() {
        assert!(Args::try_parse_from(["storagectl", "get", "bd", "-o", "xml"]).is_err());
    }

    #[tokio::test]
    async fn test_execute_table() {
        let args = get_args(&["storagectl", "get", "bd", "-n", "openebs"]);
        let reporter = reporter(vec![device("bd-1", "worker-1"), device("bd-2", "worker-1")]);

        let mut out = Vec::new();
        args.execute(&reporter, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.trim_start().starts_with("NAME"));
        assert!(text.contains("worker-1"));
        assert!(text.contains("├─bd-1"));
        assert!(text.contains("└─bd-2"));
    }

    #[tokio::test]
    async fn test_execute_json() {
        let args = get_args(&["storagectl", "get", "bd", "-o", "json"]);
        let reporter = reporter(vec![device("bd-1", "worker-1")]);

        let mut out = Vec::new();
        args.execute(&reporter, &mut out).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["blockDevices"][0]["name"], "bd-1");
    }

    #[tokio::test]
    async fn test_execute_not_found_writes_nothing() {
        let args = get_args(&["storagectl", "get", "bd", "-n", "openebs"]);
        let reporter = reporter(vec![]);

        let mut out = Vec::new();
        let err = args.execute(&reporter, &mut out).await.unwrap_err();
        assert_matches!(err, Error::NotFound { .. });
        assert!(out.is_empty());
    }
}
