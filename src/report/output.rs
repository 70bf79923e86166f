//! Output formats for report commands

use super::block_device::{NodeGroup, NodeGroupView};
use crate::error::{Error, Result};
use clap::ValueEnum;
use std::io::Write;

/// How a report is printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned tree table
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn is_table(&self) -> bool {
        *self == OutputFormat::Table
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Serialize node groups as json or yaml.
///
/// Table output goes through [`super::table::render_table`]; asking for it
/// here is a configuration error.
pub fn write_node_groups<W: Write>(
    out: &mut W,
    groups: &[NodeGroup],
    format: OutputFormat,
) -> Result<()> {
    let views: Vec<NodeGroupView> = groups.iter().map(Into::into).collect();
    match format {
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &views)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &views)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            return Err(Error::Configuration(
                "table output is not a serialization format".into(),
            ))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{BlockDevice, BlockDeviceSpec, NodeAttributes};
    use crate::report::block_device::group_by_node;
    use assert_matches::assert_matches;

    fn groups() -> Vec<NodeGroup> {
        let bd = BlockDevice::new(
            "bd-1",
            BlockDeviceSpec {
                node_attributes: NodeAttributes {
                    node_name: "worker-1".into(),
                },
                path: "/dev/sdb".into(),
                ..Default::default()
            },
        );
        group_by_node(vec![bd])
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_node_groups(&mut out, &groups(), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["node"], "worker-1");
        assert_eq!(value[0]["blockDevices"][0]["path"], "/dev/sdb");
        assert_eq!(value[0]["blockDevices"][0]["capacity"], "0 B");
    }

    #[test]
    fn test_yaml_output() {
        let mut out = Vec::new();
        write_node_groups(&mut out, &groups(), OutputFormat::Yaml).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("node: worker-1"));
        assert!(text.contains("name: bd-1"));
        assert!(text.contains("blockDevices:"));
    }

    #[test]
    fn test_table_format_is_rejected() {
        let mut out = Vec::new();
        let err = write_node_groups(&mut out, &groups(), OutputFormat::Table).unwrap_err();
        assert_matches!(err, Error::Configuration(_));
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(format!("{}", OutputFormat::Table), "table");
        assert!(OutputFormat::default().is_table());
        assert!(!OutputFormat::Yaml.is_table());
    }
}
