//! Display rows for tree-shaped table reports

use super::format::format_capacity;
use crate::crd::BlockDevice;

/// Number of cells in every report row
pub const ROW_WIDTH: usize = 7;

/// Glyph before a child that has siblings after it
pub const BRANCH_GLYPH: &str = "├─";
/// Glyph before the last child of a parent
pub const CORNER_GLYPH: &str = "└─";

/// Position of a row in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Root row naming a node
    Header,
    /// Child row for one device
    Child,
    /// Blank row closing a group
    Separator,
}

/// One row of a tree report: label, path, size, claim state, status,
/// filesystem type, mount point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    kind: RowKind,
    cells: [String; ROW_WIDTH],
}

impl DisplayRow {
    pub fn new(kind: RowKind, cells: [String; ROW_WIDTH]) -> Self {
        Self { kind, cells }
    }

    /// Root row of a group: only the label is set
    pub fn node_header(node_name: &str) -> Self {
        let mut cells: [String; ROW_WIDTH] = Default::default();
        cells[0] = node_name.to_string();
        Self::new(RowKind::Header, cells)
    }

    /// Child row for a device; `last` selects the corner glyph.
    /// Claim state and status are copied as reported.
    pub fn block_device(bd: &BlockDevice, last: bool) -> Self {
        let glyph = if last { CORNER_GLYPH } else { BRANCH_GLYPH };
        Self::new(
            RowKind::Child,
            [
                format!("{}{}", glyph, bd.device_name()),
                bd.spec.path.clone(),
                format_capacity(bd.capacity_bytes()),
                bd.claim_state().to_string(),
                bd.state().to_string(),
                bd.spec.filesystem.fs_type.clone(),
                bd.spec.filesystem.mount_point.clone(),
            ],
        )
    }

    /// Fully empty row placed after each group
    pub fn separator() -> Self {
        Self::new(RowKind::Separator, Default::default())
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn label(&self) -> &str {
        &self.cells[0]
    }

    pub fn is_separator(&self) -> bool {
        self.kind == RowKind::Separator
    }
}
