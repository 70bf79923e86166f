//! Table Renderer
//!
//! Writes report rows as a borderless, left-aligned table in the style of
//! `kubectl get`.

use super::DisplayRow;
use crate::error::Result;
use comfy_table::{presets, Table};
use std::io::Write;

/// Column headers of the block device tree report
pub const BLOCK_DEVICE_TREE_COLUMNS: [&str; 7] = [
    "NAME",
    "PATH",
    "SIZE",
    "CLAIMSTATE",
    "STATUS",
    "FSTYPE",
    "MOUNTPOINT",
];

/// Build the table for `rows` under `columns`
pub fn build_table(columns: &[&str], rows: &[DisplayRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_header(columns.iter().copied());

    for row in rows {
        table.add_row(row.cells().iter());
    }

    table
}

/// Render `rows` under `columns` to `out`
pub fn render_table<W: Write>(out: &mut W, columns: &[&str], rows: &[DisplayRow]) -> Result<()> {
    let table = build_table(columns, rows);
    for line in table.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
