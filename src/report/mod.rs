//! Reports
//!
//! Turn cluster resources into rows for the table renderer or into
//! serializable views:
//! - [`block_device`]: BlockDevices grouped by node, rendered as a tree
//! - [`table`]: borderless table renderer
//! - [`output`]: json/yaml output

pub mod block_device;
pub mod format;
pub mod output;
pub mod row;
pub mod table;

pub use block_device::{BlockDeviceReporter, NodeGroup, NodeGroupView, group_by_node};
pub use format::format_capacity;
pub use output::{OutputFormat, write_node_groups};
pub use row::{DisplayRow, RowKind};
pub use table::{BLOCK_DEVICE_TREE_COLUMNS, render_table};
