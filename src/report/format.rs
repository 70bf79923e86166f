//! Cell formatting helpers shared by the reports

use bytesize::ByteSize;

/// Format a byte count with binary (IEC) units and one decimal place.
///
/// Picks the largest unit whose value is at least 1; counts below 1 KiB are
/// printed as plain bytes.
pub fn format_capacity(bytes: u64) -> String {
    ByteSize::b(bytes).to_string_as(true)
}
