//! Streaming serializer for generated tables.

use crate::model::Row;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Output file name for a table over `n` products: `iotable-<n>.txt`.
pub fn table_path(dir: &Path, n: usize) -> PathBuf {
    dir.join(format!("iotable-{n}.txt"))
}

/// Write every row in collection order as `<subject>,<relation> <quantity>`,
/// one per line. A pure pass-through: no validation, no reordering.
pub fn write_table<W: Write>(rows: &[Row], sink: &mut W) -> io::Result<()> {
    for row in rows {
        writeln!(sink, "{},{} {}", row.subject, row.relation, row.quantity)?;
    }
    Ok(())
}
