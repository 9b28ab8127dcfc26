//! Plain-text stock report.

use std::io::{self, Write};

use stockroom_core::ItemName;

pub const REPORT_HEADER: &str = "Items Report";

/// Write the header then one `name -> quantity` line per entry.
pub fn write_report<'a, W, I>(mut out: W, entries: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a ItemName, &'a i64)>,
{
    writeln!(out, "{REPORT_HEADER}")?;
    for (name, quantity) in entries {
        writeln!(out, "{name} -> {quantity}")?;
    }
    out.flush()
}
