//! Target list output.
//!
//! Serializes the deduplicated endpoints as one `address:port` line per
//! endpoint, sorted so the file is byte-identical across runs. The format
//! is what `testssl.sh -iL` expects: no header, no comments, no blanks.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::report::Endpoint;

/// Order endpoints by (address, port), both compared as plain strings.
/// Intentionally not numeric-aware ("10.10.0.1" sorts before "10.2.0.1");
/// stability matters here, octet order does not.
pub fn sorted(endpoints: &HashSet<Endpoint>) -> Vec<&Endpoint> {
    let mut list: Vec<&Endpoint> = endpoints.iter().collect();
    list.sort();
    list
}

/// Write the target list, creating or truncating the destination.
pub fn write_targets(endpoints: &HashSet<Endpoint>, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for endpoint in sorted(endpoints) {
        writeln!(out, "{endpoint}")?;
    }
    // Flush explicitly so write failures surface here, not on drop
    out.flush()
}
