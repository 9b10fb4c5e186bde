//! Nessus report extraction.
//!
//! A `.nessus` export is XML: `ReportHost` elements carry the scanned
//! address in their `name` attribute and contain one `ReportItem` per
//! finding, with `pluginID` and `port` attributes. Extraction walks that
//! structure and collects the unique endpoints whose finding is in the
//! SSL/TLS catalog.

mod endpoint;

pub use endpoint::Endpoint;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use roxmltree::Document;
use thiserror::Error;

use crate::catalog;

/// Errors from report extraction. All are fatal: a report that cannot be
/// read, decoded or parsed produces no target list at all.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed report: {path} is not valid UTF-8")]
    Encoding { path: String },

    #[error("malformed report: {0}")]
    Parse(#[from] roxmltree::Error),
}

/// Read a `.nessus` file and return the unique SSL/TLS endpoints it reports.
pub fn extract_file(path: &Path) -> Result<HashSet<Endpoint>, ExtractError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        // Undecodable bytes are a problem with the report, not the filesystem
        io::ErrorKind::InvalidData => ExtractError::Encoding {
            path: path.display().to_string(),
        },
        _ => ExtractError::Read {
            path: path.display().to_string(),
            source,
        },
    })?;
    extract(&text)
}

/// Extract endpoints from report text already in memory.
///
/// This is the core walk, separated from file I/O for testability. Hosts
/// without a `name` attribute are skipped (there is nothing to target), and
/// items missing `pluginID` or `port` contribute nothing.
pub fn extract(text: &str) -> Result<HashSet<Endpoint>, ExtractError> {
    let doc = Document::parse(text)?;
    let mut endpoints = HashSet::new();

    for host in doc.descendants().filter(|n| n.has_tag_name("ReportHost")) {
        let Some(address) = host.attribute("name") else {
            continue;
        };
        for item in host.descendants().filter(|n| n.has_tag_name("ReportItem")) {
            if let Some(plugin_id) = item.attribute("pluginID")
                && catalog::is_ssl_plugin(plugin_id)
                && let Some(port) = item.attribute("port")
            {
                endpoints.insert(Endpoint::new(address, port));
            }
        }
    }

    Ok(endpoints)
}
