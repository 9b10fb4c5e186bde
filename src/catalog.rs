//! Catalog of Nessus plugin IDs that flag SSL/TLS weaknesses.
//! Membership here is the only thing that qualifies a finding for the
//! target list; adding a new plugin ID is a one-line change.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Plugin IDs covering certificate, protocol and cipher-suite findings
const SSL_PLUGIN_IDS: &[&str] = &[
    "15901", "20007", "31705", "35291", "42873", "45411", "51192", "57582",
    "60108", "60119", "62565", "65821", "69551", "70544", "73404", "78479",
    "83875", "84089", "90317", "91572", "95715", "104743",
];

// Membership set built from SSL_PLUGIN_IDS on first lookup
static SSL_PLUGIN_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn ssl_plugin_set() -> &'static HashSet<&'static str> {
    SSL_PLUGIN_SET.get_or_init(|| SSL_PLUGIN_IDS.iter().copied().collect())
}

/// Check whether a plugin ID belongs to the SSL/TLS catalog
pub fn is_ssl_plugin(plugin_id: &str) -> bool {
    ssl_plugin_set().contains(plugin_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_plugin_ids_match() {
        assert!(is_ssl_plugin("15901"));
        assert!(is_ssl_plugin("42873"));
        assert!(is_ssl_plugin("104743"));
    }

    #[test]
    fn test_unknown_plugin_ids_do_not_match() {
        assert!(!is_ssl_plugin("99999"));
        assert!(!is_ssl_plugin("0"));
        assert!(!is_ssl_plugin(""));
    }

    #[test]
    fn test_lookup_is_exact_not_substring() {
        // "1590" and "159011" overlap "15901" textually but are different plugins
        assert!(!is_ssl_plugin("1590"));
        assert!(!is_ssl_plugin("159011"));
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        let set: HashSet<&str> = SSL_PLUGIN_IDS.iter().copied().collect();
        assert_eq!(set.len(), SSL_PLUGIN_IDS.len());
    }
}
