/// A single scanned service: host address plus the port the finding was
/// reported on. Both fields stay verbatim strings from the report so the
/// target list reproduces them exactly; neither is validated or parsed.
///
/// Equality, hashing and ordering all cover the full (address, port) pair,
/// so the same host on two ports is two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint {
    pub address: String,
    pub port: String,
}

impl Endpoint {
    pub fn new(address: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: port.into(),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}
