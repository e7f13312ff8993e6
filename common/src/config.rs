/// Output shape of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// `{"data":[{"{#VMNAME}": ...}]}`, consumed by low-level discovery.
    #[default]
    Discovery,
    /// `{"vms":{name: count}}`, one snapshot count per VM name.
    Count,
}

pub struct Config {
    /// Selects which JSON document is written to stdout.
    pub mode: ReportMode,
}

/// Where and how to open the management session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// vCenter or ESXi hostname / IP.
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Skip TLS certificate verification.
    ///
    /// On by default: most endpoints this runs against use self-signed certificates.
    pub insecure: bool,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl SessionConfig {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: username.into(),
            password: password.into(),
            insecure: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
