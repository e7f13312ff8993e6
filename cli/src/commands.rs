pub mod scan;

use clap::Parser;
use vsnap_common::config::{Config, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, ReportMode, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "vsnap")]
#[command(version)]
#[command(about = "Report powered-on VMs that carry snapshots, as monitoring JSON.")]
pub struct CommandLine {
    /// vCenter host name
    #[arg(short = 'v', long = "host")]
    pub host: String,
    /// vCenter user name
    #[arg(short, long)]
    pub user: String,
    /// vCenter user password
    #[arg(short, long)]
    pub password: String,
    /// Print each VM's snapshot count instead of discovery entries
    #[arg(short, long)]
    pub snapshots: bool,
    /// vCenter HTTPS port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Verify the server certificate
    #[arg(long)]
    pub verify_tls: bool,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            port: self.port,
            insecure: !self.verify_tls,
            timeout_secs: self.timeout,
            ..SessionConfig::new(&self.host, &self.user, &self.password)
        }
    }

    pub fn config(&self) -> Config {
        let mode = if self.snapshots {
            ReportMode::Count
        } else {
            ReportMode::Discovery
        };
        Config { mode }
    }
}
