use anyhow::Context;
use tracing::info;
use vsnap_common::config::{Config, SessionConfig};
use vsnap_core::vsphere::{self, VsphereClient};
use vsnap_core::{report, scanner};

/// Scans the endpoint in `session` and renders the report selected by `cfg`.
///
/// Nothing is returned unless the whole scan succeeds.
pub async fn scan(session: &SessionConfig, cfg: &Config) -> anyhow::Result<String> {
    let client = VsphereClient::new(session).context("failed to set up the vSphere client")?;

    let result = vsphere::with_session(client, async |inventory: &VsphereClient| {
        scanner::scan(inventory).await
    })
    .await
    .with_context(|| format!("snapshot scan against {} failed", session.host))?;

    info!("{} powered-on VMs carry snapshots", result.len());
    report::render(&result, cfg.mode).context("failed to render the report")
}
