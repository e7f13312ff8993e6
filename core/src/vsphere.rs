//! # vSphere Adapter
//!
//! Implements the inventory port on top of the vSphere Automation REST API
//! and owns the session lifecycle.

mod client;
mod inventory;
mod types;

pub use client::VsphereClient;

use vsnap_common::error::InventoryResult;

/// Runs `body` inside a logged-in session.
///
/// The session is closed on every path out of `body`, whether it returned
/// a value or an error. If login fails `body` never runs.
pub async fn with_session<T>(
    mut client: VsphereClient,
    body: impl AsyncFnOnce(&VsphereClient) -> InventoryResult<T>,
) -> InventoryResult<T> {
    client.login().await?;
    let outcome = body(&client).await;
    client.logout().await;
    outcome
}
