//! Shared building blocks for `vsnap`.
//!
//! * **[`inventory`]**: the read-only view of a virtualization management domain
//!   (the [`Inventory`](inventory::Inventory) port and its model types).
//! * **[`config`]**: runtime options handed from the CLI to the core.
//! * **[`error`]**: the error type every inventory read can fail with.

pub mod config;
pub mod error;
pub mod inventory;
