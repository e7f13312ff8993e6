//! Workspace-level tests: end-to-end scans over an in-memory inventory and
//! the vSphere adapter against a mock HTTP endpoint.

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod scan;
