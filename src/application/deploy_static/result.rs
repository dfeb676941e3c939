//! Deploy Result
//!
//! What a successful `deploy_static` run did.

use crate::domain::value_objects::Host;

/// Outcome of a successful (or fully planned) deploy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    /// Hosts mirrored, in order
    pub hosts: Vec<Host>,
    /// Whether the collection step ran
    pub collected: bool,
    /// Nothing was executed
    pub dry_run: bool,
}

impl DeployReport {
    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }
}
