//! The per-view decision engine.

use crate::config::PolicyConfig;
use crate::decide::{decide, Decision};
use crate::gateway::ActivityGateway;
use crate::outcome::{execute, DispatchOutcome, UrlSink};

/// One navigation-interception engine. A plain value held by whatever
/// thin view adapter the host platform requires; no interior mutability,
/// safe to share across concurrent navigations.
#[derive(Debug, Clone, Default)]
pub struct NavigationPolicy {
    config: PolicyConfig,
}

impl NavigationPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Decide without acting. See [`decide`].
    pub fn decide(&self, url: &str, gateway: &dyn ActivityGateway) -> Decision {
        decide(url, &self.config, gateway)
    }

    /// Full per-navigation pass: decide, execute, one outcome.
    ///
    /// The return value's [`DispatchOutcome::overrides_load`] is the
    /// boolean the view's navigation hook should report.
    pub fn handle(
        &self,
        url: &str,
        gateway: &dyn ActivityGateway,
        sink: &mut dyn UrlSink,
    ) -> DispatchOutcome {
        execute(self.decide(url, gateway), gateway, sink)
    }
}
