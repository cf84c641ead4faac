//! Host OS activity-resolution capability.
//!
//! The decision engine never talks to the platform directly. Hosts supply
//! an [`ActivityGateway`] implementation; tests use scripted doubles.

use crate::intent::IntentUri;

/// A native activity launch, expressed host-agnostically.
///
/// Built from an [`IntentUri`] or synthesized for a bare custom-scheme
/// URL. [`LaunchRequest::for_launch`] produces the only form the engine
/// ever hands to [`ActivityGateway::start`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Data URI the activity should receive.
    pub uri: Option<String>,
    pub action: Option<String>,
    pub package: Option<String>,
    pub scheme: Option<String>,
    /// Explicit component. Must be stripped before launching; an untrusted
    /// page must not target non-exported activities directly.
    pub component: Option<String>,
    /// Whether the original descriptor carried a selector.
    pub has_selector: bool,
    /// Launch in a fresh task.
    pub new_task: bool,
    /// Restrict resolution to browser-safe (browsable) handlers.
    pub browsable: bool,
}

impl LaunchRequest {
    /// A plain "view this URI" request, as for a bare custom-scheme URL.
    pub fn view(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let scheme = uri.split(':').next().filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            uri: Some(uri),
            scheme,
            ..Self::default()
        }
    }

    /// Ready-to-launch form: browsable, fresh task, explicit component and
    /// selector stripped.
    pub fn for_launch(mut self) -> Self {
        self.component = None;
        self.has_selector = false;
        self.new_task = true;
        self.browsable = true;
        self
    }
}

impl From<&IntentUri> for LaunchRequest {
    fn from(intent: &IntentUri) -> Self {
        Self {
            uri: intent.data.clone(),
            action: intent.action.clone(),
            package: intent.package.clone(),
            scheme: intent.scheme.clone(),
            component: intent.component.clone(),
            has_selector: intent.has_selector,
            new_task: false,
            browsable: false,
        }
    }
}

/// An installed handler able to service a launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerInfo {
    pub package: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("no activity found to handle {uri}")]
    NotFound { uri: String },
    #[error("activity launch rejected: {0}")]
    Rejected(String),
}

/// Host capability for resolving and starting native activities.
///
/// `start` is fire-and-forget: success means the launch call was accepted,
/// not that the target app did anything useful with it.
pub trait ActivityGateway {
    fn resolve(&self, request: &LaunchRequest) -> Option<HandlerInfo>;
    fn start(&self, request: &LaunchRequest) -> Result<(), LaunchError>;
}

/// Gateway for hosts without native activity resolution (desktop shells,
/// test sandboxes). Resolves nothing and cannot launch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGateway;

impl ActivityGateway for NoopGateway {
    fn resolve(&self, _request: &LaunchRequest) -> Option<HandlerInfo> {
        None
    }

    fn start(&self, request: &LaunchRequest) -> Result<(), LaunchError> {
        Err(LaunchError::NotFound {
            uri: request.uri.clone().unwrap_or_default(),
        })
    }
}
