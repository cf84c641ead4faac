//! Decision execution.
//!
//! Turns a [`Decision`] into its single side effect and reports the
//! terminal [`DispatchOutcome`]. Launch failures are logged and absorbed;
//! the page cannot observe them and the host must not crash over them.

use tracing::warn;

use crate::decide::Decision;
use crate::gateway::{ActivityGateway, LaunchRequest};

/// Terminal result of one navigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The engine took no action; the view proceeds with its default load.
    NotIntercepted,
    /// A native activity was launched.
    Handled,
    /// A URL (fallback or unwrapped) was loaded into the view.
    HandledInView,
    /// A store-listing launch was started for a missing app.
    Redirected,
    /// Intercepted with no action, or a launch that could not be serviced.
    Dropped,
}

impl DispatchOutcome {
    /// Whether the view should skip its own load of the original URL.
    ///
    /// `Dropped` reports false so the view's default behavior applies;
    /// for an unhandlable scheme that is a silent no-op, which is what
    /// web platforms expect.
    pub fn overrides_load(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Handled | DispatchOutcome::HandledInView | DispatchOutcome::Redirected
        )
    }
}

/// Sink for URLs the engine redirects back into the view.
pub trait UrlSink {
    fn load_url(&mut self, url: &str);
}

/// Execute a decision: at most one launch or one view load.
pub fn execute(
    decision: Decision,
    gateway: &dyn ActivityGateway,
    sink: &mut dyn UrlSink,
) -> DispatchOutcome {
    match decision {
        Decision::Allow => DispatchOutcome::NotIntercepted,
        Decision::Drop => DispatchOutcome::Dropped,
        Decision::LoadInView(url) => {
            sink.load_url(&url);
            DispatchOutcome::HandledInView
        }
        Decision::Launch(request) => match gateway.start(&request) {
            Ok(()) => DispatchOutcome::Handled,
            Err(error) => {
                warn!(%error, uri = request.uri.as_deref().unwrap_or(""), "activity launch failed");
                DispatchOutcome::Dropped
            }
        },
        Decision::StoreRedirect { package, url } => {
            let request = LaunchRequest::view(url).for_launch();
            match gateway.start(&request) {
                Ok(()) => DispatchOutcome::Redirected,
                Err(error) => {
                    // Expected in sandboxes without a store app installed.
                    warn!(%error, %package, "store redirect failed");
                    DispatchOutcome::Dropped
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{HandlerInfo, LaunchError};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        loaded: Vec<String>,
    }

    impl UrlSink for RecordingSink {
        fn load_url(&mut self, url: &str) {
            self.loaded.push(url.to_string());
        }
    }

    struct ScriptedGateway {
        fail_start: bool,
        started: RefCell<Vec<LaunchRequest>>,
    }

    impl ScriptedGateway {
        fn ok() -> Self {
            Self {
                fail_start: false,
                started: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail_start: true,
                started: RefCell::new(Vec::new()),
            }
        }
    }

    impl ActivityGateway for ScriptedGateway {
        fn resolve(&self, _request: &LaunchRequest) -> Option<HandlerInfo> {
            None
        }

        fn start(&self, request: &LaunchRequest) -> Result<(), LaunchError> {
            self.started.borrow_mut().push(request.clone());
            if self.fail_start {
                Err(LaunchError::NotFound {
                    uri: request.uri.clone().unwrap_or_default(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn allow_touches_nothing() {
        let gateway = ScriptedGateway::ok();
        let mut sink = RecordingSink::default();
        let outcome = execute(Decision::Allow, &gateway, &mut sink);
        assert_eq!(outcome, DispatchOutcome::NotIntercepted);
        assert!(!outcome.overrides_load());
        assert!(sink.loaded.is_empty());
        assert!(gateway.started.borrow().is_empty());
    }

    #[test]
    fn drop_touches_nothing() {
        let gateway = ScriptedGateway::ok();
        let mut sink = RecordingSink::default();
        let outcome = execute(Decision::Drop, &gateway, &mut sink);
        assert_eq!(outcome, DispatchOutcome::Dropped);
        assert!(!outcome.overrides_load());
        assert!(sink.loaded.is_empty());
    }

    #[test]
    fn load_in_view_loads_exactly_that_url() {
        let gateway = ScriptedGateway::ok();
        let mut sink = RecordingSink::default();
        let outcome = execute(
            Decision::LoadInView("https://fallback.example.com".into()),
            &gateway,
            &mut sink,
        );
        assert_eq!(outcome, DispatchOutcome::HandledInView);
        assert!(outcome.overrides_load());
        assert_eq!(sink.loaded, vec!["https://fallback.example.com".to_string()]);
        assert!(gateway.started.borrow().is_empty());
    }

    #[test]
    fn launch_success_is_handled() {
        let gateway = ScriptedGateway::ok();
        let mut sink = RecordingSink::default();
        let request = LaunchRequest::view("zxing://scan").for_launch();
        let outcome = execute(Decision::Launch(request.clone()), &gateway, &mut sink);
        assert_eq!(outcome, DispatchOutcome::Handled);
        assert_eq!(gateway.started.borrow().as_slice(), &[request]);
    }

    #[test]
    fn launch_failure_is_absorbed_as_dropped() {
        let gateway = ScriptedGateway::failing();
        let mut sink = RecordingSink::default();
        let request = LaunchRequest::view("zxing://scan").for_launch();
        let outcome = execute(Decision::Launch(request), &gateway, &mut sink);
        assert_eq!(outcome, DispatchOutcome::Dropped);
        assert!(!outcome.overrides_load());
    }

    #[test]
    fn store_redirect_launches_market_url() {
        let gateway = ScriptedGateway::ok();
        let mut sink = RecordingSink::default();
        let outcome = execute(
            Decision::StoreRedirect {
                package: "com.example".into(),
                url: "market://details?id=com.example".into(),
            },
            &gateway,
            &mut sink,
        );
        assert_eq!(outcome, DispatchOutcome::Redirected);
        let started = gateway.started.borrow();
        assert_eq!(started.len(), 1);
        assert_eq!(
            started[0].uri.as_deref(),
            Some("market://details?id=com.example")
        );
        assert!(started[0].new_task);
        assert!(started[0].browsable);
    }

    #[test]
    fn store_redirect_failure_is_absorbed_as_dropped() {
        let gateway = ScriptedGateway::failing();
        let mut sink = RecordingSink::default();
        let outcome = execute(
            Decision::StoreRedirect {
                package: "com.example".into(),
                url: "market://details?id=com.example".into(),
            },
            &gateway,
            &mut sink,
        );
        assert_eq!(outcome, DispatchOutcome::Dropped);
    }
}
