//! Request-scoped caller context.
//!
//! The transport boundary establishes a [`RequestContext`] for exactly one
//! inbound request with [`RequestContext::scope`]. Everything awaited inside
//! that scope (tool dispatch, the backend client) can read the caller's
//! credential through [`RequestContext::current_credential`] without it being
//! passed down explicitly.
//!
//! The carrier is a tokio task-local, so two requests handled concurrently
//! never observe each other's context, and the previous state is restored
//! when the scoped future completes, fails, or is dropped.

use std::fmt;
use std::future::Future;

tokio::task_local! {
    static CURRENT: RequestContext;
}

/// An opaque caller-supplied API key.
///
/// The value is never printed by `Debug`; use [`Credential::expose`] to get
/// the raw key when attaching it to an outbound request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Build a credential from raw input, treating blank values as absent.
    ///
    /// A non-blank key is kept exactly as supplied.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw key.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Per-request state visible to everything awaited inside a scope.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// The caller's credential, if one was supplied.
    pub credential: Option<Credential>,
}

impl RequestContext {
    /// Context for an anonymous caller.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context carrying the given credential.
    pub fn with_credential(credential: Option<Credential>) -> Self {
        Self { credential }
    }

    /// Run `future` with this context established.
    ///
    /// The context is torn down when the future resolves or is dropped,
    /// whichever comes first, so no exit path can leak it into the next
    /// request handled by the same worker.
    pub async fn scope<F>(self, future: F) -> F::Output
    where
        F: Future,
    {
        CURRENT.scope(self, future).await
    }

    /// The context of the request currently being handled, if any.
    pub fn current() -> Option<RequestContext> {
        CURRENT.try_with(|ctx| ctx.clone()).ok()
    }

    /// The credential of the request currently being handled, if any.
    pub fn current_credential() -> Option<Credential> {
        CURRENT
            .try_with(|ctx| ctx.credential.clone())
            .ok()
            .flatten()
    }

    /// Whether a request scope is active on this task.
    pub fn is_active() -> bool {
        CURRENT.try_with(|_| ()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn key(raw: &str) -> Option<Credential> {
        Credential::parse(raw)
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(Credential::parse("").is_none());
        assert!(Credential::parse("   ").is_none());
        assert_eq!(Credential::parse(" abc ").unwrap().expose(), " abc ");
        assert_eq!(Credential::parse("a b").unwrap().expose(), "a b");
    }

    #[test]
    fn test_debug_is_redacted() {
        let debug_str = format!("{:?}", RequestContext::with_credential(key("super_secret")));
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
    }

    #[tokio::test]
    async fn test_absent_outside_scope() {
        assert!(!RequestContext::is_active());
        assert!(RequestContext::current_credential().is_none());
    }

    #[tokio::test]
    async fn test_scope_sets_and_restores() {
        let seen = RequestContext::with_credential(key("abc123"))
            .scope(async { RequestContext::current_credential() })
            .await;

        assert_eq!(seen.unwrap().expose(), "abc123");
        assert!(RequestContext::current_credential().is_none());
        assert!(!RequestContext::is_active());
    }

    #[tokio::test]
    async fn test_scope_restored_after_error() {
        let result: Result<(), &str> = RequestContext::with_credential(key("abc123"))
            .scope(async { Err("handler failed") })
            .await;

        assert!(result.is_err());
        assert!(RequestContext::current().is_none());
    }

    #[tokio::test]
    async fn test_nested_scope_restores_outer() {
        RequestContext::with_credential(key("outer"))
            .scope(async {
                let inner = RequestContext::anonymous()
                    .scope(async { RequestContext::current_credential() })
                    .await;
                assert!(inner.is_none());
                assert_eq!(
                    RequestContext::current_credential().unwrap().expose(),
                    "outer"
                );
            })
            .await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_scopes_are_isolated() {
        let mut handles = Vec::new();
        for i in 0..32 {
            handles.push(tokio::spawn(async move {
                let expected = format!("key-{}", i);
                RequestContext::with_credential(key(&expected))
                    .scope(async move {
                        for _ in 0..5 {
                            tokio::time::sleep(Duration::from_millis(1)).await;
                            let seen = RequestContext::current_credential().unwrap();
                            assert_eq!(seen.expose(), expected);
                        }
                    })
                    .await;
                assert!(RequestContext::current().is_none());
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
    }
}
