use crate::nav::LOGIN_PATH;
use crate::session::Session;

/// Outcome of the route guard's token check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Allow the route only if a token is persisted. Reads storage without
/// touching the in-memory session; token validity is the navigation
/// gate's concern.
pub fn check(session: &Session) -> GuardDecision {
    if session.has_persisted_token() {
        GuardDecision::Allow
    } else {
        tracing::debug!("no stored token, redirecting to login");
        GuardDecision::Redirect(LOGIN_PATH)
    }
}
