//! Route table and access gate.
//!
//! The gate decides render-vs-redirect for protected views. It is advisory
//! UX only, never a security boundary: the backend re-verifies authorization
//! on every request it receives (create-product carries credentials in its
//! body for exactly this reason).

use crate::session::SessionStore;

/// The storefront's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Shop,
    Login,
    Signup,
    AdminGate,
    AdminLogin,
    AdminDashboard,
}

/// Outcome of gating a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The route renders.
    Render,
    /// The route redirects to another view.
    Redirect(Route),
}

impl Route {
    /// The route's path, used in redirect messages.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Shop => "/shop",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::AdminGate => "/admin",
            Self::AdminLogin => "/admin/login",
            Self::AdminDashboard => "/admin/dashboard",
        }
    }

    /// Decide whether this route renders or redirects.
    ///
    /// The single rule: the admin dashboard requires a recorded admin login
    /// and redirects to the admin gate otherwise. Every other route renders
    /// unconditionally regardless of identity.
    #[must_use]
    pub fn resolve(self, session: &SessionStore) -> RouteDecision {
        match self {
            Self::AdminDashboard if !session.admin_flag() => {
                RouteDecision::Redirect(Self::AdminGate)
            }
            _ => RouteDecision::Render,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_redirects_without_admin_flag() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::open(dir.path());

        assert_eq!(
            Route::AdminDashboard.resolve(&session),
            RouteDecision::Redirect(Route::AdminGate)
        );
    }

    #[test]
    fn test_dashboard_renders_after_admin_login() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::open(dir.path());
        session.set_admin_flag().unwrap();

        assert_eq!(
            Route::AdminDashboard.resolve(&session),
            RouteDecision::Render
        );
    }

    #[test]
    fn test_everything_else_renders_as_guest() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionStore::open(dir.path());

        for route in [
            Route::Home,
            Route::Shop,
            Route::Login,
            Route::Signup,
            Route::AdminGate,
            Route::AdminLogin,
        ] {
            assert_eq!(route.resolve(&session), RouteDecision::Render);
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::AdminDashboard.path(), "/admin/dashboard");
        assert_eq!(Route::AdminGate.path(), "/admin");
        assert_eq!(Route::Shop.path(), "/shop");
    }
}
