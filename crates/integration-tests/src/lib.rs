//! Integration tests for Fruitstand.
//!
//! The client is exercised end-to-end against an in-process stub backend: an
//! axum router with canned responses, bound to an ephemeral port. Tests need
//! no network access and no running backend.
//!
//! # Test Categories
//!
//! - `auth_flows` - signup/login/admin-login flows and error surfacing
//! - `products` - listing and create-product flows
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fruitstand-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use axum::Router;
use tempfile::TempDir;
use url::Url;

use fruitstand_client::api::ApiClient;
use fruitstand_client::config::ClientConfig;
use fruitstand_client::session::SessionStore;

/// A client wired to a freshly spawned stub backend, with session state in
/// a throwaway directory.
pub struct TestContext {
    pub api: ApiClient,
    pub session: SessionStore,
    session_dir: TempDir,
}

impl TestContext {
    /// Spawn `router` as the stub backend and point a client at it.
    pub async fn new(router: Router) -> Self {
        let addr = spawn_backend(router).await;
        let session_dir = tempfile::tempdir().expect("Failed to create session dir");
        let config = ClientConfig {
            backend_url: Url::parse(&format!("http://{addr}")).expect("Stub address is a URL"),
            session_dir: session_dir.path().to_path_buf(),
        };

        Self {
            api: ApiClient::new(&config),
            session: SessionStore::open(session_dir.path()),
            session_dir,
        }
    }

    /// A fresh store over the same directory - the page-reload analog.
    #[must_use]
    pub fn reopened_session(&self) -> SessionStore {
        SessionStore::open(self.session_dir.path())
    }
}

/// Serve `router` on an ephemeral local port and return its address.
pub async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener
        .local_addr()
        .expect("Failed to read stub backend address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub backend crashed");
    });

    addr
}

/// A client pointed at an arbitrary address. Session state is unused.
#[must_use]
pub fn api_client_for(addr: SocketAddr) -> ApiClient {
    let config = ClientConfig {
        backend_url: Url::parse(&format!("http://{addr}")).expect("Address is a URL"),
        session_dir: std::env::temp_dir(),
    };
    ApiClient::new(&config)
}

/// An address nothing listens on, for transport-failure tests.
pub async fn unreachable_backend() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to probe for a free port");
    let addr = listener
        .local_addr()
        .expect("Failed to read probed address");
    drop(listener);
    addr
}
