use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::OnceLock,
};

use anyhow::Result;
use clubhouse::{init_dbg_tracing, model::ActivityStore, App, AppState};
use reqwest::{redirect, Client, Response};
use tokio::net::TcpListener;
use tracing::info;

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

pub const TEST_EMAIL: &str = "testuser@example.com";

/// Console logs for the tests, only when `TEST_LOG` is set.
fn init_test_subscriber() {
    if std::env::var("TEST_LOG").is_err() {
        return;
    }

    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        init_dbg_tracing();
    });
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub app_state: AppState,
    pub http_client: Client,
}

impl TestApp {
    /// Serves the app with its own freshly seeded store on a random port.
    pub async fn spawn() -> Result<Self> {
        init_test_subscriber();

        let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
        let app_state = AppState::new(ActivityStore::seeded(), static_dir);

        let listener = TcpListener::bind(TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;
        info!("Listening on {addr}");

        tokio::spawn(clubhouse::serve(App::new(app_state.clone(), listener)));

        let http_client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(TestApp {
            addr,
            app_state,
            http_client,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get_activities(&self) -> Result<Response> {
        let res = self.http_client.get(self.url("/activities")).send().await?;
        Ok(res)
    }

    pub async fn post_signup(&self, activity: &str, email: &str) -> Result<Response> {
        let res = self
            .http_client
            .post(self.url(&format!("/activities/{activity}/signup")))
            .query(&[("email", email)])
            .send()
            .await?;
        Ok(res)
    }

    pub async fn delete_participant(&self, activity: &str, email: &str) -> Result<Response> {
        let res = self
            .http_client
            .delete(self.url(&format!("/activities/{activity}/participants")))
            .query(&[("email", email)])
            .send()
            .await?;
        Ok(res)
    }

    pub async fn is_participant(&self, activity: &str, email: &str) -> bool {
        self.app_state
            .activity_store
            .get(activity)
            .await
            .is_some_and(|a| a.has_participant(email))
    }
}
