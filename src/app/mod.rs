use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::AppConfig, model::ActivityStore, Result};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    /// Seeds a fresh `ActivityStore` and binds the listener described by `config`.
    pub async fn build_from_config(config: &AppConfig) -> Result<Self> {
        let app_state = AppState::new(
            ActivityStore::seeded(),
            config.web_config.static_dir.clone(),
        );

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        Ok(App::new(app_state, listener))
    }
}

pub struct InternalState {
    pub activity_store: ActivityStore,
    pub static_dir: PathBuf,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(activity_store: ActivityStore, static_dir: PathBuf) -> Self {
        AppState(Arc::new(InternalState {
            activity_store,
            static_dir,
        }))
    }
}
