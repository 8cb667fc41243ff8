use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use color_eyre::Result;
use tokio::net::TcpListener;

use crate::{
    api::{
        direct::{self, DirectState},
        proxy::{self, ProxyState, RemoteDevice},
    },
    config::{AppConfig, Mode},
    controller::WateringController,
    error::WateringError,
    log_info, relay,
};

/// Application.
pub struct App {
    /// Startup configuration
    pub config: AppConfig,
    /// Routes for the configured mode
    pub router: Router,
    /// Only present in direct mode; switched off on shutdown
    pub controller: Option<Arc<WateringController>>,
}

impl App {
    /// Constructs a new instance of [`App`] for the configured mode.
    pub fn new(config: AppConfig) -> Result<Self> {
        match config.mode {
            Mode::Direct => {
                let controller = Arc::new(WateringController::new(relay::from_config(&config)));
                let router = direct::router(DirectState::new(
                    controller.clone(),
                    config.default_duration,
                ));

                Ok(Self { config, router, controller: Some(controller) })
            }
            Mode::Proxy => {
                let base_url = config.remote_base_url.clone().ok_or_else(|| {
                    WateringError::Configuration(
                        "WATERING_API_BASE_URL must be set in proxy mode".to_string(),
                    )
                })?;

                log_info!("📡 Proxying watering requests to {}", base_url);

                let device = Arc::new(RemoteDevice::new(base_url));
                let router = proxy::router(ProxyState::new(device, config.default_duration));

                Ok(Self { config, router, controller: None })
            }
        }
    }

    /// Serve until Ctrl-C or SIGTERM, then release the relay.
    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = TcpListener::bind(addr).await?;

        log_info!("🚀 Listening on http://{} ({} mode)", addr, self.config.mode);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        if let Some(controller) = &self.controller {
            controller.shutdown();
        }

        log_info!("👋 Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    log_info!("🛑 Shutdown signal received");
}
