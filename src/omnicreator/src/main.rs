//! OmniCreator hub: the page-data API behind the creator dashboard.
//!
//! Main entry point that wires the session, repositories and page store,
//! then starts the server.

mod server;

use clap::Parser;
use creator_core::config::AppConfig;
use creator_management::seed::{demo_data, DemoData};
use creator_management::{
    AuthProvider, HubStore, LocalAuthProvider, Repositories, SessionContext,
};
use server::HubServer;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "omnicreator")]
#[command(about = "Page-data API for the OmniCreator creator hub")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "OMNICREATOR__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "OMNICREATOR__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Metrics port (overrides config)
    #[arg(long, env = "OMNICREATOR__METRICS__PORT")]
    metrics_port: Option<u16>,

    /// Start with empty repositories instead of the demo records
    #[arg(long, default_value_t = false)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "omnicreator=info,creator_management=info,tower_http=info".into()
            }),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("OmniCreator hub starting up");

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(port) = cli.metrics_port {
        config.metrics.port = port;
    }
    if cli.no_seed {
        config.hub.seed_demo_data = false;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        seed_demo_data = config.hub.seed_demo_data,
        "Configuration loaded"
    );

    // Session
    let provider = Arc::new(LocalAuthProvider::new(LocalAuthProvider::demo_user(
        &config.hub.demo_user_email,
        &config.hub.demo_user_name,
    )));
    let session = Arc::new(SessionContext::mount(provider.clone()));
    provider.login().await?;

    // Records
    let data = if config.hub.seed_demo_data {
        demo_data(&config.hub.demo_user_name, &config.hub.demo_user_email)?
    } else {
        DemoData::default()
    };
    let settings = data.settings.clone();
    let store = Arc::new(HubStore::new(
        Repositories::in_memory(data),
        settings,
        session,
        config.hub.recent_content_limit,
    ));

    let server = HubServer::new(config.clone(), store);

    if config.metrics.enabled {
        if let Err(e) = server.start_metrics() {
            error!(error = %e, "Failed to start metrics exporter");
        }
    }

    info!("OmniCreator hub is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    server.start_http().await?;

    Ok(())
}
