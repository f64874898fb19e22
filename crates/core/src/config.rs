use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `OMNICREATOR__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub hub: HubConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

// Default functions
fn default_node_id() -> String {
    "hub-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_enabled() -> bool {
    true
}
fn default_metrics_port() -> u16 {
    9091
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            port: default_metrics_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            hub: HubConfig::default(),
        }
    }
}

// ─── Hub Config ─────────────────────────────────────────────────────────────

/// Page-data behaviour of the hub.
#[derive(Debug, Clone, Deserialize)]
pub struct HubConfig {
    /// Populate the in-memory repositories with demo records on startup.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
    /// How many content items the dashboard lists as "recent".
    #[serde(default = "default_recent_content_limit")]
    pub recent_content_limit: usize,
    #[serde(default = "default_demo_user_email")]
    pub demo_user_email: String,
    #[serde(default = "default_demo_user_name")]
    pub demo_user_name: String,
}

fn default_seed_demo_data() -> bool { true }
fn default_recent_content_limit() -> usize { 5 }
fn default_demo_user_email() -> String { "creator@omnicreator.local".to_string() }
fn default_demo_user_name() -> String { "Demo Creator".to_string() }

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            recent_content_limit: default_recent_content_limit(),
            demo_user_email: default_demo_user_email(),
            demo_user_name: default_demo_user_name(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("OMNICREATOR")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
