use std::env;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  server:   host={}, port={}", self.server.host, self.server.port);
        tracing::info!(
            "  auth:     admin_token={}",
            if self.auth.admin_token.is_empty() { "(unset — writes disabled)" } else { "(set)" }
        );
        tracing::info!("  catalog:  list_cap={}", self.catalog.list_cap);
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 8000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Bearer token guarding the write routes. When empty, every write is
    /// rejected rather than allowed through.
    pub admin_token: String,
}

impl AuthConfig {
    fn from_env() -> Self {
        Self {
            admin_token: env_or("ADMIN_TOKEN", ""),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Cap on the number of records a list query returns. The list endpoint
    /// has no pagination; this bound is part of the documented contract.
    pub list_cap: usize,
}

impl CatalogConfig {
    fn from_env() -> Self {
        Self {
            list_cap: env_usize("CATALOG_LIST_CAP", 1000),
        }
    }
}
