// Configuration module entry point
// Layered configuration: defaults, optional devserve.toml, DEVSERVE_* env
// vars, then command-line overrides applied last.

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from an optional config file (without extension)
    /// plus environment. Nested keys use `__` in the environment, e.g.
    /// `DEVSERVE_SERVER__PORT=3000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DEVSERVE").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    /// Load from the default "devserve" config file name.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("devserve")
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&mut self, host: Option<&str>, port: Option<u16>) {
        if let Some(host) = host {
            self.server.host = host.to_string();
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            logging: LoggingConfig { access_log: true },
        }
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let mut cfg = base_config();
        cfg.apply_overrides(Some("0.0.0.0"), Some(3000));
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
    }

    #[test]
    fn absent_overrides_keep_loaded_values() {
        let mut cfg = base_config();
        cfg.apply_overrides(None, None);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let cfg = base_config();
        assert_eq!(cfg.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let mut cfg = base_config();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.socket_addr().is_err());
    }
}
