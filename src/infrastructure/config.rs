use serde::Deserialize;
use std::net::SocketAddr;

const DEFAULT_CONFIG_FILE: &str = "config/server";
const ENV_PREFIX: &str = "VIZO";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Brotli-compress responses for clients that accept it
    pub compress_responses: bool,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

pub fn load_config() -> anyhow::Result<AppConfig> {
    load_config_from(DEFAULT_CONFIG_FILE)
}

/// Defaults, then the optional file, then `VIZO_SERVER__*` environment overrides
pub fn load_config_from(path: &str) -> anyhow::Result<AppConfig> {
    load_config_with_env(path, environment())
}

/// `VIZO_SERVER__PORT` maps to `server.port`
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load_config_with_env(path: &str, env: config::Environment) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.compress_responses", true)?
        .add_source(config::File::with_name(path).required(false))
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config_from("config/does-not-exist").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.compress_responses);
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn test_env_overrides() {
        let config = load_config_with_env(
            "config/does-not-exist",
            env(&[
                ("VIZO_SERVER__PORT", "9090"),
                ("VIZO_SERVER__COMPRESS_RESPONSES", "false"),
            ]),
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert!(!config.server.compress_responses);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_env_double_underscore_prefix_ignored() {
        let config =
            load_config_with_env("config/does-not-exist", env(&[("VIZO__SERVER__PORT", "9191")]))
                .unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_bind_addr() {
        let settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 9090,
            compress_responses: false,
        };
        assert_eq!(settings.bind_addr().unwrap(), "127.0.0.1:9090".parse().unwrap());

        let settings = ServerSettings {
            host: "not a host".to_string(),
            ..settings
        };
        assert!(settings.bind_addr().is_err());
    }
}
