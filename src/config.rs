#[cfg(test)]
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use crate::error::ServerError;

// variables read on every request to `/`
pub const APP_MESSAGE: &str = "APP_MESSAGE";
pub const APP_MODE: &str = "APP_MODE";
pub const HOSTNAME: &str = "HOSTNAME";
pub const SECRET_API_KEY: &str = "SECRET_API_KEY";
pub const SECRET_DB_PASSWORD: &str = "SECRET_DB_PASSWORD";

pub const DEFAULT_MESSAGE: &str = "Hello from Kubernetes!!!";
pub const DEFAULT_MODE: &str = "dev";
pub const DEFAULT_POD_NAME: &str = "unknown";
pub const DEFAULT_SECRET: &str = "<unset>";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_LOG_PATH: &str = "./requests.log";

/// Where handlers look up their configuration strings.
///
/// Lookups happen per request, so implementations must not cache.
pub trait EnvSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {

        // a non-unicode value is treated like an unset one
        std::env::var(key).ok()

    }
}

/// Fixed set of variables, used where the process environment must not leak in.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct StaticEnv {
    vars: HashMap<String, String>
}

#[cfg(test)]
impl StaticEnv {

    pub fn new() -> Self {

        Self::default()

    }

    pub fn with(mut self, key: &str, value: &str) -> Self {

        self.vars.insert(key.to_string(), value.to_string());
        self

    }

}

#[cfg(test)]
impl EnvSource for StaticEnv {
    fn get(&self, key: &str) -> Option<String> {

        self.vars.get(key).cloned()

    }
}

/// Startup settings, read once before binding.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_path: Option<String>
}

impl ServerConfig {

    pub fn from_env() -> Result<Self, ServerError> {

        Self::from_source(&ProcessEnv)

    }

    pub fn from_source(env: &dyn EnvSource) -> Result<Self, ServerError> {

        let host = env.get_or("HOST", DEFAULT_HOST);
        let port = env.get_or("PORT", DEFAULT_PORT);

        let ip: IpAddr = host.trim().parse()
            .map_err(|_| ServerError::InvalidHost(host.clone()))?;
        let port: u16 = port.trim().parse()
            .map_err(|_| ServerError::InvalidPort(port.clone()))?;

        // empty LOG_PATH turns the request log file off
        let log_path = match env.get("LOG_PATH") {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(path),
            None => Some(DEFAULT_LOG_PATH.to_string())
        };

        Ok(ServerConfig {
            addr: SocketAddr::new(ip, port),
            log_path
        })

    }

}
