use serde::Serialize;
use crate::config::{self, EnvSource};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Greeting {
    pub message: String,
    pub env: String,
    pub pod_name: String
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecretInfo {
    pub api_key: String,
    pub db_password: String
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppInfo {
    pub greeting: Greeting,
    pub secrets: SecretInfo
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Status {
    pub status: &'static str
}

impl Greeting {

    pub fn from_env(env: &dyn EnvSource) -> Self {

        Greeting {
            message: env.get_or(config::APP_MESSAGE, config::DEFAULT_MESSAGE),
            env: env.get_or(config::APP_MODE, config::DEFAULT_MODE),
            pod_name: env.get_or(config::HOSTNAME, config::DEFAULT_POD_NAME)
        }

    }

}

impl SecretInfo {

    pub fn from_env(env: &dyn EnvSource) -> Self {

        SecretInfo {
            api_key: env.get_or(config::SECRET_API_KEY, config::DEFAULT_SECRET),
            db_password: env.get_or(config::SECRET_DB_PASSWORD, config::DEFAULT_SECRET)
        }

    }

}

impl AppInfo {

    pub fn from_env(env: &dyn EnvSource) -> Self {

        AppInfo {
            greeting: Greeting::from_env(env),
            secrets: SecretInfo::from_env(env)
        }

    }

}

impl Status {

    pub const READY: Status = Status { status: "ok" };
    pub const ALIVE: Status = Status { status: "alive" };

}
