//! Where the backend lives.

pub const DEFAULT_API_HOST: &str = "http://goktugtunc.com:3434";
pub const API_HOST_ENV: &str = "STELLAR_ACADEMY_API";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

impl ApiConfig {
    pub fn new(host: &str) -> Self {
        Self {
            host: normalize_host(host).unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
        }
    }

    pub fn check_user_url(&self) -> String {
        format!("{}/check_user", self.host)
    }

    pub fn create_user_url(&self) -> String {
        format!("{}/create_user", self.host)
    }
}

fn normalize_host(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn host_from_build_env() -> Option<String> {
    option_env!("STELLAR_ACADEMY_API").and_then(normalize_host)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_host() -> String {
    std::env::var(API_HOST_ENV)
        .ok()
        .and_then(|v| normalize_host(&v))
        .or_else(host_from_build_env)
        .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
}

#[cfg(target_arch = "wasm32")]
fn default_host() -> String {
    host_from_build_env().unwrap_or_else(|| DEFAULT_API_HOST.to_string())
}
