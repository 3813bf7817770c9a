//! Backend calls exchanging a wallet code for a session token.

use crate::error::LoginError;
use serde::{Deserialize, Serialize};

pub const CREATE_USER_SUCCESS: &str = "Kullanıcı başarıyla oluşturuldu";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserStatus {
    Success,
    RegistrationRequired,
    InvalidCode,
    Unknown,
}

impl UserStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "başarılı" => UserStatus::Success,
            "başarısız" => UserStatus::RegistrationRequired,
            "Geçersiz Cüzdan Kodu" => UserStatus::InvalidCode,
            _ => UserStatus::Unknown,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CheckUserResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl CheckUserResponse {
    pub fn user_status(&self) -> UserStatus {
        UserStatus::parse(&self.status)
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
    pub surname: String,
    pub public_key: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CreatedUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub public_key: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CreateUserResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<CreatedUser>,
}

impl CreateUserResponse {
    /// The created user when the backend confirmed the registration and
    /// handed out a token.
    pub fn accepted(self) -> Option<(CreatedUser, String)> {
        if self.message != CREATE_USER_SUCCESS {
            return None;
        }
        let user = self.user?;
        let token = user.token.clone().filter(|t| !t.is_empty())?;
        Some((user, token))
    }
}

pub trait AuthApi: Send + Sync {
    fn check_user(&self, wallet_code: &str) -> Result<CheckUserResponse, LoginError>;
    fn create_user(&self, request: &CreateUserRequest) -> Result<CreateUserResponse, LoginError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpAuthApi;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use crate::config::ApiConfig;
    use serde::de::DeserializeOwned;

    pub struct HttpAuthApi {
        config: ApiConfig,
        client: reqwest::blocking::Client,
    }

    impl HttpAuthApi {
        pub fn new(config: ApiConfig) -> Self {
            Self {
                config,
                client: reqwest::blocking::Client::new(),
            }
        }

        fn read_json<T: DeserializeOwned>(
            url: &str,
            response: reqwest::blocking::Response,
        ) -> Result<T, LoginError> {
            let status = response.status();
            if !status.is_success() {
                log::warn!("{url} returned HTTP {status}");
                return Err(LoginError::Http {
                    status: status.as_u16(),
                });
            }
            response
                .json::<T>()
                .map_err(|err| LoginError::MalformedResponse(err.to_string()))
        }
    }

    impl AuthApi for HttpAuthApi {
        fn check_user(&self, wallet_code: &str) -> Result<CheckUserResponse, LoginError> {
            let url = self.config.check_user_url();
            let response = self
                .client
                .get(&url)
                .query(&[("public_key", wallet_code)])
                .send()
                .map_err(|err| LoginError::Transport(err.to_string()))?;
            Self::read_json(&url, response)
        }

        fn create_user(
            &self,
            request: &CreateUserRequest,
        ) -> Result<CreateUserResponse, LoginError> {
            let url = self.config.create_user_url();
            let response = self
                .client
                .post(&url)
                .json(request)
                .send()
                .map_err(|err| LoginError::Transport(err.to_string()))?;
            Self::read_json(&url, response)
        }
    }
}
