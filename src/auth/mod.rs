//! Auth provider client and session handling.
//!
//! Sign-in and account creation go to the external identity provider; the
//! resulting session is an explicit value passed into every operation that
//! needs an actor. There is no ambient current-user singleton.

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{NewUserProfile, DEFAULT_PROFILE_PICTURE};

/// An authenticated session. The `user_id` is the actor for every like,
/// comment and post issued while it is alive.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub id_token: String,
}

/// Credentials payload for the provider's password endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Provider response for both sign-in and sign-up.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    local_id: String,
    id_token: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Provider error envelope.
#[derive(Debug, Deserialize)]
struct AuthErrorResponse {
    error: AuthErrorBody,
}

#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    message: String,
}

/// Client for the identity provider's REST endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl AuthClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("HTTP client build error: {}", e)))?;

        Ok(Self::with_base_url(http, config.auth_url.clone(), config.auth_key.clone()))
    }

    /// Create a client against an explicit base URL (used by tests).
    pub fn with_base_url(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.password_request("accounts:signInWithPassword", email, password)
            .await
    }

    /// Create a new account with email and password.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.password_request("accounts:signUp", email, password)
            .await
    }

    async fn password_request(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        let mut url = format!("{}/{}", self.base_url, endpoint);
        if let Some(key) = &self.api_key {
            url = format!("{}?key={}", url, key);
        }

        let body = PasswordCredentials {
            email,
            password,
            return_secure_token: true,
        };

        let response = self.http.post(url).json(&body).send().await?;
        if !response.status().is_success() {
            let message = response
                .json::<AuthErrorResponse>()
                .await
                .map(|e| e.error.message)
                .unwrap_or_else(|_| "provider rejected the request".to_string());
            tracing::warn!("Auth provider error on {}: {}", endpoint, message);
            return Err(ApiError::Auth(message));
        }

        let auth: AuthResponse = response.json().await?;
        Ok(Session {
            user_id: auth.local_id,
            email: auth.email,
            display_name: auth.display_name,
            id_token: auth.id_token,
        })
    }
}

/// Registration form collected by the sign-up screen.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub nick: String,
    pub name: String,
    pub first_surname: String,
    pub second_surname: String,
}

impl RegistrationForm {
    /// Validate the form. Runs before any network call: a mismatched
    /// confirmation or a missing field never reaches the provider.
    pub fn validate(&self) -> Result<(), ApiError> {
        let required = [
            &self.email,
            &self.password,
            &self.confirm_password,
            &self.nick,
            &self.name,
            &self.first_surname,
            &self.second_surname,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ApiError::Validation(
                "All registration fields are required".to_string(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::Validation(
                "Passwords do not match".to_string(),
            ));
        }
        Ok(())
    }
}

/// Full registration flow: validate, create the provider account, then store
/// the profile record the feed resolves nicknames from.
pub async fn register(
    auth: &AuthClient,
    api: &ApiClient,
    form: &RegistrationForm,
) -> Result<Session, ApiError> {
    form.validate()?;

    let session = auth.sign_up(&form.email, &form.password).await?;

    let profile = NewUserProfile {
        user_id: session.user_id.clone(),
        nick: form.nick.trim().to_string(),
        name: form.name.trim().to_string(),
        surnames: format!("{} {}", form.first_surname.trim(), form.second_surname.trim()),
        profile_picture: DEFAULT_PROFILE_PICTURE.to_string(),
    };
    api.create_user(&profile).await?;

    tracing::info!("Registered user {}", session.user_id);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        RegistrationForm {
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
            confirm_password: "secret123".to_string(),
            nick: "ana".to_string(),
            name: "Ana".to_string(),
            first_surname: "García".to_string(),
            second_surname: "López".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut form = filled_form();
        form.confirm_password = "different".to_string();
        let err = form.validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.is_local());
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut form = filled_form();
        form.nick = "  ".to_string();
        assert!(matches!(form.validate(), Err(ApiError::Validation(_))));
    }
}
