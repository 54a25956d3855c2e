//! HTTP client for the guide API.
//!
//! One long-lived [`GuideClient`] serves the whole application: catalogue
//! fetches, authentication, account reads and writes, and the favourite
//! sync. All methods are async and return [`ApiError`]; a 401/403 maps to
//! [`ApiError::Unauthorized`] so the session layer can log the user out.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

use putnik_core::Attraction;

use crate::error::ApiError;
use crate::normalize::map_place;
use crate::record::{FavoriteRecord, LoginResponse, PlaceRecord, PlacesResponse, UserRecord};

/// Production base URL of the guide API.
pub const DEFAULT_BASE_URL: &str = "https://api.heimseweb.ru/api/v1";

/// Default user agent for guide API requests.
pub const DEFAULT_USER_AGENT: &str = "putnik-client/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Role assumed when the server omits one from a login response.
const DEFAULT_ROLE: &str = "user";

/// Error type for [`GuideClient`] construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the underlying HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration for [`GuideClient`].
#[derive(Debug, Clone)]
pub struct GuideClientConfig {
    /// Base URL of the API, without a trailing slash requirement.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for GuideClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl GuideClientConfig {
    /// Create a configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// An authenticated session as returned by [`GuideClient::login`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Server-assigned role; `"user"` when the server omitted one.
    pub role: String,
}

/// A validated registration request.
///
/// Construction enforces the same rules the interactive form applies, so
/// obviously bad requests never reach the network.
#[derive(Debug, Clone)]
pub struct Registration {
    name: String,
    username: String,
    password: String,
}

/// Errors returned by [`Registration::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The display name was empty.
    #[error("name is required")]
    MissingName,
    /// The login was empty.
    #[error("username is required")]
    MissingUsername,
    /// The password was shorter than [`MIN_PASSWORD_LEN`].
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

impl Registration {
    /// Validate and construct a registration request.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, RegistrationError> {
        let name = name.into().trim().to_owned();
        let username = username.into().trim().to_owned();
        let password = password.into();
        if name.is_empty() {
            return Err(RegistrationError::MissingName);
        }
        if username.is_empty() {
            return Err(RegistrationError::MissingUsername);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort);
        }
        Ok(Self {
            name,
            username,
            password,
        })
    }
}

/// A validated profile update for `PUT /users/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// Display name.
    pub name: String,
    /// Contact phone; empty clears it.
    pub phone: String,
    /// Contact email; empty clears it.
    pub email: String,
}

/// Errors returned by [`ProfileUpdate::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileValidationError {
    /// The display name was empty.
    #[error("name is required")]
    MissingName,
    /// The email does not look like an address.
    #[error("email does not look valid")]
    InvalidEmail,
    /// The phone has fewer than seven digits.
    #[error("phone does not look valid")]
    InvalidPhone,
}

impl ProfileUpdate {
    /// Validate and construct a profile update. Empty email and phone are
    /// allowed; non-empty values must look plausible.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ProfileValidationError> {
        let name = name.into().trim().to_owned();
        let phone = phone.into().trim().to_owned();
        let email = email.into().trim().to_owned();
        if name.is_empty() {
            return Err(ProfileValidationError::MissingName);
        }
        if !email.is_empty() && !is_plausible_email(&email) {
            return Err(ProfileValidationError::InvalidEmail);
        }
        if !phone.is_empty() && phone.chars().filter(char::is_ascii_digit).count() < 7 {
            return Err(ProfileValidationError::InvalidPhone);
        }
        Ok(Self { name, phone, email })
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.split('.').count() >= 2
                && domain.split('.').all(|segment| !segment.is_empty())
        }
        _ => false,
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    username: &'a str,
    password: &'a str,
    favorites: [FavoriteRecord; 0],
    role: &'a str,
}

#[derive(Serialize)]
struct FavoritesBody<'a> {
    favorites: &'a [FavoriteRecord],
}

/// Client for the guide API.
///
/// # Examples
///
/// ```no_run
/// use putnik_api::{GuideClient, GuideClientConfig};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GuideClient::with_config(GuideClientConfig::new("http://localhost:8080"))?;
/// let attractions = client.fetch_attractions(None).await?;
/// println!("{} attractions", attractions.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GuideClient {
    client: Client,
    config: GuideClientConfig,
}

impl GuideClient {
    /// Create a client against the production API.
    ///
    /// # Errors
    /// Returns an error if the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(GuideClientConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: GuideClientConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration the client was built with.
    #[must_use]
    pub fn config(&self) -> &GuideClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|source| ApiError::Network {
            url: url.to_owned(),
            source,
        })?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            status if !status.is_success() => Err(ApiError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            }),
            _ => Ok(response),
        }
    }

    /// Fetch the raw place batch.
    ///
    /// # Errors
    /// [`ApiError::Unauthorized`] on 401/403; other failures as documented
    /// on [`ApiError`].
    pub async fn fetch_places(&self, token: Option<&str>) -> Result<Vec<PlaceRecord>, ApiError> {
        let url = self.endpoint("/places");
        let response = Self::send(
            Self::authorized(self.client.get(&url), token),
            &url,
        )
        .await?;
        let places: PlacesResponse = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let records = places.into_records();
        log::debug!("fetched {} place records from {url}", records.len());
        Ok(records)
    }

    /// Fetch places and normalize them into attractions, skipping records
    /// without a usable name.
    ///
    /// # Errors
    /// Same as [`GuideClient::fetch_places`].
    pub async fn fetch_attractions(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<Attraction>, ApiError> {
        let records = self.fetch_places(token).await?;
        Ok(records.iter().filter_map(map_place).collect())
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    /// [`ApiError::LoginRejected`] when the server answers without a
    /// token, with the server's message when it gave one.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, ApiError> {
        let url = self.endpoint("/login");
        let response = self
            .client
            .post(&url)
            .json(&LoginBody {
                username: username.trim(),
                password,
            })
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body: LoginResponse = response.json().await.unwrap_or_default();
        session_from_login(status, body)
    }

    /// Create an account. The caller switches to [`GuideClient::login`]
    /// afterwards; registration does not log in.
    ///
    /// # Errors
    /// [`ApiError::Status`] with the server's code on rejection.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let url = self.endpoint("/register");
        let body = RegisterBody {
            name: &registration.name,
            username: &registration.username,
            password: &registration.password,
            favorites: [],
            role: DEFAULT_ROLE,
        };
        Self::send(self.client.post(&url).json(&body), &url).await?;
        Ok(())
    }

    /// Fetch the account record.
    ///
    /// # Errors
    /// [`ApiError::Unauthorized`] on 401/403; other failures as documented
    /// on [`ApiError`].
    pub async fn fetch_user(&self, user_id: &str, token: &str) -> Result<UserRecord, ApiError> {
        let url = self.endpoint(&format!("/users/{user_id}"));
        let response = Self::send(
            Self::authorized(self.client.get(&url), Some(token)),
            &url,
        )
        .await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Update the account's profile fields.
    ///
    /// # Errors
    /// [`ApiError::Unauthorized`] on 401/403; other failures as documented
    /// on [`ApiError`].
    pub async fn update_profile(
        &self,
        user_id: &str,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/users/{user_id}"));
        Self::send(
            Self::authorized(self.client.put(&url).json(update), Some(token)),
            &url,
        )
        .await?;
        Ok(())
    }

    /// Replace the account's favourite set on the server.
    ///
    /// Used by the session layer as a best-effort side sync: the caller
    /// does not await completion and discards failures.
    ///
    /// # Errors
    /// [`ApiError::Unauthorized`] on 401/403; other failures as documented
    /// on [`ApiError`].
    pub async fn sync_favorites(
        &self,
        user_id: &str,
        token: &str,
        favorites: &[FavoriteRecord],
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/users/{user_id}"));
        let body = FavoritesBody { favorites };
        Self::send(
            Self::authorized(self.client.put(&url).json(&body), Some(token)),
            &url,
        )
        .await?;
        Ok(())
    }
}

/// Turn a login response into a session, mirroring the interactive flow:
/// any 2xx answer that carries a token wins; everything else is rejected
/// with the server's message when one was given.
fn session_from_login(status: StatusCode, body: LoginResponse) -> Result<AuthSession, ApiError> {
    match body.token {
        Some(token) if status.is_success() => Ok(AuthSession {
            token,
            role: body.role.unwrap_or_else(|| DEFAULT_ROLE.to_owned()),
        }),
        _ => {
            let message = body
                .message
                .unwrap_or_else(|| format!("неверные данные для входа (код {})", status.as_u16()));
            Err(ApiError::LoginRejected(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = GuideClient::with_config(GuideClientConfig::new("http://api.example.com/"))
            .expect("client should build");
        assert_eq!(client.endpoint("/places"), "http://api.example.com/places");
    }

    #[test]
    fn config_builder_pattern() {
        let config = GuideClientConfig::new("http://example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("test-agent/1.0");
        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn login_with_token_builds_a_session() {
        let body = LoginResponse {
            token: Some("jwt".to_owned()),
            role: None,
            message: None,
        };
        let session = session_from_login(StatusCode::OK, body).expect("token present");
        assert_eq!(session.token, "jwt");
        assert_eq!(session.role, "user");
    }

    #[test]
    fn login_without_token_is_rejected_with_the_server_message() {
        let body = LoginResponse {
            token: None,
            role: None,
            message: Some("неверный пароль".to_owned()),
        };
        let err = session_from_login(StatusCode::OK, body).expect_err("no token");
        assert!(matches!(err, ApiError::LoginRejected(m) if m == "неверный пароль"));
    }

    #[test]
    fn login_failure_without_message_reports_the_status() {
        let err = session_from_login(StatusCode::UNAUTHORIZED, LoginResponse::default())
            .expect_err("no token");
        assert!(matches!(err, ApiError::LoginRejected(m) if m.contains("401")));
    }

    #[rstest]
    #[case("", "user", "pass1234", RegistrationError::MissingName)]
    #[case("Анна", "  ", "pass1234", RegistrationError::MissingUsername)]
    #[case("Анна", "anna", "short", RegistrationError::PasswordTooShort)]
    fn registration_validation(
        #[case] name: &str,
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: RegistrationError,
    ) {
        assert_eq!(
            Registration::new(name, username, password).unwrap_err(),
            expected
        );
    }

    #[test]
    fn registration_trims_fields() {
        let registration = Registration::new(" Анна ", " anna ", "password").expect("valid");
        assert_eq!(registration.name, "Анна");
        assert_eq!(registration.username, "anna");
    }

    #[rstest]
    #[case("anna@example.com", true)]
    #[case("anna@mail.example.com", true)]
    #[case("anna", false)]
    #[case("anna@", false)]
    #[case("@example.com", false)]
    #[case("anna@example", false)]
    #[case("an na@example.com", false)]
    fn email_plausibility(#[case] email: &str, #[case] plausible: bool) {
        assert_eq!(is_plausible_email(email), plausible);
    }

    #[rstest]
    #[case("", "", true)] // both optional
    #[case("+7 (863) 240-00-00", "", true)]
    #[case("123", "", false)]
    #[case("", "nonsense", false)]
    fn profile_update_validation(#[case] phone: &str, #[case] email: &str, #[case] ok: bool) {
        assert_eq!(ProfileUpdate::new("Анна", phone, email).is_ok(), ok);
    }
}
