//! Who the user is.
//!
//! The chat backend trusts whatever `userId` the client sends, so the
//! identity comes from the LINE profile API using the access token of a
//! completed LINE Login. Without a token the provider can only hand out
//! the login URL.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IdentityError;

pub const LINE_PROFILE_URL: &str = "https://api.line.me/v2/profile";
pub const LINE_AUTHORIZE_URL: &str = "https://access.line.me/oauth2/v2.1/authorize";

/// Profile of the logged-in user. Also the body of `POST /register-user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

/// Outcome of establishing identity on view mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedIn(Profile),
    /// The user must visit this URL and come back with a token.
    LoginRequired { login_url: String },
}

#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn init(&self) -> Result<(), IdentityError> {
        Ok(())
    }

    fn is_logged_in(&self) -> bool;

    async fn profile(&self) -> Result<Profile, IdentityError>;

    fn login_url(&self) -> Result<String, IdentityError>;
}

/// Initialise the provider and fetch the profile, or return the login URL
/// when there is no session yet.
pub async fn establish(provider: &dyn ProfileProvider) -> Result<Session, IdentityError> {
    provider.init().await?;

    if !provider.is_logged_in() {
        return Ok(Session::LoginRequired {
            login_url: provider.login_url()?,
        });
    }

    Ok(Session::LoggedIn(provider.profile().await?))
}

/// LINE Login backed provider.
pub struct LineProfileProvider {
    http: reqwest::Client,
    liff_id: String,
    access_token: Option<String>,
    redirect_uri: Option<String>,
    profile_url: String,
}

impl LineProfileProvider {
    pub fn new(liff_id: &str, access_token: Option<String>, redirect_uri: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            liff_id: liff_id.to_string(),
            access_token,
            redirect_uri,
            profile_url: LINE_PROFILE_URL.to_string(),
        }
    }

    /// Point profile requests somewhere other than the LINE API.
    pub fn with_profile_url(mut self, url: &str) -> Self {
        self.profile_url = url.to_string();
        self
    }

    /// The LINE Login channel ID: the LIFF ID up to its first `-`.
    pub fn channel_id(&self) -> &str {
        self.liff_id
            .split_once('-')
            .map_or(self.liff_id.as_str(), |(channel, _)| channel)
    }
}

#[async_trait]
impl ProfileProvider for LineProfileProvider {
    fn is_logged_in(&self) -> bool {
        self.access_token.is_some()
    }

    async fn profile(&self) -> Result<Profile, IdentityError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(IdentityError::NotLoggedIn)?;

        let response = self
            .http
            .get(&self.profile_url)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let profile: Profile = response.json().await?;
        debug!(user_id = %profile.user_id, "LINE profile loaded");
        Ok(profile)
    }

    fn login_url(&self) -> Result<String, IdentityError> {
        let state = uuid::Uuid::new_v4().simple().to_string();
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.channel_id()),
            ("state", state.as_str()),
            ("scope", "profile openid"),
        ];
        if let Some(redirect_uri) = &self.redirect_uri {
            params.push(("redirect_uri", redirect_uri.as_str()));
        }

        reqwest::Url::parse_with_params(LINE_AUTHORIZE_URL, &params)
            .map(String::from)
            .map_err(|e| IdentityError::LoginUrl(e.to_string()))
    }
}

/// Fixed identity, for local runs and tests.
#[derive(Debug, Clone)]
pub struct StaticProfileProvider {
    profile: Option<Profile>,
    login_url: String,
}

impl StaticProfileProvider {
    pub fn logged_in(profile: Profile) -> Self {
        Self {
            profile: Some(profile),
            login_url: String::new(),
        }
    }

    pub fn logged_out(login_url: &str) -> Self {
        Self {
            profile: None,
            login_url: login_url.to_string(),
        }
    }
}

#[async_trait]
impl ProfileProvider for StaticProfileProvider {
    fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }

    async fn profile(&self) -> Result<Profile, IdentityError> {
        self.profile.clone().ok_or(IdentityError::NotLoggedIn)
    }

    fn login_url(&self) -> Result<String, IdentityError> {
        Ok(self.login_url.clone())
    }
}
