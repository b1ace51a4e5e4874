//! Bearer credentials and the login flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::client::ApiClient;
use crate::error::{ApiError, CoreError};
use crate::model::{User, UserId};

/// Opaque bearer token issued by `/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Body of a successful `/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// A logged-in user and the credential obtained for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "access_token")]
    pub credential: Credential,
    pub user: User,
}

impl Session {
    pub fn new(credential: Credential, user: User) -> Self {
        Self { credential, user }
    }

    /// The user id, which every mood/journal route needs.
    pub fn user_id(&self) -> Result<UserId, CoreError> {
        self.user.id.ok_or_else(|| CoreError::MissingUserId {
            email: self.user.email.clone(),
        })
    }
}

/// Exchange email and password for a session.
///
/// The token endpoint does not return the user, so the user list is searched
/// for the login email. When absent, a placeholder derived from the email
/// (without an id) is used.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Session, ApiError> {
    let token = client.request_token(email, password).await?;
    let credential = Credential::bearer(token.access_token);
    let users = client.list_users(&credential).await?;
    let user = resolve_user(users, email);
    tracing::info!(email, user_id = ?user.id, "logged in");
    Ok(Session::new(credential, user))
}

pub fn resolve_user(users: Vec<User>, email: &str) -> User {
    users
        .into_iter()
        .find(|u| u.email == email)
        .unwrap_or_else(|| User::from_email(email))
}
