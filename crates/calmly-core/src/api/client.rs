//! reqwest implementation of the backend contract.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::auth::{Credential, TokenResponse};
use super::WellnessApi;
use crate::error::ApiError;
use crate::model::{
    JournalEntry, JournalId, JournalUpdate, MoodEntry, MoodId, MoodUpdate, NewJournal, NewMood,
    NewUser, User, UserId, UserUpdate,
};

/// HTTP client for the Calmly backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: Client,
}

impl ApiClient {
    /// Create a client with reqwest's default timeouts.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, Client::builder())
    }

    /// Create a client whose requests fail after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Self::build(base_url, Client::builder().timeout(timeout))
    }

    fn build(base_url: &str, builder: reqwest::ClientBuilder) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::BaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::BaseUrl {
                url: base_url.to_string(),
                message: "not an http(s) base URL".into(),
            });
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = Self::execute(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        Self::execute(request).await.map(|_| ())
    }

    async fn execute(request: RequestBuilder) -> Result<String, ApiError> {
        let resp = request.send().await?;
        let status = resp.status();
        let url = resp.url().path().to_string();
        let body = resp.text().await?;
        tracing::debug!(%status, path = %url, "backend response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    // Auth

    /// `POST /auth/login` with an OAuth2 password form.
    pub async fn request_token(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let request = self
            .http_client
            .post(self.url("/auth/login"))
            .form(&[("username", email), ("password", password)]);
        self.send(request).await
    }

    /// `POST /auth/register`.
    pub async fn register(&self, user: &NewUser) -> Result<User, ApiError> {
        let request = self.http_client.post(self.url("/auth/register")).json(user);
        self.send(request).await
    }

    // Users

    pub async fn list_users(&self, credential: &Credential) -> Result<Vec<User>, ApiError> {
        let request = self
            .http_client
            .get(self.url("/users/"))
            .bearer_auth(credential.token());
        self.send(request).await
    }

    pub async fn get_user(&self, credential: &Credential, user_id: UserId) -> Result<User, ApiError> {
        let request = self
            .http_client
            .get(self.url(&format!("/users/{user_id}")))
            .bearer_auth(credential.token());
        self.send(request).await
    }

    pub async fn update_user(
        &self,
        credential: &Credential,
        user_id: UserId,
        update: &UserUpdate,
    ) -> Result<User, ApiError> {
        let request = self
            .http_client
            .put(self.url(&format!("/users/{user_id}")))
            .bearer_auth(credential.token())
            .json(update);
        self.send(request).await
    }

    pub async fn delete_user(&self, credential: &Credential, user_id: UserId) -> Result<(), ApiError> {
        let request = self
            .http_client
            .delete(self.url(&format!("/users/{user_id}")))
            .bearer_auth(credential.token());
        self.send_empty(request).await
    }
}

#[async_trait]
impl WellnessApi for ApiClient {
    async fn list_moods(&self, credential: &Credential, user_id: UserId) -> Result<Vec<MoodEntry>, ApiError> {
        let request = self
            .http_client
            .get(self.url(&format!("/users/{user_id}/moods/")))
            .bearer_auth(credential.token());
        self.send(request).await
    }

    async fn get_mood(&self, credential: &Credential, user_id: UserId, mood_id: MoodId) -> Result<MoodEntry, ApiError> {
        let request = self
            .http_client
            .get(self.url(&format!("/users/{user_id}/moods/{mood_id}/")))
            .bearer_auth(credential.token());
        self.send(request).await
    }

    async fn create_mood(&self, credential: &Credential, user_id: UserId, mood: &NewMood) -> Result<MoodEntry, ApiError> {
        let request = self
            .http_client
            .post(self.url(&format!("/users/{user_id}/moods/")))
            .bearer_auth(credential.token())
            .json(mood);
        self.send(request).await
    }

    async fn update_mood(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        update: &MoodUpdate,
    ) -> Result<MoodEntry, ApiError> {
        let request = self
            .http_client
            .put(self.url(&format!("/users/{user_id}/moods/{mood_id}/")))
            .bearer_auth(credential.token())
            .json(update);
        self.send(request).await
    }

    async fn delete_mood(&self, credential: &Credential, user_id: UserId, mood_id: MoodId) -> Result<(), ApiError> {
        let request = self
            .http_client
            .delete(self.url(&format!("/users/{user_id}/moods/{mood_id}")))
            .bearer_auth(credential.token());
        self.send_empty(request).await
    }

    async fn list_journals(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
    ) -> Result<Vec<JournalEntry>, ApiError> {
        let request = self
            .http_client
            .get(self.url(&format!("/users/{user_id}/moods/{mood_id}/journals/")))
            .bearer_auth(credential.token());
        self.send(request).await
    }

    async fn get_journal(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        journal_id: JournalId,
    ) -> Result<JournalEntry, ApiError> {
        let request = self
            .http_client
            .get(self.url(&format!("/users/{user_id}/moods/{mood_id}/journals/{journal_id}")))
            .bearer_auth(credential.token());
        self.send(request).await
    }

    async fn create_journal(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        journal: &NewJournal,
    ) -> Result<JournalEntry, ApiError> {
        let request = self
            .http_client
            .post(self.url(&format!("/users/{user_id}/moods/{mood_id}/journals/")))
            .bearer_auth(credential.token())
            .json(journal);
        self.send(request).await
    }

    async fn update_journal(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        journal_id: JournalId,
        update: &JournalUpdate,
    ) -> Result<JournalEntry, ApiError> {
        let request = self
            .http_client
            .put(self.url(&format!("/users/{user_id}/moods/{mood_id}/journals/{journal_id}")))
            .bearer_auth(credential.token())
            .json(update);
        self.send(request).await
    }

    async fn delete_journal(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        journal_id: JournalId,
    ) -> Result<(), ApiError> {
        let request = self
            .http_client
            .delete(self.url(&format!("/users/{user_id}/moods/{mood_id}/journals/{journal_id}")))
            .bearer_auth(credential.token());
        self.send_empty(request).await
    }
}
