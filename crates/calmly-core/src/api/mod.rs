//! Backend REST contract.
//!
//! [`WellnessApi`] is the seam the sync layer is written against; the
//! reqwest-backed [`ApiClient`] is the production implementation and tests
//! substitute in-memory ones.

mod auth;
mod client;

pub use auth::{login, resolve_user, Credential, Session, TokenResponse};
pub use client::ApiClient;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{
    JournalEntry, JournalId, JournalUpdate, MoodEntry, MoodId, MoodUpdate, NewJournal, NewMood,
    UserId,
};

/// Mood and journal endpoints. Every call carries an explicit credential.
#[async_trait]
pub trait WellnessApi: Send + Sync {
    async fn list_moods(&self, credential: &Credential, user_id: UserId) -> Result<Vec<MoodEntry>, ApiError>;

    async fn get_mood(&self, credential: &Credential, user_id: UserId, mood_id: MoodId) -> Result<MoodEntry, ApiError>;

    async fn create_mood(&self, credential: &Credential, user_id: UserId, mood: &NewMood) -> Result<MoodEntry, ApiError>;

    async fn update_mood(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        update: &MoodUpdate,
    ) -> Result<MoodEntry, ApiError>;

    async fn delete_mood(&self, credential: &Credential, user_id: UserId, mood_id: MoodId) -> Result<(), ApiError>;

    async fn list_journals(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
    ) -> Result<Vec<JournalEntry>, ApiError>;

    async fn get_journal(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        journal_id: JournalId,
    ) -> Result<JournalEntry, ApiError>;

    async fn create_journal(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        journal: &NewJournal,
    ) -> Result<JournalEntry, ApiError>;

    async fn update_journal(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        journal_id: JournalId,
        update: &JournalUpdate,
    ) -> Result<JournalEntry, ApiError>;

    async fn delete_journal(
        &self,
        credential: &Credential,
        user_id: UserId,
        mood_id: MoodId,
        journal_id: JournalId,
    ) -> Result<(), ApiError>;
}
