//! Dashboard, profile and mood-history snapshots.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::DataSync;
use crate::api::{Credential, WellnessApi};
use crate::error::{ApiError, CoreError};
use crate::model::{MoodEntry, User, UserId};
use crate::stats::{self, Insight, MoodSummary, WellnessLevel, WellnessStats};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: WellnessStats,
    /// Newest moods first.
    pub recent_moods: Vec<MoodEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSnapshot {
    pub user: User,
    pub stats: WellnessStats,
    pub wellness_level: WellnessLevel,
    /// Earliest mood timestamp; `None` before the first mood.
    pub member_since: Option<NaiveDateTime>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodHistory {
    pub summary: MoodSummary,
    /// Newest first.
    pub moods: Vec<MoodEntry>,
}

impl<A: WellnessApi> DataSync<A> {
    async fn wellness_stats(
        &self,
        credential: &Credential,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<(Vec<MoodEntry>, WellnessStats), ApiError> {
        let moods = self.fetch_moods(credential, user_id).await?;
        let total_journals: usize = self
            .journals_per_mood(credential, user_id, &moods)
            .await
            .iter()
            .map(Vec::len)
            .sum();
        let stats = stats::wellness_stats_at(&moods, total_journals, today);
        tracing::info!(
            user_id,
            total_moods = stats.total_moods,
            total_journals = stats.total_journals,
            streak_days = stats.streak_days,
            "computed wellness stats"
        );
        Ok((moods, stats))
    }

    /// Counts, average, streak and trend for the user, plus recent moods.
    ///
    /// # Errors
    /// Fails when the mood list cannot be fetched.
    pub async fn load_dashboard_stats(
        &self,
        credential: &Credential,
        user_id: UserId,
    ) -> Result<DashboardSnapshot, ApiError> {
        self.load_dashboard_stats_at(credential, user_id, Local::now().date_naive())
            .await
    }

    /// [`load_dashboard_stats`](Self::load_dashboard_stats) with streaks
    /// ending at `today`.
    pub async fn load_dashboard_stats_at(
        &self,
        credential: &Credential,
        user_id: UserId,
        today: NaiveDate,
    ) -> Result<DashboardSnapshot, ApiError> {
        let (moods, stats) = self.wellness_stats(credential, user_id, today).await?;
        let recent_moods = stats::newest_first(&moods)
            .into_iter()
            .take(self.recent_moods)
            .cloned()
            .collect();
        Ok(DashboardSnapshot { stats, recent_moods })
    }

    /// Profile view: stats, wellness band, member-since date and insights.
    ///
    /// # Errors
    /// [`CoreError::MissingUserId`] when the user has no id; otherwise fails
    /// only when the mood list cannot be fetched.
    pub async fn load_profile(&self, credential: &Credential, user: &User) -> Result<ProfileSnapshot, CoreError> {
        self.load_profile_at(credential, user, Local::now().date_naive())
            .await
    }

    pub async fn load_profile_at(
        &self,
        credential: &Credential,
        user: &User,
        today: NaiveDate,
    ) -> Result<ProfileSnapshot, CoreError> {
        let user_id = user.id.ok_or_else(|| CoreError::MissingUserId {
            email: user.email.clone(),
        })?;
        let (moods, stats) = self.wellness_stats(credential, user_id, today).await?;
        let wellness_level = stats::wellness_level(stats.average_mood);
        Ok(ProfileSnapshot {
            user: user.clone(),
            stats,
            wellness_level,
            member_since: stats::join_date(&moods),
            insights: stats::insights(&stats, wellness_level),
        })
    }

    /// All moods newest first with their average and trend.
    pub async fn load_mood_history(
        &self,
        credential: &Credential,
        user_id: UserId,
    ) -> Result<MoodHistory, ApiError> {
        let moods = self.fetch_moods(credential, user_id).await?;
        let summary = stats::mood_summary(&moods);
        let moods = stats::newest_first(&moods).into_iter().cloned().collect();
        Ok(MoodHistory { summary, moods })
    }
}
