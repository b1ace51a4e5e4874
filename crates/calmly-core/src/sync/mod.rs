//! Client data sync layer.
//!
//! One-shot fetch-and-aggregate pipelines over a [`WellnessApi`]. Each call
//! fetches a fresh snapshot: the mood list first, then the journals of every
//! mood through the configured [`FanOut`]. Nothing is cached between calls.
//!
//! Failure policy: a failed mood list aborts the operation with its error; a
//! failed per-mood journal request is logged and counts as no journals.

mod fan_out;
mod filter;
mod gate;
mod journals;
mod snapshot;


pub use fan_out::FanOut;
pub use filter::JournalFilter;
pub use gate::{RefreshGate, RefreshTicket};
pub use journals::flatten_journals;
pub use snapshot::{DashboardSnapshot, MoodHistory, ProfileSnapshot};

use futures::FutureExt;

use crate::api::{Credential, WellnessApi};
use crate::error::ApiError;
use crate::model::{JournalEntry, MoodEntry, UserId};

/// Default number of moods shown as "recent" on the dashboard.
pub const RECENT_MOODS: usize = 5;

/// Sync layer bound to one API implementation.
#[derive(Debug, Clone)]
pub struct DataSync<A> {
    api: A,
    fan_out: FanOut,
    recent_moods: usize,
}

impl<A: WellnessApi> DataSync<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            fan_out: FanOut::default(),
            recent_moods: RECENT_MOODS,
        }
    }

    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    pub fn with_recent_moods(mut self, recent_moods: usize) -> Self {
        self.recent_moods = recent_moods;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn fan_out(&self) -> FanOut {
        self.fan_out
    }

    /// Journals of every mood, index-aligned with `moods`. A failed request
    /// yields an empty list for that mood.
    async fn journals_per_mood(
        &self,
        credential: &Credential,
        user_id: UserId,
        moods: &[MoodEntry],
    ) -> Vec<Vec<JournalEntry>> {
        self.fan_out
            .gather(moods, |mood| async move {
                match self.api.list_journals(credential, user_id, mood.id).await {
                    Ok(journals) => journals,
                    Err(err) => {
                        tracing::debug!(mood_id = mood.id, error = %err, "no journals for mood");
                        Vec::new()
                    }
                }
            })
            .boxed()
            .await
    }

    async fn fetch_moods(&self, credential: &Credential, user_id: UserId) -> Result<Vec<MoodEntry>, ApiError> {
        self.api.list_moods(credential, user_id).await.map_err(|err| {
            tracing::warn!(user_id, error = %err, "failed to fetch moods");
            err
        })
    }
}
