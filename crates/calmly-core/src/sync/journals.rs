use super::DataSync;
use crate::api::{Credential, WellnessApi};
use crate::error::ApiError;
use crate::model::{JournalEntry, JournalWithMood, MoodEntry, UserId};

/// Pair every journal with its parent mood and order newest first.
///
/// `per_mood[i]` holds the journals of `moods[i]`. Ties on the timestamp are
/// broken by descending journal id so the order does not depend on the order
/// the per-mood results arrived in.
pub fn flatten_journals(moods: &[MoodEntry], per_mood: Vec<Vec<JournalEntry>>) -> Vec<JournalWithMood> {
    let mut all: Vec<JournalWithMood> = moods
        .iter()
        .zip(per_mood)
        .flat_map(|(mood, journals)| {
            journals.into_iter().map(move |journal| JournalWithMood {
                journal,
                mood: mood.clone(),
            })
        })
        .collect();

    all.sort_by(|a, b| {
        b.journal
            .timestamp
            .cmp(&a.journal.timestamp)
            .then_with(|| b.journal.id.cmp(&a.journal.id))
    });
    all
}

impl<A: WellnessApi> DataSync<A> {
    /// Every journal of the user, each annotated with its mood, newest first.
    ///
    /// # Errors
    /// Only the initial mood list can fail the operation; per-mood journal
    /// failures contribute nothing.
    pub async fn load_journals_for_user(
        &self,
        credential: &Credential,
        user_id: UserId,
    ) -> Result<Vec<JournalWithMood>, ApiError> {
        let moods = self.fetch_moods(credential, user_id).await?;
        let per_mood = self.journals_per_mood(credential, user_id, &moods).await;
        let journals = flatten_journals(&moods, per_mood);
        tracing::info!(user_id, moods = moods.len(), journals = journals.len(), "loaded journals");
        Ok(journals)
    }
}
