//! Journal search.

use crate::model::{JournalWithMood, MoodId};

/// Case-insensitive text search plus an optional parent-mood restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalFilter {
    search: String,
    mood_id: Option<MoodId>,
}

impl JournalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match entries whose title or content contains `term`.
    pub fn search(mut self, term: &str) -> Self {
        self.search = term.to_lowercase();
        self
    }

    /// Match only entries attached to `mood_id`.
    pub fn mood(mut self, mood_id: Option<MoodId>) -> Self {
        self.mood_id = mood_id;
        self
    }

    pub fn matches(&self, item: &JournalWithMood) -> bool {
        let journal = &item.journal;
        let text_ok = self.search.is_empty()
            || journal.title.to_lowercase().contains(&self.search)
            || journal.content.to_lowercase().contains(&self.search);
        let mood_ok = self.mood_id.map_or(true, |id| journal.mood_id == id);
        text_ok && mood_ok
    }

    pub fn apply<'a>(&self, items: &'a [JournalWithMood]) -> Vec<&'a JournalWithMood> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
