use clap::Subcommand;
use calmly_core::model::JournalWithMood;
use calmly_core::{
    ApiClient, Credential, DataSync, JournalFilter, JournalId, JournalUpdate, MoodId, NewJournal,
    UserId, WellnessApi,
};

use super::render;
use super::{CmdResult, Context};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a journal entry attached to a mood
    Add {
        /// Parent mood id
        #[arg(long)]
        mood: MoodId,
        title: String,
        content: String,
    },
    /// List journals, newest first
    List {
        /// Case-insensitive text in title or content
        #[arg(short, long)]
        search: Option<String>,
        /// Only journals attached to this mood
        #[arg(long)]
        mood: Option<MoodId>,
        #[arg(long)]
        json: bool,
    },
    /// Show one journal entry
    Show {
        id: JournalId,
        /// Parent mood id; looked up when omitted
        #[arg(long)]
        mood: Option<MoodId>,
    },
    /// Replace a journal's title and content
    Edit {
        id: JournalId,
        title: String,
        content: String,
        #[arg(long)]
        mood: Option<MoodId>,
    },
    /// Delete a journal entry
    Delete {
        id: JournalId,
        #[arg(long)]
        mood: Option<MoodId>,
    },
}

pub async fn run(action: JournalAction) -> CmdResult {
    let ctx = Context::load()?;
    let session = ctx.session()?;
    let user_id = session.user_id()?;
    let credential = &session.credential;
    let sync = ctx.sync()?;

    match action {
        JournalAction::Add { mood, title, content } => {
            let payload = NewJournal::new(mood, &title, &content)?;
            let journal = sync.api().create_journal(credential, user_id, mood, &payload).await?;
            println!("Saved journal #{} under mood #{}", journal.id, journal.mood_id);
        }
        JournalAction::List { search, mood, json } => {
            let journals = sync.load_journals_for_user(credential, user_id).await?;
            let filter = JournalFilter::new()
                .search(search.as_deref().unwrap_or_default())
                .mood(mood);
            let shown = filter.apply(&journals);
            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
                return Ok(());
            }
            if shown.is_empty() {
                println!("No journal entries found.");
                return Ok(());
            }
            for item in &shown {
                println!("{}\n", render::journal_block(item));
            }
            println!("{} of {} entries", shown.len(), journals.len());
        }
        JournalAction::Show { id, mood } => {
            let mood_id = parent_mood(&sync, credential, user_id, id, mood).await?;
            let journal = sync.api().get_journal(credential, user_id, mood_id, id).await?;
            let mood = sync.api().get_mood(credential, user_id, mood_id).await?;
            println!("{}", render::journal_block(&JournalWithMood { journal, mood }));
        }
        JournalAction::Edit { id, title, content, mood } => {
            let payload = JournalUpdate::new(&title, &content)?;
            let mood_id = parent_mood(&sync, credential, user_id, id, mood).await?;
            let journal = sync
                .api()
                .update_journal(credential, user_id, mood_id, id, &payload)
                .await?;
            println!("Updated journal #{}", journal.id);
        }
        JournalAction::Delete { id, mood } => {
            let mood_id = parent_mood(&sync, credential, user_id, id, mood).await?;
            sync.api().delete_journal(credential, user_id, mood_id, id).await?;
            println!("Deleted journal #{id}");
        }
    }
    Ok(())
}

/// The mood a journal hangs off, from the flag or by scanning every journal.
async fn parent_mood(
    sync: &DataSync<ApiClient>,
    credential: &Credential,
    user_id: UserId,
    journal_id: JournalId,
    given: Option<MoodId>,
) -> Result<MoodId, Box<dyn std::error::Error>> {
    if let Some(mood_id) = given {
        return Ok(mood_id);
    }
    sync.load_journals_for_user(credential, user_id)
        .await?
        .into_iter()
        .find(|item| item.journal.id == journal_id)
        .map(|item| item.journal.mood_id)
        .ok_or_else(|| format!("journal #{journal_id} not found").into())
}
