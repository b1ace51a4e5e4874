use clap::Subcommand;
use calmly_core::stats::{mood_option, mood_options, RatingBand};
use calmly_core::{MoodId, MoodUpdate, NewMood, WellnessApi};

use super::render;
use super::{CmdResult, Context};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record how you feel (1-10)
    Add {
        rating: u8,
        /// What is behind the rating
        commentary: String,
    },
    /// List moods, newest first, with average and trend
    List {
        /// Only the newest N entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Show one mood entry
    Show { id: MoodId },
    /// Change a mood's rating and commentary
    Edit {
        id: MoodId,
        rating: u8,
        commentary: String,
    },
    /// Delete a mood entry
    Delete { id: MoodId },
    /// Print the rating scale
    Scale,
}

pub async fn run(action: MoodAction) -> CmdResult {
    if let MoodAction::Scale = action {
        print_scale();
        return Ok(());
    }

    let ctx = Context::load()?;
    let session = ctx.session()?;
    let user_id = session.user_id()?;
    let credential = &session.credential;

    match action {
        MoodAction::Add { rating, commentary } => {
            let payload = NewMood::new(user_id, rating, &commentary)?;
            let mood = ctx.client()?.create_mood(credential, user_id, &payload).await?;
            println!("Recorded mood #{}: {} {}", mood.id, mood.rating, mood_option(mood.rating).label);
        }
        MoodAction::List { limit, json } => {
            let history = ctx.sync()?.load_mood_history(credential, user_id).await?;
            let shown = limit.unwrap_or(history.moods.len()).min(history.moods.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&history.moods[..shown])?);
                return Ok(());
            }
            if history.moods.is_empty() {
                println!("No moods recorded yet. Try `calmly mood add 7 \"feeling fine\"`.");
                return Ok(());
            }
            for mood in &history.moods[..shown] {
                println!("{}", render::mood_line(mood));
            }
            println!(
                "\n{} entries, average {:.1}/10, trend {}",
                history.summary.count,
                history.summary.average,
                render::signed(history.summary.trend)
            );
        }
        MoodAction::Show { id } => {
            let mood = ctx.client()?.get_mood(credential, user_id, id).await?;
            println!("{}", render::mood_line(&mood));
            println!("{}", mood_option(mood.rating).description);
        }
        MoodAction::Edit { id, rating, commentary } => {
            let payload = MoodUpdate::new(rating, &commentary)?;
            let mood = ctx.client()?.update_mood(credential, user_id, id, &payload).await?;
            println!("Updated mood #{}", mood.id);
        }
        MoodAction::Delete { id } => {
            ctx.client()?.delete_mood(credential, user_id, id).await?;
            println!("Deleted mood #{id}");
        }
        MoodAction::Scale => print_scale(),
    }
    Ok(())
}

fn print_scale() {
    for option in mood_options() {
        println!(
            "{:>2} {} {:<13} {:<7} {}",
            option.value,
            option.emoji,
            option.label,
            RatingBand::of(option.value).color(),
            option.description
        );
    }
}
