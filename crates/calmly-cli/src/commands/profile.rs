use clap::Subcommand;
use calmly_core::{ProfileSnapshot, Session, UserUpdate};

use super::render;
use super::{CmdResult, Context};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Account details, wellness level and insights
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Change name or email
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete the account and log out
    Delete {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(action: ProfileAction) -> CmdResult {
    let ctx = Context::load()?;
    let session = ctx.session()?;
    let user_id = session.user_id()?;
    let client = ctx.client()?;

    match action {
        ProfileAction::Show { json } => {
            let user = client.get_user(&session.credential, user_id).await?;
            if user != session.user {
                ctx.sessions
                    .save(&Session::new(session.credential.clone(), user.clone()))?;
            }
            let profile = ctx.sync()?.load_profile(&session.credential, &user).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&profile);
            }
        }
        ProfileAction::Update { name, email } => {
            if name.is_none() && email.is_none() {
                return Err("nothing to update; pass --name and/or --email".into());
            }
            let update = UserUpdate::new(
                name.as_deref().unwrap_or(&session.user.name),
                email.as_deref().unwrap_or(&session.user.email),
            )?;
            let user = client.update_user(&session.credential, user_id, &update).await?;
            ctx.sessions
                .save(&Session::new(session.credential.clone(), user.clone()))?;
            println!("Profile updated: {} <{}>", user.name, user.email);
        }
        ProfileAction::Delete { yes } => {
            if !yes {
                return Err("refusing to delete the account without --yes".into());
            }
            client.delete_user(&session.credential, user_id).await?;
            ctx.sessions.clear()?;
            println!("Account deleted");
        }
    }
    Ok(())
}

fn print_profile(profile: &ProfileSnapshot) {
    println!("{} <{}>", profile.user.name, profile.user.email);
    match profile.member_since {
        Some(since) => println!("Member since {}", since.format("%B %-d, %Y")),
        None => println!("No moods recorded yet"),
    }
    println!();
    println!("{}", render::stats_block(&profile.stats));
    println!("Wellness:        {}", profile.wellness_level);
    for insight in &profile.insights {
        println!("\n{}\n  {}", insight.title, insight.message);
    }
}
