use std::io::BufRead;

use clap::Subcommand;
use calmly_core::api::login;
use calmly_core::NewUser;

use super::{CmdResult, Context};

const PASSWORD_ENV: &str = "CALMLY_PASSWORD";

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in and store the session
    Login {
        email: String,
        /// Password; falls back to $CALMLY_PASSWORD, then one line of stdin
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and log in with it
    Register {
        name: String,
        email: String,
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show who is logged in
    Status,
}

pub async fn run(action: AuthAction) -> CmdResult {
    let ctx = Context::load()?;
    match action {
        AuthAction::Login { email, password } => {
            let password = resolve_password(password)?;
            let client = ctx.client()?;
            let session = login(&client, &email, &password).await?;
            ctx.sessions.save(&session)?;
            println!("Logged in as {} <{}>", session.user.name, session.user.email);
            if session.user.id.is_none() {
                eprintln!("warning: the backend did not list this account; mood commands need a user id");
            }
        }
        AuthAction::Register { name, email, password } => {
            let password = resolve_password(password)?;
            let new_user = NewUser::new(&name, &email, &password)?;
            let client = ctx.client()?;
            let created = client.register(&new_user).await?;
            tracing::info!(email = %created.email, "registered account");
            let session = login(&client, &new_user.email, &new_user.password).await?;
            ctx.sessions.save(&session)?;
            println!("Registered and logged in as {} <{}>", session.user.name, session.user.email);
        }
        AuthAction::Logout => {
            ctx.sessions.clear()?;
            println!("Logged out");
        }
        AuthAction::Status => match ctx.sessions.load()? {
            Some(session) => {
                let id = session
                    .user
                    .id
                    .map_or_else(|| "unknown".to_string(), |id| id.to_string());
                println!("Logged in as {} <{}> (id {id})", session.user.name, session.user.email);
                println!("Backend: {}", ctx.config.api.base_url);
            }
            None => println!("Not logged in"),
        },
    }
    Ok(())
}

fn resolve_password(flag: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(password) = flag {
        return Ok(password);
    }
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(password);
    }
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(format!("no password given; pass --password or set {PASSWORD_ENV}").into());
    }
    Ok(password)
}
