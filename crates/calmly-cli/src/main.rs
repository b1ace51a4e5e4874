use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "calmly", version, about = "Calmly mood and journal tracker")]
pub struct Cli {
    /// Log requests and aggregation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, register, log out
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Record and manage mood entries
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Write and browse journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Wellness overview: counts, average, streak, trend
    Dashboard(commands::dashboard::DashboardArgs),
    /// Account details and wellness insights
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Auth { action } => commands::auth::run(action).await,
        Commands::Mood { action } => commands::mood::run(action).await,
        Commands::Journal { action } => commands::journal::run(action).await,
        Commands::Dashboard(args) => commands::dashboard::run(args).await,
        Commands::Profile { action } => commands::profile::run(action).await,
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            commands::completions::run(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        if commands::is_unauthorized(e.as_ref()) {
            eprintln!("hint: your session is missing or expired; run `calmly auth login`");
        }
        std::process::exit(1);
    }
}
