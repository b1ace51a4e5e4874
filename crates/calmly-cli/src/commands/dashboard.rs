use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use calmly_core::stats::wellness_level;
use calmly_core::sync::RefreshGate;
use calmly_core::DashboardSnapshot;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use super::render;
use super::{CmdResult, Context};

#[derive(Args)]
pub struct DashboardArgs {
    /// Print the snapshot as JSON
    #[arg(long)]
    json: bool,
    /// Refresh every N seconds until interrupted
    #[arg(long, value_name = "SECS")]
    watch: Option<u64>,
}

pub async fn run(args: DashboardArgs) -> CmdResult {
    let ctx = Context::load()?;
    let session = ctx.session()?;
    let user_id = session.user_id()?;
    let sync = ctx.sync()?;

    let Some(secs) = args.watch else {
        let snapshot = sync.load_dashboard_stats(&session.credential, user_id).await?;
        print_snapshot(&snapshot, args.json)?;
        return Ok(());
    };

    // Each tick starts a background load; a load overtaken by the next tick
    // is discarded by the gate.
    let sync = Arc::new(sync);
    let gate = RefreshGate::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut ticker = tokio::time::interval(Duration::from_secs(secs.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let ticket = gate.begin();
                let sync = Arc::clone(&sync);
                let credential = session.credential.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let loaded = sync.load_dashboard_stats(&credential, user_id).await;
                    let _ = tx.send((ticket, loaded));
                });
            }
            Some((ticket, loaded)) = rx.recv() => {
                if let Some(loaded) = gate.accept(ticket, loaded) {
                    print_snapshot(&loaded?, args.json)?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                gate.cancel();
                break;
            }
        }
    }
    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }
    let level = wellness_level(snapshot.stats.average_mood);
    println!("{}", render::stats_block(&snapshot.stats));
    println!("Wellness:        {level}");
    if !snapshot.recent_moods.is_empty() {
        println!("\nRecent moods");
        for mood in &snapshot.recent_moods {
            println!("  {}", render::mood_line(mood));
        }
    }
    Ok(())
}
