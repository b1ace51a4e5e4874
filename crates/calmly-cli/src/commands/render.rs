//! Plain-text rendering shared by the commands.

use calmly_core::model::{JournalWithMood, MoodEntry};
use calmly_core::stats::{mood_option, WellnessStats};
use chrono::NaiveDateTime;

pub fn when(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

pub fn mood_line(mood: &MoodEntry) -> String {
    let option = mood_option(mood.rating);
    format!(
        "#{:<5} {}  {:>2}/10 {} {:<13} {}",
        mood.id,
        when(&mood.timestamp),
        mood.rating,
        option.emoji,
        option.label,
        mood.commentary
    )
}

pub fn journal_block(item: &JournalWithMood) -> String {
    let journal = &item.journal;
    format!(
        "#{} {}  [mood #{} {}/10 {}]\n  {}\n  {}",
        journal.id,
        when(&journal.timestamp),
        item.mood.id,
        item.mood.rating,
        mood_option(item.mood.rating).emoji,
        journal.title,
        journal.content.replace('\n', "\n  ")
    )
}

pub fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}

pub fn stats_block(stats: &WellnessStats) -> String {
    format!(
        "Mood entries:    {}\nJournal entries: {}\nAverage mood:    {:.1}/10\nDay streak:      {}\nTrend (7):       {}",
        stats.total_moods,
        stats.total_journals,
        stats.average_mood,
        stats.streak_days,
        signed(stats.trend_delta)
    )
}
