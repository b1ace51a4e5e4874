//! Statistics module for Calmly
//!
//! This module derives the wellness figures shown on the dashboard, the
//! mood history and the profile: average mood, day streak, short-term trend,
//! wellness level and the profile insights.

mod insights;
mod mood_scale;
mod wellness;

pub use insights::{insights, Insight};

pub use mood_scale::{mood_option, mood_options, MoodOption, RatingBand};

pub use wellness::{
    average, join_date, mood_summary, newest_first, round1, streak, streak_at, trend,
    wellness_level, wellness_stats_at, MoodSummary, WellnessLevel, WellnessStats, TREND_WINDOW,
};
