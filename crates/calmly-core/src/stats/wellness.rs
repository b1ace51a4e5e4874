//! Wellness statistics over mood entries.
//!
//! Every function here is pure and total: empty input yields zero values and
//! the lowest wellness band rather than an error. Ratings are trusted to be
//! in `1..=10`; the backend validates them.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::MoodEntry;

/// Size of each window compared by [`trend`].
pub const TREND_WINDOW: usize = 7;

/// Derived dashboard/profile figures. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WellnessStats {
    pub total_moods: usize,
    pub total_journals: usize,
    /// Mean rating, one decimal.
    pub average_mood: f64,
    /// Consecutive days ending today with at least one mood.
    pub streak_days: u32,
    /// Recent-window mean minus prior-window mean, one decimal.
    pub trend_delta: f64,
}

/// Header figures of the mood history view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub count: usize,
    pub average: f64,
    pub trend: f64,
}

/// Categorical band derived from the average mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessLevel {
    NeedsAttention,
    Fair,
    Good,
    Excellent,
}

impl WellnessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            WellnessLevel::Excellent => "Excellent",
            WellnessLevel::Good => "Good",
            WellnessLevel::Fair => "Fair",
            WellnessLevel::NeedsAttention => "Needs Attention",
        }
    }

    /// Display colour of the band.
    pub fn color(&self) -> &'static str {
        match self {
            WellnessLevel::Excellent => "#4caf50",
            WellnessLevel::Good => "#66bb6a",
            WellnessLevel::Fair => "#ffa726",
            WellnessLevel::NeedsAttention => "#ff6b6b",
        }
    }

    /// One-line advice shown next to the band on the profile.
    pub fn advice(&self) -> &'static str {
        match self {
            WellnessLevel::Excellent => "Keep up the amazing work!",
            WellnessLevel::Good => "You're doing well! Consider what's working for you.",
            WellnessLevel::Fair => {
                "There's room for improvement. Consider what might help boost your mood."
            }
            WellnessLevel::NeedsAttention => {
                "Consider reaching out for support or trying new wellness strategies."
            }
        }
    }
}

impl fmt::Display for WellnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Round half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(entries: &[&MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|m| u32::from(m.rating)).sum();
    Some(f64::from(sum) / entries.len() as f64)
}

/// Entries ordered newest first. Ties keep their input order.
pub fn newest_first(entries: &[MoodEntry]) -> Vec<&MoodEntry> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Mean rating rounded to one decimal; 0 for no entries.
pub fn average(entries: &[MoodEntry]) -> f64 {
    let all: Vec<&MoodEntry> = entries.iter().collect();
    mean(&all).map(round1).unwrap_or(0.0)
}

/// Day streak ending at the local date of today.
pub fn streak(entries: &[MoodEntry]) -> u32 {
    streak_at(entries, Local::now().date_naive())
}

/// Day streak ending at `today`.
///
/// Walks entries newest first with a cursor starting at `today`. A match
/// counts one day and moves the cursor back a day; the first entry older
/// than the cursor ends the walk. Entries newer than the cursor (repeats of
/// a counted day, future dates) are passed over.
pub fn streak_at(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let mut cursor = today;
    let mut days = 0;

    for entry in newest_first(entries) {
        let day = entry.timestamp.date();
        if day == cursor {
            days += 1;
            cursor = cursor - Duration::days(1);
        } else if day < cursor {
            break;
        }
    }
    days
}

/// Recent 7-entry mean minus the mean of the 7 before it, one decimal.
///
/// 0 when there are no entries or nothing precedes the recent window. A
/// short prior window is compared as-is.
pub fn trend(entries: &[MoodEntry]) -> f64 {
    let sorted = newest_first(entries);
    let recent = &sorted[..sorted.len().min(TREND_WINDOW)];
    let prior_end = sorted.len().min(TREND_WINDOW * 2);
    let prior = &sorted[recent.len()..prior_end];

    match (mean(recent), mean(prior)) {
        (Some(recent), Some(prior)) => round1(recent - prior),
        _ => 0.0,
    }
}

/// Band for an average mood: `[8,∞)` Excellent, `[6,8)` Good, `[4,6)`
/// Fair, anything else Needs Attention.
pub fn wellness_level(average_mood: f64) -> WellnessLevel {
    if average_mood >= 8.0 {
        WellnessLevel::Excellent
    } else if average_mood >= 6.0 {
        WellnessLevel::Good
    } else if average_mood >= 4.0 {
        WellnessLevel::Fair
    } else {
        WellnessLevel::NeedsAttention
    }
}

/// Combine mood figures with an externally counted journal total.
pub fn wellness_stats_at(moods: &[MoodEntry], total_journals: usize, today: NaiveDate) -> WellnessStats {
    WellnessStats {
        total_moods: moods.len(),
        total_journals,
        average_mood: average(moods),
        streak_days: streak_at(moods, today),
        trend_delta: trend(moods),
    }
}

pub fn mood_summary(moods: &[MoodEntry]) -> MoodSummary {
    MoodSummary {
        count: moods.len(),
        average: average(moods),
        trend: trend(moods),
    }
}

/// Timestamp of the earliest mood, the profile's "member since".
pub fn join_date(moods: &[MoodEntry]) -> Option<NaiveDateTime> {
    moods.iter().map(|m| m.timestamp).min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mood_on(id: i64, rating: u8, date: NaiveDate, hour: u32) -> MoodEntry {
        MoodEntry {
            id,
            user_id: Some(1),
            rating,
            commentary: String::new(),
            timestamp: date.and_hms_opt(hour, 0, 0).unwrap(),
        }
    }

    fn ratings(values: &[u8]) -> Vec<MoodEntry> {
        let start = day(2026, 1, 1);
        values
            .iter()
            .enumerate()
            .map(|(i, r)| mood_on(i as i64, *r, start + Duration::days(i as i64), 12))
            .collect()
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn average_of_six_and_eight_is_seven() {
        assert_eq!(average(&ratings(&[6, 8])), 7.0);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average(&ratings(&[7, 7, 8])), 7.3);
        assert_eq!(average(&ratings(&[1, 2])), 1.5);
    }

    #[test]
    fn streak_of_nothing_is_zero() {
        assert_eq!(streak_at(&[], day(2026, 5, 10)), 0);
    }

    #[test]
    fn streak_counts_three_consecutive_days() {
        let today = day(2026, 5, 10);
        let moods = vec![
            mood_on(1, 5, today, 9),
            mood_on(2, 5, today - Duration::days(1), 9),
            mood_on(3, 5, today - Duration::days(2), 9),
        ];
        assert_eq!(streak_at(&moods, today), 3);
    }

    #[test]
    fn streak_stops_at_gap() {
        let today = day(2026, 5, 10);
        let moods = vec![mood_on(1, 5, today, 9), mood_on(2, 5, today - Duration::days(3), 9)];
        assert_eq!(streak_at(&moods, today), 1);
    }

    #[test]
    fn same_day_entries_count_once() {
        let today = day(2026, 5, 10);
        let moods = vec![mood_on(1, 5, today, 8), mood_on(2, 7, today, 20)];
        assert_eq!(streak_at(&moods, today), 1);
    }

    #[test]
    fn same_day_entries_do_not_break_a_longer_run() {
        let today = day(2026, 5, 10);
        let moods = vec![
            mood_on(1, 5, today, 8),
            mood_on(2, 7, today, 20),
            mood_on(3, 6, today - Duration::days(1), 10),
            mood_on(4, 6, today - Duration::days(1), 11),
            mood_on(5, 6, today - Duration::days(2), 11),
        ];
        assert_eq!(streak_at(&moods, today), 3);
    }

    #[test]
    fn streak_sorts_unsorted_input() {
        let today = day(2026, 5, 10);
        let moods = vec![
            mood_on(1, 5, today - Duration::days(2), 9),
            mood_on(2, 5, today, 9),
            mood_on(3, 5, today - Duration::days(1), 9),
        ];
        assert_eq!(streak_at(&moods, today), 3);
    }

    #[test]
    fn streak_is_zero_without_an_entry_today() {
        let today = day(2026, 5, 10);
        let moods = vec![mood_on(1, 5, today - Duration::days(1), 9)];
        assert_eq!(streak_at(&moods, today), 0);
    }

    #[test]
    fn future_entries_are_passed_over() {
        let today = day(2026, 5, 10);
        let moods = vec![mood_on(1, 5, today + Duration::days(1), 9), mood_on(2, 5, today, 9)];
        assert_eq!(streak_at(&moods, today), 1);
    }

    #[test]
    fn trend_compares_recent_seven_with_short_prior_window() {
        // oldest three average 5, newest seven average 8
        let moods = ratings(&[4, 5, 6, 8, 8, 8, 8, 8, 8, 8]);
        assert_eq!(trend(&moods), 3.0);
    }

    #[test]
    fn trend_ignores_entries_beyond_two_windows() {
        let mut values = vec![1; 6];
        values.extend([5; 7]);
        values.extend([6; 7]);
        assert_eq!(trend(&ratings(&values)), 1.0);
    }

    #[test]
    fn trend_without_prior_window_is_zero() {
        assert_eq!(trend(&[]), 0.0);
        assert_eq!(trend(&ratings(&[2, 9, 9])), 0.0);
        assert_eq!(trend(&ratings(&[3; 7])), 0.0);
    }

    #[test]
    fn trend_can_be_negative() {
        let moods = ratings(&[9, 3, 3, 3, 3, 3, 3, 3]);
        assert_eq!(trend(&moods), -6.0);
    }

    #[test]
    fn wellness_level_boundaries() {
        assert_eq!(wellness_level(10.0), WellnessLevel::Excellent);
        assert_eq!(wellness_level(8.0), WellnessLevel::Excellent);
        assert_eq!(wellness_level(7.9), WellnessLevel::Good);
        assert_eq!(wellness_level(6.0), WellnessLevel::Good);
        assert_eq!(wellness_level(5.9), WellnessLevel::Fair);
        assert_eq!(wellness_level(4.0), WellnessLevel::Fair);
        assert_eq!(wellness_level(3.9), WellnessLevel::NeedsAttention);
        assert_eq!(wellness_level(0.0), WellnessLevel::NeedsAttention);
        assert_eq!(wellness_level(f64::NAN), WellnessLevel::NeedsAttention);
        assert_eq!(WellnessLevel::NeedsAttention.to_string(), "Needs Attention");
    }

    #[test]
    fn wellness_stats_combines_engine_outputs() {
        let today = day(2026, 5, 10);
        let moods = vec![mood_on(1, 6, today, 9), mood_on(2, 8, today - Duration::days(1), 9)];
        let stats = wellness_stats_at(&moods, 4, today);
        assert_eq!(
            stats,
            WellnessStats {
                total_moods: 2,
                total_journals: 4,
                average_mood: 7.0,
                streak_days: 2,
                trend_delta: 0.0,
            }
        );
    }

    #[test]
    fn join_date_is_earliest_timestamp() {
        let moods = ratings(&[5, 6, 7]);
        assert_eq!(join_date(&moods), Some(day(2026, 1, 1).and_hms_opt(12, 0, 0).unwrap()));
        assert_eq!(join_date(&[]), None);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn average_stays_within_rating_range(values in prop::collection::vec(1u8..=10, 1..40)) {
                let avg = average(&ratings(&values));
                prop_assert!((1.0..=10.0).contains(&avg));
            }

            #[test]
            fn streak_never_exceeds_distinct_days(offsets in prop::collection::vec(0i64..10, 0..30)) {
                let today = day(2026, 5, 10);
                let moods: Vec<MoodEntry> = offsets
                    .iter()
                    .enumerate()
                    .map(|(i, off)| mood_on(i as i64, 5, today - Duration::days(*off), 12))
                    .collect();
                let distinct: std::collections::BTreeSet<i64> = offsets.iter().copied().collect();
                prop_assert!(streak_at(&moods, today) as usize <= distinct.len());
            }

            #[test]
            fn trend_is_order_independent(values in prop::collection::vec(1u8..=10, 0..20)) {
                let moods = ratings(&values);
                let mut reversed = moods.clone();
                reversed.reverse();
                prop_assert_eq!(trend(&moods), trend(&reversed));
            }
        }
    }
}
