//! Profile insight messages derived from wellness figures.

use serde::Serialize;

use super::wellness::{WellnessLevel, WellnessStats};

/// Moods needed before consistency counts as established.
const CONSISTENT_MOOD_COUNT: usize = 10;
/// Journals needed before reflection counts as established.
const REFLECTIVE_JOURNAL_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub message: String,
}

pub fn insights(stats: &WellnessStats, level: WellnessLevel) -> Vec<Insight> {
    let consistency = if stats.total_moods > CONSISTENT_MOOD_COUNT {
        "Great job maintaining regular mood tracking! Consistency is key to understanding your mental wellness patterns."
    } else {
        "Keep tracking your mood regularly to build better insights into your mental wellness journey."
    };

    let reflection = if stats.total_journals > REFLECTIVE_JOURNAL_COUNT {
        "Excellent reflection practice! Journaling helps process emotions and track personal growth."
    } else {
        "Consider adding journal entries to your mood tracking for deeper self-reflection and insight."
    };

    vec![
        Insight {
            title: "Consistency",
            message: consistency.to_string(),
        },
        Insight {
            title: "Reflection",
            message: reflection.to_string(),
        },
        Insight {
            title: "Wellness Level",
            message: format!(
                "Your current wellness level is {}. {}",
                level.label(),
                level.advice()
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strictly_greater_than() {
        let stats = WellnessStats {
            total_moods: 10,
            total_journals: 5,
            ..WellnessStats::default()
        };
        let out = insights(&stats, WellnessLevel::Fair);
        assert!(out[0].message.starts_with("Keep tracking"));
        assert!(out[1].message.starts_with("Consider adding"));

        let stats = WellnessStats {
            total_moods: 11,
            total_journals: 6,
            ..WellnessStats::default()
        };
        let out = insights(&stats, WellnessLevel::Excellent);
        assert!(out[0].message.starts_with("Great job"));
        assert!(out[1].message.starts_with("Excellent reflection"));
        assert_eq!(
            out[2].message,
            "Your current wellness level is Excellent. Keep up the amazing work!"
        );
    }
}
