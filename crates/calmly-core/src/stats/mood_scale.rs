//! Presentation metadata for individual ratings.

use serde::Serialize;

/// Picker metadata for one rating value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodOption {
    pub value: u8,
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

const SCALE: [MoodOption; 10] = [
    MoodOption { value: 1, emoji: "😢", label: "Very Low", description: "Feeling really down" },
    MoodOption { value: 2, emoji: "😔", label: "Low", description: "Not feeling great" },
    MoodOption { value: 3, emoji: "😐", label: "Below Average", description: "Could be better" },
    MoodOption { value: 4, emoji: "🙂", label: "Average", description: "Okay, nothing special" },
    MoodOption { value: 5, emoji: "😊", label: "Good", description: "Feeling pretty good" },
    MoodOption { value: 6, emoji: "😄", label: "Great", description: "Having a great day" },
    MoodOption { value: 7, emoji: "🤩", label: "Excellent", description: "Feeling amazing" },
    MoodOption { value: 8, emoji: "🥰", label: "Fantastic", description: "On top of the world" },
    MoodOption { value: 9, emoji: "😍", label: "Incredible", description: "Absolutely wonderful" },
    MoodOption { value: 10, emoji: "🌟", label: "Perfect", description: "Pure bliss" },
];

/// All ratings, lowest first.
pub fn mood_options() -> &'static [MoodOption] {
    &SCALE
}

/// Metadata for `rating`, clamped into `1..=10`.
pub fn mood_option(rating: u8) -> &'static MoodOption {
    let index = usize::from(rating.clamp(1, 10)) - 1;
    &SCALE[index]
}

/// Colour band used when listing ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Low,
    Middling,
    Good,
    High,
}

impl RatingBand {
    pub fn of(rating: u8) -> Self {
        match rating {
            0..=3 => RatingBand::Low,
            4..=6 => RatingBand::Middling,
            7..=8 => RatingBand::Good,
            _ => RatingBand::High,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RatingBand::Low => "#ff6b6b",
            RatingBand::Middling => "#ffa726",
            RatingBand::Good => "#66bb6a",
            RatingBand::High => "#4caf50",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cover_every_rating_in_order() {
        let values: Vec<u8> = mood_options().iter().map(|o| o.value).collect();
        assert_eq!(values, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn out_of_range_ratings_clamp() {
        assert_eq!(mood_option(0).value, 1);
        assert_eq!(mood_option(42).label, "Perfect");
        assert_eq!(mood_option(4).label, "Average");
    }

    #[test]
    fn rating_bands() {
        assert_eq!(RatingBand::of(3), RatingBand::Low);
        assert_eq!(RatingBand::of(4), RatingBand::Middling);
        assert_eq!(RatingBand::of(6), RatingBand::Middling);
        assert_eq!(RatingBand::of(8), RatingBand::Good);
        assert_eq!(RatingBand::of(9).color(), "#4caf50");
    }
}
