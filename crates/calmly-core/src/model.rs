//! Records exchanged with the backend.
//!
//! Field names follow the wire format (`mood` for the rating, `date` for the
//! timestamp) through serde renames; the Rust names describe what the values
//! mean.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub type UserId = i64;
pub type MoodId = i64;
pub type JournalId = i64;

/// Lowest accepted mood rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted mood rating.
pub const MAX_RATING: u8 = 10;

/// A single mood rating with commentary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: MoodId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(rename = "mood")]
    pub rating: u8,
    #[serde(default)]
    pub commentary: String,
    #[serde(rename = "date", with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

/// A free-text reflection attached to exactly one mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalId,
    pub mood_id: MoodId,
    pub title: String,
    pub content: String,
    #[serde(rename = "date", with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

/// A journal entry annotated with its parent mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalWithMood {
    #[serde(flatten)]
    pub journal: JournalEntry,
    pub mood: MoodEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    pub email: String,
}

impl User {
    /// Placeholder used when the backend does not list the logged-in user.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: None,
            name,
            email: email.to_string(),
        }
    }
}

/// Payload for `POST /users/{id}/moods/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMood {
    #[serde(rename = "mood")]
    pub rating: u8,
    pub commentary: String,
    pub user_id: UserId,
}

impl NewMood {
    pub fn new(user_id: UserId, rating: u8, commentary: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            rating: check_rating(rating)?,
            commentary: non_blank("commentary", commentary)?,
            user_id,
        })
    }
}

/// Payload for `PUT /users/{id}/moods/{mood_id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodUpdate {
    #[serde(rename = "mood")]
    pub rating: u8,
    pub commentary: String,
}

impl MoodUpdate {
    pub fn new(rating: u8, commentary: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            rating: check_rating(rating)?,
            commentary: non_blank("commentary", commentary)?,
        })
    }
}

/// Payload for `POST /users/{id}/moods/{mood_id}/journals/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewJournal {
    pub title: String,
    pub content: String,
    pub mood_id: MoodId,
}

impl NewJournal {
    pub fn new(mood_id: MoodId, title: &str, content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: non_blank("title", title)?,
            content: non_blank("content", content)?,
            mood_id,
        })
    }
}

/// Payload for `PUT .../journals/{journal_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalUpdate {
    pub title: String,
    pub content: String,
}

impl JournalUpdate {
    pub fn new(title: &str, content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: non_blank("title", title)?,
            content: non_blank("content", content)?,
        })
    }
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::OutOfRange {
                field: "password length",
                value: password.chars().count() as i64,
                min: MIN_PASSWORD_LEN as i64,
                max: i64::MAX,
            });
        }
        Ok(Self {
            name: non_blank("name", name)?,
            email: non_blank("email", email)?,
            password: password.to_string(),
        })
    }
}

const MIN_PASSWORD_LEN: usize = 6;

/// Payload for `PUT /users/{id}`. The password is only sent when changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", name)?,
            email: non_blank("email", email)?,
            password: None,
        })
    }
}

fn check_rating(rating: u8) -> Result<u8, ValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::OutOfRange {
            field: "rating",
            value: i64::from(rating),
            min: i64::from(MIN_RATING),
            max: i64::from(MAX_RATING),
        })
    }
}

fn non_blank(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Blank { field })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Serde adapter for backend timestamps.
///
/// Values with an offset are converted to local wall-clock time; naive values
/// are already local. Serialization always writes the naive form.
pub mod timestamp {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local).naive_local());
        }
        NaiveDateTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}
