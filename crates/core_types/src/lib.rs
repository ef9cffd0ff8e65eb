//! Core types for company announcements.
//!
//! This crate defines the announcement record shared by the backend and
//! the web frontend, together with the pure presentation logic applied
//! before rendering: date parsing, newest-first ordering and card
//! formatting.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Display format for announcement dates, e.g. "January 5, 2024".
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Timestamp layouts accepted when the value carries no UTC offset.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Unique identifier of an announcement.
///
/// The backend may send either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnouncementId {
    Number(i64),
    Text(String),
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnouncementId::Number(n) => write!(f, "{n}"),
            AnnouncementId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AnnouncementId {
    fn from(n: i64) -> Self {
        AnnouncementId::Number(n)
    }
}

impl From<&str> for AnnouncementId {
    fn from(s: &str) -> Self {
        AnnouncementId::Text(s.to_string())
    }
}

/// Public profile of an announcement author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
}

impl Profile {
    /// Create a profile from first and last name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", without stray whitespace when a part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Author of an announcement. Other author fields sent by the backend
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile: Profile,
}

/// A dated message published to a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Unique within one company's collection; used as the render key
    pub id: AnnouncementId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: Author,
    /// Timestamp as serialized by the backend
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl Announcement {
    /// Create a new announcement.
    pub fn new(
        id: impl Into<AnnouncementId>,
        title: impl Into<String>,
        author: Profile,
        date: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: Author { profile: author },
            date: date.into(),
            message: message.into(),
        }
    }

    /// The parsed publication time, if the stored value is readable.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }

    /// Long-form date for display. Falls back to the raw value when it
    /// cannot be parsed.
    pub fn date_label(&self) -> String {
        match self.parsed_date() {
            Some(date) => format_long_date(&date),
            None => self.date.clone(),
        }
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 timestamps, offset-less date-times (read as UTC) and
/// plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

/// Format a timestamp as "Month D, YYYY" in UTC.
pub fn format_long_date(date: &DateTime<Utc>) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Order announcements most recent first without touching the records.
///
/// The sort is stable, so equal dates keep their incoming order.
/// Unparseable dates go after every dated announcement.
pub fn newest_first(announcements: &[Announcement]) -> Vec<&Announcement> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, &Announcement)> = announcements
        .iter()
        .map(|a| (a.parsed_date(), a))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    keyed.into_iter().map(|(_, a)| a).collect()
}

/// Display-ready content of one announcement card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Stable render key, the announcement id
    pub key: String,
    pub author_name: String,
    pub date_label: String,
    pub title: String,
    pub message: String,
}

impl From<&Announcement> for CardView {
    fn from(a: &Announcement) -> Self {
        Self {
            key: a.id.to_string(),
            author_name: a.author.profile.full_name(),
            date_label: a.date_label(),
            title: a.title.clone(),
            message: a.message.clone(),
        }
    }
}

/// Build the cards for a collection, newest first.
pub fn build_cards(announcements: &[Announcement]) -> Vec<CardView> {
    newest_first(announcements)
        .into_iter()
        .map(CardView::from)
        .collect()
}
