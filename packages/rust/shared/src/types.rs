//! Core domain types for the camp information screens.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// One day of the camp schedule with its display lines, in sheet order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// Day label exactly as written in the sheet (trimmed).
    pub day: String,
    /// Display lines, e.g. `"9am Swim"`.
    #[serde(default)]
    pub items: Vec<String>,
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

/// A staff or office contact. Only `name` is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Contact {
    /// Stable display key: the name plus whichever of email/phone exists.
    pub fn key(&self) -> String {
        let suffix = if !self.email.is_empty() {
            self.email.as_str()
        } else {
            self.phone.as_str()
        };
        format!("{}-{}", self.name, suffix)
    }
}

// ---------------------------------------------------------------------------
// Static content
// ---------------------------------------------------------------------------

/// One dining-hall meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub meal: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Camp map reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampMap {
    pub image_url: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Everything the front-ends display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampData {
    pub schedule: Vec<ScheduleDay>,
    pub dining: Vec<Meal>,
    pub map: CampMap,
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub trading_post: Vec<String>,
    #[serde(default)]
    pub program: Vec<String>,
}

// ---------------------------------------------------------------------------
// Feeds
// ---------------------------------------------------------------------------

/// The remotely refreshed data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Schedule,
    Contacts,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Schedule => write!(f, "schedule"),
            Self::Contacts => write!(f, "contacts"),
        }
    }
}

impl std::str::FromStr for FeedKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "schedule" => Ok(Self::Schedule),
            "contacts" => Ok(Self::Contacts),
            other => Err(format!(
                "unknown feed '{other}': expected 'schedule' or 'contacts'"
            )),
        }
    }
}

/// Load status of one feed.
///
/// `Error` is soft: the previously held data stays on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_key_prefers_email() {
        let mut c = Contact {
            name: "Camp Office".into(),
            role: String::new(),
            phone: "+1-540-555-0123".into(),
            email: "office@example.org".into(),
        };
        assert_eq!(c.key(), "Camp Office-office@example.org");
        c.email.clear();
        assert_eq!(c.key(), "Camp Office-+1-540-555-0123");
        c.phone.clear();
        assert_eq!(c.key(), "Camp Office-");
    }

    #[test]
    fn feed_kind_parse_and_display() {
        assert_eq!("Schedule".parse::<FeedKind>().unwrap(), FeedKind::Schedule);
        assert_eq!(" contacts ".parse::<FeedKind>().unwrap(), FeedKind::Contacts);
        assert!("menu".parse::<FeedKind>().is_err());
        assert_eq!(FeedKind::Contacts.to_string(), "contacts");
    }

    #[test]
    fn schedule_day_serialization() {
        let day = ScheduleDay {
            day: "Mon".into(),
            items: vec!["9am Swim".into()],
        };
        let json = serde_json::to_string(&day).expect("serialize");
        assert_eq!(json, r#"{"day":"Mon","items":["9am Swim"]}"#);
        let parsed: ScheduleDay = serde_json::from_str(r#"{"day":"Tue"}"#).expect("deserialize");
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn feed_status_serializes_lowercase() {
        let json = serde_json::to_string(&FeedStatus::Loading).expect("serialize");
        assert_eq!(json, r#""loading""#);
        assert_eq!(FeedStatus::default(), FeedStatus::Idle);
    }
}
