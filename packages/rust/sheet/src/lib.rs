//! CSV ingestion for published camp spreadsheets.
//!
//! Raw text flows through three pure stages:
//!
//! 1. [`tokenize`]: text → rows of cells
//! 2. [`project`]: rows → header-keyed [`Record`]s
//! 3. [`to_schedule`] / [`to_contacts`]: records → typed domain values
//!
//! Nothing here fails: malformed input degrades to fewer or emptier values.
//! An empty result means "no usable data"; callers decide what to show instead.

mod contacts;
mod records;
mod schedule;
mod tokenizer;

use campinfo_shared::{Contact, FeedKind, ScheduleDay};

pub use contacts::to_contacts;
pub use records::{Record, case_variants, project};
pub use schedule::to_schedule;
pub use tokenizer::{Row, tokenize};

/// Typed output of one feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedData {
    Schedule(Vec<ScheduleDay>),
    Contacts(Vec<Contact>),
}

impl FeedData {
    /// Number of usable entries (days or contacts).
    pub fn len(&self) -> usize {
        match self {
            Self::Schedule(days) => days.len(),
            Self::Contacts(contacts) => contacts.len(),
        }
    }

    /// Whether the sheet produced nothing usable.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which feed this data belongs to.
    pub fn kind(&self) -> FeedKind {
        match self {
            Self::Schedule(_) => FeedKind::Schedule,
            Self::Contacts(_) => FeedKind::Contacts,
        }
    }
}

/// Full pipeline for a schedule sheet export.
pub fn parse_schedule(text: &str) -> Vec<ScheduleDay> {
    to_schedule(&project(&tokenize(text)))
}

/// Full pipeline for a contacts sheet export.
pub fn parse_contacts(text: &str) -> Vec<Contact> {
    to_contacts(&project(&tokenize(text)))
}

/// Run the pipeline matching `kind`.
pub fn parse_feed(kind: FeedKind, text: &str) -> FeedData {
    match kind {
        FeedKind::Schedule => FeedData::Schedule(parse_schedule(text)),
        FeedKind::Contacts => FeedData::Contacts(parse_contacts(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_fixture() {
        let content = std::fs::read_to_string("../../../fixtures/csv/schedule.csv")
            .expect("read fixture");
        let schedule = parse_schedule(&content);

        let days: Vec<&str> = schedule.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, vec!["Sunday", "Monday", "Tuesday"]);

        assert_eq!(
            schedule[0].items,
            vec!["2:00 PM Check-in, gear drop", "7:00 PM Opening Campfire"]
        );
        assert_eq!(
            schedule[1].items,
            vec![
                "7:00 AM Flag \"Reveille\"",
                "8:00 AM Breakfast",
                "Merit badge sessions",
            ]
        );
        // Tuesday has a row with a blank activity but still appears.
        assert_eq!(schedule[2].items, vec!["9:00 AM Waterfront"]);
    }

    #[test]
    fn contacts_fixture() {
        let content = std::fs::read_to_string("../../../fixtures/csv/contacts.csv")
            .expect("read fixture");
        let contacts = parse_contacts(&content);

        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0].name, "Camp Office");
        assert_eq!(contacts[0].phone, "+1-540-555-0123");
        assert_eq!(contacts[1].name, "Health Lodge");
        assert_eq!(contacts[1].role, "Nurse, 24/7");
        assert_eq!(contacts[1].email, "");
        assert_eq!(contacts[2].name, "Trading Post");
    }

    #[test]
    fn quoted_multiline_cells_survive_pipeline() {
        let text = "Day,Time,Item\r\nMon,9am,\"Swim\r\n(bring towel)\"\r\n";
        let schedule = parse_schedule(text);
        assert_eq!(schedule[0].items, vec!["9am Swim\r\n(bring towel)"]);
    }

    #[test]
    fn header_only_sheet_is_empty() {
        assert!(parse_feed(FeedKind::Schedule, "Day,Time,Item\n").is_empty());
        assert!(parse_feed(FeedKind::Contacts, "Name,Role\n").is_empty());
        assert!(parse_feed(FeedKind::Contacts, "").is_empty());
    }

    #[test]
    fn parse_feed_dispatches_by_kind() {
        let data = parse_feed(FeedKind::Contacts, "Name\nAnn\nBob\n");
        assert_eq!(data.kind(), FeedKind::Contacts);
        assert_eq!(data.len(), 2);

        let data = parse_feed(FeedKind::Schedule, "Day,Item\nMon,Swim\n");
        assert_eq!(data.kind(), FeedKind::Schedule);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn wrong_sheet_yields_nothing_usable() {
        // A contacts export fed to the schedule mapper has no Day column.
        let text = "Name,Role\nAnn,Director\n";
        assert!(parse_schedule(text).is_empty());
    }
}
