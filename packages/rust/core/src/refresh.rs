//! Live refresh: sheet URL → fetch → parse → feed state.
//!
//! Each feed is fetched independently and concurrently; one failing sheet
//! never affects the other. There is no retry or backoff here. Callers that
//! stop caring about a refresh simply drop the future.

use campinfo_fetch::{fetch_csv, is_configured};
use campinfo_sheet::{FeedData, parse_feed};
use campinfo_shared::{
    CampData, CampInfoError, CampMap, Contact, FeedKind, FeedStatus, FetchOptions, Meal, Result,
    ScheduleDay, Sources,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::feed::FeedState;

/// Result of one feed refresh, ready to be applied to a [`Camp`].
#[derive(Debug)]
pub struct FeedUpdate {
    pub kind: FeedKind,
    pub result: Result<FeedData>,
}

/// URL for `kind`, if that feed is configured.
pub fn source_url(sources: &Sources, kind: FeedKind) -> Option<&str> {
    let url = match kind {
        FeedKind::Schedule => sources.schedule_url.as_deref(),
        FeedKind::Contacts => sources.contacts_url.as_deref(),
    };
    url.filter(|u| is_configured(u))
}

/// Fetch and parse one sheet.
#[instrument(skip(opts), fields(feed = %kind))]
pub async fn refresh_feed(kind: FeedKind, url: &str, opts: &FetchOptions) -> FeedUpdate {
    let result = fetch_csv(url, opts)
        .await
        .map(|text| parse_feed(kind, &text));

    match &result {
        Ok(data) => info!(entries = data.len(), "feed parsed"),
        Err(e) => warn!(error = %e, "feed refresh failed"),
    }

    FeedUpdate { kind, result }
}

/// Refresh every configured feed concurrently.
///
/// Unconfigured feeds produce no update.
pub async fn fetch_updates(sources: &Sources, opts: &FetchOptions) -> Vec<FeedUpdate> {
    let schedule = async {
        match source_url(sources, FeedKind::Schedule) {
            Some(url) => Some(refresh_feed(FeedKind::Schedule, url, opts).await),
            None => None,
        }
    };
    let contacts = async {
        match source_url(sources, FeedKind::Contacts) {
            Some(url) => Some(refresh_feed(FeedKind::Contacts, url, opts).await),
            None => None,
        }
    };

    let (schedule, contacts) = tokio::join!(schedule, contacts);
    schedule.into_iter().chain(contacts).collect()
}

// ---------------------------------------------------------------------------
// Camp
// ---------------------------------------------------------------------------

/// Everything the front-ends render, with live state for the two feeds.
#[derive(Debug, Clone, Serialize)]
pub struct Camp {
    pub schedule: FeedState<ScheduleDay>,
    pub contacts: FeedState<Contact>,
    pub dining: Vec<Meal>,
    pub map: CampMap,
    pub trading_post: Vec<String>,
    pub program: Vec<String>,
}

impl Camp {
    /// Start from a full data set (usually [`crate::default_camp_data`]).
    pub fn new(initial: CampData) -> Self {
        Self {
            schedule: FeedState::new(initial.schedule),
            contacts: FeedState::new(initial.contacts),
            dining: initial.dining,
            map: initial.map,
            trading_post: initial.trading_post,
            program: initial.program,
        }
    }

    /// Plain data view of what is currently shown.
    pub fn snapshot(&self) -> CampData {
        CampData {
            schedule: self.schedule.data.clone(),
            dining: self.dining.clone(),
            map: self.map.clone(),
            contacts: self.contacts.data.clone(),
            trading_post: self.trading_post.clone(),
            program: self.program.clone(),
        }
    }

    /// Status of one feed.
    pub fn status(&self, kind: FeedKind) -> FeedStatus {
        match kind {
            FeedKind::Schedule => self.schedule.status,
            FeedKind::Contacts => self.contacts.status,
        }
    }

    /// Mark every configured feed as loading.
    pub fn begin_refresh(&mut self, sources: &Sources) {
        if source_url(sources, FeedKind::Schedule).is_some() {
            self.schedule.begin();
        }
        if source_url(sources, FeedKind::Contacts).is_some() {
            self.contacts.begin();
        }
    }

    /// Fold one finished refresh into the state.
    pub fn apply(&mut self, update: FeedUpdate) -> FeedStatus {
        let status = match update.result {
            Ok(FeedData::Schedule(days)) => self.schedule.apply(Ok(days)),
            Ok(FeedData::Contacts(contacts)) => self.contacts.apply(Ok(contacts)),
            Err(e) => self.apply_error(update.kind, e),
        };
        debug!(feed = %update.kind, ?status, "feed update applied");
        status
    }

    fn apply_error(&mut self, kind: FeedKind, e: CampInfoError) -> FeedStatus {
        match kind {
            FeedKind::Schedule => self.schedule.apply(Err(e)),
            FeedKind::Contacts => self.contacts.apply(Err(e)),
        }
    }

    /// Refresh all configured feeds and apply the results.
    pub async fn refresh(&mut self, sources: &Sources, opts: &FetchOptions) {
        self.begin_refresh(sources);
        for update in fetch_updates(sources, opts).await {
            self.apply(update);
        }
    }

    /// Every feed that was tried failed to reach the network.
    pub fn is_offline(&self) -> bool {
        let tried: Vec<bool> = [
            (self.schedule.attempted, self.schedule.offline),
            (self.contacts.attempted, self.contacts.offline),
        ]
        .into_iter()
        .filter(|(attempted, _)| *attempted)
        .map(|(_, offline)| offline)
        .collect();

        !tried.is_empty() && tried.iter().all(|offline| *offline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::defaults::default_camp_data;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SCHEDULE_CSV: &str = "Day,Time,Item\nMon,9am,Swim\nMon,10am,Craft\n";
    const CONTACTS_CSV: &str = "Name,Role\nRanger Rick,Waterfront\n";

    async fn mount(server: &MockServer, route: &str, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(template)
            .mount(server)
            .await;
    }

    fn sources(server: &MockServer) -> Sources {
        Sources {
            schedule_url: Some(format!("{}/schedule", server.uri())),
            contacts_url: Some(format!("{}/contacts", server.uri())),
        }
    }

    #[test]
    fn unconfigured_sources_have_no_url() {
        let sources = Sources {
            schedule_url: Some("https://example.com/REPLACE_ME".into()),
            contacts_url: None,
        };
        assert!(source_url(&sources, FeedKind::Schedule).is_none());
        assert!(source_url(&sources, FeedKind::Contacts).is_none());
    }

    #[tokio::test]
    async fn refresh_replaces_both_feeds() {
        let server = MockServer::start().await;
        mount(&server, "/schedule", ResponseTemplate::new(200).set_body_string(SCHEDULE_CSV)).await;
        mount(&server, "/contacts", ResponseTemplate::new(200).set_body_string(CONTACTS_CSV)).await;

        let mut camp = Camp::new(default_camp_data());
        camp.refresh(&sources(&server), &FetchOptions::default()).await;

        assert_eq!(camp.status(FeedKind::Schedule), FeedStatus::Idle);
        assert_eq!(camp.schedule.data.len(), 1);
        assert_eq!(camp.schedule.data[0].items, vec!["9am Swim", "10am Craft"]);
        assert_eq!(camp.contacts.data.len(), 1);
        assert_eq!(camp.contacts.data[0].name, "Ranger Rick");
        assert!(!camp.is_offline());
    }

    #[tokio::test]
    async fn failing_feed_does_not_affect_the_other() {
        let server = MockServer::start().await;
        mount(&server, "/schedule", ResponseTemplate::new(200).set_body_string(SCHEDULE_CSV)).await;
        mount(&server, "/contacts", ResponseTemplate::new(500)).await;

        let mut camp = Camp::new(default_camp_data());
        camp.refresh(&sources(&server), &FetchOptions::default()).await;

        assert_eq!(camp.status(FeedKind::Schedule), FeedStatus::Idle);
        assert_eq!(camp.status(FeedKind::Contacts), FeedStatus::Error);
        // Defaults are still shown for contacts.
        assert_eq!(camp.contacts.data, default_camp_data().contacts);
        assert!(!camp.is_offline());
    }

    #[tokio::test]
    async fn sheet_without_usable_rows_is_soft_error() {
        let server = MockServer::start().await;
        mount(&server, "/contacts", ResponseTemplate::new(200).set_body_string("Name,Role\n,Nobody\n")).await;

        let sources = Sources {
            schedule_url: None,
            contacts_url: Some(format!("{}/contacts", server.uri())),
        };
        let mut camp = Camp::new(default_camp_data());
        camp.refresh(&sources, &FetchOptions::default()).await;

        assert_eq!(camp.status(FeedKind::Contacts), FeedStatus::Error);
        assert_eq!(camp.contacts.data.len(), 2);
        // The unconfigured schedule feed was never started.
        assert_eq!(camp.status(FeedKind::Schedule), FeedStatus::Idle);
        assert!(!camp.schedule.attempted);
    }

    #[tokio::test]
    async fn unconfigured_sources_produce_no_updates() {
        let updates = fetch_updates(&Sources::default(), &FetchOptions::default()).await;
        assert!(updates.is_empty());
    }

    #[test]
    fn offline_when_every_tried_feed_had_network_error() {
        let mut camp = Camp::new(default_camp_data());
        assert!(!camp.is_offline());

        camp.apply(FeedUpdate {
            kind: FeedKind::Schedule,
            result: Err(CampInfoError::Network("dns failure".into())),
        });
        assert!(camp.is_offline());

        camp.apply(FeedUpdate {
            kind: FeedKind::Contacts,
            result: Ok(FeedData::Contacts(vec![Contact {
                name: "Ann".into(),
                role: String::new(),
                phone: String::new(),
                email: String::new(),
            }])),
        });
        assert!(!camp.is_offline());
    }

    #[test]
    fn begin_refresh_only_touches_configured_feeds() {
        let mut camp = Camp::new(default_camp_data());
        camp.begin_refresh(&Sources {
            schedule_url: Some("https://example.com/pub?output=csv".into()),
            contacts_url: None,
        });
        assert_eq!(camp.status(FeedKind::Schedule), FeedStatus::Loading);
        assert_eq!(camp.status(FeedKind::Contacts), FeedStatus::Idle);
    }

    #[test]
    fn snapshot_reflects_live_data() {
        let mut camp = Camp::new(default_camp_data());
        camp.apply(FeedUpdate {
            kind: FeedKind::Schedule,
            result: Ok(FeedData::Schedule(vec![ScheduleDay {
                day: "Mon".into(),
                items: vec!["9am Swim".into()],
            }])),
        });
        let snapshot = camp.snapshot();
        assert_eq!(snapshot.schedule.len(), 1);
        assert_eq!(snapshot.dining, default_camp_data().dining);

        let json = serde_json::to_value(&camp).expect("serialize camp");
        assert_eq!(json["schedule"]["status"], "idle");
    }
}
