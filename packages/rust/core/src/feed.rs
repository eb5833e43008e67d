//! Per-feed state: the data on screen plus its load status.

use campinfo_shared::{CampInfoError, FeedStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Message recorded when a sheet downloads fine but maps to nothing.
pub const NO_USABLE_ROWS: &str = "sheet has no usable rows";

/// One live data set and what happened the last time it was refreshed.
///
/// Failed or empty refreshes never clear `data`: whatever was shown before
/// (the built-in defaults, or an earlier good sheet) stays visible.
#[derive(Debug, Clone, Serialize)]
pub struct FeedState<T> {
    pub data: Vec<T>,
    pub status: FeedStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed_at: Option<DateTime<Utc>>,
    /// The last attempt failed before any HTTP response arrived.
    pub offline: bool,
    /// A refresh has been started at least once.
    #[serde(skip)]
    pub attempted: bool,
}

impl<T> FeedState<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            data: initial,
            status: FeedStatus::Idle,
            last_error: None,
            refreshed_at: None,
            offline: false,
            attempted: false,
        }
    }

    /// Mark a refresh as in flight.
    pub fn begin(&mut self) {
        self.status = FeedStatus::Loading;
        self.attempted = true;
    }

    /// Record the outcome of a refresh and return the resulting status.
    pub fn apply(&mut self, result: Result<Vec<T>, CampInfoError>) -> FeedStatus {
        self.attempted = true;
        match result {
            Ok(items) if !items.is_empty() => {
                self.data = items;
                self.status = FeedStatus::Idle;
                self.last_error = None;
                self.refreshed_at = Some(Utc::now());
                self.offline = false;
            }
            Ok(_) => {
                self.status = FeedStatus::Error;
                self.last_error = Some(NO_USABLE_ROWS.to_string());
                self.offline = false;
            }
            Err(e) => {
                self.status = FeedStatus::Error;
                self.offline = e.is_network();
                self.last_error = Some(e.to_string());
            }
        }
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == FeedStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FeedState<&'static str> {
        FeedState::new(vec!["default"])
    }

    #[test]
    fn starts_idle_with_initial_data() {
        let s = state();
        assert_eq!(s.status, FeedStatus::Idle);
        assert_eq!(s.data, vec!["default"]);
        assert!(!s.attempted);
    }

    #[test]
    fn begin_marks_loading() {
        let mut s = state();
        s.begin();
        assert!(s.is_loading());
        assert!(s.attempted);
    }

    #[test]
    fn non_empty_result_replaces_data() {
        let mut s = state();
        s.begin();
        assert_eq!(s.apply(Ok(vec!["live"])), FeedStatus::Idle);
        assert_eq!(s.data, vec!["live"]);
        assert!(s.refreshed_at.is_some());
        assert!(s.last_error.is_none());
    }

    #[test]
    fn empty_result_keeps_previous_data() {
        let mut s = state();
        s.apply(Ok(vec!["live"]));
        assert_eq!(s.apply(Ok(vec![])), FeedStatus::Error);
        assert_eq!(s.data, vec!["live"]);
        assert_eq!(s.last_error.as_deref(), Some(NO_USABLE_ROWS));
        assert!(!s.offline);
    }

    #[test]
    fn error_keeps_previous_data() {
        let mut s = state();
        let status = s.apply(Err(CampInfoError::Http {
            url: "https://example.com".into(),
            status: 500,
        }));
        assert_eq!(status, FeedStatus::Error);
        assert!(s.is_error());
        assert_eq!(s.data, vec!["default"]);
        assert!(s.last_error.as_deref().unwrap().contains("500"));
        assert!(!s.offline);
    }

    #[test]
    fn network_error_sets_offline_until_success() {
        let mut s = state();
        s.apply(Err(CampInfoError::Network("connection refused".into())));
        assert!(s.offline);
        s.apply(Ok(vec!["live"]));
        assert!(!s.offline);
        assert_eq!(s.status, FeedStatus::Idle);
    }
}
