//! Application state and refresh orchestration for Camp Info.
//!
//! This crate ties the sheet fetcher and the CSV pipeline to the data the
//! front-ends render: built-in defaults, per-feed status, and the concurrent
//! refresh of the live schedule and contacts sheets.

pub mod defaults;
pub mod feed;
pub mod refresh;

pub use defaults::default_camp_data;
pub use feed::FeedState;
pub use campinfo_sheet::FeedData;
pub use refresh::{Camp, FeedUpdate, fetch_updates, refresh_feed, source_url};
