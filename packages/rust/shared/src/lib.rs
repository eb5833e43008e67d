//! Shared types, error model, and configuration for Camp Info.
//!
//! This crate is the foundation depended on by all other Camp Info crates.
//! It provides:
//! - [`CampInfoError`]: the unified error type
//! - Domain types ([`ScheduleDay`], [`Contact`], [`Meal`], [`CampData`], [`FeedStatus`])
//! - Configuration ([`AppConfig`], [`Sources`], [`FetchOptions`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, FetchConfig, FetchOptions, Sources, SourcesConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{CampInfoError, Result};
pub use types::{CampData, CampMap, Contact, FeedKind, FeedStatus, Meal, ScheduleDay};
