//! Schedule sheet → per-day groups of display lines.
//!
//! Expected columns (any of the listed spellings):
//! - `Day`: group label; rows without one are ignored. The first spelling
//!   present decides, so a blank `Day` cell is not rescued by `DAY`.
//! - `Time`: optional prefix for the line, resolved like `Day`
//! - `Item` / `Event` / `Activity`: what happens
//! - `Sort`: optional; lower numbers put a day earlier

use std::collections::HashMap;

use campinfo_shared::ScheduleDay;
use tracing::debug;

use crate::records::Record;

const DAY_KEYS: &[&str] = &["Day", "DAY", "day"];
const TIME_KEYS: &[&str] = &["Time", "TIME", "time"];
const ACTIVITY_KEYS: &[&str] = &[
    "Item", "ITEM", "item", "Event", "EVENT", "event", "Activity", "ACTIVITY", "activity",
];
const SORT_KEYS: &[&str] = &["Sort", "SORT", "sort"];

/// Sort key for a day the sort pass never saw.
const MISSING_SORT_KEY: f64 = 1e9;

/// Group schedule records by day.
///
/// Days appear in first-seen order unless some record carries a sort value,
/// in which case days are stably ordered by their smallest sort value.
/// A day is listed even if none of its rows produced a line.
pub fn to_schedule(records: &[Record]) -> Vec<ScheduleDay> {
    let mut days: Vec<ScheduleDay> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let day = record.first_present(DAY_KEYS);
        if day.is_empty() {
            continue;
        }

        let line = display_line(
            &record.first_present(TIME_KEYS),
            &record.probe(ACTIVITY_KEYS),
        );

        let slot = *index.entry(day.clone()).or_insert_with(|| {
            days.push(ScheduleDay {
                day,
                items: Vec::new(),
            });
            days.len() - 1
        });
        if !line.is_empty() {
            days[slot].items.push(line);
        }
    }

    if records.iter().any(|r| !r.probe(SORT_KEYS).is_empty()) {
        let order = sort_keys(records);
        days.sort_by(|a, b| {
            let ka = order.get(&a.day).copied().unwrap_or(MISSING_SORT_KEY);
            let kb = order.get(&b.day).copied().unwrap_or(MISSING_SORT_KEY);
            ka.total_cmp(&kb)
        });
    }

    debug!(
        records = records.len(),
        days = days.len(),
        "schedule grouped"
    );

    days
}

fn display_line(time: &str, activity: &str) -> String {
    if time.is_empty() {
        activity.to_string()
    } else {
        format!("{time} {activity}").trim().to_string()
    }
}

/// Smallest sort value per day. Blank or non-numeric values count as +inf.
fn sort_keys(records: &[Record]) -> HashMap<String, f64> {
    let mut order: HashMap<String, f64> = HashMap::new();

    for record in records {
        let day = record.first_present(DAY_KEYS);
        if day.is_empty() {
            continue;
        }
        let key = parse_sort_value(&record.probe(SORT_KEYS));
        order
            .entry(day)
            .and_modify(|k| {
                if key < *k {
                    *k = key;
                }
            })
            .or_insert(key);
    }

    order
}

fn parse_sort_value(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => f64::INFINITY,
    }
}
