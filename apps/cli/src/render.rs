//! Plain-text rendering of camp data for the terminal.

use campinfo_shared::{CampMap, Contact, FeedStatus, Meal, ScheduleDay};

/// Days whose label matches `wanted`, ignoring case and surrounding space.
pub(crate) fn filter_day(days: &[ScheduleDay], wanted: &str) -> Vec<ScheduleDay> {
    let wanted = wanted.trim();
    days.iter()
        .filter(|d| d.day.eq_ignore_ascii_case(wanted))
        .cloned()
        .collect()
}

/// Comma-separated day labels, for error hints.
pub(crate) fn day_names(days: &[ScheduleDay]) -> String {
    if days.is_empty() {
        return "none".to_string();
    }
    days.iter()
        .map(|d| d.day.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn schedule(days: &[ScheduleDay], status: FeedStatus) -> String {
    let mut out = String::from("Camp Schedule\n");

    if status == FeedStatus::Error {
        out.push_str("  ! Couldn't load the live schedule. Showing last saved.\n");
    }
    if days.is_empty() {
        out.push_str("  Schedule will appear here.\n");
        return out;
    }

    for day in days {
        out.push_str(&format!("\n  {}\n", day.day));
        if day.items.is_empty() {
            out.push_str("    (nothing scheduled)\n");
        }
        for item in &day.items {
            out.push_str(&format!("    {item}\n"));
        }
    }
    out
}

pub(crate) fn contacts(contacts: &[Contact], status: FeedStatus) -> String {
    let mut out = String::from("Contacts\n");

    if status == FeedStatus::Error {
        out.push_str("  ! Couldn't load live contacts. Showing last saved.\n");
    }
    if contacts.is_empty() {
        out.push_str("  Contacts will appear here.\n");
        return out;
    }

    for c in contacts {
        out.push_str(&format!("\n  {}\n", c.name));
        if !c.role.is_empty() {
            out.push_str(&format!("    {}\n", c.role));
        }
        if !c.phone.is_empty() {
            out.push_str(&format!("    Phone: {}\n", c.phone));
        }
        if !c.email.is_empty() {
            out.push_str(&format!("    Email: {}\n", c.email));
        }
    }
    out
}

pub(crate) fn menu(meals: &[Meal]) -> String {
    let mut out = String::from("Dining Hall Menu\n");
    if meals.is_empty() {
        out.push_str("  Menu coming soon. Check back closer to camp week!\n");
        return out;
    }
    for m in meals {
        out.push_str(&format!("\n  {}\n", m.meal));
        for item in &m.items {
            out.push_str(&format!("    - {item}\n"));
        }
    }
    out
}

pub(crate) fn map(map: &CampMap) -> String {
    let mut out = String::from("Camp Map\n");
    out.push_str(&format!("  {}\n", map.image_url));
    if !map.notes.is_empty() {
        out.push_str(&format!("  Notes: {}\n", map.notes.join(" • ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(name: &str, items: &[&str]) -> ScheduleDay {
        ScheduleDay {
            day: name.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn schedule_lists_days_and_items() {
        let out = schedule(&[day("Mon", &["9am Swim"]), day("Tue", &[])], FeedStatus::Idle);
        assert!(out.contains("  Mon\n    9am Swim\n"));
        assert!(out.contains("  Tue\n    (nothing scheduled)\n"));
        assert!(!out.contains("Couldn't load"));
    }

    #[test]
    fn schedule_error_notice_and_empty_message() {
        let out = schedule(&[], FeedStatus::Error);
        assert!(out.contains("Couldn't load the live schedule"));
        assert!(out.contains("Schedule will appear here."));
    }

    #[test]
    fn contacts_skip_empty_fields() {
        let out = contacts(
            &[Contact {
                name: "Ann".into(),
                role: String::new(),
                phone: "555".into(),
                email: String::new(),
            }],
            FeedStatus::Idle,
        );
        assert_eq!(out, "Contacts\n\n  Ann\n    Phone: 555\n");
    }

    #[test]
    fn contacts_error_notice() {
        let out = contacts(&[], FeedStatus::Error);
        assert!(out.contains("Couldn't load live contacts. Showing last saved."));
        assert!(out.contains("Contacts will appear here."));
    }

    #[test]
    fn empty_menu_is_coming_soon() {
        assert!(menu(&[]).contains("Menu coming soon"));
    }

    #[test]
    fn map_joins_notes() {
        let out = map(&CampMap {
            image_url: "https://example.com/map.pdf".into(),
            notes: vec!["Tap to zoom".into(), "North is up".into()],
        });
        assert!(out.contains("Notes: Tap to zoom • North is up"));
    }

    #[test]
    fn filter_day_ignores_case() {
        let days = vec![day("Monday", &["x"]), day("Tuesday", &[])];
        assert_eq!(filter_day(&days, " monday ").len(), 1);
        assert!(filter_day(&days, "Friday").is_empty());
        assert_eq!(day_names(&days), "Monday, Tuesday");
        assert_eq!(day_names(&[]), "none");
    }

    #[test]
    fn menu_lists_meals_exactly() {
        let meals = vec![Meal {
            meal: "Lunch".into(),
            items: vec!["Tacos".into(), "Rice".into()],
        }];
        assert_eq!(
            menu(&meals),
            "Dining Hall Menu\n\n  Lunch\n    - Tacos\n    - Rice\n"
        );
    }
}
