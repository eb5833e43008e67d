//! Contacts panel.

use campinfo_core::FeedState;
use campinfo_shared::{Contact, FeedStatus};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Status notices shown above the contact cards.
pub(crate) fn notices(feed: &FeedState<Contact>) -> Vec<&'static str> {
    let mut out = Vec::new();
    match feed.status {
        FeedStatus::Loading => out.push("Loading contacts…"),
        FeedStatus::Error => out.push("Couldn't load live contacts. Showing last saved."),
        FeedStatus::Idle => {}
    }
    if feed.data.is_empty() && feed.status != FeedStatus::Loading {
        out.push("Contacts will appear here.");
    }
    out
}

pub(crate) fn draw(f: &mut Frame, area: Rect, feed: &FeedState<Contact>, scroll: u16) {
    let mut lines: Vec<Line> = notices(feed)
        .into_iter()
        .map(|n| Line::from(Span::styled(n, Style::default().fg(Color::Yellow))))
        .collect();

    for c in &feed.data {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            c.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if !c.role.is_empty() {
            lines.push(Line::from(Span::styled(
                c.role.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if !c.phone.is_empty() {
            lines.push(Line::from(format!("  📞 {}", c.phone)));
        }
        if !c.email.is_empty() {
            lines.push(Line::from(format!("  ✉️ {}", c.email)));
        }
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    use campinfo_shared::CampInfoError;

    fn ann() -> Contact {
        Contact {
            name: "Ann".into(),
            role: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    #[test]
    fn loading_hides_empty_message() {
        let mut feed: FeedState<Contact> = FeedState::new(vec![]);
        feed.begin();
        assert_eq!(notices(&feed), vec!["Loading contacts…"]);
    }

    #[test]
    fn error_with_saved_contacts() {
        let mut feed = FeedState::new(vec![ann()]);
        feed.apply(Err(CampInfoError::Network("offline".into())));
        assert_eq!(
            notices(&feed),
            vec!["Couldn't load live contacts. Showing last saved."]
        );
    }

    #[test]
    fn idle_and_empty() {
        let feed: FeedState<Contact> = FeedState::new(vec![]);
        assert_eq!(notices(&feed), vec!["Contacts will appear here."]);
        assert!(notices(&FeedState::new(vec![ann()])).is_empty());
    }
}
