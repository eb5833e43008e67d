//! Static panels: dining menu, camp map, and plain item lists.

use campinfo_shared::{CampMap, Meal};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub(crate) fn draw_menu(f: &mut Frame, area: Rect, meals: &[Meal], scroll: u16) {
    if meals.is_empty() {
        f.render_widget(
            Paragraph::new("Menu coming soon. Check back closer to camp week!")
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for m in meals {
        lines.push(Line::from(Span::styled(
            m.meal.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(m.items.iter().map(|item| Line::from(format!("  • {item}"))));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

pub(crate) fn draw_map(f: &mut Frame, area: Rect, map: &CampMap) {
    let mut lines = vec![
        Line::from("Open the camp map:"),
        Line::from(Span::styled(
            map.image_url.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];
    if !map.notes.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Notes: {}", map.notes.join(" • "))));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// A bare bulleted list, or a "coming soon" line when empty.
pub(crate) fn draw_items(f: &mut Frame, area: Rect, items: &[String], what: &str, scroll: u16) {
    if items.is_empty() {
        f.render_widget(
            Paragraph::new(format!("{what} details coming soon."))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let lines: Vec<Line> = items.iter().map(|i| Line::from(format!("• {i}"))).collect();
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
