//! Reusable TUI widgets.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Camp green, used for chips and the header.
pub(crate) const CAMP_GREEN: Color = Color::Rgb(0x29, 0x51, 0x33);

/// Card orange, used for panel backgrounds and the selected card.
pub(crate) const CAMP_ORANGE: Color = Color::Rgb(0xf7, 0xa2, 0x00);

/// Bottom status bar.
pub(crate) fn status_bar(msg: &str) -> Paragraph<'_> {
    Paragraph::new(format!(" {msg}"))
        .style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White),
        )
}

/// A small rounded label such as the version or Online/Offline.
pub(crate) fn badge(text: &str, warn: bool) -> Span<'_> {
    let bg = if warn { Color::LightYellow } else { Color::White };
    Span::styled(format!(" {text} "), Style::default().fg(Color::Black).bg(bg))
}

/// One home-screen card: icon, title, and an optional status hint.
pub(crate) fn card<'a>(icon: &'a str, title: &'a str, hint: &'a str, selected: bool) -> Paragraph<'a> {
    let (border, title_style) = if selected {
        (
            Style::default().fg(CAMP_ORANGE),
            Style::default().fg(CAMP_ORANGE).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::Gray), Style::default().add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![
        Line::from(icon),
        Line::from(Span::styled(title, title_style)),
    ];
    if !hint.is_empty() {
        lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        )
}
