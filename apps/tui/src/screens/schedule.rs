//! Schedule panel: day list, drilling into one day's lines.

use campinfo_shared::{FeedStatus, ScheduleDay};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::PanelAction;

pub(crate) struct SchedulePanel {
    selected: usize,
    /// Index of the day being viewed; `None` shows the day list.
    open_day: Option<usize>,
}

impl SchedulePanel {
    pub(crate) fn new() -> Self {
        Self {
            selected: 0,
            open_day: None,
        }
    }

    fn current<'a>(&self, days: &'a [ScheduleDay]) -> Option<&'a ScheduleDay> {
        self.open_day.and_then(|i| days.get(i))
    }

    pub(crate) fn title(&self, days: &[ScheduleDay]) -> String {
        match self.current(days) {
            Some(day) => format!("Schedule – {}", day.day),
            None => "Camp Schedule".to_string(),
        }
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, days: &[ScheduleDay], status: FeedStatus) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        let notice = match status {
            FeedStatus::Loading => "Loading schedule…",
            FeedStatus::Error => "Couldn't load the live schedule. Showing last saved.",
            FeedStatus::Idle => "",
        };
        f.render_widget(
            Paragraph::new(notice).style(Style::default().fg(Color::Yellow)),
            chunks[0],
        );

        if let Some(day) = self.current(days) {
            let items: Vec<ListItem> = day
                .items
                .iter()
                .map(|line| ListItem::new(format!("  {line}")))
                .collect();
            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::TOP)
                    .title(" Esc: back to all days "),
            );
            f.render_widget(list, chunks[1]);
            return;
        }

        if days.is_empty() {
            let empty = Paragraph::new("Schedule will appear here.")
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(empty, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = days
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let prefix = if i == self.selected { "▸ " } else { "  " };
                let preview = d.items.first().map(String::as_str).unwrap_or("");
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{prefix}{}", d.day), style),
                    Span::styled(format!("  {preview}"), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::TOP)
                .title(format!(" {} day(s) — Enter to open ", days.len())),
        );
        f.render_widget(list, chunks[1]);
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, days: &[ScheduleDay]) -> PanelAction {
        if self.open_day.is_some() {
            if matches!(code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) {
                self.open_day = None;
            }
            return PanelAction::None;
        }

        match code {
            KeyCode::Esc => PanelAction::Close,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                PanelAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < days.len() {
                    self.selected += 1;
                }
                PanelAction::None
            }
            KeyCode::Enter | KeyCode::Right => {
                if self.selected < days.len() {
                    self.open_day = Some(self.selected);
                }
                PanelAction::None
            }
            _ => PanelAction::None,
        }
    }
}
