//! Home-screen cards and the modal panels they open.
//!
//! Each card maps to one panel; panels own their small navigation state and
//! render from the shared [`Camp`] data.

mod contacts;
mod lists;
mod schedule;

use std::fmt;

use campinfo_core::Camp;
use crossterm::event::KeyCode;
use ratatui::prelude::*;

/// Home-screen cards, in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardId {
    Schedule,
    Menu,
    Map,
    Contacts,
    TradingPost,
    Program,
}

impl CardId {
    pub(crate) const ALL: [CardId; 6] = [
        CardId::Schedule,
        CardId::Menu,
        CardId::Map,
        CardId::Contacts,
        CardId::TradingPost,
        CardId::Program,
    ];

    pub(crate) fn icon(self) -> &'static str {
        match self {
            Self::Schedule => "🗓️",
            Self::Menu => "🍽️",
            Self::Map => "🗺️",
            Self::Contacts => "☎️",
            Self::TradingPost => "🏪",
            Self::Program => "🎯",
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schedule => write!(f, "Camp Schedule"),
            Self::Menu => write!(f, "Dining Hall Menu"),
            Self::Map => write!(f, "Camp Map"),
            Self::Contacts => write!(f, "Contacts"),
            Self::TradingPost => write!(f, "Trading Post"),
            Self::Program => write!(f, "Program"),
        }
    }
}

/// What the app should do after a panel handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelAction {
    None,
    Close,
}

/// An open modal panel.
pub(crate) struct Panel {
    pub id: CardId,
    schedule: schedule::SchedulePanel,
    scroll: u16,
}

impl Panel {
    pub(crate) fn new(id: CardId) -> Self {
        Self {
            id,
            schedule: schedule::SchedulePanel::new(),
            scroll: 0,
        }
    }

    pub(crate) fn title(&self, camp: &Camp) -> String {
        match self.id {
            CardId::Schedule => self.schedule.title(&camp.schedule.data),
            CardId::Menu => "Dining Hall Menu".to_string(),
            other => other.to_string(),
        }
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, camp: &Camp) {
        match self.id {
            CardId::Schedule => {
                self.schedule
                    .draw(f, area, &camp.schedule.data, camp.schedule.status)
            }
            CardId::Contacts => contacts::draw(f, area, &camp.contacts, self.scroll),
            CardId::Menu => lists::draw_menu(f, area, &camp.dining, self.scroll),
            CardId::Map => lists::draw_map(f, area, &camp.map),
            CardId::TradingPost => {
                lists::draw_items(f, area, &camp.trading_post, "Trading Post", self.scroll)
            }
            CardId::Program => lists::draw_items(f, area, &camp.program, "Program", self.scroll),
        }
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, camp: &Camp) -> PanelAction {
        if self.id == CardId::Schedule {
            return self.schedule.handle_key(code, &camp.schedule.data);
        }

        match code {
            KeyCode::Esc | KeyCode::Backspace => PanelAction::Close,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                PanelAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                PanelAction::None
            }
            _ => PanelAction::None,
        }
    }
}
