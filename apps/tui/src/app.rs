//! Core TUI application state and event loop.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use campinfo_core::{Camp, FeedUpdate, default_camp_data, refresh_feed, source_url};
use campinfo_shared::{FeedKind, FeedStatus, FetchOptions, Sources, load_config};
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tokio::runtime::Runtime;
use tracing::info;

use crate::screens::{CardId, Panel, PanelAction};
use crate::widgets::{CAMP_GREEN, CAMP_ORANGE, badge, card, status_bar};

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Something the event loop must do outside the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Intent {
    None,
    Refresh,
}

/// Application state.
pub(crate) struct App {
    /// Displayed data and feed status.
    pub camp: Camp,
    /// Selected card on the home grid.
    pub selected: usize,
    /// Open modal panel, if any.
    pub panel: Option<Panel>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
    /// Status message shown in bottom bar.
    pub status: String,
}

impl App {
    pub(crate) fn new(camp: Camp) -> Self {
        Self {
            camp,
            selected: 0,
            panel: None,
            should_quit: false,
            show_help: false,
            status: "Ready — press ? for help".to_string(),
        }
    }

    fn selected_card(&self) -> CardId {
        CardId::ALL[self.selected]
    }

    /// Fold a finished refresh into the state and report it in the status bar.
    pub(crate) fn apply_update(&mut self, update: FeedUpdate) {
        let kind = update.kind;
        let status = self.camp.apply(update);
        self.status = match status {
            FeedStatus::Error => format!("Couldn't load live {kind}. Showing last saved."),
            _ => format!("Live {kind} updated."),
        };
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Intent {
        // Global keybindings (always active)
        match code {
            KeyCode::Char('q') | KeyCode::Char('c')
                if modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return Intent::None;
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
                return Intent::None;
            }
            KeyCode::Char('r') => {
                // One refresh at a time, so a slow reply can't overwrite a newer one.
                if self.is_refreshing() {
                    self.status = "Refresh already in progress…".to_string();
                    return Intent::None;
                }
                self.status = "Refreshing live sheets…".to_string();
                return Intent::Refresh;
            }
            _ => {}
        }

        // If help is showing, consume any key to dismiss
        if self.show_help {
            self.show_help = false;
            return Intent::None;
        }

        if let Some(panel) = self.panel.as_mut() {
            if panel.handle_key(code, &self.camp) == PanelAction::Close {
                self.panel = None;
            }
            return Intent::None;
        }

        let count = CardId::ALL.len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = (self.selected + 1).min(count - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(GRID_COLUMNS);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + GRID_COLUMNS < count {
                    self.selected += GRID_COLUMNS;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let id = self.selected_card();
                self.status = format!("{id} — Esc to close");
                self.panel = Some(Panel::new(id));
            }
            _ => {}
        }
        Intent::None
    }

    fn is_refreshing(&self) -> bool {
        self.camp.schedule.is_loading() || self.camp.contacts.is_loading()
    }

    /// Short status hint under a card title.
    fn card_hint(&self, id: CardId) -> &'static str {
        let status = match id {
            CardId::Schedule => self.camp.status(FeedKind::Schedule),
            CardId::Contacts => self.camp.status(FeedKind::Contacts),
            _ => return "",
        };
        match status {
            FeedStatus::Loading => "loading…",
            FeedStatus::Error => "showing saved",
            FeedStatus::Idle => "",
        }
    }
}

// ---------------------------------------------------------------------------
// Background refresh
// ---------------------------------------------------------------------------

/// Runs sheet refreshes on a tokio runtime and hands results back to the UI thread.
struct Refresher {
    runtime: Runtime,
    sources: Sources,
    fetch: FetchOptions,
    tx: Sender<FeedUpdate>,
}

impl Refresher {
    /// Spawn one task per configured feed; results arrive on the channel.
    fn start(&self, camp: &mut Camp) {
        camp.begin_refresh(&self.sources);
        for kind in [FeedKind::Schedule, FeedKind::Contacts] {
            let Some(url) = source_url(&self.sources, kind) else {
                continue;
            };
            let url = url.to_string();
            let opts = self.fetch.clone();
            let tx = self.tx.clone();
            self.runtime.spawn(async move {
                let update = refresh_feed(kind, &url, &opts).await;
                // The UI may already have quit.
                let _ = tx.send(update);
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal lifecycle
// ---------------------------------------------------------------------------

/// Run the app inside a raw-mode alternate screen.
pub(crate) fn run() -> Result<()> {
    let config = load_config()?;
    let (tx, rx) = mpsc::channel();
    let refresher = Refresher {
        runtime: Runtime::new()?,
        sources: Sources::from(&config),
        fetch: FetchOptions::from(&config.fetch),
        tx,
    };

    // Setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &refresher, &rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    refresher: &Refresher,
    rx: &Receiver<FeedUpdate>,
) -> Result<()> {
    let mut app = App::new(Camp::new(default_camp_data()));
    refresher.start(&mut app.camp);
    info!("tui started");

    loop {
        while let Ok(update) = rx.try_recv() {
            app.apply_update(update);
        }

        terminal.draw(|f| draw(f, &app))?;

        // Poll for events with 100ms timeout for responsive UI
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && app.handle_key(key.code, key.modifiers) == Intent::Refresh
                {
                    refresher.start(&mut app.camp);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Card grid
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_grid(f, chunks[1], app);
    f.render_widget(status_bar(&app.status), chunks[2]);

    if let Some(panel) = &app.panel {
        draw_panel(f, panel, &app.camp);
    }

    // Help overlay
    if app.show_help {
        draw_help_overlay(f);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let version = concat!("v", env!("CARGO_PKG_VERSION"));
    let offline = app.camp.is_offline();

    let mut badges = vec![badge("MVP", false), Span::raw(" "), badge(version, false), Span::raw(" ")];
    badges.push(if offline {
        badge("Offline", true)
    } else {
        badge("Online", false)
    });
    if let Some(at) = app.camp.schedule.refreshed_at {
        let local = at.with_timezone(&chrono::Local);
        badges.push(Span::raw(format!("  updated {}", local.format("%H:%M"))));
    }

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Camp Shenandoah", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  Camper First • Welcome Home"),
        ]),
        Line::from(badges),
    ])
    .style(Style::default().fg(Color::White).bg(CAMP_GREEN))
    .block(Block::default().borders(Borders::NONE));

    f.render_widget(header, area);
}

fn draw_grid(f: &mut Frame, area: Rect, app: &App) {
    let rows = CardId::ALL.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(vec![Constraint::Length(5); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell) in cols.iter().enumerate() {
            let idx = row * GRID_COLUMNS + col;
            let Some(id) = CardId::ALL.get(idx).copied() else {
                continue;
            };
            let title = id.to_string();
            let widget = card(id.icon(), &title, app.card_hint(id), idx == app.selected);
            f.render_widget(widget, *cell);
        }
    }
}

fn draw_panel(f: &mut Frame, panel: &Panel, camp: &Camp) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CAMP_ORANGE))
        .title(format!(" {} ", panel.title(camp)))
        .title_bottom(" Esc: close ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let content = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    panel.draw(f, content, camp);
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from("Keybindings").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("  ←↑↓→ / hjkl  Move between cards"),
        Line::from("  Enter        Open card"),
        Line::from("  Esc          Close panel / back"),
        Line::from("  r            Refresh live sheets"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Ctrl-C   Quit"),
        Line::from(""),
        Line::from("Schedule panel:").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from("  ↑/↓          Choose a day"),
        Line::from("  Enter        Show that day"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help — press any key to close ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    // Clear background
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Create a centered rectangle with percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
