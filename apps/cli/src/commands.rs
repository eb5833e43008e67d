//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use campinfo_core::{Camp, default_camp_data};
use campinfo_shared::{
    AppConfig, CampInfoError, FeedKind, FetchOptions, Sources, init_config, load_config,
    load_config_from,
};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::render;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Camp Info: schedule, dining menu, map, and contacts for camp week.
#[derive(Parser)]
#[command(
    name = "campinfo",
    version,
    about = "Camp schedule, dining menu, map, and contacts, refreshed from the published camp sheets.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.campinfo/campinfo.toml.
    #[arg(long, env = "CAMPINFO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Skip the live sheets and show built-in data only.
    #[arg(long, global = true)]
    pub offline: bool,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Schedule sheet CSV URL (empty string disables the feed).
    #[arg(long, env = "CAMPINFO_SCHEDULE_URL", global = true)]
    pub schedule_url: Option<String>,

    /// Contacts sheet CSV URL (empty string disables the feed).
    #[arg(long, env = "CAMPINFO_CONTACTS_URL", global = true)]
    pub contacts_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Show the camp schedule.
    Schedule {
        /// Only show this day (case-insensitive).
        #[arg(short, long)]
        day: Option<String>,
    },

    /// Show the contact directory.
    Contacts,

    /// Show the dining hall menu.
    Menu,

    /// Show the camp map link.
    Map,

    /// Run a local CSV export through the sheet pipeline.
    Parse {
        /// CSV file to read.
        file: PathBuf,

        /// Which mapper to use: schedule or contacts.
        #[arg(short, long)]
        kind: FeedKind,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "warn",
        1 => "campinfo=info,campinfo_core=info,campinfo_fetch=info",
        2 => "campinfo=debug,campinfo_core=debug,campinfo_fetch=debug,campinfo_sheet=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so `--json` output on stdout stays machine-readable.
    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Settings shared by every command, resolved once from config + flags.
struct Context {
    config: AppConfig,
    sources: Sources,
    fetch: FetchOptions,
    offline: bool,
    json: bool,
}

impl Context {
    fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config_from(path)?,
            None => load_config()?,
        };
        let sources = Sources::from(&config)
            .with_overrides(cli.schedule_url.as_deref(), cli.contacts_url.as_deref());
        let fetch = FetchOptions::from(&config.fetch);

        Ok(Self {
            config,
            sources,
            fetch,
            offline: cli.offline,
            json: cli.json,
        })
    }

    /// Sources restricted to one feed.
    fn sources_for(&self, kind: FeedKind) -> Sources {
        match kind {
            FeedKind::Schedule => Sources {
                schedule_url: self.sources.schedule_url.clone(),
                contacts_url: None,
            },
            FeedKind::Contacts => Sources {
                schedule_url: None,
                contacts_url: self.sources.contacts_url.clone(),
            },
        }
    }

    /// Built-in data, with `kind` refreshed from its sheet unless offline.
    async fn camp_with(&self, kind: FeedKind) -> Camp {
        let mut camp = Camp::new(default_camp_data());
        if self.offline {
            info!("offline mode, using built-in data");
            return camp;
        }

        let sources = self.sources_for(kind);
        let spinner = spinner(&format!("Loading {kind}…"), self.json);
        camp.refresh(&sources, &self.fetch).await;
        spinner.finish_and_clear();

        if let Some(err) = match kind {
            FeedKind::Schedule => camp.schedule.last_error.as_deref(),
            FeedKind::Contacts => camp.contacts.last_error.as_deref(),
        } {
            warn!(feed = %kind, error = err, "live sheet unavailable, showing saved data");
        }
        camp
    }
}

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let ctx = Context::resolve(&cli)?;

    match cli.command {
        Command::Schedule { day } => cmd_schedule(&ctx, day.as_deref()).await,
        Command::Contacts => cmd_contacts(&ctx).await,
        Command::Menu => cmd_menu(&ctx),
        Command::Map => cmd_map(&ctx),
        Command::Parse { file, kind } => cmd_parse(&ctx, &file, kind),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&ctx),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_schedule(ctx: &Context, day: Option<&str>) -> Result<()> {
    let camp = ctx.camp_with(FeedKind::Schedule).await;

    let days = match day {
        Some(wanted) => {
            let matched = render::filter_day(&camp.schedule.data, wanted);
            if matched.is_empty() {
                return Err(eyre!(
                    "no schedule for '{wanted}' (days: {})",
                    render::day_names(&camp.schedule.data)
                ));
            }
            matched
        }
        None => camp.schedule.data.clone(),
    };

    if ctx.json {
        let out = serde_json::json!({
            "status": camp.schedule.status,
            "last_error": camp.schedule.last_error,
            "days": days,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render::schedule(&days, camp.schedule.status));
    }
    Ok(())
}

async fn cmd_contacts(ctx: &Context) -> Result<()> {
    let camp = ctx.camp_with(FeedKind::Contacts).await;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&camp.contacts)?);
    } else {
        print!(
            "{}",
            render::contacts(&camp.contacts.data, camp.contacts.status)
        );
    }
    Ok(())
}

fn cmd_menu(ctx: &Context) -> Result<()> {
    let data = default_camp_data();
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&data.dining)?);
    } else {
        print!("{}", render::menu(&data.dining));
    }
    Ok(())
}

fn cmd_map(ctx: &Context) -> Result<()> {
    let data = default_camp_data();
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&data.map)?);
    } else {
        print!("{}", render::map(&data.map));
    }
    Ok(())
}

fn cmd_parse(ctx: &Context, file: &Path, kind: FeedKind) -> Result<()> {
    let text = std::fs::read_to_string(file).map_err(|e| CampInfoError::io(file, e))?;
    let data = parse_sheet(&file.display().to_string(), kind, &text)?;

    info!(file = %file.display(), feed = %kind, entries = data.len(), "parsed local sheet");

    match data {
        campinfo_sheet::FeedData::Schedule(days) => {
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&days)?);
            } else {
                print!("{}", render::schedule(&days, Default::default()));
            }
        }
        campinfo_sheet::FeedData::Contacts(contacts) => {
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&contacts)?);
            } else {
                print!("{}", render::contacts(&contacts, Default::default()));
            }
        }
    }
    Ok(())
}

/// Run `text` through the `kind` pipeline, failing when nothing usable comes out.
fn parse_sheet(
    source: &str,
    kind: FeedKind,
    text: &str,
) -> campinfo_shared::Result<campinfo_sheet::FeedData> {
    let data = campinfo_sheet::parse_feed(kind, text);
    if data.is_empty() {
        return Err(CampInfoError::parse(format!(
            "{source}: no usable {kind} rows (check the header row)"
        )));
    }
    Ok(data)
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(ctx: &Context) -> Result<()> {
    let toml_str = toml::to_string_pretty(&ctx.config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Spinner on stderr while sheets load. Hidden for JSON output.
fn spinner(msg: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(
            style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
    }
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
