use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, path::PathBuf, sync::Mutex, time::Duration};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use licensetui::{Catalog, Filter, Model};

/// Open Source License Explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/licensetui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial category filter: all, permissive, copyleft-weak, copyleft-strong
    #[arg(short, long, value_parser = parse_filter)]
    filter: Option<Filter>,

    /// License id to show expanded at startup
    #[arg(short, long)]
    expand: Option<String>,

    /// Print the filtered catalog and exit instead of starting the TUI
    #[arg(short, long)]
    list: bool,

    /// With --list, print JSON
    #[arg(long, requires = "list")]
    json: bool,
}

fn parse_filter(s: &str) -> Result<Filter, String> {
    s.parse::<Filter>().map_err(|e| e.to_string())
}

mod app;
mod config;
mod handlers;
mod ui;
mod utils;

use config::Config;

pub struct App {
    pub model: Model<'static>,
}

impl App {
    fn new(config: &Config) -> Self {
        let mut model = Model::new(Catalog::builtin(), config.vim_mode);
        model.ui.show_guide = config.show_guide;
        Self { model }
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }
}

/// Install a file-backed tracing subscriber when debugging is requested.
/// The terminal belongs to the TUI, so logs never go to stdout/stderr.
fn init_logging(debug: bool) -> Result<()> {
    if !debug && std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;

    let (mut config, config_path) = config::load(args.config).context("failed to load config")?;
    match &config_path {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => info!("no config file found, using defaults"),
    }

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    let initial_filter = match args.filter {
        Some(filter) => Some(filter),
        None => config.initial_filter()?,
    };

    let mut app = App::new(&config);
    if let Some(filter) = initial_filter {
        app.model.apply_filter(filter);
    }
    if let Some(id) = args.expand.as_deref() {
        app.model.browse.toggle_expanded(id);
    }

    if args.list {
        let output = if args.json {
            app::listing::render_json(&app.model)?
        } else {
            app::listing::render_plain(&app.model)
        };
        print!("{}", output);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    debug!("entering event loop");

    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            debug!("quit requested");
            break;
        }

        // Short poll so toasts expire without a key press
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
