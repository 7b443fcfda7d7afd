use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};
use tracing::{debug, info, warn};

/// Dashboard of reorderable columns, each with its own back/forward history
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/stackdeck-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

mod config;
mod handlers;
mod logging;
mod ui;
mod utils;

use config::Config;
use stackdeck::model::Model;
use stackdeck::views::demo_registry;
use stackdeck::{ColumnKindCatalog, ContentRegistry, Msg};
use ui::hit_map::{HitMap, HitTarget};

pub struct App {
    pub model: Model,

    registry: ContentRegistry,
    catalog: ColumnKindCatalog,
    config: Config,

    /// Clickable regions from the last frame
    hit_map: HitMap,
    /// Target under the last left press; fires on release unless a drag started
    pressed: Option<HitTarget>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let catalog = config.catalog();
        let mut model = Model::new(config.vim_mode);

        for column in config.startup_columns() {
            let kind = column.kind();
            let added = match column.payload() {
                Some(payload) => model
                    .columns
                    .append_with_payload(kind, &catalog, payload.clone())
                    .map(|next| model.columns = next),
                None => model.update(&Msg::AddColumn(kind.to_string()), &catalog),
            };
            added.with_context(|| format!("Invalid startup column '{}' in config", kind))?;
        }
        model.ui.focused = model.columns.columns().first().map(|c| c.id().clone());

        info!(
            "Started with {} columns, {} column kinds",
            model.columns.len(),
            catalog.len()
        );

        Ok(Self {
            model,
            registry: demo_registry(),
            catalog,
            config,
            hit_map: HitMap::default(),
            pressed: None,
        })
    }

    /// Apply a message; rejected messages leave the model untouched and show a toast
    fn dispatch(&mut self, msg: Msg) {
        debug!("Dispatch {:?}", msg);
        if let Err(e) = self.model.update(&msg, &self.catalog) {
            warn!("Rejected {:?}: {}", msg, e);
            self.model.ui.show_toast(format!("Error: {}", e));
        }
    }
}

/// Determine config file path
///
/// Order: `--config`, then `<config_dir>/stackdeck/config.yaml`, then
/// `./config.yaml`. `None` means run on built-in defaults.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let config_path = PathBuf::from(&path);
        if config_path.exists() {
            return Ok(Some(config_path));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("stackdeck").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        logging::init_logging(&utils::get_debug_log_path())?;
        info!("Debug mode enabled");
    }

    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => {
            debug!("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    logging::shutdown_logging();

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            info!("Quitting");
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key),
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackdeck::ColumnId;

    #[test]
    fn test_default_startup_columns() {
        let app = App::new(Config::default()).unwrap();
        let columns = app.model.columns.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].id(), &ColumnId::new("col-1"));
        assert_eq!(columns[0].navigation().current().view_name(), "Home");
        assert_eq!(columns[1].navigation().current().view_name(), "UserProfile");
        assert_eq!(
            columns[1].navigation().current().payload(),
            Some(&serde_json::json!({ "userName": "Demo User" }))
        );
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-1")));
    }

    #[test]
    fn test_unknown_startup_kind_is_an_error() {
        let mut config = Config::default();
        config.columns = Some(vec!["home".into(), "nope".into()]);
        let err = App::new(config).err().unwrap();
        assert!(format!("{:#}", err).contains("unknown column kind 'nope'"));
    }

    #[test]
    fn test_custom_kinds_without_columns_start_on_first_kind() {
        let yaml = "column_kinds:\n  - kind: admin\n    label: Admin\n    initial_view: UserProfile\n";
        let app = App::new(Config::from_yaml(yaml).unwrap()).unwrap();

        let columns = app.model.columns.columns();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].kind(), "admin");
        assert_eq!(columns[0].navigation().current().view_name(), "UserProfile");
        assert_eq!(app.model.ui.focused, Some(ColumnId::new("col-1")));
    }

    #[test]
    fn test_added_profile_column_has_no_payload() {
        let mut app = App::new(Config::default()).unwrap();
        app.dispatch(Msg::AddColumn("profile".to_string()));

        let added = app.model.columns.get(&ColumnId::new("col-3")).unwrap();
        assert_eq!(added.navigation().current().view_name(), "UserProfile");
        assert!(added.navigation().current().payload().is_none());
    }

    #[test]
    fn test_rejected_message_shows_error_toast() {
        let mut app = App::new(Config::default()).unwrap();
        app.dispatch(Msg::AddColumn("nope".to_string()));
        assert_eq!(app.model.columns.len(), 2);
        let (message, _) = app.model.ui.toast_message.as_ref().unwrap();
        assert!(message.starts_with("Error:"));
    }

    #[test]
    fn test_missing_cli_config_is_an_error() {
        assert!(get_config_path(Some("/nonexistent/stackdeck.yaml".to_string())).is_err());
    }
}
