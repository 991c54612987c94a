use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::sync::mpsc;

use cityguide::app::{App, AppEvent};
use cityguide::catalog::{build_client, Catalog};
use cityguide::config::Config;
use cityguide::preferences::PreferenceManager;
use cityguide::storage::{Database, DatabaseError};
use cityguide::store::StoreAction;
use cityguide::ui;
use cityguide::views::CommunityView;

/// Get the config directory path (~/.config/cityguide/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("cityguide"))
}

#[derive(Parser, Debug)]
#[command(
    name = "cityguide",
    about = "Terminal city-living portal: housing, navigation, shops and plans"
)]
struct Args {
    /// City to open at startup (overrides the stored preference)
    #[arg(long)]
    city: Option<String>,

    /// Start signed in under this name
    #[arg(long, value_name = "NAME")]
    user: Option<String>,

    /// Base URL of a JSON catalog (overrides `data_url` in the config file)
    #[arg(long, value_name = "URL")]
    data_url: Option<String>,

    /// Section to open at startup: housing, navigator, shops, subscription
    /// or community (overrides `start_section` in the config file)
    #[arg(long, value_name = "ID")]
    section: Option<String>,

    /// Forget the first visit so the welcome message shows again
    #[arg(long)]
    reset_visited: bool,

    /// Config file to use instead of ~/.config/cityguide/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    // The terminal belongs to the UI, so logs go to a file
    let log_path = config_dir.join("cityguide.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    // User-only access to config, database and log
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| config_dir.join("config.toml"));
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let db_path = config_dir.join("cityguide.db");
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in database path"))?;
    let db = match Database::open(db_path_str).await {
        Ok(db) => db,
        Err(DatabaseError::InstanceLocked) => {
            eprintln!(
                "Error: Another instance of cityguide appears to be running. Please close it and try again."
            );
            std::process::exit(1);
        }
        Err(e) => {
            return Err(anyhow::anyhow!("Failed to open database: {}", e));
        }
    };

    if args.reset_visited {
        db.reset_visited()
            .await
            .context("Failed to reset first-visit flag")?;
        println!("First-visit flag reset.");
    }

    // A broken preference table should not keep the portal from starting
    let prefs = match PreferenceManager::load(&config, &db).await {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load stored preferences, using config");
            PreferenceManager::from_config(&config)
        }
    };

    let catalog = match args.data_url.as_deref().or(config.data_url.as_deref()) {
        Some(url) => Catalog::http(url, build_client()?)
            .with_context(|| format!("Invalid catalog URL: {}", url))?,
        None => Catalog::mock(config.simulated_delay()),
    };
    tracing::info!(source = %catalog.describe(), "Catalog ready");

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);
    let mut app = App::new(db, catalog, event_tx);

    for warning in app.apply_preferences(&prefs) {
        tracing::warn!(%warning, "Keybinding override ignored");
    }
    app.community = CommunityView::with_page_size(config.page_size());
    if let Some(city) = args.city {
        app.store.dispatch(StoreAction::SetCity(city));
    }
    if let Some(name) = args.user {
        app.sign_in(name);
    }

    app.set_start_section(args.section.as_deref().unwrap_or(&config.start_section));
    app.start(prefs.has_visited());
    ui::run(&mut app, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
