//! `watch-page` command line driver.
//!
//! Mounts the watch page against the configured backends and prints what it
//! would render, or edits the persisted theme and token.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use watch_page::auth::{AuthHandle, AuthUser};
use watch_page::config::loader::load_or_default;
use watch_page::models::VideoId;
use watch_page::observability::logging::init_logging;
use watch_page::session::navigator::RecordingNavigator;
use watch_page::storage::{FileStore, KeyValueStore, TOKEN_KEY};
use watch_page::theme::{AccentColor, StyleSheet, ThemePreference};
use watch_page::{PageDeps, VideoPage};

#[derive(Parser)]
#[command(name = "watch-page")]
#[command(about = "Headless video watch page", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Key-value storage file (overrides `storage.path`)
    #[arg(short, long)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mount the page for a video and print the result
    Watch {
        id: String,
        /// Signed-in user id
        #[arg(long)]
        uid: Option<String>,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the stored theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Store an auth token
    Login { token: String },
    /// Remove the stored auth token
    Logout,
}

#[derive(Subcommand)]
enum ThemeAction {
    Show,
    ToggleDark,
    Accent { color: AccentColor },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;
    init_logging(&config.observability);

    let storage_path = cli
        .storage
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.storage.path));
    let storage = Arc::new(FileStore::open(&storage_path)?);

    tracing::debug!(storage = %storage_path.display(), "Configuration loaded");

    match cli.command {
        Commands::Watch { id, uid, json } => {
            let auth = AuthHandle::new(uid.map(AuthUser::new));
            let navigator = Arc::new(RecordingNavigator::new());
            let redirect_delay = config.session.redirect_delay();

            let page = VideoPage::mount(
                VideoId::from_route(Some(&id)),
                PageDeps {
                    config,
                    storage,
                    auth: Arc::new(auth),
                    navigator: navigator.clone(),
                    style: Arc::new(StyleSheet::new()),
                },
            )?;
            page.settle().await;

            let view = page.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", view);
            }

            if page.session().is_expired() {
                tokio::time::sleep(redirect_delay + Duration::from_millis(50)).await;
                for route in navigator.routes() {
                    eprintln!("Redirected to {}", route);
                }
            }
            page.unmount();
        }
        Commands::Theme { action } => {
            let mut pref = ThemePreference::load(storage.as_ref());
            match action {
                ThemeAction::Show => {}
                ThemeAction::ToggleDark => {
                    pref.toggle_dark_mode();
                    pref.save_dark_mode(storage.as_ref())?;
                }
                ThemeAction::Accent { color } => {
                    pref.accent = color;
                    pref.save_accent(storage.as_ref())?;
                }
            }
            println!(
                "dark_mode={} accent={} primary={} secondary={}",
                pref.dark_mode,
                pref.accent,
                pref.accent.primary_hex(),
                pref.accent.secondary_hex()
            );
        }
        Commands::Login { token } => {
            storage.set(TOKEN_KEY, &token)?;
            println!("Token stored in {}", storage_path.display());
        }
        Commands::Logout => {
            storage.remove(TOKEN_KEY)?;
            println!("Token removed from {}", storage_path.display());
        }
    }

    Ok(())
}
