//! `dwijabake` command-line entry point.
//!
//! - `serve`: run the probe service until Ctrl+C / SIGTERM
//! - `status`: query the probe service and print the status page
//! - `theme [get|set|toggle]`: read or change the persisted theme
//!
//! Client settings come from the environment (see [`Config::from_env`]);
//! server settings from the environment and `.env` files (see
//! [`ServerConfig::load`]).

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dwijabake::app::NavDrawer;
use dwijabake::client::{ApiClient, StatusBoard};
use dwijabake::observability::init_tracing;
use dwijabake::server::{start_server, ServerConfig};
use dwijabake::ui::render_status_page;
use dwijabake::{Config, Result, ThemePreference};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the probe service.
    Serve,

    /// Check the probe service and print the status page.
    Status {
        /// Probe service base URL. Defaults to `NEXT_PUBLIC_API_URL` or
        /// http://localhost:3001.
        #[arg(long)]
        api_url: Option<String>,

        /// Skip the database check.
        #[arg(long)]
        no_db: bool,

        /// Output width in columns.
        #[arg(long, default_value_t = 72)]
        width: usize,
    },

    /// Read or change the persisted theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Print the current theme (default).
    Get,
    /// Persist a theme.
    Set { theme: ThemePreference },
    /// Flip between light and dark.
    Toggle,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from_env();
    init_tracing(&config);

    let result = match args.command {
        Command::Serve => serve().await,
        Command::Status { api_url, no_db, width } => status(&config, api_url, no_db, width).await,
        Command::Theme { action } => theme(&config, action.unwrap_or(ThemeAction::Get)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> Result<()> {
    let server_config = ServerConfig::load()?;
    start_server(server_config).await
}

async fn status(config: &Config, api_url: Option<String>, no_db: bool, width: usize) -> Result<()> {
    let api_url = api_url.unwrap_or_else(|| config.api_url.clone());
    let client = ApiClient::new(&api_url)?;
    let mut board = StatusBoard::new(client.base_url().as_str());

    board.set_health(&client.health().await);

    if !no_db {
        if let Some(ticket) = board.begin_db_check() {
            let response = client.db_check().await;
            board.finish_db_check(ticket, response);
        }
    }

    let theme = match config.open_theme_store() {
        Ok(store) => store.mount(),
        Err(e) => {
            tracing::warn!(error = %e, "theme store unavailable, using light theme");
            ThemePreference::Light
        }
    };

    let frame = render_status_page(
        &board.compute_viewmodel(theme),
        &NavDrawer::new(),
        0,
        &config.palette(theme),
        width,
    );
    println!("{frame}");
    Ok(())
}

fn theme(config: &Config, action: ThemeAction) -> Result<()> {
    let store = config.open_theme_store()?;
    store.mount();

    match action {
        ThemeAction::Get => {}
        ThemeAction::Set { theme } => store.set_theme(theme),
        ThemeAction::Toggle => store.toggle_theme(),
    }

    println!("{}", store.theme());
    Ok(())
}
