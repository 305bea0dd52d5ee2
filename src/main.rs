use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod commands;
mod config;
mod models;
mod onboarding;
mod state;
mod theme;

use api::ApiClient;
use commands::{
    AuthCommand, ConfigCommand, DashboardCommand, DiaryCommand, MealCommand, OnboardCommand,
    ProfileCommand, ThemeCommand,
};
use config::Config;
use state::{AppContainer, LocalStore};
use theme::ColorScheme;

#[derive(Parser)]
#[command(name = "nica")]
#[command(version)]
#[command(about = "A nutrition tracking CLI application", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register an account and set nutrition goals
    Onboard(OnboardCommand),

    /// Manage the nutrition profile
    Profile(ProfileCommand),

    /// Manage the food diary
    Diary(DiaryCommand),

    /// View and refresh the dashboard
    Dashboard(DashboardCommand),

    /// Log a single meal
    Meal(MealCommand),

    /// Manage the theme preference
    Theme(ThemeCommand),

    /// Manage the stored API session token
    Auth(AuthCommand),

    /// Show the resolved configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nica=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;

    let store = LocalStore::open(config.state_path.value.clone());
    // A token stored via `auth login` wins over the build-time one.
    let token = store
        .get(state::AUTH_TOKEN_KEY)
        .map(str::to_string)
        .or_else(|| config.api_token.clone());

    let api = ApiClient::new(config.api_url.value.clone(), token);
    let mut container =
        AppContainer::new(api, store, ColorScheme::from_env(), config.sync_report);
    container.hydrate();

    match &cli.command {
        Some(Commands::Onboard(cmd)) => cmd.run(&mut container).await?,
        Some(Commands::Profile(cmd)) => cmd.run(&mut container)?,
        Some(Commands::Diary(cmd)) => cmd.run(&mut container).await?,
        Some(Commands::Dashboard(cmd)) => cmd.run(&mut container).await?,
        Some(Commands::Meal(cmd)) => cmd.run(&mut container).await?,
        Some(Commands::Theme(cmd)) => cmd.run(&mut container)?,
        Some(Commands::Auth(cmd)) => cmd.run(&mut container)?,
        Some(Commands::Config(cmd)) => cmd.run(&config)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
