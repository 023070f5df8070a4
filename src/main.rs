//! Employee Roster - desktop client for managing employee records.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use employee_roster as app;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use app::client::ApiClient;
use app::config::{AppConfig, ConfigLoadResult};
use app::ui::App;

/// Desktop client for managing employee records.
#[derive(Parser)]
#[command(name = "employee-roster")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Override the employee API endpoint
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging();

    tracing::info!("Employee Roster starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let (mut config, config_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults");
            let config = AppConfig::default();
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Failed to save default config: {}", e);
            }
            (config, None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            (AppConfig::default(), Some(format!("{}: {e}", config_path.display())))
        }
    };

    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate().context("Invalid --api-url")?;
    }
    tracing::info!("API endpoint: {}", config.api.base_url);

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let store = ApiClient::new(&config.api).context("Failed to build HTTP client")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Roster")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Employee Roster",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(App::new(rt, store, config, config_error)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Window failed: {e}"))
}

/// Console plus daily rolling file logging.
///
/// The returned guard flushes the file writer on drop.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let log_dir = AppConfig::log_dir();

    match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&log_dir, "employee-roster.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
            tracing::warn!("File logging disabled ({}): {}", log_dir.display(), e);
            None
        }
    }
}
