//! CLI entry point for wayfarer.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Load configuration env files before parsing the CLI.
/// Order: 1) ~/.wayfarer/env  2) .env (walking up from the working directory).
/// The API key is required at startup; these files are the usual place for it.
fn load_wayfarer_config() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home
            .join(wayfarer_constant::app::DATA_DIR)
            .join(wayfarer_constant::app::ENV_FILE);
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd;
        for _ in 0..32 {
            let env_file = dir.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    load_wayfarer_config();
    let cli = Cli::parse();
    output::init(cli.output);

    // The tui command wires tracing into its own log screen; for the other
    // commands, --verbose turns on console tracing.
    if cli.verbose && !matches!(cli.command, cli::Command::Tui { .. }) {
        let config = wayfarer_observability::ObservabilityConfig::from_env()
            .with_log_level("debug,hyper=info,reqwest=info");
        if let Err(e) = wayfarer_observability::init(config) {
            output::warning(&format!("Observability init failed (continuing): {}", e));
        }
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
