//! Command dispatch.

pub mod ask;
pub mod providers;
pub mod tui;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tui { model, length } => tui::handle(model, length).await,
        Command::Ask {
            prompt,
            model,
            length,
        } => ask::handle(prompt, model, length).await,
        Command::Providers { action } => providers::handle(action).await,
    }
}
