//! `wayfarer providers` subcommands.

use anyhow::{anyhow, Result};
use comfy_table::{Attribute, Cell, Color};
use wayfarer_llms::{GroqProvider, ProviderRegistry};

use crate::cli::ProvidersAction;
use crate::output;

/// Shown in `providers list` without a network call; `providers models`
/// fetches the live listing.
const GROQ_MODELS: &[&str] = &[
    "llama-3.3-70b-versatile",
    "llama-3.1-8b-instant",
    "gemma2-9b-it",
    "llama-guard-3-8b",
];

struct ProviderInfo {
    id: &'static str,
    has_key: bool,
    models: &'static [&'static str],
}

/// Register every provider whose credentials are present; the info list
/// also covers unconfigured ones so `list` can show what's missing.
fn build_registry() -> (ProviderRegistry, Vec<ProviderInfo>) {
    let mut registry = ProviderRegistry::new();

    let groq = GroqProvider::from_env();
    let has_key = groq.is_ok();
    if let Ok(provider) = groq {
        registry = registry.register("groq", provider);
    }
    let infos = vec![ProviderInfo {
        id: "groq",
        has_key,
        models: GROQ_MODELS,
    }];

    (registry, infos)
}

pub async fn handle(action: ProvidersAction) -> Result<()> {
    match action {
        ProvidersAction::List => list().await,
        ProvidersAction::Test { provider } => test(&provider).await,
        ProvidersAction::Models { provider } => models(&provider).await,
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn format_models(models: &[&str]) -> String {
    match models {
        short if short.len() <= 3 => short.join(", "),
        long => format!(
            "{} (+{} more)",
            long[..3].join(", "),
            long.len() - 3
        ),
    }
}

async fn list() -> Result<()> {
    let (_, infos) = build_registry();

    output::header("Registered Providers");

    let mut table = output::table();
    table.set_header(vec![
        header_cell("Provider"),
        header_cell("Status"),
        header_cell("Models"),
    ]);

    for info in &infos {
        let status = if info.has_key {
            Cell::new("configured").fg(Color::Green)
        } else {
            Cell::new("missing API key").fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(info.id).fg(Color::Green),
            status,
            Cell::new(format_models(info.models)),
        ]);
    }

    println!("{table}");

    Ok(())
}

/// Probe connectivity by listing models through the live gateway.
async fn test(provider_id: &str) -> Result<()> {
    let (registry, _) = build_registry();
    let provider = registry.get_provider(provider_id)?;

    let spinner = output::spinner(&format!("Testing {} connectivity...", provider_id));

    match provider.list_models().await {
        Ok(models) => {
            output::spinner_success(
                &spinner,
                &format!("{} is reachable ({} models)", provider_id, models.len()),
            );
            Ok(())
        }
        Err(e) => {
            output::spinner_error(&spinner, &format!("{} connection failed", provider_id));
            Err(anyhow!("Provider test failed: {}", e))
        }
    }
}

async fn models(provider_id: &str) -> Result<()> {
    let (registry, _) = build_registry();
    let provider = registry.get_provider(provider_id)?;

    let spinner = output::spinner(&format!("Fetching models for {}...", provider_id));

    let models = match provider.list_models().await {
        Ok(models) => models,
        Err(e) => {
            output::spinner_error(&spinner, "Failed to fetch models");
            return Err(anyhow!("Failed to list models: {}", e));
        }
    };
    spinner.finish_and_clear();

    output::header(&format!("Models for {}", provider_id));
    if models.is_empty() {
        output::dim("No models returned");
    }
    for model in &models {
        output::kv("model", model);
    }

    Ok(())
}
