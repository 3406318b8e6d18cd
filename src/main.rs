//! Compose Patterns - Main Entry Point
//!
//! `compose-patterns [FORM_FILE]` mounts a form described in a TOML or JSON
//! file, or a built-in demo (`--demo registration|validated`) when no file
//! is given. `compose-patterns --json-schema` prints the JSON Schema of form
//! files.

use std::io;

use anyhow::Context;
use clap::Parser;
use compose_patterns::cli::Cli;
use compose_patterns::constants::{DEFAULT_LOG_FILTER, LOG_FILE_PREFIX};
use compose_patterns::domain::config::AppSettings;
use compose_patterns::domain::schema::FormSchema;
use compose_patterns::features::dynamic_form::MountedForm;
use compose_patterns::helpers::{get_or_create_data_dir, is_development};
use compose_patterns::utils::config_store;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.json_schema {
        println!("{}", FormSchema::json_schema()?);
        return Ok(());
    }

    let (settings, settings_error) = match config_store::load_settings() {
        Ok(settings) => (settings, None),
        Err(err) => (AppSettings::default(), Some(err)),
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing(&settings);
    match settings_error {
        Some(err) => tracing::warn!(error = %err, "settings could not be loaded, using defaults"),
        None => write_default_settings(&settings),
    }

    tracing::info!(locale = settings.locale.code(), "Starting compose-patterns...");

    let form = cli.mount(settings.locale).with_context(|| match &cli.form_file {
        Some(path) => format!("failed to mount form file {}", path.display()),
        None => "failed to mount demo form".to_string(),
    })?;
    run(form, settings)
}

/// Console (stderr) plus a daily rolling file in the data directory
fn init_tracing(settings: &AppSettings) -> Option<WorkerGuard> {
    let directive = if is_development() && settings.log_filter == DEFAULT_LOG_FILTER {
        "debug"
    } else {
        settings.log_filter.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let console_layer = fmt::layer().with_target(true).with_writer(io::stderr);

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_target(true).with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// First run: leave an editable settings file behind
fn write_default_settings(settings: &AppSettings) {
    let Ok(path) = config_store::settings_path() else {
        return;
    };
    if path.exists() {
        return;
    }
    match config_store::save_settings(settings) {
        Ok(()) => tracing::info!(path = %path.display(), "default settings written"),
        Err(err) => tracing::warn!(error = %err, "failed to write default settings"),
    }
}

#[cfg(feature = "gui")]
fn run(form: MountedForm, settings: AppSettings) -> anyhow::Result<()> {
    compose_patterns::app::application::run_app(form, settings);
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run(form: MountedForm, settings: AppSettings) -> anyhow::Result<()> {
    use compose_patterns::features::dynamic_form::{FormController, console};

    let mut controller = FormController::new(form.definition, settings.history_capacity);
    console::run(
        &mut controller,
        &form.title,
        settings.locale,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    tracing::info!(activations = controller.history().total(), "session ended");
    Ok(())
}
