use crate::app_config::ApplicationConfig;
use crate::common::file_utils;
use crate::config_loader::MasterConfig;
use crate::core::api_client::GrabberClient;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;

async fn write_document_copy(
    app_settings: &ApplicationConfig,
    document: &Value,
    dir: &str,
    base_name: &str,
) -> Result<PathBuf> {
    let dir_path = file_utils::ensure_output_directory(dir)?;
    let filename = file_utils::generate_timestamped_filename(
        base_name,
        &app_settings.filename_timestamp_format,
        "json",
    );
    let path = dir_path.join(filename);
    let pretty = serde_json::to_string_pretty(document)
        .context("Failed to render configuration document as JSON")?;
    tokio::fs::write(&path, pretty.as_bytes())
        .await
        .with_context(|| format!("Failed to write configuration copy to '{}'", path.display()))?;
    Ok(path)
}

pub async fn handle_dump_config_cli(
    master_config: &MasterConfig,
    client: &GrabberClient,
    args: &ArgMatches,
) -> Result<()> {
    info!("📄 Fetching raw configuration document ...");
    let start_time = Instant::now();

    let document = client.fetch_config().await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&document)
            .context("Failed to render configuration document as JSON")?
    );

    if let Some(dir) = args.get_one::<String>("output") {
        let path =
            write_document_copy(&master_config.app_settings, &document, dir, "config").await?;
        info!("💾 Wrote configuration document to {}", path.display());
    }

    info!("✅ Dumped configuration in {:?}.", start_time.elapsed());
    Ok(())
}

pub async fn handle_push_config_cli(
    master_config: &MasterConfig,
    client: &GrabberClient,
    args: &ArgMatches,
) -> Result<()> {
    let start_time = Instant::now();
    let file = args
        .get_one::<String>("file")
        .map(String::as_str)
        .unwrap_or_default();

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read configuration file '{}'", file))?;
    let document: Value = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not valid JSON", file))?;

    if args.get_flag("no_backup") {
        warn!("⚠️ Skipping backup of the current remote configuration (--no-backup).");
    } else {
        // Keep a copy of what we are about to overwrite.
        let current = client
            .fetch_config()
            .await
            .context("Failed to back up the current remote configuration (use --no-backup to push anyway)")?;
        let path = write_document_copy(
            &master_config.app_settings,
            &current,
            &master_config.app_settings.output_directory_base,
            "config_backup",
        )
        .await?;
        info!("💾 Backed up current configuration to {}", path.display());
    }

    info!("📤 Uploading configuration from '{}' ...", file);
    let accepted = client.save_config(&document).await?;
    if accepted {
        info!(
            "✅ Configuration from '{}' accepted by the service in {:?}.",
            file,
            start_time.elapsed()
        );
    }
    Ok(())
}
