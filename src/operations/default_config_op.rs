use crate::core::api_client::GrabberClient;
use crate::errors::AppError;
use anyhow::Result;
use clap::ArgMatches;
use log::{info, warn};
use std::fmt;
use std::time::Instant;

fn fmt_opt<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "(unset)".to_string(),
    }
}

pub async fn handle_show_default_cli(client: &GrabberClient, _args: &ArgMatches) -> Result<()> {
    info!("📷 Fetching default camera configuration ...");
    let start_time = Instant::now();

    let config = client.fetch_default_config().await?;

    println!("Default camera configuration:");
    println!("  {:<14} {}", "width:", fmt_opt(&config.width));
    println!("  {:<14} {}", "height:", fmt_opt(&config.height));
    println!("  {:<14} {}", "offset_x:", fmt_opt(&config.offset_x));
    println!("  {:<14} {}", "offset_y:", fmt_opt(&config.offset_y));
    println!("  {:<14} {}", "pixel_format:", fmt_opt(&config.pixel_format));
    println!("  {:<14} {}", "fps:", fmt_opt(&config.fps));
    println!("  {:<14} {}", "exposure:", fmt_opt(&config.exposure));
    println!("  {:<14} {}", "exposure_mode:", fmt_opt(&config.exposure_mode));
    println!("  {:<14} {}", "gain:", fmt_opt(&config.gain));
    println!("  {:<14} {}", "gev_scpd:", fmt_opt(&config.gev_scpd));

    info!("✅ Fetched default configuration in {:?}.", start_time.elapsed());
    Ok(())
}

/// Load-edit-save cycle: fields not named by a flag or --clear keep their
/// current remote value.
pub async fn handle_set_default_cli(client: &GrabberClient, args: &ArgMatches) -> Result<()> {
    let start_time = Instant::now();
    info!("📷 Fetching current default configuration before editing ...");

    let mut config = client.fetch_default_config().await?;
    let mut edits = 0usize;

    if let Some(v) = args.get_one::<u32>("width") {
        config.width = Some(*v);
        edits += 1;
    }
    if let Some(v) = args.get_one::<u32>("height") {
        config.height = Some(*v);
        edits += 1;
    }
    if let Some(v) = args.get_one::<u32>("offset_x") {
        config.offset_x = Some(*v);
        edits += 1;
    }
    if let Some(v) = args.get_one::<u32>("offset_y") {
        config.offset_y = Some(*v);
        edits += 1;
    }
    if let Some(v) = args.get_one::<String>("pixel_format") {
        config.pixel_format = Some(v.clone());
        edits += 1;
    }
    if let Some(v) = args.get_one::<f64>("fps") {
        config.fps = Some(*v);
        edits += 1;
    }
    if let Some(v) = args.get_one::<f64>("exposure") {
        config.exposure = Some(*v);
        edits += 1;
    }
    if let Some(v) = args.get_one::<f64>("exposure_mode") {
        config.exposure_mode = Some(*v);
        edits += 1;
    }
    if let Some(v) = args.get_one::<f64>("gain") {
        config.gain = Some(*v);
        edits += 1;
    }
    if let Some(v) = args.get_one::<f64>("gev_scpd") {
        config.gev_scpd = Some(*v);
        edits += 1;
    }

    if let Some(fields_str) = args.get_one::<String>("clear") {
        for field in fields_str.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match field {
                "width" => config.width = None,
                "height" => config.height = None,
                "offset_x" => config.offset_x = None,
                "offset_y" => config.offset_y = None,
                "pixel_format" => config.pixel_format = None,
                "fps" => config.fps = None,
                "exposure" => config.exposure = None,
                "exposure_mode" => config.exposure_mode = None,
                "gain" => config.gain = None,
                "gev_scpd" => config.gev_scpd = None,
                other => {
                    return Err(AppError::Operation(format!(
                        "Unknown configuration field '{}' in --clear.",
                        other
                    ))
                    .into())
                }
            }
            edits += 1;
        }
    }

    if edits == 0 {
        warn!("⚠️ No field flags or --clear entries given; default configuration left untouched.");
        return Ok(());
    }

    info!("📤 Saving default configuration ({} edit(s)) ...", edits);
    client.save_default_config(&config).await?;

    info!(
        "✅ Default configuration saved in {:?}.",
        start_time.elapsed()
    );
    Ok(())
}
