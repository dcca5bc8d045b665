use crate::camera_models::{CameraSettings, FieldValue};
use crate::core::api_client::GrabberClient;
use crate::errors::AppError;
use anyhow::Result;
use clap::ArgMatches;
use log::{info, warn};
use std::net::IpAddr;
use std::time::Instant;

fn required_ip(args: &ArgMatches) -> Result<String, AppError> {
    let ip = args
        .get_one::<String>("ip")
        .map(String::as_str)
        .unwrap_or_default();
    if ip.parse::<IpAddr>().is_err() {
        return Err(AppError::Operation(format!("Invalid IP address '{}'.", ip)));
    }
    Ok(ip.to_string())
}

// Comma-separated field names from --clear, trimmed and de-emptied.
fn parse_clear_fields_arg(fields_str_opt: Option<&String>) -> Vec<String> {
    fields_str_opt
        .map(|fields_str| {
            fields_str
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn flag_value<T: Clone + Send + Sync + 'static>(args: &ArgMatches, id: &str) -> FieldValue<T> {
    match args.get_one::<T>(id) {
        Some(v) => FieldValue::Value(v.clone()),
        None => FieldValue::Unset,
    }
}

pub async fn handle_show_settings_cli(client: &GrabberClient, args: &ArgMatches) -> Result<()> {
    let ip_address = required_ip(args)?;
    info!("📷 Fetching settings for camera {} ...", ip_address);
    let start_time = Instant::now();

    let settings = client.fetch_camera_settings(&ip_address).await?;

    println!("Settings for camera {}:", ip_address);
    println!("  {:<14} {}", "width:", settings.width);
    println!("  {:<14} {}", "height:", settings.height);
    println!("  {:<14} {}", "offset_x:", settings.offset_x);
    println!("  {:<14} {}", "offset_y:", settings.offset_y);
    println!("  {:<14} {}", "pixel_format:", settings.pixel_format);
    println!("  {:<14} {}", "fps:", settings.fps);
    println!("  {:<14} {}", "exposure:", settings.exposure);
    println!("  {:<14} {}", "exposure_mode:", settings.exposure_mode);
    println!("  {:<14} {}", "gain:", settings.gain);
    println!("  {:<14} {}", "gev_scpd:", settings.gev_scpd);

    info!(
        "✅ Fetched settings for '{}' in {:?}.",
        ip_address,
        start_time.elapsed()
    );
    Ok(())
}

pub async fn handle_set_settings_cli(client: &GrabberClient, args: &ArgMatches) -> Result<()> {
    let ip_address = required_ip(args)?;
    let start_time = Instant::now();

    let mut settings = CameraSettings {
        width: flag_value(args, "width"),
        height: flag_value(args, "height"),
        offset_x: flag_value(args, "offset_x"),
        offset_y: flag_value(args, "offset_y"),
        pixel_format: flag_value(args, "pixel_format"),
        fps: flag_value(args, "fps"),
        exposure: flag_value(args, "exposure"),
        exposure_mode: flag_value(args, "exposure_mode"),
        gain: flag_value(args, "gain"),
        gev_scpd: flag_value(args, "gev_scpd"),
    };

    for field in parse_clear_fields_arg(args.get_one::<String>("clear")) {
        match field.as_str() {
            "width" => settings.width = FieldValue::Null,
            "height" => settings.height = FieldValue::Null,
            "offset_x" => settings.offset_x = FieldValue::Null,
            "offset_y" => settings.offset_y = FieldValue::Null,
            "pixel_format" => settings.pixel_format = FieldValue::Null,
            "fps" => settings.fps = FieldValue::Null,
            "exposure" => settings.exposure = FieldValue::Null,
            "exposure_mode" => settings.exposure_mode = FieldValue::Null,
            "gain" => settings.gain = FieldValue::Null,
            "gev_scpd" => settings.gev_scpd = FieldValue::Null,
            other => {
                return Err(
                    AppError::Operation(format!("Unknown settings field '{}' in --clear.", other))
                        .into(),
                )
            }
        }
    }

    if settings == CameraSettings::default() {
        warn!("⚠️ No field flags or --clear entries given; nothing to send to '{}'.", ip_address);
        return Ok(());
    }

    info!("📤 Updating settings for camera {} ...", ip_address);
    client.save_camera_settings(&ip_address, &settings).await?;

    info!(
        "✅ Settings update for '{}' accepted in {:?}.",
        ip_address,
        start_time.elapsed()
    );
    Ok(())
}
