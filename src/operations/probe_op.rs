use crate::camera_models::{CameraSettings, FieldValue};
use crate::core::api_client::GrabberClient;
use anyhow::Result;
use clap::ArgMatches;
use futures::future::join_all;
use log::{error, info, warn};
use std::time::Instant;

struct ProbeResult {
    ip_address: String,
    model_name: String,
    success: bool,
    details: String,
}

fn describe_settings(settings: &CameraSettings) -> String {
    let configured = [
        !matches!(settings.width, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.height, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.offset_x, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.offset_y, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.pixel_format, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.fps, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.exposure, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.exposure_mode, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.gain, FieldValue::Unset | FieldValue::Null),
        !matches!(settings.gev_scpd, FieldValue::Unset | FieldValue::Null),
    ]
    .iter()
    .filter(|set| **set)
    .count();
    format!("{}/10 fields configured", configured)
}

/// Fetches every discovered camera's settings concurrently and prints a
/// pass/fail summary. Useful as a quick health sweep of the grabber fleet.
pub async fn handle_probe_cli(client: &GrabberClient, _args: &ArgMatches) -> Result<()> {
    let overall_start_time = Instant::now();
    info!("🩺 Starting camera probe sweep ...");

    let cameras = client.fetch_available_cameras().await?;
    if cameras.is_empty() {
        warn!("⚠️ The grabber service reports no available cameras. Nothing to probe.");
        return Ok(());
    }
    info!("🎯 Probing {} camera(s) concurrently ...", cameras.len());

    let probes = cameras.iter().map(|camera| async move {
        let outcome = client.fetch_camera_settings(&camera.ip_address).await;
        (camera, outcome)
    });

    let mut results: Vec<ProbeResult> = Vec::new();
    for (camera, outcome) in join_all(probes).await {
        match outcome {
            Ok(settings) => results.push(ProbeResult {
                ip_address: camera.ip_address.clone(),
                model_name: camera.model_name.clone(),
                success: true,
                details: describe_settings(&settings),
            }),
            Err(e) => results.push(ProbeResult {
                ip_address: camera.ip_address.clone(),
                model_name: camera.model_name.clone(),
                success: false,
                details: format!("{}", e),
            }),
        }
    }

    info!(
        "📋 ----- Probe Summary (Total Sweep Time: {:?}) -----",
        overall_start_time.elapsed()
    );
    let mut failures = 0usize;
    for result in &results {
        let status = if result.success { "✅ PASS" } else { "❌ FAIL" };
        info!(
            "Camera: {:<15} | Model: {:<20} | Status: {:<7} | {}",
            result.ip_address, result.model_name, status, result.details
        );
        if !result.success {
            failures += 1;
        }
    }

    if failures == 0 {
        info!("🎉 All {} camera(s) answered their settings probe.", results.len());
    } else {
        error!(
            "🔥 {} of {} camera(s) failed the settings probe. Please review logs above.",
            failures,
            results.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_settings_counts_only_real_values() {
        let settings = CameraSettings {
            width: FieldValue::Value(640),
            height: FieldValue::Null,
            fps: FieldValue::Value(30.0),
            ..CameraSettings::default()
        };
        assert_eq!(describe_settings(&settings), "2/10 fields configured");
    }
}
