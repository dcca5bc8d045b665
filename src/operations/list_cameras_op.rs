use crate::core::api_client::GrabberClient;
use anyhow::Result;
use clap::ArgMatches;
use log::{info, warn};
use std::time::Instant;

pub async fn handle_list_cameras_cli(client: &GrabberClient, _args: &ArgMatches) -> Result<()> {
    info!("📷 Fetching available cameras from {} ...", client.base_url());
    let start_time = Instant::now();

    let cameras = client.fetch_available_cameras().await?;

    if cameras.is_empty() {
        warn!("⚠️ The grabber service reports no available cameras.");
        return Ok(());
    }

    println!("{:<17} {:<20} {}", "IP ADDRESS", "SERIAL NUMBER", "MODEL");
    for camera in &cameras {
        println!(
            "{:<17} {:<20} {}",
            camera.ip_address, camera.serial_number, camera.model_name
        );
    }

    info!(
        "✅ Listed {} camera(s) in {:?}.",
        cameras.len(),
        start_time.elapsed()
    );
    Ok(())
}
