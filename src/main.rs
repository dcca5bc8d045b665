use anyhow::{bail, Context, Result};
use grabctl::app_config::ApplicationConfig;
use grabctl::cli;
use grabctl::common::logging_setup;
use grabctl::config_loader::{self, MasterConfig};
use grabctl::core::api_client::GrabberClient;
use grabctl::operations;
use log::{debug, error, info, warn};
use std::time::Instant;

const DEFAULT_CONFIG_PATH: &str = "config/grabctl.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    let main_start_time = Instant::now();
    let matches = cli::build_cli().get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_CONFIG_PATH);

    let master_config = match config_loader::load_config(config_path) {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), &matches);
            cfg
        }
        Err(e) => {
            logging_setup::initialize_logging(None, &matches);
            if matches.get_one::<String>("api_url").is_some() {
                // With an explicit API URL the file is not load-bearing.
                warn!(
                    "⚠️ Could not load configuration from '{}' ({:#}); continuing with built-in defaults because --api-url was given.",
                    config_path, e
                );
                MasterConfig {
                    app_settings: ApplicationConfig::default(),
                }
            } else {
                error!(
                    "❌ Failed to load master configuration from '{}': {:#}. Exiting.",
                    config_path, e
                );
                return Err(e.context(format!(
                    "Failed to load master configuration from '{}'",
                    config_path
                )));
            }
        }
    };

    let api_base_url = matches
        .get_one::<String>("api_url")
        .cloned()
        .unwrap_or_else(|| master_config.app_settings.api_base_url.clone());
    let client =
        GrabberClient::new(&api_base_url).context("Failed to construct grabber API client")?;
    info!("🚀 grabctl targeting {}", client.base_url());

    if let Some((operation_name, sub_matches)) = matches.subcommand() {
        debug!("🎬 Dispatching to subcommand: {}", operation_name);
        let op_start_time = Instant::now();

        let op_result: Result<()> = match operation_name {
            "list-cameras" => {
                operations::list_cameras_op::handle_list_cameras_cli(&client, sub_matches).await
            }
            "show-settings" => {
                operations::camera_settings_op::handle_show_settings_cli(&client, sub_matches)
                    .await
            }
            "set-settings" => {
                operations::camera_settings_op::handle_set_settings_cli(&client, sub_matches).await
            }
            "show-default" => {
                operations::default_config_op::handle_show_default_cli(&client, sub_matches).await
            }
            "set-default" => {
                operations::default_config_op::handle_set_default_cli(&client, sub_matches).await
            }
            "dump-config" => {
                operations::raw_config_op::handle_dump_config_cli(
                    &master_config,
                    &client,
                    sub_matches,
                )
                .await
            }
            "push-config" => {
                operations::raw_config_op::handle_push_config_cli(
                    &master_config,
                    &client,
                    sub_matches,
                )
                .await
            }
            "probe" => operations::probe_op::handle_probe_cli(&client, sub_matches).await,
            other => bail!("Subcommand '{}' not implemented.", other),
        };

        if let Err(e) = op_result {
            error!(
                "❌ Operation '{}' failed after {:?}: {:#}",
                operation_name,
                op_start_time.elapsed(),
                e
            );
            return Err(e);
        }
        info!(
            "✅ Operation '{}' completed successfully in {:?}.",
            operation_name,
            op_start_time.elapsed()
        );
    } else {
        info!("🤔 No subcommand provided. Run 'grabctl --help' for the list of operations.");
    }

    info!("🏁 grabctl finished in {:?}.", main_start_time.elapsed());
    Ok(())
}
