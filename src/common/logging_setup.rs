use crate::config_loader::MasterConfig;
use env_logger::Builder;
use log::LevelFilter;

/// Initializes env_logger. Level resolution order: `--debug` flag, then the
/// config file's `log_level`, then `info`.
pub fn initialize_logging(config: Option<&MasterConfig>, cli_matches: &clap::ArgMatches) {
    let level = if cli_matches.get_flag("debug") {
        LevelFilter::Debug
    } else {
        config
            .and_then(|c| c.app_settings.log_level.as_deref())
            .and_then(|s| s.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info)
    };

    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}
