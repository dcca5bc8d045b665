use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("grabctl")
        .version("0.1.0")
        .about("Administration CLI for a camera-grabber service: list GigE cameras, edit per-camera and default settings, manage the raw configuration document.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("api_url")
                .long("api-url")
                .value_name("URL")
                .help("Overrides the grabber API base URL from the configuration file")
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
        )
        .subcommand(
            Command::new("list-cameras")
                .about("Lists the GigE cameras the grabber service currently sees")
        )
        .subcommand(
            Command::new("show-settings")
                .about("Shows the stored settings of one camera")
                .arg(Arg::new("ip").long("ip").value_name("IP").required(true).help("IP address of the camera").action(ArgAction::Set))
        )
        .subcommand(
            Command::new("set-settings")
                .about("Updates settings of one camera; only the fields given here are sent")
                .arg(Arg::new("ip").long("ip").value_name("IP").required(true).help("IP address of the camera").action(ArgAction::Set))
                .arg(Arg::new("width").long("width").value_name("PX").help("Frame width in pixels").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("height").long("height").value_name("PX").help("Frame height in pixels").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("offset_x").long("offset-x").value_name("PX").help("Horizontal ROI offset in pixels").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("offset_y").long("offset-y").value_name("PX").help("Vertical ROI offset in pixels").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("pixel_format").long("pixel-format").value_name("FORMAT").help("Sensor pixel format, e.g. Mono8 or BayerRG8").action(ArgAction::Set))
                .arg(Arg::new("fps").long("fps").value_name("FPS").help("Acquisition frame rate").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("exposure").long("exposure").value_name("TIME").help("Exposure time").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("exposure_mode").long("exposure-mode").value_name("MODE").help("Exposure mode, e.g. 'manual' or 'auto'").action(ArgAction::Set))
                .arg(Arg::new("gain").long("gain").value_name("GAIN").help("Analog gain").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("gev_scpd").long("gev-scpd").value_name("DELAY").help("GigE Vision inter-packet delay").action(ArgAction::Set))
                .arg(Arg::new("clear").long("clear").value_name("FIELDS").help("Comma-separated list of fields to clear explicitly (sent as null)").action(ArgAction::Set))
        )
        .subcommand(
            Command::new("show-default")
                .about("Shows the default camera configuration template")
        )
        .subcommand(
            Command::new("set-default")
                .about("Edits the default camera configuration (fetch, apply changes, save)")
                .arg(Arg::new("width").long("width").value_name("PX").help("Frame width in pixels").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("height").long("height").value_name("PX").help("Frame height in pixels").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("offset_x").long("offset-x").value_name("PX").help("Horizontal ROI offset in pixels").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("offset_y").long("offset-y").value_name("PX").help("Vertical ROI offset in pixels").value_parser(clap::value_parser!(u32)).action(ArgAction::Set))
                .arg(Arg::new("pixel_format").long("pixel-format").value_name("FORMAT").help("Sensor pixel format, e.g. Mono8 or BayerRG8").action(ArgAction::Set))
                .arg(Arg::new("fps").long("fps").value_name("FPS").help("Acquisition frame rate").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("exposure").long("exposure").value_name("TIME").help("Exposure time").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("exposure_mode").long("exposure-mode").value_name("MODE").help("Exposure mode (numeric on this resource)").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("gain").long("gain").value_name("GAIN").help("Analog gain").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("gev_scpd").long("gev-scpd").value_name("DELAY").help("GigE Vision inter-packet delay (numeric on this resource)").value_parser(clap::value_parser!(f64)).action(ArgAction::Set))
                .arg(Arg::new("clear").long("clear").value_name("FIELDS").help("Comma-separated list of fields to unset").action(ArgAction::Set))
        )
        .subcommand(
            Command::new("dump-config")
                .about("Fetches and prints the raw configuration document")
                .arg(Arg::new("output").short('o').long("output").value_name("DIR").help("Also write the document to a timestamped file in DIR").action(ArgAction::Set))
        )
        .subcommand(
            Command::new("push-config")
                .about("Uploads a local JSON file as the new configuration document")
                .arg(Arg::new("file").short('f').long("file").value_name("FILE").required(true).help("JSON file to upload").action(ArgAction::Set))
                .arg(Arg::new("no_backup").long("no-backup").help("Skip backing up the current remote document first").action(ArgAction::SetTrue))
        )
        .subcommand(
            Command::new("probe")
                .about("Fetches every camera's settings concurrently and prints a summary")
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn set_settings_parses_typed_field_flags() {
        let matches = build_cli()
            .try_get_matches_from([
                "grabctl",
                "set-settings",
                "--ip",
                "10.0.0.5",
                "--width",
                "1920",
                "--fps",
                "30.5",
                "--clear",
                "gain,exposure",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "set-settings");
        assert_eq!(sub.get_one::<u32>("width"), Some(&1920));
        assert_eq!(sub.get_one::<f64>("fps"), Some(&30.5));
        assert_eq!(sub.get_one::<String>("clear").map(String::as_str), Some("gain,exposure"));
    }

    #[test]
    fn set_default_takes_numeric_exposure_mode() {
        let matches = build_cli()
            .try_get_matches_from(["grabctl", "set-default", "--exposure-mode", "1"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<f64>("exposure_mode"), Some(&1.0));
    }
}
