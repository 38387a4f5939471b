//! CLI binary for ExiF MeTaX
//!
//! Starts the interactive prompt loop on stdin/stdout. Flags only tune the
//! run; analysis always happens through the prompts.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use exif_metax::{
    run_session, GeocodeOptions, NominatimClient, Offline, ReverseGeocoder, SessionOptions,
};
use std::io;
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

// vergen emits placeholder values when git metadata is unavailable
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")"
);

fn build_command() -> Command {
    Command::new("ExiF MeTaX")
        .version(VERSION)
        .about("Interactive EXIF and GPS metadata inspector. Prompts for image paths and prints device info, raw tags and every location notation it can derive.")
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging on stderr (RUST_LOG takes precedence)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored console output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .help("Skip reverse geocoding; no network requests are made")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("geocode-timeout")
                .long("geocode-timeout")
                .help("Timeout in seconds for the reverse geocoding request (default: HTTP client default)")
                .value_name("SECS")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("When saving a transcript, also write a field,value CSV next to it")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::builder()
            .parse(default_level)
            .with_context(|| format!("invalid log level '{default_level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn build_geocoder(offline: bool, timeout: Option<Duration>) -> Box<dyn ReverseGeocoder> {
    if offline {
        debug!("Reverse geocoding disabled");
        return Box::new(Offline);
    }
    let options = GeocodeOptions {
        timeout,
        ..GeocodeOptions::default()
    };
    match NominatimClient::new(options) {
        Ok(client) => Box::new(client),
        Err(e) => {
            warn!("Could not set up geocoding client, continuing offline: {:#}", e);
            Box::new(Offline)
        }
    }
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    init_tracing(debug)?;

    if matches.get_flag("no-color") {
        console::set_colors_enabled(false);
    }

    let timeout = matches
        .get_one::<u64>("geocode-timeout")
        .map(|secs| Duration::from_secs(*secs));
    let geocoder = build_geocoder(matches.get_flag("offline"), timeout);

    let options = SessionOptions {
        csv_export: matches.get_flag("csv"),
    };
    debug!("Session options: {:?}", options);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_session(&mut input, &mut output, &options, geocoder.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_flags_parse() {
        let matches = build_command()
            .try_get_matches_from(["exif_metax", "--offline", "--csv", "--geocode-timeout", "5"])
            .unwrap();
        assert!(matches.get_flag("offline"));
        assert!(matches.get_flag("csv"));
        assert!(!matches.get_flag("debug"));
        assert_eq!(matches.get_one::<u64>("geocode-timeout"), Some(&5));
    }

    #[test]
    fn test_positional_paths_rejected() {
        assert!(build_command()
            .try_get_matches_from(["exif_metax", "photo.jpg"])
            .is_err());
    }

    #[test]
    fn test_offline_geocoder() {
        let geocoder = build_geocoder(true, None);
        assert!(geocoder
            .reverse(exif_metax::Coordinate::new(51.5, -0.1))
            .is_none());
    }
}
