//! This module sets up logging for the binary using `tracing_subscriber`.
//! Events go to stderr so that decoded text written to stdout stays clean.

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info,huffman_codec=debug";

/// Sets up logging based on the provided format preference
///
/// # Arguments
///
/// * `pretty` - A boolean that determines if the logging format should be pretty or JSON
pub fn setup_logging(pretty: bool) {
    match pretty {
        true => setup_logging_pretty(),
        false => setup_logging_json(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn setup_logging_json() {
    let main_layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(false)
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter())
        .with(main_layer)
        .init()
}

fn setup_logging_pretty() {
    let main_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter())
        .with(main_layer)
        .init()
}
