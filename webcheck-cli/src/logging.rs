use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Map the `-v` count to a log level.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr log subscriber.
///
/// Logs never go to stdout: the report written there has a fixed format.
/// Colors are only used when stderr is a terminal.
pub fn init(verbose: u8) {
    let filter = EnvFilter::new(level_for(verbose));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    if let Err(err) = tracing_subscriber::registry().with(filter).with(layer).try_init() {
        tracing::debug!(error = %err, "log subscriber already installed");
    }
}
