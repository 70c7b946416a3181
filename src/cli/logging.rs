use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "VARPORT_LOG";

/// Install the stderr log subscriber.
///
/// stdout carries token documents and the MCP protocol, so logs never go
/// there. `VARPORT_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "varport=debug" } else { "warn" };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
