use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the process subscriber. `RUST_LOG` directives take precedence over `level`.
pub fn setup_tracing(level: Level, pretty: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false);
    let _ = if pretty {
        builder.try_init()
    } else {
        // one JSON object per line
        builder
            .with_ansi(false)
            .without_time()
            .json()
            .try_init()
    };
}
