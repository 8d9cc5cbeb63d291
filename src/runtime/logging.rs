use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` wins over the `--verbose` default.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "songbooker=debug"
    } else {
        "songbooker=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
