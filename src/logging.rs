use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG`, when set, wins over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        eprintln!("logging already initialized: {e}");
    }
}
