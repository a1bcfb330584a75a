use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "docs_ltx=debug" } else { "docs_ltx=info" }
}

/// Sets the logging (tracing) level using RUST_LOG, falling back to `docs_ltx=info`
/// (or `docs_ltx=debug` when verbose).
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "docs_ltx=info");
        assert_eq!(default_filter(true), "docs_ltx=debug");
    }
}
