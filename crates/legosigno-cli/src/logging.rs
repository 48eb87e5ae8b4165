use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `--verbose` level. Higher levels include lower ones.
pub fn directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "trace",
    }
}

/// Route log events to stderr so stdout only carries command output.
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(directive(0), "error");
        assert_eq!(directive(1), "warn");
        assert_eq!(directive(2), "info");
        assert_eq!(directive(3), "trace");
    }
}
