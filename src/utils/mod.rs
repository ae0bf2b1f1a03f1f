use std::{env, sync::Once};

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &str = "warn,travel_core=info";

/// `RUST_LOG` replaces the default directives when it is set and non-empty.
fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    let directives = rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);
    EnvFilter::builder().parse_lossy(directives)
}

/// Initializes the global tracing subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(build_filter(rust_log.as_deref()))
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_logs_crate_at_info() {
        assert_eq!(build_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(build_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_can_raise_crate_level_to_debug() {
        let filter = build_filter(Some("travel_core=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
