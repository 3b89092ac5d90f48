use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cat_gallery=info";

static INIT: Once = Once::new();

/// Installs the fmt subscriber, filtered by `RUST_LOG` when set.
/// Later calls are no-ops, as is running under a host that already
/// installed a global subscriber.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    });
}
