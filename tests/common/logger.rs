use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an env_logger once per test binary. Defaults to INFO; override
/// with `RUST_LOG` (e.g. `RUST_LOG=chained_hashtable=debug` to see growth).
pub fn init_test_logger() {
    INIT.call_once(|| {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Info)
            .format_timestamp_millis()
            .is_test(true)
            .parse_default_env();
        let _ = builder.try_init();
    });
}
