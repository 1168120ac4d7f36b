//! Logging
//!
//! `env_logger` setup for binaries. Library code only talks to the `log`
//! facade. `RUST_LOG` overrides the default `info` filter.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global logger with a compact `[hh:mm:ss.mmm LEVEL] message` format.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            let ts = now.as_secs();
            writeln!(
                buf,
                "[{:02}:{:02}:{:02}.{:03} {:<5}] {}",
                (ts / 3600) % 24,
                (ts / 60) % 60,
                ts % 60,
                now.subsec_millis(),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if result.is_err() {
        log::debug!("logger already initialized");
    }
}
