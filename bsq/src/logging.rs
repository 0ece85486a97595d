//! Logger setup for the `bsq` binary

use std::io::Write;

use env_logger::{Builder, Env};

/// Install the global logger
///
/// Logs go to stderr. The level defaults to `warn` and can be changed with
/// `RUST_LOG`, e.g. `RUST_LOG=debug` to see why a map was rejected.
pub fn init_logger(is_test: bool) {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .is_test(is_test)
        .try_init();
}
