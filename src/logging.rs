use std::fs::File;
use std::sync::Mutex;

use chrono::Utc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "SCOREKEEPER_LOG";

/// Sends `tracing` events to a log file, if `SCOREKEEPER_LOG` asks for one.
///
/// The terminal carries the scoreboard, so without the variable nothing is
/// logged. Each run writes to `{SCOREKEEPER_LOG}.{unix time}.{pid}`.
/// `RUST_LOG` picks the level, `info` when unset.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV) else { return };
    let path = format!("{base}.{}.{}", Utc::now().timestamp(), std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Not logging, could not create {path}: {e}");
            return;
        }
    };

    let level = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(level)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
}
