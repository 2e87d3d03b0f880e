// src/log.rs
//
// Subscriber setup for both binaries plus the short logging macros used
// across the crate. The GUI writes to `.store/debug.log`; the collector
// writes to stderr so progress and diagnostics stay on the terminal.

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE_STEM, STORE_DIR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    Stderr,
    File,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
///
/// Calling this twice is harmless; the second subscriber is dropped.
pub fn init(sink: Sink) -> Option<WorkerGuard> {
    match sink {
        Sink::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
            None
        }
        Sink::File => {
            let appender = match RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(LOG_FILE_STEM)
                .filename_suffix("log")
                .build(STORE_DIR)
            {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Logging: cannot open {STORE_DIR}/{LOG_FILE_STEM}.log ({e}); using stderr");
                    return init(Sink::Stderr);
                }
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(writer)
                .try_init();
            Some(guard)
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
