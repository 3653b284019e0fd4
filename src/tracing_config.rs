//! Log output for the `jsscan` binary.
//!
//! ```bash
//! JSSCAN_LOG=trace jsscan file.js            # one line per token and comment
//! JSSCAN_LOG=debug JSSCAN_LOG_FORMAT=json jsscan -e "'\9'" --strict
//! ```
//!
//! Nothing is installed unless `JSSCAN_LOG` (or `RUST_LOG`) is set. Output
//! goes to stderr so it never mixes with the token dump on stdout.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("JSSCAN_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `JSSCAN_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("JSSCAN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

pub fn init_tracing() {
    if std::env::var("JSSCAN_LOG").is_err() && std::env::var("RUST_LOG").is_err() {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
