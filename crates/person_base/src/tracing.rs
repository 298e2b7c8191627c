use std::io;

use crate::error::{PersonError, PersonResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

// 📖 # Why log to stderr?
// Standard output carries the program's result lines and nothing else.

/// Installs the global subscriber: env filter, stderr fmt layer and [`ErrorLayer`].
pub fn init_tracing() -> PersonResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|err| {
            Box::new(PersonError::message(err.to_string()).context("installing tracing subscriber"))
        })
}
