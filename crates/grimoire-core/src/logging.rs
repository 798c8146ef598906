//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `GRIMOIRE_LOG` environment variable for per-subsystem log
/// levels, e.g. `GRIMOIRE_LOG=grimoire_retrieval=debug,grimoire_embeddings=warn`.
/// Falls back to `grimoire=info` when unset or invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GRIMOIRE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("grimoire=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
