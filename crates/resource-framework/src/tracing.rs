//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by every binary built
//! on the framework.
//!
//! - **Structured logging**: actors log with fields (`entity_type`, `id`, `size`) instead of
//!   formatted strings.
//! - **Configurable levels** via the `RUST_LOG` environment variable, `info` when unset.
//! - **Compact format** with the module target hidden; `entity_type` already says where a
//!   line comes from.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle: Created / Updated / Deleted
//! RUST_LOG=debug cargo run     # full payloads and every Get / List
//! RUST_LOG=resource_framework=debug,mygarage=info cargo run
//! ```
//!
//! With `RUST_LOG=info` a create followed by a delete reads:
//!
//! ```text
//! INFO Actor started entity_type="Car"
//! INFO Created entity_type="Car" id=7 size=7
//! INFO Deleted entity_type="Car" id=7 size=6
//! ```

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
