//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`
//! (default `info`). Module paths are hidden (`with_target(false)`); log lines carry structured
//! fields such as `entity_type`, `id` and `size` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: start (with seeded size) and shutdown (with final size)
//! - **Mutations**: `Created`, `Updated`, `Deleted` at `info`; failures at `warn`
//! - **Requests**: one span per handler call carrying the resource name and path id
//! - **Internal errors**: logged at `error` before the client receives a bare 500
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and mutations
//! RUST_LOG=info cargo run
//!
//! # Reads and full payloads as well
//! RUST_LOG=debug cargo run
//!
//! # Only the store actors
//! RUST_LOG=resource_store=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=2
//! INFO Actor started entity_type="User" size=2
//! INFO Listening addr=127.0.0.1:3000
//! INFO Created entity_type="Product" id=aB3x9Z size=3
//! WARN Update failed entity_type="Product" id=nope error=Product not found: nope
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();
}
