//! # Catalog Service
//!
//! An in-memory Products and Users catalog with HTTP CRUD, built on the generic
//! [`resource_store`] crate.
//!
//! ## Design
//!
//! ### One store per resource, one actor per store
//! Each resource lives in its own `ResourceStore`, owned by a `StoreActor` running in its own
//! Tokio task. Handlers talk to it through a cloneable `StoreClient`, so a create or update is
//! validated and applied in one step and no lock is ever taken on the data.
//!
//! ### Validation lives on the record type
//! [`Product`](model::Product) and [`User`](model::User) implement `Resource`: they turn a JSON
//! object into normalized fields (trimmed strings, coerced numbers) or a merge-patch, and report
//! every failing field at once.
//!
//! ### Configurable policies
//! Identifier scheme, identifier comparison, numeric coercion and the delete response are all
//! chosen at startup via [`config::Config`].
//!
//! ## Module Tour
//!
//! - [`model`]: record, creation-field and patch types.
//! - [`product_store`], [`user_store`]: `Resource` impls, seed data, actor factories.
//! - [`http`]: axum router, generic handlers, error mapping.
//! - [`lifecycle`]: [`CatalogSystem`](lifecycle::CatalogSystem) startup/shutdown and tracing.
//! - [`config`]: command-line options.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --listen 127.0.0.1:3000
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_store;
pub mod user_store;
