//! # HTTP Layer
//!
//! An axum router exposing every store under `/api/<resource>`:
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/api/<resource>` | 200, array |
//! | GET | `/api/<resource>/{id}` | 200, record |
//! | POST | `/api/<resource>` | 201, record |
//! | PATCH | `/api/<resource>/{id}` | 200, record |
//! | DELETE | `/api/<resource>/{id}` | 204, or 200 with a message |
//!
//! Failures are rendered by [`ApiError`]: 404 for a missing record or route, 400 for an invalid
//! or malformed body, 500 for anything internal.
//!
//! Handlers hold nothing but a [`StoreClient`]; the store itself lives in its actor.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use axum::routing::get;
use axum::Router;
use resource_store::{IdKind, Resource, StoreClient};
use serde::Serialize;

/// Response to a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DeleteStyle {
    /// 204 with an empty body.
    #[default]
    NoContent,
    /// 200 with `{"message": "<Resource> deleted"}`.
    Message,
}

/// Per-resource handler state.
pub struct ResourceState<T: Resource> {
    pub client: StoreClient<T>,
    /// Kind of identifier the store issues; decides how path segments become lookup keys.
    pub keys: IdKind,
    pub delete_style: DeleteStyle,
}

impl<T: Resource> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            keys: self.keys,
            delete_style: self.delete_style,
        }
    }
}

impl<T: Resource> ResourceState<T> {
    pub fn new(client: StoreClient<T>, keys: IdKind, delete_style: DeleteStyle) -> Self {
        Self {
            client,
            keys,
            delete_style,
        }
    }
}

/// CRUD routes for one resource mounted at `base`.
pub fn resource_routes<T>(base: &str, state: ResourceState<T>) -> Router
where
    T: Resource + Serialize,
{
    Router::new()
        .route(base, get(handlers::list::<T>).post(handlers::create::<T>))
        .route(
            &format!("{base}/{{id}}"),
            get(handlers::fetch::<T>)
                .patch(handlers::update::<T>)
                .delete(handlers::remove::<T>),
        )
        .with_state(state)
}

/// The complete service: banner, health check, both resources and a JSON 404 fallback.
pub fn router(
    products: ResourceState<crate::model::Product>,
    users: ResourceState<crate::model::User>,
) -> Router {
    Router::new()
        .route("/", get(handlers::banner))
        .route("/health", get(handlers::health))
        .merge(resource_routes("/api/products", products))
        .merge(resource_routes("/api/users", users))
        .fallback(handlers::no_route)
}
