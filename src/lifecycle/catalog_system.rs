use crate::config::Config;
use crate::http::{self, DeleteStyle, ResourceState};
use crate::model::{Product, User};
use axum::Router;
use resource_store::{IdKind, StoreClient, StoreError};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Owns the running store actors.
///
/// `CatalogSystem` is responsible for:
/// - **Startup**: building each store from its options, seeding it, spawning its actor
/// - **Wiring**: handing out clients, and a router built from them
/// - **Shutdown**: closing every channel and waiting for the actors to drain
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::start(&Config::default())?;
/// let app = system.router(DeleteStyle::NoContent);
/// axum::serve(listener, app).await?;
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub products: StoreClient<Product>,
    pub users: StoreClient<User>,
    product_keys: IdKind,
    user_keys: IdKind,
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Builds, seeds and spawns both store actors. Must be called inside a Tokio runtime.
    ///
    /// Fails only if seeding fails, which means the configured identifier scheme repeated itself.
    pub fn start(config: &Config) -> Result<Self, StoreError> {
        let product_options = config.product_options();
        let user_options = config.user_options();

        let (product_actor, products) =
            crate::product_store::new(product_options, config.channel_capacity, config.seed())?;
        let (user_actor, users) =
            crate::user_store::new(user_options, config.channel_capacity, config.seed())?;

        let product_handle = tokio::spawn(product_actor.run());
        let user_handle = tokio::spawn(user_actor.run());

        info!(seeded = config.seed(), "Catalog started");
        Ok(Self {
            products,
            users,
            product_keys: product_options.ids.kind(),
            user_keys: user_options.ids.kind(),
            handles: vec![product_handle, user_handle],
        })
    }

    /// The HTTP service for this system. The router holds client clones, so it must be dropped
    /// before [`CatalogSystem::shutdown`] can complete.
    pub fn router(&self, delete_style: DeleteStyle) -> Router {
        http::router(
            ResourceState::new(self.products.clone(), self.product_keys, delete_style),
            ResourceState::new(self.users.clone(), self.user_keys, delete_style),
        )
    }

    /// Drops this system's clients and waits for every actor to finish.
    ///
    /// Actors exit once *all* clients for their channel are gone; the returned error reports an
    /// actor task that panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down catalog...");

        drop(self.products);
        drop(self.users);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
