pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::{handlers, routes, CatalogQuery, QueryResponse};

pub use error::{CatalogError, ErrorResponse};

// Export logic types
pub use logic::{filter_movies, ActorResolver, Catalog, MovieFilterEvaluator};

// Export all model types
pub use model::*;

// Export store types
pub use store::{ActorStore, CatalogState, MemoryStore, MovieStore, Store};

use std::sync::Arc;

/// Build the in-memory catalog, seeded unless configured otherwise
pub fn build_catalog(config: &config::AppConfig) -> Catalog<MemoryStore> {
    let store = if config.catalog.load_seed_data {
        seed::load_seed_data()
    } else {
        MemoryStore::empty()
    };
    Catalog::new(Arc::new(store))
}

/// Router with all catalog routes bound to `catalog`
pub fn create_app<S: Store + 'static>(catalog: Catalog<S>) -> axum::Router {
    routes::create_router::<S>().with_state(Arc::new(catalog))
}

pub async fn run_server(config: &config::AppConfig) -> anyhow::Result<()> {
    use axum::serve;
    use tokio::net::TcpListener;

    let app = create_app(build_catalog(config));

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Movie catalog server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
