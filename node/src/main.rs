// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use intake_node::config::NodeConfig;
use intake_node::server::{build_router, SharedStore};
use intake_node::telemetry::init_telemetry;
use intake_store::FlatFileStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    init_telemetry();

    let cfg = NodeConfig::default();

    tracing::info!("Initializing intake node with config: {:?}", cfg);

    let store = match FlatFileStore::open(&cfg.store_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open form store at {:?}: {}", cfg.store_path, e);
            // A node that cannot reach its store must not serve.
            panic!("Failed to open form store");
        }
    };
    tracing::info!("Form store ready at {:?}", store.path());

    let shared_store: SharedStore = Arc::new(store);
    let app = build_router(shared_store, cfg.allowed_origin.clone());

    let addr = cfg.bind_addr;
    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
