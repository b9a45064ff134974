// src/main.rs

use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use shopdesk::config::Config;
use shopdesk::store::Store;
use shopdesk::{configure_routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().expect("DATABASE_URL is not set");

    let store = Store::connect(&config.database_url)
        .await
        .expect("failed to connect to PostgreSQL");
    store
        .run_migrations()
        .await
        .expect("failed to run database migrations");

    let app_state = web::Data::new(AppState {
        store: store.clone(),
    });

    tracing::info!(addr = %config.addr(), "starting shopdesk API");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(configure_routes)
    })
    .bind(config.addr())?
    .run()
    .await?;

    store.close().await;
    Ok(())
}
