use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use database::{db::create_connection, store::SeaOrmStore};

mod app;
mod doc;
mod dtos;
mod routes;
mod utils;

#[tokio::main]
async fn main() {
    env_logger::init();

    let db = create_connection()
        .await
        .expect("Failed to connect to the database");
    let state = app::AppState::new(SeaOrmStore::new(db));

    let router = app::app(state).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::ApiDoc::openapi()),
    );

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, router)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .unwrap();
}
