mod availability;
mod clients;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use actix_web::{App, HttpServer, web};
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = config::Config::from_env();
    let port = config.port;
    let state = web::Data::new(state::AppState::new(&config));

    tracing::info!("Server running on port {}", port);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes::init))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
