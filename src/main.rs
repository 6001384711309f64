use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod validation;

use catalog::Catalog;
use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    log::info!(
        "Loading hotel catalog ({})...",
        config
            .hotels_file
            .as_ref()
            .map_or_else(|| "bundled".to_string(), |p| p.display().to_string())
    );
    let catalog = Catalog::load(&config).map_err(|e| {
        log::error!("Failed to load catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    log::info!(
        "Loaded {} hotels and {} cities",
        catalog.hotel_count(),
        catalog.city_count()
    );

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let catalog_data = web::Data::new(catalog);

    HttpServer::new(move || {
        App::new()
            .app_data(catalog_data.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
