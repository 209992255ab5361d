use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;
use std::time::Duration;

use crate::api::BinanceClient;
use crate::config::Config;
use crate::error::Result;
use crate::service::PriceService;
use crate::web::api;

/// Builds the shared `PriceService` and runs the HTTP server until shutdown.
///
/// CORS is opened for the single configured frontend origin, with credentials
/// and all methods/headers allowed for that origin only.
pub async fn run(config: Config) -> Result<()> {
    let binance = BinanceClient::new(
        config.binance.base_url.clone(),
        Duration::from_secs(config.binance.timeout_secs),
    )?;
    let service = web::Data::new(PriceService::new(binance));
    let origin = config.cors.frontend_origin.clone();

    info!(
        "Starting web server on {}:{}",
        config.server.host, config.server.port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(service.clone())
            .configure(api::configure_routes)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
