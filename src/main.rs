use std::io;

use actix_web::{App, HttpServer, web};
use actix_web::middleware::Logger;
use env_logger::Env;
use log::{error, info};

use crate::api::district::district;
use crate::config::Config;
use crate::geocode::GeocodeClient;

mod api;
mod config;
mod geocode;
mod utils;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let client = GeocodeClient::new(&config).map_err(|err| {
        error!("Could not create HTTP client: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    info!(
        "Starting on {} (suburb strategy: {:?}, coordinates: {:?})",
        config.bind_address, config.suburb_strategy, config.coordinates_format
    );

    let client = web::Data::new(client);
    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .wrap(Logger::default())
            .route("/district", web::get().to(district))
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await
}
