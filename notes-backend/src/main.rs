use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod notes;
mod render;

use config::Config;
use notes::PageStore;
use render::{PageRenderer, TemplateRenderer};

pub struct AppState {
    /// Sole owner of the title -> file mapping
    pub store: PageStore,
    /// Parsed once at startup, read-only afterwards
    pub renderer: Arc<dyn PageRenderer>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    let renderer: Arc<dyn PageRenderer> = match TemplateRenderer::load(&config.templates_dir) {
        Ok(renderer) => Arc::new(renderer),
        Err(e) => {
            log::error!("Failed to init templates: {}", e);
            std::process::exit(1);
        }
    };

    let store = PageStore::new(&config.notes_dir);
    log::info!("Notes directory: {}", store.notes_dir().display());

    let state = web::Data::new(AppState { store, renderer });

    log::info!(
        "Server is running at http://{}:{}",
        config.bind_address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(controllers::health::config_routes)
            // Page routes own the catch-all listing, so they go last
            .configure(controllers::pages::config)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
