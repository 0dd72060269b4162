use actix_web::{App, HttpServer, web::Data};
use actix_files as fs;
use dotenv::dotenv;
use log::{info, error};
use std::sync::Arc;
use tera::Tera;

use church_assistant::config::Settings;
use church_assistant::model::Assistant;
use church_assistant::web::{routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Church AI Assistant");

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    let assistant = match Assistant::new(settings.completion.clone()) {
        Ok(assistant) => Arc::new(assistant),
        Err(e) => {
            error!("Failed to initialize completion client: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize template engine
    let mut tera = match Tera::new(&settings.templates_glob) {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState { tera, assistant });
    let static_dir = settings.static_dir.clone();

    info!("Listening on {}:{}", settings.bind_address, settings.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind((settings.bind_address.as_str(), settings.port))?
    .run()
    .await
}
