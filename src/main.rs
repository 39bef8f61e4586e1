use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use studyquiz_server::{app_state::AppState, config::Config, handlers::quiz_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if matches!(std::env::var("APP_ENV").as_deref(), Ok("production")) {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);
    log::warn!("quiz sessions live in memory for the process lifetime and are never evicted");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(25 * 1024 * 1024))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(quiz_handler::create_session)
            .service(quiz_handler::upload_document)
            .service(quiz_handler::submit_answer)
    })
    .bind((host, port))?
    .run()
    .await
}
