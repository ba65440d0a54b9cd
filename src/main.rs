use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use tasklist::config::Config;
use tasklist::routes;
use tasklist::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let state = web::Data::new(AppState::with_postgres(pool, &config));

    log::info!("Server running on {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))
    .map_err(|e| {
        // A port we cannot bind is fatal; log before the non-zero exit.
        log::error!("Failed to bind {}: {}", config.server_url(), e);
        e
    })?
    .run()
    .await
}
