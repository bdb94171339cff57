use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use impact_match::config::Settings;
use impact_match::core::{PlaceholderPresenter, ProfileScorer};
use impact_match::error::handle_json_payload_error;
use impact_match::routes::{self, AppState};
use impact_match::services::{SqliteStore, TokenService};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting ImpactMatch API server...");

    let max_connections = settings.database.max_connections.unwrap_or(5);
    let store = SqliteStore::connect(&settings.database.url, max_connections)
        .await
        .map_err(|e| {
            error!("Failed to open database: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;

    if settings.database.seed_demo_data {
        match store.seed_demo_data().await {
            Ok(true) => info!("Demo accounts: greenpeace@demo.org / amira@example.com (password demo123)"),
            Ok(false) => {}
            Err(e) => error!("Failed to seed demo data: {}", e),
        }
    }

    let weights = settings.profile_weights();
    info!("Profile scorer initialized with weights: {:?}", weights);

    let app_state = AppState {
        store: Arc::new(store),
        tokens: Arc::new(TokenService::new(
            &settings.auth.jwt_secret,
            settings.auth.token_ttl_days,
        )),
        scorer: ProfileScorer::new(weights),
        presenter: Arc::new(PlaceholderPresenter),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
