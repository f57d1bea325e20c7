use axum::Router;
use imaginify_server::config::Config;
use imaginify_server::db::{Db, LazyConnection, MongoConnector};
use imaginify_server::docs::ApiDoc;
use imaginify_server::routes::create_api_routes;
use std::panic;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "imaginify_server=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });
    info!("Environment: {}", config.environment);

    // One connection cache for the whole process, shared with every handler
    let db: Arc<Db> = Arc::new(LazyConnection::from_env(
        MongoConnector::default().with_app_name(config.service_name.clone()),
        config.connect_options(),
    ));

    // Warm up the connection in the background; requests still connect lazily
    if config.mongodb_url.is_some() {
        let warmup = db.clone();
        tokio::spawn(async move {
            match warmup.get_connection().await {
                Ok(_) => info!("Database initialized successfully"),
                Err(e) => error!("Failed to initialize database: {}", e),
            }
        });
    } else {
        warn!("No MONGODB_URL configured - readiness checks will fail until it is set");
    }

    // Combine all routes
    let app_routes = Router::new()
        // Mount API routes
        .nest("/api", create_api_routes(db))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    info!("📚 Swagger UI available at http://{}/swagger", config.server_address());

    axum::serve(listener, app_routes)
        .await
        .expect("Server failed to start");
}
