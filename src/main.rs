use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

mod api;
mod auth;
mod config;
mod db;
mod shutdown;

use crate::api::{
    admin::{handlers::admin_config, AdminService},
    application::{handlers::application_config, ApplicationService},
    bookmark::{handlers::bookmark_config, BookmarkService},
    company::{handlers::company_config, CompanyService},
    health::health_config,
    job::{handlers::job_config, JobService},
    notification::{handlers::notification_config, NotificationService},
    user::{handlers::user_config, UserService},
    validation,
};
use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&config.log_dir).expect("Failed to create logs directory");

    // Initialize file-based logging with daily rotation and level separation
    // Log files will be created as: logs/info.2024-12-22.log, logs/error.2024-12-22.log, etc.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    // Create daily rotating file appenders for each log level
    let info_file = tracing_appender::rolling::daily(&config.log_dir, "info.log");
    let warn_file = tracing_appender::rolling::daily(&config.log_dir, "warn.log");
    let error_file = tracing_appender::rolling::daily(&config.log_dir, "error.log");
    let debug_file = tracing_appender::rolling::daily(&config.log_dir, "debug.log");

    // Create layers for each log level
    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let warn_layer = tracing_subscriber::fmt::layer()
        .with_writer(warn_file)
        .with_ansi(false)
        .with_filter(LevelFilter::WARN);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let debug_layer = tracing_subscriber::fmt::layer()
        .with_writer(debug_file)
        .with_ansi(false)
        .with_filter(LevelFilter::DEBUG);

    // Create console/stdout layer for terminal output
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    // Initialize the subscriber with all layers (including console)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(warn_layer)
        .with(error_layer)
        .with(debug_layer)
        .init();

    // Get database connection pool
    let pool = db::connection::get_connection(&config.database_url, config.max_db_connections)
        .await
        .expect("Failed to connect to database");

    info!("Starting job-board application");
    info!("Configuration loaded successfully:");
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Max database connections: {}", config.max_db_connections);

    // Run migrations on startup (auto-migrate when starting server)
    db::migrations::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // Clone pool for HTTP server (original will be used for shutdown)
    let server_pool = pool.clone();
    let server_config = config.clone();
    let max_payload_size = config.max_payload_size;

    let server = HttpServer::new(move || {
        // Per-resource services sharing the database pool
        let user_service = web::Data::new(UserService::new(server_pool.clone()));
        let company_service = web::Data::new(CompanyService::new(server_pool.clone()));
        let job_service = web::Data::new(JobService::new(server_pool.clone()));
        let application_service = web::Data::new(ApplicationService::new(server_pool.clone()));
        let bookmark_service = web::Data::new(BookmarkService::new(server_pool.clone()));
        let notification_service = web::Data::new(NotificationService::new(server_pool.clone()));
        let admin_service = web::Data::new(AdminService::new(server_pool.clone()));

        // Configure payload size limits globally
        let payload_config = web::PayloadConfig::default().limit(max_payload_size);

        // Credentialed CORS for the SPA origin, same-origin otherwise
        let cors = match &server_config.frontend_url {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .supports_credentials(),
            None => Cors::default(),
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(server_pool.clone())) // Share DB pool across workers
            .app_data(web::Data::new(server_config.clone())) // Config for auth extractors
            .app_data(user_service)
            .app_data(company_service)
            .app_data(job_service)
            .app_data(application_service)
            .app_data(bookmark_service)
            .app_data(notification_service)
            .app_data(admin_service)
            .app_data(payload_config) // Global payload size limit
            .app_data(validation::json_config()) // Global validation config
            .configure(health_config) // Health check endpoints
            .configure(user_config)
            .configure(company_config)
            .configure(job_config)
            .configure(application_config)
            .configure(bookmark_config)
            .configure(notification_config)
            .configure(admin_config)
    });

    info!(
        "Server starting on http://{}:{}",
        config.server_host, config.server_port
    );

    // Bind and start the server
    let server = server
        .bind((config.server_host.as_str(), config.server_port))?
        .run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn server in background
    let server_task = tokio::spawn(server);

    // Create shutdown coordinator and wait for shutdown signal
    let coordinator = ShutdownCoordinator::new(server_handle, server_task, pool);

    coordinator.wait_for_shutdown().await
}
