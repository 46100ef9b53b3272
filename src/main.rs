use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use roster_server::api;
use roster_server::backend::database::{sqlite::schema, DatabaseBackendConfig};
use roster_server::backend::{Backend, BackendFactory, RosterBackend};
use roster_server::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "HTTP API for users, groups, and group memberships")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,
}

async fn setup_backend(
    app_config: &AppConfig,
) -> Result<Arc<dyn RosterBackend>, Box<dyn std::error::Error>> {
    let backend_config = DatabaseBackendConfig::new(app_config.database.url.clone())
        .with_max_connections(app_config.database.max_connections);
    backend_config.validate()?;

    let backend = BackendFactory::create(&backend_config).await?;
    backend.health_check().await?;

    // The schema script runs exactly once, before the listener binds.
    // Any failure here aborts startup.
    let schema_sql = match &app_config.database.schema {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read schema script {}: {}", path, e))?,
        None => schema::DEFAULT_SCHEMA.to_string(),
    };
    backend.init_schema(&schema_sql).await?;

    Ok(backend)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing for better debugging
    tracing_subscriber::fmt::init();

    // Load configuration from specified file or use defaults
    let (mut app_config, using_defaults) =
        if args.config == "config.yaml" && !std::path::Path::new("config.yaml").exists() {
            println!("⚠️  No config.yaml found, using default configuration:");
            println!("   - In-memory SQLite database");
            println!("   - Listening on 127.0.0.1:3000\n");
            (AppConfig::default_config(), true)
        } else {
            let config = AppConfig::load_from_file(&args.config)
                .map_err(|e| format!("Failed to load configuration: {}", e))?;
            (config, false)
        };

    // Override with command line arguments if provided
    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }

    if !using_defaults {
        println!("🔧 Configuration loaded:");
        println!(
            "   Server: {}:{}",
            app_config.server.host, app_config.server.port
        );
        println!("   Database: {}", app_config.database.url);
    }

    // Setup backend
    let backend = setup_backend(&app_config).await?;

    // Build the application router
    let app = api::router(backend);

    // Start the server
    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        eprintln!(
            "Invalid host address: {}, using 127.0.0.1",
            app_config.server.host
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));
    println!("🚀 Roster server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
