//! Lodestone Server - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lodestone_server::app::App;
use lodestone_server::infrastructure::{InMemoryRepository, SystemClock};
use lodestone_server::{api, infrastructure};
use lodestone_shared::messages::AuditCode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (task runners start us from `crates/server`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lodestone_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let server_name =
        std::env::var("LODESTONE_SERVER_NAME").unwrap_or_else(|_| "active-metadata-store".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "9443".into())
        .parse()
        .unwrap_or(9443);
    let denied_users: Vec<String> = std::env::var("LODESTONE_DENIED_USERS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    tracing::info!(
        message_id = AuditCode::ServiceStarting.message_id(),
        "{}",
        AuditCode::ServiceStarting.format(&["access-services", &server_name])
    );

    // The in-memory repository backs local mode; production deployments
    // wire a repository connector implementing the same port.
    let clock: Arc<dyn infrastructure::ClockPort> = Arc::new(SystemClock::new());
    let repository = Arc::new(InMemoryRepository::new(clock.clone()).with_denied_users(denied_users));

    // Create application
    let app = Arc::new(App::new(server_name, repository, clock));

    // Build router
    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer_from_env() {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer_from_env() -> Option<CorsLayer> {
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // Browsers send JSON content types which trigger CORS preflights.
        .allow_headers([
            HeaderName::from_static("x-user-id"),
            axum::http::header::CONTENT_TYPE,
        ]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
