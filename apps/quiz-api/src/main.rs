//! Quiz API Server
//!
//! Serves the estimates behind the lead-generation quizzes. Provides REST API
//! endpoints for:
//!
//! - Business tax credit estimates (WOTC, R&D, empowerment zone, state)
//! - Individual refund estimates
//! - The reference tables the quiz forms are built from
//!
//! ## Architecture
//!
//! The server is a thin layer over the credit-engine crate:
//!
//! - Reference tables load once at startup and are shared read-only
//! - Form values are coerced in the handlers; the engine never fails
//! - Rate limiting via tower-governor

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use credit_engine::{CreditEngine, ReferenceData};
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{
    handle_calculate, handle_get_state, handle_health, handle_list_categories,
    handle_list_rd_tiers, handle_list_states, handle_refund, handle_zone_lookup,
};

/// Command-line arguments for the quiz API server
#[derive(Parser, Debug)]
#[command(name = "quiz-api")]
#[command(about = "Quiz API server for tax credit and refund estimates")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// JSON file replacing the builtin reference tables
    #[arg(long)]
    reference_data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: CreditEngine,
}

impl AppState {
    pub fn new(engine: CreditEngine) -> Self {
        Self { engine }
    }
}

/// Read and validate a reference data file
fn load_reference(path: &Path) -> anyhow::Result<ReferenceData> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference data from {}", path.display()))?;
    ReferenceData::from_json(&json)
        .with_context(|| format!("Invalid reference data in {}", path.display()))
}

/// All routes with CORS and request tracing; rate limiting is added in `main`
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Reference tables
        .route("/api/categories", get(handle_list_categories))
        .route("/api/states", get(handle_list_states))
        .route("/api/states/:code", get(handle_get_state))
        .route("/api/rd-tiers", get(handle_list_rd_tiers))
        .route("/api/zones/:zip", get(handle_zone_lookup))
        // Estimates
        .route("/api/calculate", post(handle_calculate))
        .route("/api/refund", post(handle_refund))
        // Apply middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting quiz API server on {}:{}", args.host, args.port);

    // Load reference tables
    let engine = match &args.reference_data {
        Some(path) => {
            let reference = load_reference(path)?;
            info!("Loaded reference data from {}", path.display());
            CreditEngine::with_reference(Arc::new(reference))
        }
        None => CreditEngine::new(),
    };
    let reference = engine.reference();
    info!(
        "Reference tables: {} WOTC categories, {} R&D tiers, {} state programs, {} zone ZIPs",
        reference.wotc_categories.len(),
        reference.rd_tiers.len(),
        reference.state_programs.len(),
        reference.empowerment_zone.zones.len()
    );

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit.saturating_mul(2))
            .finish()
            .context("Failed to create rate limiter config; rate limit must be positive")?,
    );

    let app = build_router(AppState::new(engine)).layer(GovernorLayer {
        config: governor_conf,
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
