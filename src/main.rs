use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use repix::api;
use repix::models::AppConfig;
use repix::server;

#[derive(Parser)]
#[command(name = "repix")]
#[command(about = "Repix - stateless HTTP image transformation service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Transform an image file directly (no server needed)
    Transform {
        /// Input image file (GIF, ICO, JPEG or PNG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path; the input container format is kept
        #[arg(short, long)]
        output: PathBuf,

        /// Target width in pixels
        #[arg(short = 'W', long)]
        width: Option<u32>,

        /// Target height in pixels
        #[arg(short = 'H', long)]
        height: Option<u32>,

        /// Resize strategy: scale, crop, or scale_and_crop
        #[arg(short, long, default_value = "scale")]
        resize_method: String,

        /// Convert the result to grayscale
        #[arg(short, long)]
        greyscale: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Repix API",
        description = "Simple yet powerful REST API for modifying images",
        version = "1.0.0",
        license(name = "MIT")
    ),
    paths(api::handle_image),
    tags(
        (name = "Transform", description = "Image transformation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Transform {
            input,
            output,
            width,
            height,
            resize_method,
            greyscale,
        }) => run_transform_command(&input, &output, width, height, &resize_method, greyscale),
        Some(Commands::Serve) | None => run_server().await,
    }
}

/// Transform a single image file with the same pipeline the server uses.
fn run_transform_command(
    input: &Path,
    output: &Path,
    width: Option<u32>,
    height: Option<u32>,
    resize_method: &str,
    greyscale: bool,
) -> anyhow::Result<()> {
    use repix::models::{ResizeMethod, TransformParams};
    use repix::services::TransformPipeline;

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repix=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let resize_method = ResizeMethod::parse(resize_method).ok_or_else(|| {
        anyhow::anyhow!("Unknown resize method: {resize_method} (expected scale, crop or scale_and_crop)")
    })?;
    let params = TransformParams {
        width,
        height,
        resize_method,
        greyscale,
    };

    let raw = std::fs::read(input)?;
    let (bytes, content_type) = TransformPipeline::new()
        .run(&raw, &params)
        .map_err(|e| anyhow::anyhow!("Transform error: {e}"))?;

    std::fs::write(output, &bytes)?;
    println!(
        "Wrote {} ({} bytes, {content_type})",
        output.display(),
        bytes.len()
    );

    Ok(())
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repix=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(AppConfig::from_env());
    let bind_addr = config.bind_addr.clone();

    // Create application state using the shared server module
    let state = server::create_app_state(config)?;

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Repix server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
