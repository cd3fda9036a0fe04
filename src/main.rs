use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use nearby_suggest::config::{ApiConfig, LoggingSettings, Settings};
use nearby_suggest::core::Ranker;
use nearby_suggest::routes::{self, search::AppState};
use nearby_suggest::services::{sample_records, MockApi, RecordSource, SearchService, SuggestionsClient};
use std::path::Path;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for query string errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Pick the record source: the built-in sample set or the remote endpoint
fn build_source(settings: &Settings) -> std::io::Result<RecordSource> {
    if settings.api.use_mock {
        info!(
            "Using mock API ({}-{}ms simulated latency)",
            settings.mock.min_delay_ms, settings.mock.max_delay_ms
        );
        return Ok(RecordSource::Mock(MockApi::new(
            sample_records(),
            settings.mock.min_delay(),
            settings.mock.max_delay(),
        )));
    }

    // A .env file next to the binary takes precedence over settings
    let api = if Path::new(".env").exists() {
        ApiConfig::from_env_file(".env")
    } else {
        settings.api_config()
    };

    info!("Using suggestions endpoint at {}", api.base_url);

    SuggestionsClient::new(api)
        .map(RecordSource::Remote)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
}

fn init_logging(logging: &LoggingSettings) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration; SUGGEST_CONFIG points at an explicit file
    let loaded = match std::env::var("SUGGEST_CONFIG") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    };

    // Initialize logging from [logging], overridden by LOG_LEVEL / LOG_FORMAT
    let logging = loaded
        .as_ref()
        .map(|settings| settings.logging.clone())
        .unwrap_or_default()
        .with_env_overrides();
    init_logging(&logging);

    info!("Starting Nearby Suggest...");

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!("Configuration loaded successfully");

    let source = build_source(&settings)?;

    let ranker = Ranker::new(settings.ranking.fallback());
    info!("Ranker initialized with fallback {:?}", ranker.fallback());

    // Build application state
    let app_state = AppState {
        search: SearchService::new(source, ranker),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
