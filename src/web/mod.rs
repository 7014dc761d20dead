//! Web API module for PokéDash.
//!
//! Serves the dashboard computations as JSON so a browser frontend can draw
//! the same charts as the terminal dashboard.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/dataset` - Renamed table (optional ?limit=)
//! - `GET /api/entries` - Typed entries (optional ?gens=)
//! - `GET /api/columns` - Selectable attributes and the column renames
//! - `GET /api/types` - Type distribution (optional ?gens=)
//! - `GET /api/scatter` - Scatter series (optional ?x=, ?y=, ?gens=)
//! - `GET /api/compare` - Two-entry comparison (optional ?first=, ?second=)
//! - `GET /api/entries/{ref}/artwork` - Artwork URL of one entry
//! - `GET /api/config` - Current configuration
//!
//! `gens` is a comma-separated list of generation numbers. Leaving it out
//! selects every generation; passing it empty (`?gens=`) selects none, which
//! returns the whole table with a `warning`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{
    Attribute, Dataset, Entry, EntryRef, Generation, GenerationSelection, RgbColor,
};
use crate::services::columns::{column_renames, ColumnRename};
use crate::services::compare::{compare, resolve, Comparison};
use crate::services::memo::{DistributionKey, ScatterKey};
use crate::services::{
    aggregate_types, build_scatter, filter_by_generation, AggregateRow, CompareError, DataError,
    DatasetCache, FilterWarning, Memo, ScatterPlot, TypeDistribution,
};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Dataset loaded once on first request
    cache: Arc<DatasetCache>,
    /// Type distributions per (fingerprint, selection)
    distributions: Arc<Memo<DistributionKey, TypeDistribution>>,
    /// Scatter plots per (fingerprint, selection, x, y)
    scatters: Arc<Memo<ScatterKey, ScatterPlot>>,
}

impl AppState {
    /// Creates a new application state. Nothing is fetched until the first
    /// data request.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let cache = DatasetCache::new(config.data_source(), config.timeout());
        Self {
            config: Arc::new(config),
            cache: Arc::new(cache),
            distributions: Arc::new(Memo::new()),
            scatters: Arc::new(Memo::new()),
        }
    }

    /// The dataset cache shared by every request.
    #[must_use]
    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Number of memoized type distributions.
    #[must_use]
    pub fn memoized_distributions(&self) -> usize {
        self.distributions.len()
    }

    /// Number of memoized scatter plots.
    #[must_use]
    pub fn memoized_scatters(&self) -> usize {
        self.scatters.len()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn bad_request(
    error: impl Into<String>,
    details: impl Into<String>,
) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details(error, details)),
    )
}

impl From<DataError> for (StatusCode, Json<ApiError>) {
    fn from(err: DataError) -> Self {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::with_details("Dataset unavailable", err.to_string())),
        )
    }
}

impl From<CompareError> for (StatusCode, Json<ApiError>) {
    fn from(err: CompareError) -> Self {
        let status = match &err {
            CompareError::EntryNotFound(_) => StatusCode::NOT_FOUND,
            CompareError::Ambiguous { .. } => StatusCode::CONFLICT,
        };
        (status, Json(ApiError::new(err.to_string())))
    }
}

/// Query parameters carrying a generation selection.
#[derive(Debug, Deserialize)]
pub struct GenerationQuery {
    /// Comma-separated generation numbers.
    pub gens: Option<String>,
}

/// Query parameters for the table endpoint.
#[derive(Debug, Deserialize)]
pub struct DatasetQuery {
    /// Maximum number of rows to return.
    pub limit: Option<usize>,
}

/// Query parameters for the scatter endpoint.
#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    /// X axis attribute (defaults to attack).
    pub x: Option<String>,
    /// Y axis attribute (defaults to defense).
    pub y: Option<String>,
    /// Comma-separated generation numbers.
    pub gens: Option<String>,
}

/// Query parameters for the compare endpoint.
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// First entry, number or name (defaults to the 1st table row).
    pub first: Option<String>,
    /// Second entry, number or name (defaults to the 4th table row).
    pub second: Option<String>,
}

/// Renamed table response.
#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    /// Where the table was loaded from.
    pub source: String,
    /// Content fingerprint.
    pub fingerprint: String,
    /// Load time (RFC 3339).
    pub loaded_at: DateTime<Utc>,
    /// Number of rows in the full table.
    pub total: usize,
    /// Display column labels.
    pub columns: Vec<String>,
    /// Raw cell values, possibly truncated by `limit`.
    pub rows: Vec<Vec<String>>,
}

/// Typed entries response.
#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    /// Selected generations.
    pub selected: Vec<Generation>,
    /// Advisory when no generation was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Matching entries in table order.
    pub entries: Vec<Entry>,
}

/// One selectable numeric attribute.
#[derive(Debug, Serialize)]
pub struct AttributeInfo {
    /// Identifier accepted by `x`/`y`.
    pub id: Attribute,
    /// Display label.
    pub label: &'static str,
}

/// Columns response.
#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    /// Attributes usable on the scatter axes and in comparisons.
    pub attributes: Vec<AttributeInfo>,
    /// Raw-to-display column renames.
    pub renames: &'static [ColumnRename],
}

/// Type distribution response.
#[derive(Debug, Serialize)]
pub struct TypesResponse {
    /// Selected generations.
    pub selected: Vec<Generation>,
    /// Number of entries counted.
    pub count: usize,
    /// Advisory when no generation was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Rows in descending count order.
    pub rows: Vec<AggregateRow>,
    /// Colors in row order.
    pub colors: Vec<RgbColor>,
}

/// Scatter plot response.
#[derive(Debug, Serialize)]
pub struct ScatterResponse {
    /// Selected generations.
    pub selected: Vec<Generation>,
    /// Number of filtered entries, plotted or skipped.
    pub count: usize,
    /// Advisory when no generation was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// The plot itself.
    pub plot: ScatterPlot,
}

/// Artwork response.
#[derive(Debug, Serialize)]
pub struct ArtworkResponse {
    /// Pokédex number.
    pub pokedex_number: u32,
    /// Entry name.
    pub name: String,
    /// Image URL (not checked for existence).
    pub artwork_url: String,
}

/// Configuration response.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// Configured dataset source.
    pub source: String,
    /// Fetch timeout in seconds.
    pub timeout_secs: u64,
    /// Theme mode of the terminal dashboard.
    pub theme: String,
}

// ============================================================================
// Helpers
// ============================================================================

/// Loads (or reuses) the dataset without blocking the runtime.
async fn load_dataset(state: &AppState) -> Result<Arc<Dataset>, (StatusCode, Json<ApiError>)> {
    let cache = Arc::clone(&state.cache);
    let loaded = tokio::task::spawn_blocking(move || cache.get_or_load())
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details("Dataset loader failed", e.to_string())),
            )
        })?;
    Ok(loaded?)
}

fn parse_selection(gens: Option<&str>) -> Result<GenerationSelection, (StatusCode, Json<ApiError>)> {
    match gens {
        None => Ok(GenerationSelection::all()),
        Some(list) => GenerationSelection::parse_list(list)
            .map_err(|e| bad_request("Invalid generation list", e.to_string())),
    }
}

fn parse_attribute(
    value: Option<&str>,
    default: Attribute,
) -> Result<Attribute, (StatusCode, Json<ApiError>)> {
    value.map_or(Ok(default), |v| {
        v.parse::<Attribute>()
            .map_err(|e| bad_request("Invalid attribute", e.to_string()))
    })
}

fn warning_for(selection: GenerationSelection) -> Option<String> {
    selection
        .is_empty()
        .then(|| FilterWarning::NoGenerationSelected.to_string())
}

fn default_ref(dataset: &Dataset, position: usize) -> Option<EntryRef> {
    dataset
        .get(position)
        .or_else(|| dataset.entries().last())
        .map(|e| EntryRef::Number(e.pokedex_number))
}

fn entry_ref_or_default(
    value: Option<&str>,
    dataset: &Dataset,
    position: usize,
) -> Result<EntryRef, (StatusCode, Json<ApiError>)> {
    match value {
        Some(v) => Ok(v.parse::<EntryRef>().unwrap_or_else(|never| match never {})),
        None => default_ref(dataset, position).ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new("The dataset has no entries to compare")),
            )
        }),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/dataset - The renamed table.
async fn get_dataset(
    State(state): State<AppState>,
    Query(query): Query<DatasetQuery>,
) -> ApiResult<DatasetResponse> {
    let dataset = load_dataset(&state).await?;
    let records = dataset.records();
    let shown = query.limit.unwrap_or(records.len()).min(records.len());

    Ok(Json(DatasetResponse {
        source: dataset.source().to_string(),
        fingerprint: dataset.fingerprint().to_string(),
        loaded_at: dataset.loaded_at(),
        total: dataset.len(),
        columns: dataset.columns().to_vec(),
        rows: records[..shown].to_vec(),
    }))
}

/// GET /api/entries - Typed entries of the selected generations.
async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<GenerationQuery>,
) -> ApiResult<EntriesResponse> {
    let selection = parse_selection(query.gens.as_deref())?;
    let dataset = load_dataset(&state).await?;
    let filtered = filter_by_generation(&dataset, selection);

    Ok(Json(EntriesResponse {
        selected: selection.selected().collect(),
        warning: filtered.warning().map(|w| w.to_string()),
        entries: filtered.entries().iter().map(|e| (*e).clone()).collect(),
    }))
}

/// GET /api/columns - Attributes and column renames.
async fn list_columns() -> Json<ColumnsResponse> {
    Json(ColumnsResponse {
        attributes: Attribute::ALL
            .iter()
            .map(|a| AttributeInfo {
                id: *a,
                label: a.label(),
            })
            .collect(),
        renames: column_renames(),
    })
}

/// GET /api/types - Type distribution of the selected generations.
async fn get_types(
    State(state): State<AppState>,
    Query(query): Query<GenerationQuery>,
) -> ApiResult<TypesResponse> {
    let selection = parse_selection(query.gens.as_deref())?;
    let dataset = load_dataset(&state).await?;

    let key = (dataset.fingerprint().to_string(), selection);
    let distribution = state.distributions.get_or_insert_with(key, || {
        debug!(?selection, "computing type distribution");
        aggregate_types(filter_by_generation(&dataset, selection).entries().iter().copied())
    });

    Ok(Json(TypesResponse {
        selected: selection.selected().collect(),
        count: distribution.total(),
        warning: warning_for(selection),
        rows: distribution.rows().to_vec(),
        colors: distribution.colors(),
    }))
}

/// GET /api/scatter - Scatter series for two attributes.
async fn get_scatter(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> ApiResult<ScatterResponse> {
    let x = parse_attribute(query.x.as_deref(), Attribute::ALL[0])?;
    let y = parse_attribute(query.y.as_deref(), Attribute::ALL[1])?;
    let selection = parse_selection(query.gens.as_deref())?;
    let dataset = load_dataset(&state).await?;

    let key = (dataset.fingerprint().to_string(), selection, x, y);
    let plot = state.scatters.get_or_insert_with(key, || {
        debug!(?selection, %x, %y, "computing scatter plot");
        build_scatter(
            filter_by_generation(&dataset, selection).entries().iter().copied(),
            x,
            y,
        )
    });

    Ok(Json(ScatterResponse {
        selected: selection.selected().collect(),
        count: plot.entry_count(),
        warning: warning_for(selection),
        plot: (*plot).clone(),
    }))
}

/// GET /api/compare - Two entries side by side.
async fn get_compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> ApiResult<Comparison> {
    let dataset = load_dataset(&state).await?;
    let first = entry_ref_or_default(query.first.as_deref(), &dataset, 0)?;
    let second = entry_ref_or_default(query.second.as_deref(), &dataset, 3)?;

    Ok(Json(compare(&dataset, &first, &second, &Attribute::ALL)?))
}

/// GET /api/entries/{ref}/artwork - Artwork URL of one entry.
async fn get_artwork(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> ApiResult<ArtworkResponse> {
    let entry_ref = reference
        .parse::<EntryRef>()
        .unwrap_or_else(|never| match never {});
    let dataset = load_dataset(&state).await?;
    let entry = resolve(&dataset, &entry_ref)?;

    Ok(Json(ArtworkResponse {
        pokedex_number: entry.pokedex_number,
        name: entry.name.clone(),
        artwork_url: crate::services::artwork_url(entry.pokedex_number),
    }))
}

/// GET /api/config - Get current configuration.
async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        source: state.config.data.source.clone(),
        timeout_secs: state.config.data.timeout_secs,
        theme: state.config.ui.theme_mode.as_str().to_string(),
    })
}

// ============================================================================
// Router
// ============================================================================

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    // The server is read-only and meant to run next to a local frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/dataset", get(get_dataset))
        .route("/api/entries", get(list_entries))
        .route("/api/entries/{reference}/artwork", get(get_artwork))
        .route("/api/columns", get(list_columns))
        .route("/api/types", get(get_types))
        .route("/api/scatter", get(get_scatter))
        .route("/api/compare", get(get_compare))
        .route("/api/config", get(get_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config);
    info!(source = %state.cache.source(), "serving dataset");
    let app = create_router(state);

    info!("Starting PokéDash web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
