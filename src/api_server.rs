// Farm Advisor API Server Module
//
// Purpose: one JSON endpoint per deriver (soil score, farm plan, crop browser,
// market trend, mock diagnosis, contact form)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::crops::{crop_catalog, find_crop, CropFilters, CropProfile};
use crate::diagnosis::{diagnose, DiagnosisRecord};
use crate::error::FarmError;
use crate::inquiry::{validate_inquiry, Inquiry, InquiryReceipt};
use crate::market::{project, MarketInsight, PriceSeries, TimeRange};
use crate::planner::{plan, FarmPlanRequest, FarmPlanResult};
use crate::soil::{score, SoilReading, SoilScoreResult};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Per-request RNG: fixed seed when configured, entropy otherwise
    fn rng(&self) -> StdRng {
        match self.config.diagnosis_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Calculators
        .route("/api/soil/score", post(score_soil))
        .route("/api/farm/plan", post(plan_farm))

        // Crop browser
        .route("/api/crops", get(list_crops))
        .route("/api/crops/:id", get(get_crop))

        // Market trend (canned data)
        .route("/api/market/:crop", get(market_trend))

        // Mock diagnosis
        .route("/api/diagnosis", post(run_diagnosis))

        // Contact form
        .route("/api/contact", post(submit_inquiry))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn score_soil(Json(reading): Json<SoilReading>) -> Json<SoilScoreResult> {
    tracing::debug!("Scoring {} soil reading", reading.soil_type);
    Json(score(&reading))
}

async fn plan_farm(
    Json(request): Json<FarmPlanRequest>,
) -> Result<Json<FarmPlanResult>, AppError> {
    tracing::info!(
        "Planning {} acres of {} on {} soil",
        request.farm_size_acres,
        request.crop,
        request.soil_type
    );
    let result = plan(&request)?;
    Ok(Json(result))
}

async fn list_crops(Query(filters): Query<CropFilters>) -> Json<serde_json::Value> {
    let crops = filters.apply(crop_catalog());
    Json(serde_json::json!({
        "rows": crops.len(),
        "data": crops,
    }))
}

async fn get_crop(Path(id): Path<u32>) -> Result<Json<CropProfile>, AppError> {
    find_crop(crop_catalog(), id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Crop {} not found", id)))
}

#[derive(Debug, serde::Deserialize)]
struct MarketQuery {
    range: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct MarketResponse {
    series: PriceSeries,
    insight: Option<MarketInsight>,
}

async fn market_trend(
    State(state): State<AppState>,
    Path(crop): Path<String>,
    Query(params): Query<MarketQuery>,
) -> Json<MarketResponse> {
    let range = params
        .range
        .as_deref()
        .map(TimeRange::from_key)
        .unwrap_or(TimeRange::OneYear);

    let series = project(range);
    let insight = MarketInsight::build(&crop, &series, &mut state.rng());

    Json(MarketResponse { series, insight })
}

async fn run_diagnosis(State(state): State<AppState>) -> Json<DiagnosisRecord> {
    Json(diagnose(&mut state.rng()))
}

async fn submit_inquiry(
    Json(inquiry): Json<Inquiry>,
) -> Result<Json<InquiryReceipt>, AppError> {
    let receipt = validate_inquiry(&inquiry)?;
    Ok(Json(receipt))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<FarmError> for AppError {
    fn from(err: FarmError) -> Self {
        match err {
            FarmError::InvalidInput(msg) => AppError::BadRequest(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
