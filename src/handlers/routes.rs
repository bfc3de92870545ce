use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::config::CONFIG;
use crate::creators::pipeline::{description_text, ArtifactCreator};
use crate::creators::settings::{ArtifactBrief, PortraitSettings, SculptureSettings};
use crate::llm::LlmError;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Deserialize)]
struct ReflectionRequest {
    #[serde(default)]
    concept: String,
    #[serde(default)]
    elements: Value,
}

#[derive(Debug, Deserialize)]
struct PromptsRequest {
    elements: Value,
}

pub struct ApiError(LlmError);

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Pipeline stage failed: {}", self.0);
        let body = Json(json!({ "error": self.0.to_string() }));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

fn cors_layer() -> CorsLayer {
    let origin = CONFIG
        .allowed_origin
        .parse::<HeaderValue>()
        .expect("ALLOWED_ORIGIN is not a valid header value");
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

pub fn router(portrait: ArtifactCreator, sculpture: ArtifactCreator) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/portrait", artifact_router::<PortraitSettings>(portrait))
        .nest(
            "/api/sculpture",
            artifact_router::<SculptureSettings>(sculpture),
        )
        .layer(cors_layer())
}

fn artifact_router<S>(creator: ArtifactCreator) -> Router
where
    S: DeserializeOwned + Into<ArtifactBrief> + Send + 'static,
{
    Router::new()
        .route("/elements", post(generate_elements::<S>))
        .route("/reflection", post(reflect))
        .route("/prompts", post(finalize_prompts))
        .route("/generate", post(generate::<S>))
        .with_state(creator)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn generate_elements<S>(
    State(creator): State<ArtifactCreator>,
    Json(settings): Json<S>,
) -> Result<Json<Value>, ApiError>
where
    S: DeserializeOwned + Into<ArtifactBrief> + Send + 'static,
{
    let brief: ArtifactBrief = settings.into();
    info!(
        "Received {} elements request for concept: {}",
        creator.name(),
        brief.concept
    );
    let elements = creator.generate_elements(&brief).await?;
    Ok(Json(json!({ "elements": elements })))
}

async fn reflect(
    State(creator): State<ArtifactCreator>,
    Json(request): Json<ReflectionRequest>,
) -> Result<Json<Value>, ApiError> {
    info!("Received {} reflection request", creator.name());
    let elements = description_text(&request.elements);
    let reflection = creator.reflect(&request.concept, &elements).await?;
    Ok(Json(json!({ "reflection": reflection })))
}

async fn finalize_prompts(
    State(creator): State<ArtifactCreator>,
    Json(request): Json<PromptsRequest>,
) -> Result<Json<Value>, ApiError> {
    info!("Received {} prompts request", creator.name());
    let description = description_text(&request.elements);
    let prompts = creator.finalize_prompts(&description).await?;
    Ok(Json(json!({ "prompts": prompts })))
}

async fn generate<S>(
    State(creator): State<ArtifactCreator>,
    Json(settings): Json<S>,
) -> Result<Json<Value>, ApiError>
where
    S: DeserializeOwned + Into<ArtifactBrief> + Send + 'static,
{
    let brief: ArtifactBrief = settings.into();
    info!(
        "Received chained {} generation request for concept: {}",
        creator.name(),
        brief.concept
    );
    let prompts = creator.generate(&brief).await?;
    Ok(Json(json!({ "prompts": prompts })))
}
