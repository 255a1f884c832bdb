use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::car::CarRepository;

use crate::controller::CarController;
use crate::openapi::ApiDoc;

pub mod cars;

#[derive(Clone)]
pub struct ServerState {
    pub cars: Arc<CarController>,
}

impl ServerState {
    pub fn new(cars: CarController) -> Self {
        Self { cars: Arc::new(cars) }
    }

    /// State whose controller runs the default services over `repo`.
    pub fn from_repository(repo: Arc<dyn CarRepository>) -> Self {
        Self::new(CarController::from_repository(repo))
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, car routes and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/cars", get(cars::find).post(cars::create))
        .route("/cars/:id", get(cars::find_one))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and connection failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
