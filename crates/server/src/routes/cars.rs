use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use service::car::Car;

use crate::controller::{CreateCarBody, FindCarsBody, FindOneOutcome};
use crate::errors::ApiError;
use crate::routes::ServerState;

// A body that is missing, has the wrong content type, or is not valid JSON
// arrives here as `None`.

#[utoipa::path(
    post, path = "/cars", tag = "cars",
    request_body = crate::openapi::CreateCarBodyDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CarDoc),
        (status = 400, description = "Missing marca, cor or placa")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Option<Json<CreateCarBody>>,
) -> Result<(StatusCode, Json<Car>), ApiError> {
    state.cars.create(body.map(|Json(b)| b)).await
}

#[utoipa::path(
    get, path = "/cars", tag = "cars",
    request_body = crate::openapi::FindCarsBodyDoc,
    responses(
        (status = 200, description = "Matching cars", body = [crate::openapi::CarDoc]),
        (status = 400, description = "Request body absent")
    )
)]
pub async fn find(
    State(state): State<ServerState>,
    body: Option<Json<FindCarsBody>>,
) -> Result<(StatusCode, Json<Vec<Car>>), ApiError> {
    state.cars.find(body.map(|Json(b)| b)).await
}

#[utoipa::path(
    get, path = "/cars/{id}", tag = "cars",
    params(("id" = i32, Path, description = "Car ID")),
    responses(
        (status = 200, description = "The car, or {} when no car has this id", body = crate::openapi::CarDoc),
        (status = 400, description = "Missing or non-numeric id")
    )
)]
pub async fn find_one(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<(StatusCode, Json<FindOneOutcome>), ApiError> {
    state.cars.find_one(&params).await
}
