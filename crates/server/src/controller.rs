//! HTTP-facing orchestration for the car resource.
//!
//! The controller checks the shape of incoming input, hands it to the
//! matching use case, and turns the outcome into a status code and JSON
//! body. It never talks to storage itself.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use models::car::require_present;
use service::car::{
    Car, CarFilter, CarRepository, CreateCar, CreateCarService, FindCarService, FindCars, FindOneCar,
    FindOneCarService, NewCar,
};

use crate::errors::ApiError;

/// Body of `POST /cars`. Every field is optional at the wire level so
/// that a missing field surfaces as a validation error, not a parse error.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateCarBody {
    pub marca: Option<String>,
    pub cor: Option<String>,
    pub placa: Option<String>,
}

/// Body of `GET /cars`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FindCarsBody {
    pub cor: Option<String>,
    pub marca: Option<String>,
}

/// `{}` on the wire.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct Empty {}

/// Result of `GET /cars/:id`: the car, or an empty object when no car has
/// that id.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FindOneOutcome {
    Found(Car),
    Missing(Empty),
}

impl From<Option<Car>> for FindOneOutcome {
    fn from(found: Option<Car>) -> Self {
        match found {
            Some(car) => FindOneOutcome::Found(car),
            None => FindOneOutcome::Missing(Empty {}),
        }
    }
}

pub struct CarController {
    create_car: Arc<dyn CreateCar>,
    find_cars: Arc<dyn FindCars>,
    find_one_car: Arc<dyn FindOneCar>,
}

impl CarController {
    pub fn new(create_car: Arc<dyn CreateCar>, find_cars: Arc<dyn FindCars>, find_one_car: Arc<dyn FindOneCar>) -> Self {
        Self { create_car, find_cars, find_one_car }
    }

    /// Wire the default services around one shared repository.
    pub fn from_repository(repo: Arc<dyn CarRepository>) -> Self {
        Self::new(
            Arc::new(CreateCarService::new(Arc::clone(&repo))),
            Arc::new(FindCarService::new(Arc::clone(&repo))),
            Arc::new(FindOneCarService::new(repo)),
        )
    }

    pub async fn create(&self, body: Option<CreateCarBody>) -> Result<(StatusCode, Json<Car>), ApiError> {
        let body = body.ok_or_else(|| reject("create", "request body is required".into()))?;
        let input = validate_new_car(&body).map_err(|msg| reject("create", msg))?;

        let car = self.create_car.execute(input).await?;
        info!(id = car.id, "car created");
        Ok((StatusCode::CREATED, Json(car)))
    }

    pub async fn find(&self, body: Option<FindCarsBody>) -> Result<(StatusCode, Json<Vec<Car>>), ApiError> {
        let body = body.ok_or_else(|| reject("find", "request body is required".into()))?;

        let cars = self.find_cars.execute(CarFilter::new(body.cor, body.marca)).await?;
        info!(count = cars.len(), "cars listed");
        Ok((StatusCode::OK, Json(cars)))
    }

    pub async fn find_one(&self, params: &HashMap<String, String>) -> Result<(StatusCode, Json<FindOneOutcome>), ApiError> {
        let raw = require_present("id", params.get("id").map(String::as_str)).map_err(|e| reject("find_one", e.to_string()))?;
        let id = raw
            .parse::<i32>()
            .map_err(|_| reject("find_one", format!("id must be an integer, got {raw:?}")))?;

        let found = self.find_one_car.execute(id).await?;
        Ok((StatusCode::OK, Json(found.into())))
    }
}

/// Check each required field on its own, reporting all that are missing.
fn validate_new_car(body: &CreateCarBody) -> Result<NewCar, String> {
    let marca = require_present("marca", body.marca.as_deref());
    let cor = require_present("cor", body.cor.as_deref());
    let placa = require_present("placa", body.placa.as_deref());
    match (marca, cor, placa) {
        (Ok(marca), Ok(cor), Ok(placa)) => Ok(NewCar { marca: marca.to_string(), cor: cor.to_string(), placa: placa.to_string() }),
        (marca, cor, placa) => {
            let missing: Vec<String> = [marca.err(), cor.err(), placa.err()]
                .into_iter()
                .flatten()
                .map(|e| e.to_string())
                .collect();
            Err(missing.join("; "))
        }
    }
}

fn reject(op: &'static str, msg: String) -> ApiError {
    warn!(op, reason = %msg, "request rejected");
    ApiError::Validation(msg)
}
