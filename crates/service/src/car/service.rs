use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::domain::{Car, CarFilter, NewCar};
use super::repository::CarRepository;
use crate::errors::ServiceError;

/// Create use case: persist an already validated car.
#[async_trait]
pub trait CreateCar: Send + Sync {
    async fn execute(&self, input: NewCar) -> Result<Car, ServiceError>;
}

/// Find use case: list cars matching an optional filter.
#[async_trait]
pub trait FindCars: Send + Sync {
    async fn execute(&self, filter: CarFilter) -> Result<Vec<Car>, ServiceError>;
}

/// FindOne use case: look a car up by id; absence is `Ok(None)`.
#[async_trait]
pub trait FindOneCar: Send + Sync {
    async fn execute(&self, id: i32) -> Result<Option<Car>, ServiceError>;
}

pub struct CreateCarService<R: CarRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CarRepository + ?Sized> CreateCarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: CarRepository + ?Sized> CreateCar for CreateCarService<R> {
    /// No plate-format or duplicate checks happen here; input arrives
    /// already checked for presence.
    #[instrument(skip(self, input), fields(placa = %input.placa))]
    async fn execute(&self, input: NewCar) -> Result<Car, ServiceError> {
        let car = self.repo.create(input).await?;
        info!(id = car.id, marca = %car.marca, "car_created");
        Ok(car)
    }
}

pub struct FindCarService<R: CarRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CarRepository + ?Sized> FindCarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: CarRepository + ?Sized> FindCars for FindCarService<R> {
    #[instrument(skip(self, filter), fields(cor = ?filter.cor, marca = ?filter.marca))]
    async fn execute(&self, filter: CarFilter) -> Result<Vec<Car>, ServiceError> {
        let cars = self.repo.find(&filter).await?;
        debug!(count = cars.len(), "cars_found");
        Ok(cars)
    }
}

pub struct FindOneCarService<R: CarRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CarRepository + ?Sized> FindOneCarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: CarRepository + ?Sized> FindOneCar for FindOneCarService<R> {
    #[instrument(skip(self))]
    async fn execute(&self, id: i32) -> Result<Option<Car>, ServiceError> {
        let found = self.repo.find_one(id).await?;
        debug!(found = found.is_some(), "car_lookup");
        Ok(found)
    }
}
