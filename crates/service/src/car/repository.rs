use async_trait::async_trait;

use super::domain::{Car, CarFilter, NewCar};
use crate::errors::ServiceError;

/// Persistence gateway for car records.
///
/// `find` must honor `CarFilter` semantics and return cars in ascending
/// `id` order; `find_one` reports an unknown id as `Ok(None)`.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn create(&self, input: NewCar) -> Result<Car, ServiceError>;
    async fn find(&self, filter: &CarFilter) -> Result<Vec<Car>, ServiceError>;
    async fn find_one(&self, id: i32) -> Result<Option<Car>, ServiceError>;
}
