//! Service layer for the car registry.
//! - `car::repository` isolates persistence behind the `CarRepository` capability.
//! - `car::service` holds one service per use case (create, find, find one).
//! - Services receive their repository through the constructor.

pub mod errors;
pub mod car;
#[cfg(test)]
pub mod test_support;
