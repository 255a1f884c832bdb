//! Car module: domain types, repository capability with its storage
//! backends, and the use-case services built on top of it.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Car, CarFilter, NewCar};
pub use repository::CarRepository;
pub use service::{CreateCar, CreateCarService, FindCarService, FindCars, FindOneCar, FindOneCarService};
