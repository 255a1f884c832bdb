use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::car::domain::{Car, CarFilter, NewCar};
use crate::car::repository::CarRepository;
use crate::errors::ServiceError;

#[derive(Default)]
struct Inner {
    cars: Vec<Car>,
    last_id: i32,
}

/// Process-local repository; ids start at 1 and rows are kept in insertion order.
#[derive(Default)]
pub struct InMemoryCarRepository {
    inner: RwLock<Inner>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated repository, ids assigned in the order given.
    pub fn with_cars(seed: impl IntoIterator<Item = NewCar>) -> Self {
        let mut inner = Inner::default();
        for c in seed {
            inner.last_id += 1;
            inner.cars.push(Car { id: inner.last_id, marca: c.marca, cor: c.cor, placa: c.placa });
        }
        Self { inner: RwLock::new(inner) }
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.cars.len()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, input: NewCar) -> Result<Car, ServiceError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Repository("car id space exhausted".into()))?;
        let car = Car { id, marca: input.marca, cor: input.cor, placa: input.placa };
        inner.last_id = id;
        inner.cars.push(car.clone());
        Ok(car)
    }

    async fn find(&self, filter: &CarFilter) -> Result<Vec<Car>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.cars.iter().filter(|c| filter.matches(c)).cloned().collect())
    }

    async fn find_one(&self, id: i32) -> Result<Option<Car>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.cars.iter().find(|c| c.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_car(marca: &str, cor: &str, placa: &str) -> NewCar {
        NewCar { marca: marca.into(), cor: cor.into(), placa: placa.into() }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryCarRepository::new();
        let a = repo.create(new_car("Honda", "azul", "ABC1D12")).await.unwrap();
        let b = repo.create(new_car("Fiat", "Preto", "SBC1D12")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn find_keeps_insertion_order() {
        let repo = InMemoryCarRepository::with_cars([
            new_car("Honda", "azul", "ABC1D12"),
            new_car("Fiat", "Preto", "SBC1D12"),
            new_car("Fiat", "azul", "QWE4R56"),
        ]);
        let all = repo.find(&CarFilter::default()).await.unwrap();
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let fiats = repo.find(&CarFilter::new(None, Some("FIAT".into()))).await.unwrap();
        assert_eq!(fiats.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[tokio::test]
    async fn find_one_reports_absence() {
        let repo = InMemoryCarRepository::with_cars([new_car("Honda", "azul", "ABC1D12")]);
        assert_eq!(repo.find_one(1).await.unwrap().map(|c| c.marca), Some("Honda".to_string()));
        assert!(repo.find_one(16).await.unwrap().is_none());
    }
}
