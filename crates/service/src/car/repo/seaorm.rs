use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};

use models::car;

use crate::car::domain::{Car, CarFilter, NewCar};
use crate::car::repository::CarRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCarRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCarRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `LOWER(column) = lower(value)`. SQLite's `LOWER` folds ASCII only, so
/// this is only pushed down to backends that fold Unicode.
fn eq_ignore_case(finder: Select<car::Entity>, column: car::Column, value: &str) -> Select<car::Entity> {
    finder.filter(Expr::expr(Func::lower(Expr::col(column))).eq(value.to_lowercase()))
}

#[async_trait]
impl CarRepository for SeaOrmCarRepository {
    async fn create(&self, input: NewCar) -> Result<Car, ServiceError> {
        let created = car::create(&self.db, &input.marca, &input.cor, &input.placa).await?;
        Ok(created)
    }

    async fn find(&self, filter: &CarFilter) -> Result<Vec<Car>, ServiceError> {
        let mut finder = car::Entity::find();
        let push_down = !filter.is_empty() && self.db.get_database_backend() == DatabaseBackend::Postgres;
        if push_down {
            if let Some(cor) = filter.cor.as_deref() { finder = eq_ignore_case(finder, car::Column::Cor, cor); }
            if let Some(marca) = filter.marca.as_deref() { finder = eq_ignore_case(finder, car::Column::Marca, marca); }
        }
        let mut rows = finder
            .order_by_asc(car::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        // SQL only narrows; CarFilter decides
        if !filter.is_empty() {
            rows.retain(|c| filter.matches(c));
        }
        Ok(rows)
    }

    async fn find_one(&self, id: i32) -> Result<Option<Car>, ServiceError> {
        let found = car::find_by_id(&self.db, id).await?;
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    async fn seeded() -> Result<SeaOrmCarRepository, anyhow::Error> {
        let repo = SeaOrmCarRepository::new(get_db().await?);
        for (marca, cor, placa) in [("Honda", "azul", "ABC1D12"), ("Fiat", "Preto", "SBC1D12"), ("fiat", "AZUL", "QWE4R56")] {
            repo.create(NewCar { marca: marca.into(), cor: cor.into(), placa: placa.into() }).await?;
        }
        Ok(repo)
    }

    #[tokio::test]
    async fn create_returns_stored_row() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCarRepository::new(get_db().await?);
        let c = repo.create(NewCar { marca: "Honda".into(), cor: "azul".into(), placa: "ABC1D12".into() }).await?;
        assert_eq!(c, Car { id: 1, marca: "Honda".into(), cor: "azul".into(), placa: "ABC1D12".into() });
        Ok(())
    }

    #[tokio::test]
    async fn find_without_filter_returns_all_in_id_order() -> Result<(), anyhow::Error> {
        let repo = seeded().await?;
        let all = repo.find(&CarFilter::default()).await?;
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn find_by_color_ignores_case() -> Result<(), anyhow::Error> {
        let repo = seeded().await?;
        let pretos = repo.find(&CarFilter::new(Some("preto".into()), None)).await?;
        assert_eq!(pretos.len(), 1);
        assert_eq!(pretos[0].cor, "Preto");
        Ok(())
    }

    #[tokio::test]
    async fn find_with_both_fields_is_conjunctive() -> Result<(), anyhow::Error> {
        let repo = seeded().await?;
        let rows = repo.find(&CarFilter::new(Some("azul".into()), Some("FIAT".into()))).await?;
        assert_eq!(rows.iter().map(|c| c.placa.as_str()).collect::<Vec<_>>(), vec!["QWE4R56"]);

        let none = repo.find(&CarFilter::new(Some("verde".into()), Some("fiat".into()))).await?;
        assert!(none.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn find_folds_accented_letters_like_the_in_memory_store() -> Result<(), anyhow::Error> {
        let repo = SeaOrmCarRepository::new(get_db().await?);
        repo.create(NewCar { marca: "Citroën".into(), cor: "Âmbar".into(), placa: "CTR1A23".into() }).await?;
        repo.create(NewCar { marca: "Honda".into(), cor: "azul".into(), placa: "ABC1D12".into() }).await?;

        let by_color = repo.find(&CarFilter::new(Some("âmbar".into()), None)).await?;
        assert_eq!(by_color.iter().map(|c| c.placa.as_str()).collect::<Vec<_>>(), vec!["CTR1A23"]);

        let by_brand = repo.find(&CarFilter::new(None, Some("CITROËN".into()))).await?;
        assert_eq!(by_brand.len(), 1);

        let memory = crate::car::repo::memory::InMemoryCarRepository::with_cars([
            NewCar { marca: "Citroën".into(), cor: "Âmbar".into(), placa: "CTR1A23".into() },
        ]);
        let filter = CarFilter::new(Some("âmbar".into()), Some("citroën".into()));
        assert_eq!(repo.find(&filter).await?.len(), memory.find(&filter).await?.len());
        Ok(())
    }

    #[tokio::test]
    async fn find_one_hit_and_miss() -> Result<(), anyhow::Error> {
        let repo = seeded().await?;
        assert_eq!(repo.find_one(2).await?.map(|c| c.marca), Some("Fiat".to_string()));
        assert!(repo.find_one(16).await?.is_none());
        Ok(())
    }
}
