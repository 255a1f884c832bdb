use crate::car;
use crate::db::connect_in_memory;
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_car_create_assigns_sequential_ids() -> Result<()> {
    let db = setup_test_db().await?;

    let first = car::create(&db, "Honda", "azul", "ABC1D12").await?;
    let second = car::create(&db, "Fiat", "Preto", "SBC1D12").await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.marca, "Honda");
    assert_eq!(first.cor, "azul");
    assert_eq!(first.placa, "ABC1D12");
    assert_eq!(car::Entity::find().count(&db).await?, 2);
    Ok(())
}

#[tokio::test]
async fn test_car_find_by_id() -> Result<()> {
    let db = setup_test_db().await?;
    let created = car::create(&db, "Honda", "azul", "ABC1D12").await?;

    let found = car::find_by_id(&db, created.id).await?;
    assert_eq!(found, Some(created));

    let missing = car::find_by_id(&db, 16).await?;
    assert!(missing.is_none());
    Ok(())
}

#[tokio::test]
async fn test_migration_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    car::create(&db, "VW", "branco", "XYZ9K88").await?;

    // Re-running keeps existing rows
    migration::Migrator::up(&db, None).await?;
    assert_eq!(car::Entity::find().count(&db).await?, 1);
    Ok(())
}
