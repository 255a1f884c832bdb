use sea_orm::{entity::prelude::*, Set, ActiveModelTrait, ConnectionTrait, EntityTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub marca: String,
    pub cor: String,
    pub placa: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Returns the value of a required text field, rejecting
/// `None` and the empty string alike.
pub fn require_present<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, errors::ModelError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(errors::ModelError::Validation(format!("{field} is required"))),
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    marca: &str,
    cor: &str,
    placa: &str,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        marca: Set(marca.to_string()),
        cor: Set(cor.to_string()),
        placa: Set(placa.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
