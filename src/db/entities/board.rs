use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "boards")]
pub struct Model {
    #[sea_orm(column_type = "String(StringLen::N(80))")]
    pub title: String,
    #[sea_orm(has_many)]
    pub elements: HasMany<super::element::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
