use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// A card on a board. `category` holds a workflow token written through
/// [`crate::workflow::Category::as_str`]; the column itself is unconstrained.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "elements")]
pub struct Model {
    #[sea_orm(indexed)]
    pub board_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(512))")]
    pub description: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub category: String,
    #[sea_orm(belongs_to, from = "board_id", to = "id", on_delete = "Cascade")]
    pub board: HasOne<super::board::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
