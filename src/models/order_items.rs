use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product category, stored as its Spanish wire string in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum Categoria {
    #[sea_orm(string_value = "alcohol")]
    Alcohol,
    #[sea_orm(string_value = "cervezas")]
    Cervezas,
    #[sea_orm(string_value = "bebida")]
    Bebida,
    #[sea_orm(string_value = "congelador")]
    Congelador,
    #[sea_orm(string_value = "hielo")]
    Hielo,
    #[sea_orm(string_value = "altavoces")]
    Altavoces,
    #[sea_orm(string_value = "pack_limpieza")]
    PackLimpieza,
    #[sea_orm(string_value = "pack_menaje")]
    PackMenaje,
    #[sea_orm(string_value = "vasos")]
    Vasos,
}

/// SeaORM entity for the `order_items` table.
///
/// Items are written in a batch alongside their order and never mutated or
/// deleted afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub order_id: String,
    pub nombre: String,
    pub unidades: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub precio: Option<f64>,
    pub categoria: Categoria,
    pub fecha_creacion: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::Id"
    )]
    Order,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
