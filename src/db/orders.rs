use std::collections::HashMap;

use sea_orm::*;

use crate::db::ids::generate_id;
use crate::models::order_items;
use crate::models::orders::{self, CreateOrder, Estado};
use crate::pricing;

/// A zero price collapses to NULL at creation: the stored row cannot tell
/// "free item" apart from "unpriced item", so only positive prices survive.
fn normalize_precio(precio: Option<f64>) -> Option<f64> {
    precio.filter(|p| *p > 0.0)
}

/// Insert a new order and its line items in a single transaction.
///
/// Generates the order id and one id per item, computes the estimated total,
/// sets the status to `pendiente` and stamps both timestamps to now. Either
/// both writes land or neither does.
pub async fn insert_order(
    db: &DatabaseConnection,
    input: CreateOrder,
) -> Result<(String, Option<f64>), DbErr> {
    let order_id = generate_id();
    let now = chrono::Utc::now();
    let total_estimado = pricing::estimated_total(&input.objetos_pedido);

    let new_order = orders::ActiveModel {
        id: Set(order_id.clone()),
        nombre_completo: Set(input.nombre_completo),
        nombre_penya: Set(input.nombre_penya),
        direccion: Set(input.direccion),
        correo_electronico: Set(input.correo_electronico),
        numero_telefono: Set(input.numero_telefono),
        segundo_numero_telefono: Set(input.segundo_numero_telefono),
        estado: Set(Estado::Pendiente),
        total_estimado: Set(total_estimado),
        comentarios: Set(input.comentarios),
        fecha_creacion: Set(now),
        fecha_actualizacion: Set(now),
    };

    let new_items: Vec<order_items::ActiveModel> = input
        .objetos_pedido
        .into_iter()
        .map(|item| order_items::ActiveModel {
            id: Set(generate_id()),
            order_id: Set(order_id.clone()),
            nombre: Set(item.nombre),
            unidades: Set(item.unidades),
            precio: Set(normalize_precio(item.precio)),
            categoria: Set(item.categoria),
            fecha_creacion: Set(now),
        })
        .collect();

    let txn = db.begin().await?;
    new_order.insert(&txn).await?;
    order_items::Entity::insert_many(new_items).exec(&txn).await?;
    txn.commit().await?;

    Ok((order_id, total_estimado))
}

/// Fetch a single order plus all its items. A malformed id behaves the same
/// as a missing one: `None`.
pub async fn get_order_with_items(
    db: &DatabaseConnection,
    order_id: &str,
) -> Result<Option<(orders::Model, Vec<order_items::Model>)>, DbErr> {
    let order = match orders::Entity::find_by_id(order_id).one(db).await? {
        Some(order) => order,
        None => return Ok(None),
    };

    let items = order_items::Entity::find()
        .filter(order_items::Column::OrderId.eq(order_id))
        .all(db)
        .await?;

    Ok(Some((order, items)))
}

/// Fetch all orders, oldest first.
pub async fn get_all_orders(db: &DatabaseConnection) -> Result<Vec<orders::Model>, DbErr> {
    orders::Entity::find()
        .order_by_asc(orders::Column::FechaCreacion)
        .all(db)
        .await
}

/// Fetch all orders plus every item, grouped by owning order id. Orders with
/// no items simply have no entry in the map.
pub async fn get_all_orders_with_items(
    db: &DatabaseConnection,
) -> Result<(Vec<orders::Model>, HashMap<String, Vec<order_items::Model>>), DbErr> {
    let all_orders = get_all_orders(db).await?;
    let all_items = order_items::Entity::find().all(db).await?;

    let mut items_by_order_id: HashMap<String, Vec<order_items::Model>> = HashMap::new();
    for item in all_items {
        items_by_order_id
            .entry(item.order_id.clone())
            .or_default()
            .push(item);
    }

    Ok((all_orders, items_by_order_id))
}

/// Overwrite the status and the update timestamp. Any status value may be
/// written over any other. Returns `None` when no row matched the id; the
/// handler decides whether that is an error (see `AppConfig::strict_status_updates`).
pub async fn update_order_status(
    db: &DatabaseConnection,
    order_id: &str,
    new_status: Estado,
) -> Result<Option<orders::Model>, DbErr> {
    let order = match orders::Entity::find_by_id(order_id).one(db).await? {
        Some(order) => order,
        None => return Ok(None),
    };

    let mut active: orders::ActiveModel = order.into();
    active.estado = Set(new_status);
    active.fecha_actualizacion = Set(chrono::Utc::now());

    active.update(db).await.map(Some)
}
