use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use validator::Validate;

use crate::admin::{self, SortDirection};
use crate::auth::middleware::AdminUser;
use crate::config::AppConfig;
use crate::db::orders as order_db;
use crate::export;
use crate::models::orders::{CreateOrder, UpdateOrderStatus, validation_message};
use crate::notify::{self, OrderNotification};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// POST /api/orders — public quote submission from the website form.
///
/// Validates, persists order + items atomically, then fires the WhatsApp
/// notification without awaiting it: the response is already determined
/// before the send is attempted.
pub async fn create_order(
    config: web::Data<AppConfig>,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateOrder>,
) -> impl Responder {
    let input = body.into_inner();

    if let Err(errors) = input.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": validation_message(&errors),
        }));
    }

    let notification_base = OrderNotification {
        order_id: String::new(),
        nombre_completo: input.nombre_completo.clone(),
        correo_electronico: input.correo_electronico.clone(),
        numero_telefono: input.numero_telefono.clone(),
        total_estimado: None,
        cantidad_productos: input.objetos_pedido.len(),
    };

    match order_db::insert_order(db.get_ref(), input).await {
        Ok((order_id, total_estimado)) => {
            notify::dispatch(
                config.whatsapp.clone(),
                OrderNotification {
                    order_id: order_id.clone(),
                    total_estimado,
                    ..notification_base
                },
            );

            HttpResponse::Created().json(serde_json::json!({
                "orderId": order_id,
                "totalEstimado": total_estimado,
                "message": "Pedido creado exitosamente",
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create order");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error interno del servidor",
            }))
        }
    }
}

/// Query parameters for the admin listing.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderListQuery {
    /// Free-text filter across id, name, email and phone.
    pub buscar: Option<String>,
    /// `asc` or `desc`; when absent the ascending creation order from the
    /// database is kept as-is.
    pub orden: Option<SortDirection>,
}

/// GET /api/orders — list all orders (admin only), oldest first unless a
/// sort direction is requested.
pub async fn get_orders(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<OrderListQuery>,
) -> impl Responder {
    let mut all_orders = match order_db::get_all_orders(db.get_ref()).await {
        Ok(all_orders) => all_orders,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch orders");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error al obtener los pedidos",
            }));
        }
    };

    if let Some(term) = query.buscar.as_deref() {
        if !term.trim().is_empty() {
            all_orders = admin::filter_orders(all_orders, term);
        }
    }
    if let Some(direction) = query.orden {
        admin::sort_orders(&mut all_orders, direction);
    }

    HttpResponse::Ok().json(all_orders)
}

/// GET /api/orders/{id} — one order plus its items (admin only).
pub async fn get_order(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> impl Responder {
    let order_id = path.into_inner();
    match order_db::get_order_with_items(db.get_ref(), &order_id).await {
        Ok(Some((order, items))) => HttpResponse::Ok().json(serde_json::json!({
            "order": order,
            "items": items,
        })),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Pedido no encontrado",
        })),
        Err(e) => {
            tracing::error!(error = %e, %order_id, "Failed to fetch order");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error al obtener el pedido",
            }))
        }
    }
}

/// PUT /api/orders/{id}/status — overwrite the status (admin only).
///
/// No transition legality check. Whether a missing id is an error is a
/// deployment choice (`STRICT_STATUS_UPDATES`).
pub async fn update_status(
    _admin: AdminUser,
    config: web::Data<AppConfig>,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    body: web::Json<UpdateOrderStatus>,
) -> impl Responder {
    let order_id = path.into_inner();
    match order_db::update_order_status(db.get_ref(), &order_id, body.into_inner().estado).await {
        Ok(Some(_)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Estado actualizado correctamente",
        })),
        Ok(None) if config.strict_status_updates => {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": "Pedido no encontrado",
            }))
        }
        Ok(None) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Estado actualizado correctamente",
        })),
        Err(e) => {
            tracing::error!(error = %e, %order_id, "Failed to update order status");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error al actualizar el estado del pedido",
            }))
        }
    }
}

/// GET /api/orders/export — every order as one xlsx workbook, one sheet per
/// order (admin only).
pub async fn export_orders(_admin: AdminUser, db: web::Data<DatabaseConnection>) -> impl Responder {
    let (all_orders, items_by_order_id) =
        match order_db::get_all_orders_with_items(db.get_ref()).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch orders for export");
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Error al obtener los pedidos con items",
                }));
            }
        };

    match export::orders_workbook(&all_orders, &items_by_order_id) {
        Ok(bytes) => xlsx_response(bytes, &export::all_orders_filename()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build xlsx workbook");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error al generar el archivo Excel",
            }))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportOrderQuery {
    /// Invoice sequence number printed on the sheet; defaults to 1.
    pub factura: Option<u32>,
}

/// GET /api/orders/{id}/export — a single order as an xlsx download (admin only).
pub async fn export_order(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    query: web::Query<ExportOrderQuery>,
) -> impl Responder {
    let order_id = path.into_inner();
    let (order, items) = match order_db::get_order_with_items(db.get_ref(), &order_id).await {
        Ok(Some(found)) => found,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Pedido no encontrado",
            }));
        }
        Err(e) => {
            tracing::error!(error = %e, %order_id, "Failed to fetch order for export");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error al obtener el pedido",
            }));
        }
    };

    match export::single_order_workbook(&order, &items, query.factura) {
        Ok(bytes) => xlsx_response(bytes, &export::single_order_filename(&order.nombre_completo)),
        Err(e) => {
            tracing::error!(error = %e, %order_id, "Failed to build xlsx workbook");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Error al generar el archivo Excel",
            }))
        }
    }
}

fn xlsx_response(bytes: Vec<u8>, filename: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(XLSX_MIME)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(bytes)
}
