use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::order_items::Categoria;

/// Order status stored as its Spanish wire string in the database.
///
/// A flat set: any status may be written over any other. The lifecycle
/// pendiente → confirmado/cancelado → en_proceso → completado is a staff
/// convention, not something the backend enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum Estado {
    #[sea_orm(string_value = "pendiente")]
    Pendiente,
    #[sea_orm(string_value = "confirmado")]
    Confirmado,
    #[sea_orm(string_value = "en_proceso")]
    EnProceso,
    #[sea_orm(string_value = "completado")]
    Completado,
    #[sea_orm(string_value = "cancelado")]
    Cancelado,
}

/// SeaORM entity for the `orders` table (one row per presupuesto).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nombre_completo: String,
    pub nombre_penya: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub direccion: String,
    pub correo_electronico: String,
    pub numero_telefono: String,
    pub segundo_numero_telefono: Option<String>,
    pub estado: Estado,
    /// Σ(precio × unidades) at creation time, or NULL when the sum is zero.
    /// Never recomputed after creation.
    #[sea_orm(column_type = "Double", nullable)]
    pub total_estimado: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comentarios: Option<String>,
    pub fecha_creacion: DateTimeUtc,
    pub fecha_actualizacion: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/orders — the public quote-request form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub nombre_completo: String,
    pub nombre_penya: Option<String>,
    #[validate(length(min = 1, message = "La dirección es obligatoria"))]
    pub direccion: String,
    #[validate(email(message = "Email inválido"))]
    pub correo_electronico: String,
    #[validate(length(min = 1, message = "El teléfono es obligatorio"))]
    pub numero_telefono: String,
    pub segundo_numero_telefono: Option<String>,
    pub comentarios: Option<String>,
    #[validate(
        length(min = 1, message = "Debe incluir al menos un producto"),
        custom = "validate_items"
    )]
    pub objetos_pedido: Vec<CreateOrderItem>,
}

/// One product line within a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderItem {
    pub nombre: String,
    pub unidades: i32,
    pub precio: Option<f64>,
    pub categoria: Categoria,
}

/// Request body for PUT /api/orders/{id}/status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatus {
    pub estado: Estado,
}

/// Per-item constraints that the derive attributes cannot express.
fn validate_items(items: &[CreateOrderItem]) -> Result<(), ValidationError> {
    for item in items {
        if item.nombre.trim().is_empty() {
            let mut err = ValidationError::new("nombre");
            err.message = Some("El nombre del producto es obligatorio".into());
            return Err(err);
        }
        if item.unidades < 1 {
            let mut err = ValidationError::new("unidades");
            err.message = Some("Las unidades deben ser al menos 1".into());
            return Err(err);
        }
        if let Some(precio) = item.precio {
            if precio < 0.0 {
                let mut err = ValidationError::new("precio");
                err.message = Some("El precio no puede ser negativo".into());
                return Err(err);
            }
        }
    }
    Ok(())
}

/// Flatten a `ValidationErrors` into the aggregate message returned to the
/// caller, e.g. `"Datos inválidos: Email inválido, Debe incluir al menos un producto"`.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    for errs in errors.field_errors().values() {
        for err in errs.iter() {
            match &err.message {
                Some(msg) => parts.push(msg.to_string()),
                None => parts.push(err.code.to_string()),
            }
        }
    }
    format!("Datos inválidos: {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> CreateOrder {
        CreateOrder {
            nombre_completo: "Ana López".to_string(),
            nombre_penya: None,
            direccion: "Calle Mayor 1, Onda".to_string(),
            correo_electronico: "ana@x.com".to_string(),
            numero_telefono: "600111222".to_string(),
            segundo_numero_telefono: None,
            comentarios: None,
            objetos_pedido: vec![CreateOrderItem {
                nombre: "Cerveza".to_string(),
                unidades: 24,
                precio: Some(1.5),
                categoria: Categoria::Cervezas,
            }],
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut input = valid_submission();
        input.nombre_completo = String::new();
        let errors = input.validate().unwrap_err();
        assert!(validation_message(&errors).contains("El nombre es obligatorio"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut input = valid_submission();
        input.correo_electronico = "no-es-un-email".to_string();
        let errors = input.validate().unwrap_err();
        assert!(validation_message(&errors).contains("Email inválido"));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let mut input = valid_submission();
        input.objetos_pedido.clear();
        let errors = input.validate().unwrap_err();
        let message = validation_message(&errors);
        assert!(message.starts_with("Datos inválidos:"));
        assert!(message.contains("al menos un producto"));
    }

    #[test]
    fn zero_unidades_is_rejected() {
        let mut input = valid_submission();
        input.objetos_pedido[0].unidades = 0;
        let errors = input.validate().unwrap_err();
        assert!(validation_message(&errors).contains("al menos 1"));
    }

    #[test]
    fn negative_precio_is_rejected() {
        let mut input = valid_submission();
        input.objetos_pedido[0].precio = Some(-0.5);
        assert!(input.validate().is_err());
    }

    #[test]
    fn missing_precio_is_allowed() {
        let mut input = valid_submission();
        input.objetos_pedido[0].precio = None;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn estado_uses_wire_strings() {
        let json = serde_json::to_string(&Estado::EnProceso).unwrap();
        assert_eq!(json, "\"en_proceso\"");
        let parsed: Estado = serde_json::from_str("\"cancelado\"").unwrap();
        assert_eq!(parsed, Estado::Cancelado);
    }
}
