//! Fire-and-forget WhatsApp notification on order creation.
//!
//! The create operation's outcome is fully determined before dispatch; the
//! send runs on a detached task and its result is only ever logged. A single
//! best-effort attempt, no retry.

use serde::Deserialize;

/// Twilio WhatsApp credentials and channel identifiers.
///
/// Built once at startup (see `AppConfig::from_env`); `None` there means the
/// notification step is skipped with a logged configuration error.
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Source channel, e.g. `whatsapp:+14155238886`.
    pub from: String,
    /// Destination channel, e.g. `whatsapp:+34600000000`.
    pub to: String,
}

impl WhatsAppConfig {
    /// All four variables must be present, otherwise the notifier is disabled.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok()?,
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok()?,
            from: std::env::var("TWILIO_WHATSAPP_FROM").ok()?,
            to: std::env::var("TWILIO_WHATSAPP_TO").ok()?,
        })
    }
}

/// The order facts that go into the staff notification message.
#[derive(Debug, Clone)]
pub struct OrderNotification {
    pub order_id: String,
    pub nombre_completo: String,
    pub correo_electronico: String,
    pub numero_telefono: String,
    pub total_estimado: Option<f64>,
    pub cantidad_productos: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("request to Twilio failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Twilio rejected the message ({status}): {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

/// Build the WhatsApp message body for a freshly created order.
pub fn format_message(notification: &OrderNotification) -> String {
    let truncated_id: String = notification.order_id.chars().take(12).collect();

    let mut message = format!(
        "🎉 *NUEVO PRESUPUESTO RECIBIDO* 🎉\n\n\
         📋 *ID:* {truncated_id}...\n\
         👤 *Cliente:* {}\n\
         📧 *Email:* {}\n\
         📱 *Teléfono:* {}\n\
         📦 *Productos:* {} artículos\n",
        notification.nombre_completo,
        notification.correo_electronico,
        notification.numero_telefono,
        notification.cantidad_productos,
    );

    if let Some(total) = notification.total_estimado {
        message.push_str(&format!("💰 *Total estimado:* €{total:.2}\n"));
    }

    message.push_str("\n🔗 Revisa el presupuesto en el panel de administrador.");
    message
}

/// Send the message through Twilio's REST API. Returns the provider-assigned
/// message SID on success.
pub async fn send_whatsapp_notification(
    config: &WhatsAppConfig,
    notification: &OrderNotification,
) -> Result<String, NotifyError> {
    let url = format!(
        "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
        config.account_sid
    );

    let response = reqwest::Client::new()
        .post(&url)
        .basic_auth(&config.account_sid, Some(&config.auth_token))
        .form(&[
            ("From", config.from.as_str()),
            ("To", config.to.as_str()),
            ("Body", &format_message(notification)),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(NotifyError::Provider { status, body });
    }

    let message: MessageResponse = response.json().await?;
    Ok(message.sid)
}

/// Dispatch the notification on a detached task. Never blocks or fails the
/// caller; every outcome lands in the log.
pub fn dispatch(config: Option<WhatsAppConfig>, notification: OrderNotification) {
    let Some(config) = config else {
        tracing::warn!(
            order_id = %notification.order_id,
            "Faltan credenciales de Twilio; notificación de WhatsApp omitida"
        );
        return;
    };

    tokio::spawn(async move {
        match send_whatsapp_notification(&config, &notification).await {
            Ok(sid) => {
                tracing::info!(order_id = %notification.order_id, %sid, "Notificación de WhatsApp enviada");
            }
            Err(e) => {
                tracing::error!(order_id = %notification.order_id, error = %e, "Error enviando notificación de WhatsApp");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(total: Option<f64>) -> OrderNotification {
        OrderNotification {
            order_id: "mf2q9x8a1b2c3d4e5f".to_string(),
            nombre_completo: "Ana López".to_string(),
            correo_electronico: "ana@x.com".to_string(),
            numero_telefono: "600111222".to_string(),
            total_estimado: total,
            cantidad_productos: 1,
        }
    }

    #[test]
    fn message_truncates_the_order_id() {
        let message = format_message(&notification(Some(36.0)));
        assert!(message.contains("*ID:* mf2q9x8a1b2c..."));
        assert!(!message.contains("mf2q9x8a1b2c3d4e5f"));
    }

    #[test]
    fn message_includes_total_when_present() {
        let message = format_message(&notification(Some(36.0)));
        assert!(message.contains("*Total estimado:* €36.00"));
    }

    #[test]
    fn message_omits_total_line_when_absent() {
        let message = format_message(&notification(None));
        assert!(!message.contains("Total estimado"));
        assert!(message.contains("*Cliente:* Ana López"));
    }
}
