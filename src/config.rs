use crate::notify::WhatsAppConfig;

/// Process-wide configuration, built once in `main` and handed to handlers
/// through `web::Data`. Components never read the environment themselves.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HS256 secret shared with the identity provider that mints admin JWTs.
    pub jwt_secret: String,
    /// Twilio credentials; `None` disables the WhatsApp notifier.
    pub whatsapp: Option<WhatsAppConfig>,
    /// When true, a status update on a missing order id reports not-found
    /// instead of silently succeeding.
    pub strict_status_updates: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            whatsapp: WhatsAppConfig::from_env(),
            strict_status_updates: std::env::var("STRICT_STATUS_UPDATES")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
