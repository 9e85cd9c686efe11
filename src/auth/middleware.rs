use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use crate::auth::jwt::{self, Claims};
use crate::config::AppConfig;

/// Extractor that admits only sessions carrying the admin role.
///
/// Unauthenticated requests get 401; authenticated non-admin sessions get 403
/// with no order data disclosed either way.
pub struct AdminUser(pub Claims);

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_admin(req))
    }
}

fn extract_admin(req: &HttpRequest) -> Result<AdminUser, Error> {
    // 1. Extract the Bearer token from the Authorization header.
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| actix_web::error::ErrorUnauthorized("Missing Authorization header"))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
    })?;

    // 2. Get the shared secret from app config.
    let config = req
        .app_data::<web::Data<AppConfig>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config not configured"))?;

    // 3. Validate the JWT.
    let claims = jwt::validate_token(token, &config.jwt_secret)
        .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

    // 4. Gate on the role claim.
    if !claims.is_admin() {
        return Err(actix_web::error::ErrorForbidden(
            "Se requieren permisos de administrador",
        ));
    }

    Ok(AdminUser(claims))
}
