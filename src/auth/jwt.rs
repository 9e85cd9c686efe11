use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims minted by the external identity provider.
///
/// The backend keeps no user table: identity lives with the provider and the
/// only contract here is "present a valid token whose `role` claim is `admin`".
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Provider-side subject identifier.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    /// Staff member's email, if the provider includes it.
    pub email: Option<String>,
    /// Role claim; the admin surface requires `"admin"`.
    pub role: Option<String>,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Validate an HS256-signed JWT against the shared secret and return the
/// decoded claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("{:?}", e.kind()))
}
